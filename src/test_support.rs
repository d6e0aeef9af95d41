use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{app::create_app, contact::model::ContactSubmission, email::ContactMailer, state::SharedAppState};

/// Records every dispatch; returns the configured failure if one was set.
pub struct RecordingMailer {
  pub sent: Mutex<Vec<ContactSubmission>>,
  failure: Option<String>,
}

impl RecordingMailer {
  pub fn succeeding() -> Arc<Self> {
    Arc::new(RecordingMailer {
      sent: Mutex::new(Vec::new()),
      failure: None,
    })
  }

  pub fn failing(error: &str) -> Arc<Self> {
    Arc::new(RecordingMailer {
      sent: Mutex::new(Vec::new()),
      failure: Some(error.to_string()),
    })
  }

  pub fn dispatch_count(&self) -> usize {
    self.sent.lock().unwrap().len()
  }
}

#[async_trait]
impl ContactMailer for RecordingMailer {
  async fn send_contact(&self, submission: &ContactSubmission) -> Result<()> {
    self.sent.lock().unwrap().push(submission.clone());
    match &self.failure {
      Some(error) => Err(anyhow!("{}", error)),
      None => Ok(()),
    }
  }
}

pub fn app_with_mailer(mailer: Arc<RecordingMailer>) -> Router {
  create_app(SharedAppState::new(mailer))
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(serde_json::to_vec(body).expect("serialize request body")))
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}
