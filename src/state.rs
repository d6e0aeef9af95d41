use std::sync::Arc;

use crate::contact::model::ContactSubmission;
use crate::email::ContactMailer;

pub trait AppState: Clone + Send + Sync + 'static {
  fn dispatch_contact(
    &self,
    submission: ContactSubmission,
  ) -> impl std::future::Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub mailer: Arc<dyn ContactMailer>,
}

impl SharedAppState {
  pub fn new(mailer: Arc<dyn ContactMailer>) -> Self {
    Self { mailer }
  }
}

impl AppState for SharedAppState {
  async fn dispatch_contact(&self, submission: ContactSubmission) -> anyhow::Result<()> {
    self.mailer.send_contact(&submission).await
  }
}
