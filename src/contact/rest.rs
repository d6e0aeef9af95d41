use axum::{
  extract::{Json, State},
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{ContactSubmission, SendEmailResponse};
use crate::state::{AppState, SharedAppState};

pub fn contact_routes() -> Router<SharedAppState> {
  Router::new().route("/send-email", post(send_email_handler))
}

/// Delivery failures are reported in-band: the response is always `200 OK` and
/// the caller must inspect the `success` field for the true outcome.
pub async fn send_email_handler(
  State(state): State<SharedAppState>,
  Json(payload): Json<ContactSubmission>,
) -> JsonResponse<SendEmailResponse> {
  match state.dispatch_contact(payload).await {
    Ok(()) => {
      tracing::info!("contact email dispatched");
      JsonResponse(SendEmailResponse::sent())
    }
    Err(e) => {
      tracing::error!("contact email delivery failed: {:#}", e);
      JsonResponse(SendEmailResponse::failed(e.to_string()))
    }
  }
}
