use serde::{Deserialize, Serialize};

/// One contact-form payload. All three fields are required; the email field is
/// informational only and is not checked for address syntax.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContactSubmission {
  pub name: String,
  pub email: String,
  pub description: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendEmailResponse {
  pub success: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl SendEmailResponse {
  pub fn sent() -> Self {
    SendEmailResponse {
      success: true,
      message: Some("Email sent successfully.".to_string()),
      error: None,
    }
  }

  pub fn failed(error: impl Into<String>) -> Self {
    SendEmailResponse {
      success: false,
      message: None,
      error: Some(error.into()),
    }
  }
}
