use anyhow::Result;
use async_trait::async_trait;
use lettre::{
  message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
  Message, Tokio1Executor,
};

use crate::contact::model::ContactSubmission;
use crate::email::types::SmtpConfig;

const CONTACT_SUBJECT: &str = "New Message from Portfolio Contact Form";

/// Seam for substituting the dispatcher in tests.
#[async_trait]
pub trait ContactMailer: Send + Sync {
  async fn send_contact(&self, submission: &ContactSubmission) -> Result<()>;
}

pub struct EmailService {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.sender.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp_config.host)?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(EmailService {
      smtp_config,
      transporter,
    })
  }

  pub fn render_contact_body(submission: &ContactSubmission) -> String {
    format!(
      "Name: {}\nEmail: {}\n\nMessage:\n{}",
      submission.name, submission.email, submission.description
    )
  }
}

#[async_trait]
impl ContactMailer for EmailService {
  /// One fresh connection per call. The submitter's email appears only in the
  /// body; the envelope goes from the configured sender to the fixed receiver.
  async fn send_contact(&self, submission: &ContactSubmission) -> Result<()> {
    let email = Message::builder()
      .from(self.smtp_config.sender.parse()?)
      .to(self.smtp_config.receiver.parse()?)
      .subject(CONTACT_SUBJECT)
      .header(ContentType::TEXT_PLAIN)
      .body(Self::render_contact_body(submission))?;

    self.transporter.send(email).await?;

    Ok(())
  }
}
