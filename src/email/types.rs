use std::env;

/// Fixed provider endpoint, implicit TLS.
pub const SMTP_HOST: &str = "smtp.gmail.com";
pub const SMTP_PORT: u16 = 465;

#[derive(Debug, Clone)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub sender: String,
  pub password: String,
  pub receiver: String,
}

impl SmtpConfig {
  /// Missing variables become empty strings so that authentication fails at
  /// send time rather than at startup.
  pub fn from_env() -> Self {
    SmtpConfig {
      sender: env::var("EMAIL_SENDER").unwrap_or_default(),
      password: env::var("EMAIL_PASSWORD").unwrap_or_default(),
      receiver: env::var("EMAIL_RECEIVER").unwrap_or_default(),
      ..SmtpConfig::default()
    }
  }
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: SMTP_HOST.to_string(),
      port: SMTP_PORT,
      sender: "".to_string(),
      password: "".to_string(),
      receiver: "".to_string(),
    }
  }
}
