//! Outbound email via lettre.
//!
//! Every send opens its own SMTP connection; any fault between connecting and
//! the server accepting the message surfaces as an `Err`, never a panic.

mod service;
mod types;

pub use service::{ContactMailer, EmailService};
pub use types::SmtpConfig;
