//! Outbound email over a configured SMTP transport.
//!
//! The site sends exactly two kinds of traffic: internal notifications to a
//! fixed business inbox and acknowledgments back to the person who submitted
//! a form. Both are composed as [`Email`] values and handed to a [`Mailer`],
//! so handlers and tests never touch the transport directly.

mod mailer;
mod message;

pub use mailer::{Mailer, SmtpMailer};
pub use message::{Attachment, Email, EmailBody, EmailBuilder};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("invalid attachment content type: {0}")]
    InvalidContentType(String),

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}
