use std::sync::Arc;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment as LettreAttachment, Body, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::{MailConfig, TlsMode};

use super::{Email, EmailBody, MailError};

/// Async email sending capability.
///
/// The form services depend on this trait rather than the SMTP transport,
/// which is what lets tests and the offline demo record outbound traffic.
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Send a single message.
    async fn send(&self, email: &Email) -> Result<(), MailError>;
}

/// SMTP-backed mailer using lettre.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: Arc<AsyncSmtpTransport<Tokio1Executor>>,
}

impl SmtpMailer {
    /// Build the transport from configuration.
    ///
    /// The connection timeout from the config bounds every send, so a hung
    /// relay surfaces as a transport error instead of a stuck request.
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        let mut builder = match config.tls {
            TlsMode::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host),
            TlsMode::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| MailError::Smtp(e.to_string()))?,
            TlsMode::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                    .map_err(|e| MailError::Smtp(e.to_string()))?
            }
        };

        builder = builder.port(config.port).timeout(Some(config.timeout()));

        if let (Some(username), Some(password)) =
            (config.username.clone(), config.password.clone())
        {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            transport: Arc::new(builder.build()),
        })
    }

    fn build_message(&self, email: &Email) -> Result<Message, MailError> {
        let from: Mailbox = email
            .from
            .parse()
            .map_err(|_| MailError::InvalidAddress(email.from.clone()))?;
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|_| MailError::InvalidAddress(email.to.clone()))?;

        let mut builder = Message::builder()
            .from(from)
            .to(to)
            .subject(email.subject.clone());

        if let Some(reply_to) = &email.reply_to {
            let mailbox: Mailbox = reply_to
                .parse()
                .map_err(|_| MailError::InvalidAddress(reply_to.clone()))?;
            builder = builder.reply_to(mailbox);
        }

        if email.attachments.is_empty() {
            return match &email.body {
                EmailBody::Text(text) => builder
                    .body(text.clone())
                    .map_err(|e| MailError::Build(e.to_string())),
                EmailBody::Multipart { text, html } => builder
                    .multipart(MultiPart::alternative_plain_html(
                        text.clone(),
                        html.clone(),
                    ))
                    .map_err(|e| MailError::Build(e.to_string())),
            };
        }

        let mut mixed = match &email.body {
            EmailBody::Text(text) => {
                MultiPart::mixed().singlepart(SinglePart::plain(text.clone()))
            }
            EmailBody::Multipart { text, html } => MultiPart::mixed().multipart(
                MultiPart::alternative_plain_html(text.clone(), html.clone()),
            ),
        };

        for attachment in &email.attachments {
            let content_type = ContentType::parse(&attachment.content_type)
                .map_err(|_| MailError::InvalidContentType(attachment.content_type.clone()))?;
            mixed = mixed.singlepart(
                LettreAttachment::new(attachment.filename.clone())
                    .body(Body::new(attachment.bytes.clone()), content_type),
            );
        }

        builder
            .multipart(mixed)
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        let message = self.build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(())
    }
}
