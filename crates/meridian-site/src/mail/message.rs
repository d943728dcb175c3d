use super::MailError;

/// The body content of an email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBody {
    /// Plain text only.
    Text(String),
    /// Both plain text and HTML (multipart/alternative).
    Multipart { text: String, html: String },
}

/// A binary file carried with a message, e.g. an uploaded resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Filename shown to the recipient, taken from the upload.
    pub filename: String,
    /// Declared MIME type of the payload.
    pub content_type: String,
    /// Raw file bytes, forwarded untouched.
    pub bytes: Vec<u8>,
}

/// A complete email message ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Sender mailbox; accepts the `Display Name <addr>` form.
    pub from: String,
    /// Single recipient mailbox.
    pub to: String,
    /// Optional reply-to, set to the submitter on notifications so staff
    /// can answer without copy-pasting the address.
    pub reply_to: Option<String>,
    /// Subject line.
    pub subject: String,
    /// Body content.
    pub body: EmailBody,
    /// Attached files. Empty for acknowledgments.
    pub attachments: Vec<Attachment>,
}

impl Email {
    /// Create a new email builder.
    pub fn builder() -> EmailBuilder {
        EmailBuilder::default()
    }

    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }
}

/// Builder for constructing [`Email`] instances.
#[derive(Debug, Default)]
pub struct EmailBuilder {
    from: Option<String>,
    to: Option<String>,
    reply_to: Option<String>,
    subject: Option<String>,
    text: Option<String>,
    html: Option<String>,
    attachments: Vec<Attachment>,
}

impl EmailBuilder {
    /// Set the sender mailbox (required).
    pub fn from(mut self, mailbox: impl Into<String>) -> Self {
        self.from = Some(mailbox.into());
        self
    }

    /// Set the recipient mailbox (required).
    pub fn to(mut self, mailbox: impl Into<String>) -> Self {
        self.to = Some(mailbox.into());
        self
    }

    /// Set the reply-to address.
    pub fn reply_to(mut self, mailbox: impl Into<String>) -> Self {
        self.reply_to = Some(mailbox.into());
        self
    }

    /// Set the subject line (required).
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set plain text body content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set HTML body content. Requires a text part as well; the message is
    /// sent as multipart/alternative.
    pub fn html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Attach a file.
    pub fn attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Build the email, validating required fields.
    pub fn build(self) -> Result<Email, MailError> {
        let from = self
            .from
            .ok_or_else(|| MailError::Build("from address required".into()))?;

        let to = self
            .to
            .ok_or_else(|| MailError::Build("recipient required".into()))?;

        let subject = self
            .subject
            .ok_or_else(|| MailError::Build("subject required".into()))?;

        let body = match (self.text, self.html) {
            (Some(text), Some(html)) => EmailBody::Multipart { text, html },
            (Some(text), None) => EmailBody::Text(text),
            (None, Some(_)) => {
                return Err(MailError::Build(
                    "html body requires a plain text alternative".into(),
                ))
            }
            (None, None) => return Err(MailError::Build("body required".into())),
        };

        Ok(Email {
            from,
            to,
            reply_to: self.reply_to,
            subject,
            body,
            attachments: self.attachments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_text_email() {
        let email = Email::builder()
            .from("sender@example.com")
            .to("user@example.com")
            .subject("Hello")
            .text("Body text")
            .build()
            .unwrap();

        assert_eq!(email.from, "sender@example.com");
        assert_eq!(email.to, "user@example.com");
        assert_eq!(email.subject, "Hello");
        assert!(!email.has_attachments());
        assert!(matches!(&email.body, EmailBody::Text(t) if t == "Body text"));
    }

    #[test]
    fn build_multipart_email_with_attachment() {
        let email = Email::builder()
            .from("Meridian Recruitment <noreply@example.com>")
            .to("careers@example.com")
            .reply_to("jane@example.com")
            .subject("New Job Application: Project Supervisor")
            .text("Plain")
            .html("<p>Rich</p>")
            .attachment(Attachment {
                filename: "cv.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                bytes: vec![0x25, 0x50, 0x44, 0x46],
            })
            .build()
            .unwrap();

        assert!(matches!(
            email.body,
            EmailBody::Multipart { ref text, ref html } if text == "Plain" && html == "<p>Rich</p>"
        ));
        assert_eq!(email.reply_to.as_deref(), Some("jane@example.com"));
        assert_eq!(email.attachments.len(), 1);
        assert_eq!(email.attachments[0].filename, "cv.pdf");
    }

    #[test]
    fn build_requires_from() {
        let result = Email::builder().to("a@b.com").subject("Hi").text("Body").build();
        assert!(result.is_err());
    }

    #[test]
    fn build_requires_recipient() {
        let result = Email::builder().from("a@b.com").subject("Hi").text("Body").build();
        assert!(result.is_err());
    }

    #[test]
    fn build_rejects_html_without_text_alternative() {
        let result = Email::builder()
            .from("a@b.com")
            .to("c@d.com")
            .subject("Hi")
            .html("<p>only</p>")
            .build();
        assert!(result.is_err());
    }
}
