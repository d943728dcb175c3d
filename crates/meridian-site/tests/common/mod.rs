//! Shared fixtures for the pipeline integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use meridian_site::config::RecipientConfig;
use meridian_site::forms::{
    ApplicationSubmission, ContactSubmission, ResumeUpload, StaticPositions, SubmissionService,
};
use meridian_site::mail::{Email, MailError, Mailer};

pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;
pub const FROM_ADDRESS: &str = "noreply@meridian-infra.nl";
pub const CONTACT_INBOX: &str = "info@meridian-infra.nl";
pub const APPLICATIONS_INBOX: &str = "careers@meridian-infra.nl";

/// Mailer that records every sent message and can be scripted to fail
/// specific sends, in order.
#[derive(Default, Clone)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<Email>>>,
    failures: Arc<Mutex<VecDeque<bool>>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().expect("mailer mutex poisoned").clone()
    }

    /// Script the next sends: `true` entries fail with a transport error,
    /// `false` entries succeed. Once the plan is exhausted, sends succeed.
    pub fn plan_failures(&self, plan: &[bool]) {
        let mut failures = self.failures.lock().expect("mailer mutex poisoned");
        failures.clear();
        failures.extend(plan.iter().copied());
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        let fail = self
            .failures
            .lock()
            .expect("mailer mutex poisoned")
            .pop_front()
            .unwrap_or(false);

        if fail {
            return Err(MailError::Smtp("connection refused".to_string()));
        }

        self.sent
            .lock()
            .expect("mailer mutex poisoned")
            .push(email.clone());
        Ok(())
    }
}

pub fn recipients() -> RecipientConfig {
    RecipientConfig {
        contact_inbox: CONTACT_INBOX.to_string(),
        applications_inbox: APPLICATIONS_INBOX.to_string(),
    }
}

pub fn open_positions() -> StaticPositions {
    StaticPositions(vec![
        "Fiber Optic Technician".to_string(),
        "Project Supervisor".to_string(),
        "Network Infrastructure Engineer".to_string(),
    ])
}

pub fn build_service() -> (
    Arc<SubmissionService<RecordingMailer, StaticPositions>>,
    RecordingMailer,
) {
    let mailer = RecordingMailer::default();
    let service = Arc::new(SubmissionService::new(
        Arc::new(mailer.clone()),
        Arc::new(open_positions()),
        FROM_ADDRESS,
        recipients(),
        MAX_RESUME_BYTES,
    ));
    (service, mailer)
}

pub fn contact_submission() -> ContactSubmission {
    ContactSubmission {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        subject: "Pricing".to_string(),
        message: "Please send me a quote for cabling work.".to_string(),
    }
}

pub fn application_submission(resume_bytes: Vec<u8>) -> ApplicationSubmission {
    ApplicationSubmission {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "+31 6 1234 5678".to_string(),
        position: "Project Supervisor".to_string(),
        experience: "6 years".to_string(),
        message: "I have led fiber crews for six years.".to_string(),
        resume: Some(ResumeUpload::new(
            Some("jane-doe-cv.pdf".to_string()),
            Some("application/pdf".to_string()),
            resume_bytes,
        )),
    }
}

/// Hand-rolled multipart/form-data body for router tests.
pub fn multipart_body(
    boundary: &str,
    fields: &[(&str, &str)],
    resume: Option<(&str, &str, &[u8])>,
) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((filename, content_type, bytes)) = resume {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"resume\"; filename=\"{filename}\"\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}
