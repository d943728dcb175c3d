//! Form submission clients, as used by the site front-end and the CLI.
//!
//! Each client runs the local validation gate first; a rejected submission
//! never reaches the network. A passing submission drives the form phase
//! through submitting → succeeded/failed, mapping server responses to the
//! message shown to the user.

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

use crate::content::{ApplicationFormSettings, ContactFormSettings};

use super::application::ApplicationSubmission;
use super::contact::ContactSubmission;
use super::state::FormPhase;
use super::validation::FormValidationError;

const DEFAULT_CONTACT_SUCCESS: &str = "Your message has been sent.";
const DEFAULT_APPLICATION_SUCCESS: &str = "Application submitted successfully!";
const GENERIC_CONTACT_ERROR: &str = "Failed to send message. Please try again.";
const GENERIC_APPLICATION_ERROR: &str = "Failed to submit application";

/// Outcome reported back to the form UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl SubmissionResult {
    fn ok() -> Self {
        Self {
            success: true,
            error_message: None,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: Some(message.into()),
        }
    }
}

/// What happened to one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// An attempt is already in flight; nothing was done.
    InFlight,
    /// Local validation failed; no network call was made.
    Rejected(Vec<FormValidationError>),
    /// A request was made and resolved.
    Completed(SubmissionResult),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Client for the contact form endpoint.
#[derive(Clone)]
pub struct ContactFormClient {
    http: reqwest::Client,
    endpoint: String,
    success_message: String,
}

impl ContactFormClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
            success_message: DEFAULT_CONTACT_SUCCESS.to_string(),
        }
    }

    /// Use the success copy from the contact page document.
    pub fn with_settings(base_url: &str, settings: &ContactFormSettings) -> Self {
        let mut client = Self::new(base_url);
        if !settings.success_message.trim().is_empty() {
            client.success_message = settings.success_message.clone();
        }
        client
    }

    pub async fn submit(
        &self,
        phase: &mut FormPhase,
        submission: &ContactSubmission,
    ) -> FormOutcome {
        if !phase.can_submit() {
            return FormOutcome::InFlight;
        }

        let errors = submission.field_errors();
        if !errors.is_empty() {
            return FormOutcome::Rejected(errors);
        }

        phase.begin();
        match self.post(submission).await {
            Ok(()) => {
                phase.succeed(self.success_message.clone());
                FormOutcome::Completed(SubmissionResult::ok())
            }
            Err(message) => {
                phase.fail(message.clone());
                FormOutcome::Completed(SubmissionResult::failed(message))
            }
        }
    }

    async fn post(&self, submission: &ContactSubmission) -> Result<(), String> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|_| GENERIC_CONTACT_ERROR.to_string())?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(extract_error(response, GENERIC_CONTACT_ERROR).await)
    }
}

/// Client for the application form endpoint (multipart, carries the
/// resume binary).
#[derive(Clone)]
pub struct ApplicationFormClient {
    http: reqwest::Client,
    endpoint: String,
    success_message: String,
    max_resume_bytes: usize,
}

impl ApplicationFormClient {
    pub fn new(base_url: &str, max_resume_bytes: usize) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/api/apply", base_url.trim_end_matches('/')),
            success_message: DEFAULT_APPLICATION_SUCCESS.to_string(),
            max_resume_bytes,
        }
    }

    /// Use the copy and file-size cap from the careers page document.
    pub fn with_settings(base_url: &str, settings: &ApplicationFormSettings) -> Self {
        let max_resume_bytes = (settings.max_file_size_mb as usize) * 1024 * 1024;
        let mut client = Self::new(base_url, max_resume_bytes);
        if let Some(message) = settings
            .success_message
            .as_ref()
            .filter(|message| !message.trim().is_empty())
        {
            client.success_message = message.clone();
        }
        client
    }

    pub async fn submit(
        &self,
        phase: &mut FormPhase,
        submission: &ApplicationSubmission,
    ) -> FormOutcome {
        if !phase.can_submit() {
            return FormOutcome::InFlight;
        }

        let errors = submission.field_errors(self.max_resume_bytes);
        if !errors.is_empty() {
            return FormOutcome::Rejected(errors);
        }

        phase.begin();
        match self.post(submission).await {
            Ok(()) => {
                phase.succeed(self.success_message.clone());
                FormOutcome::Completed(SubmissionResult::ok())
            }
            Err(message) => {
                phase.fail(message.clone());
                FormOutcome::Completed(SubmissionResult::failed(message))
            }
        }
    }

    async fn post(&self, submission: &ApplicationSubmission) -> Result<(), String> {
        let mut form = Form::new()
            .text("name", submission.name.clone())
            .text("email", submission.email.clone())
            .text("phone", submission.phone.clone())
            .text("position", submission.position.clone())
            .text("experience", submission.experience.clone())
            .text("message", submission.message.clone());

        if let Some(resume) = &submission.resume {
            let part = Part::bytes(resume.bytes.clone())
                .file_name(resume.filename.clone())
                .mime_str(&resume.content_type)
                .map_err(|_| GENERIC_APPLICATION_ERROR.to_string())?;
            form = form.part("resume", part);
        }

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|_| GENERIC_APPLICATION_ERROR.to_string())?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(extract_error(response, GENERIC_APPLICATION_ERROR).await)
    }
}

/// Pull the server's `{ "error": ... }` message when present, otherwise
/// fall back to the generic string.
async fn extract_error(response: reqwest::Response, fallback: &str) -> String {
    response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::application::ResumeUpload;
    use crate::forms::validation::FormField;

    fn invalid_contact() -> ContactSubmission {
        ContactSubmission {
            name: "J".to_string(),
            email: "nope".to_string(),
            subject: "ok subject".to_string(),
            message: "long enough message here".to_string(),
        }
    }

    #[tokio::test]
    async fn local_rejection_makes_no_network_call() {
        // Unroutable endpoint: if the gate leaked, the submit would fail
        // with a transport error instead of a rejection.
        let client = ContactFormClient::new("http://127.0.0.1:1");
        let mut phase = FormPhase::default();

        let outcome = client.submit(&mut phase, &invalid_contact()).await;

        match outcome {
            FormOutcome::Rejected(errors) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].field(), FormField::Name);
                assert_eq!(errors[1].field(), FormField::Email);
            }
            other => panic!("expected local rejection, got {other:?}"),
        }
        assert_eq!(phase, FormPhase::Idle);
    }

    #[tokio::test]
    async fn application_gate_checks_the_resume_cap() {
        let client = ApplicationFormClient::new("http://127.0.0.1:1", 1024);
        let mut phase = FormPhase::default();
        let submission = ApplicationSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+31 6 1234 5678".to_string(),
            position: "Project Supervisor".to_string(),
            experience: String::new(),
            message: String::new(),
            resume: Some(ResumeUpload::new(
                Some("cv.pdf".to_string()),
                Some("application/pdf".to_string()),
                vec![0u8; 2048],
            )),
        };

        let outcome = client.submit(&mut phase, &submission).await;

        match outcome {
            FormOutcome::Rejected(errors) => {
                assert!(errors
                    .iter()
                    .any(|err| matches!(err, FormValidationError::ResumeTooLarge { .. })));
            }
            other => panic!("expected local rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn in_flight_attempts_are_not_doubled() {
        let client = ContactFormClient::new("http://127.0.0.1:1");
        let mut phase = FormPhase::Submitting;
        let outcome = client.submit(&mut phase, &invalid_contact()).await;
        assert_eq!(outcome, FormOutcome::InFlight);
    }

    #[test]
    fn settings_override_the_success_copy() {
        let settings = ContactFormSettings {
            form_title: "t".to_string(),
            form_description: "d".to_string(),
            success_message: "Bedankt! We nemen snel contact op.".to_string(),
        };
        let client = ContactFormClient::with_settings("http://localhost:3000/", &settings);
        assert_eq!(client.success_message, "Bedankt! We nemen snel contact op.");
        assert_eq!(client.endpoint, "http://localhost:3000/api/contact");
    }
}
