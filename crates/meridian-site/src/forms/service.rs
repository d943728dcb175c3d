use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use tracing::info;

use crate::config::RecipientConfig;
use crate::mail::{MailError, Mailer};

use super::application::ApplicationSubmission;
use super::compose;
use super::contact::ContactSubmission;
use super::validation::FormValidationError;

/// Canonical list of currently open positions.
///
/// Backed by the content catalog in the running service; static
/// implementations exist for tests and the offline demo.
#[async_trait]
pub trait PositionDirectory: Send + Sync {
    async fn open_positions(&self) -> Vec<String>;
}

/// Fixed position list, for tests and the demo.
#[derive(Debug, Clone, Default)]
pub struct StaticPositions(pub Vec<String>);

#[async_trait]
impl PositionDirectory for StaticPositions {
    async fn open_positions(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Error raised by the submission service.
#[derive(Debug, thiserror::Error)]
pub enum FormServiceError {
    #[error(transparent)]
    Validation(#[from] FormValidationError),
    #[error("mail dispatch failed: {0}")]
    Mail(#[from] MailError),
}

/// Orchestrates both pipelines: validate fully, compose, then send the
/// notification and the acknowledgment sequentially through the mailer.
///
/// Validation always completes before any message is composed, so a
/// rejected submission sends zero emails. The dual send is deliberately
/// not transactional: either failure fails the whole submission.
pub struct SubmissionService<M, P> {
    mailer: Arc<M>,
    positions: Arc<P>,
    from_address: String,
    recipients: RecipientConfig,
    max_resume_bytes: usize,
}

impl<M, P> SubmissionService<M, P>
where
    M: Mailer,
    P: PositionDirectory + 'static,
{
    pub fn new(
        mailer: Arc<M>,
        positions: Arc<P>,
        from_address: impl Into<String>,
        recipients: RecipientConfig,
        max_resume_bytes: usize,
    ) -> Self {
        Self {
            mailer,
            positions,
            from_address: from_address.into(),
            recipients,
            max_resume_bytes,
        }
    }

    pub fn max_resume_bytes(&self) -> usize {
        self.max_resume_bytes
    }

    /// Handle one contact inquiry: two emails on success, zero otherwise.
    pub async fn submit_contact(
        &self,
        submission: ContactSubmission,
    ) -> Result<(), FormServiceError> {
        submission.validate()?;

        let received = Local::now();
        let notification = compose::contact_notification(
            &self.from_address,
            &self.recipients.contact_inbox,
            &submission,
            received,
        )?;
        let acknowledgment =
            compose::contact_acknowledgment(&self.from_address, &submission)?;

        self.mailer.send(&notification).await?;
        self.mailer.send(&acknowledgment).await?;

        info!(subject = %submission.subject, "contact inquiry dispatched");
        Ok(())
    }

    /// Handle one job application: two emails on success, zero otherwise.
    ///
    /// The position must be one of the openings the directory currently
    /// lists; the client-submitted string is never trusted on its own.
    pub async fn submit_application(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<(), FormServiceError> {
        submission.validate(self.max_resume_bytes)?;

        let open_positions = self.positions.open_positions().await;
        if !open_positions
            .iter()
            .any(|position| position.as_str() == submission.position.trim())
        {
            return Err(FormValidationError::UnknownPosition(
                submission.position.clone(),
            )
            .into());
        }

        let Some(resume) = submission.resume.as_ref() else {
            return Err(FormValidationError::MissingResume.into());
        };

        let received = Local::now();
        let notification = compose::application_notification(
            &self.from_address,
            &self.recipients.applications_inbox,
            &submission,
            resume,
            received,
        )?;
        let acknowledgment =
            compose::application_acknowledgment(&self.from_address, &submission)?;

        self.mailer.send(&notification).await?;
        self.mailer.send(&acknowledgment).await?;

        info!(position = %submission.position, "job application dispatched");
        Ok(())
    }
}
