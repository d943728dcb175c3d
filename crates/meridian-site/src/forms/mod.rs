//! The form-submission-to-email pipelines.
//!
//! Two independent pipelines share one shape: local validation gate →
//! network submission → authoritative server-side validation → mail
//! composition → dual dispatch (business notification + submitter
//! acknowledgment) → status propagated back to the form.

pub mod application;
pub mod client;
pub mod compose;
pub mod contact;
pub mod router;
pub mod service;
pub mod state;
pub mod validation;

pub use application::{ApplicationSubmission, ResumeUpload};
pub use client::{ApplicationFormClient, ContactFormClient, FormOutcome, SubmissionResult};
pub use contact::ContactSubmission;
pub use router::form_router;
pub use service::{FormServiceError, PositionDirectory, StaticPositions, SubmissionService};
pub use state::FormPhase;
pub use validation::{FormField, FormValidationError};
