use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::error;

use crate::mail::Mailer;

use super::application::{ApplicationSubmission, ResumeUpload};
use super::contact::ContactSubmission;
use super::service::{FormServiceError, PositionDirectory, SubmissionService};

/// Headroom on top of the resume cap for the other multipart fields and
/// the encoding overhead.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Router exposing the two submission endpoints.
pub fn form_router<M, P>(service: Arc<SubmissionService<M, P>>) -> Router
where
    M: Mailer,
    P: PositionDirectory + 'static,
{
    let body_limit = service.max_resume_bytes() + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        .route("/api/contact", post(contact_handler::<M, P>))
        .route("/api/apply", post(apply_handler::<M, P>))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(service)
}

pub(crate) async fn contact_handler<M, P>(
    State(service): State<Arc<SubmissionService<M, P>>>,
    Json(submission): Json<ContactSubmission>,
) -> Response
where
    M: Mailer,
    P: PositionDirectory + 'static,
{
    match service.submit_contact(submission).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(FormServiceError::Validation(err)) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(FormServiceError::Mail(err)) => {
            error!(%err, "contact mail dispatch failed");
            let payload = json!({ "error": "Failed to send message" });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn apply_handler<M, P>(
    State(service): State<Arc<SubmissionService<M, P>>>,
    multipart: Multipart,
) -> Response
where
    M: Mailer,
    P: PositionDirectory + 'static,
{
    let submission = match parse_application(multipart).await {
        Ok(submission) => submission,
        Err(err) => {
            let payload = json!({ "error": format!("invalid multipart payload: {err}") });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match service.submit_application(submission).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(FormServiceError::Validation(err)) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(FormServiceError::Mail(err)) => {
            error!(%err, "application mail dispatch failed");
            let payload = json!({ "error": "Failed to send email" });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

/// Collect the multipart fields into a submission. Unknown fields are
/// ignored; a missing resume part surfaces later as a validation error,
/// not a parse error.
async fn parse_application(
    mut multipart: Multipart,
) -> Result<ApplicationSubmission, MultipartError> {
    let mut submission = ApplicationSubmission::default();

    while let Some(field) = multipart.next_field().await? {
        match field.name().unwrap_or_default() {
            "name" => submission.name = field.text().await?,
            "email" => submission.email = field.text().await?,
            "phone" => submission.phone = field.text().await?,
            "position" => submission.position = field.text().await?,
            "experience" => submission.experience = field.text().await?,
            "message" => submission.message = field.text().await?,
            "resume" => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?.to_vec();
                submission.resume = Some(ResumeUpload::new(filename, content_type, bytes));
            }
            _ => {}
        }
    }

    Ok(submission)
}
