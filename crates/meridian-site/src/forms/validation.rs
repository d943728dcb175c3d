use std::fmt;

use serde::Serialize;

/// Addressable form fields, so errors can be rendered next to the input
/// that caused them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Email,
    Phone,
    Subject,
    Position,
    Message,
    Resume,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Subject => "subject",
            FormField::Position => "position",
            FormField::Message => "message",
            FormField::Resume => "resume",
        };
        f.write_str(label)
    }
}

/// A single rejected field. The same rules run client-side (gate before any
/// network call) and server-side (authoritative re-check).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormValidationError {
    #[error("{0} is required")]
    Missing(FormField),
    #[error("{field} must be at least {min} characters")]
    TooShort { field: FormField, min: usize },
    #[error("invalid email format")]
    InvalidEmail,
    #[error("resume file is required")]
    MissingResume,
    #[error("resume file exceeds the {limit_mb} MB limit")]
    ResumeTooLarge { limit_mb: u64 },
    #[error("resume file has an unrecognized content type")]
    InvalidResumeContentType,
    #[error("'{0}' is not a currently open position")]
    UnknownPosition(String),
}

impl FormValidationError {
    /// The field the error should be displayed against.
    pub fn field(&self) -> FormField {
        match self {
            FormValidationError::Missing(field) => *field,
            FormValidationError::TooShort { field, .. } => *field,
            FormValidationError::InvalidEmail => FormField::Email,
            FormValidationError::MissingResume
            | FormValidationError::ResumeTooLarge { .. }
            | FormValidationError::InvalidResumeContentType => FormField::Resume,
            FormValidationError::UnknownPosition(_) => FormField::Position,
        }
    }
}

/// Accepts exactly the non-space@non-space shape: one `@`, a non-empty
/// local part and remainder, and no whitespace anywhere.
pub fn email_shape_ok(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, rest)) => !local.is_empty() && !rest.is_empty(),
        None => false,
    }
}

pub(crate) fn require_min_len(
    field: FormField,
    value: &str,
    min: usize,
) -> Result<(), FormValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormValidationError::Missing(field));
    }
    if trimmed.chars().count() < min {
        return Err(FormValidationError::TooShort { field, min });
    }
    Ok(())
}

pub(crate) fn require_email(value: &str) -> Result<(), FormValidationError> {
    if value.trim().is_empty() {
        return Err(FormValidationError::Missing(FormField::Email));
    }
    if !email_shape_ok(value) {
        return Err(FormValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_accepts_plain_addresses() {
        assert!(email_shape_ok("jane@example.com"));
        assert!(email_shape_ok("j@e"));
        assert!(email_shape_ok("  jane@example.com  "));
    }

    #[test]
    fn email_shape_rejects_degenerate_inputs() {
        assert!(!email_shape_ok(""));
        assert!(!email_shape_ok("jane"));
        assert!(!email_shape_ok("@example.com"));
        assert!(!email_shape_ok("jane@"));
        assert!(!email_shape_ok("jane doe@example.com"));
    }

    #[test]
    fn min_len_counts_after_trimming() {
        assert!(require_min_len(FormField::Name, "  J  ", 2).is_err());
        assert!(require_min_len(FormField::Name, " Jo ", 2).is_ok());
        assert_eq!(
            require_min_len(FormField::Subject, "   ", 2),
            Err(FormValidationError::Missing(FormField::Subject))
        );
    }

    #[test]
    fn errors_map_to_their_field() {
        assert_eq!(FormValidationError::InvalidEmail.field(), FormField::Email);
        assert_eq!(
            FormValidationError::ResumeTooLarge { limit_mb: 5 }.field(),
            FormField::Resume
        );
        assert_eq!(
            FormValidationError::UnknownPosition("Welder".into()).field(),
            FormField::Position
        );
    }
}
