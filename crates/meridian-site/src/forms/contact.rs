use serde::{Deserialize, Serialize};

use super::validation::{require_email, require_min_len, FormField, FormValidationError};

/// One contact inquiry. Transient: lives for the duration of a single
/// request and is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub const MIN_NAME_LEN: usize = 2;
    pub const MIN_SUBJECT_LEN: usize = 2;
    pub const MIN_MESSAGE_LEN: usize = 10;

    /// Authoritative shape check; stops at the first failing field.
    pub fn validate(&self) -> Result<(), FormValidationError> {
        require_min_len(FormField::Name, &self.name, Self::MIN_NAME_LEN)?;
        require_email(&self.email)?;
        require_min_len(FormField::Subject, &self.subject, Self::MIN_SUBJECT_LEN)?;
        require_min_len(FormField::Message, &self.message, Self::MIN_MESSAGE_LEN)?;
        Ok(())
    }

    /// Every failing field at once, for inline display next to the inputs.
    pub fn field_errors(&self) -> Vec<FormValidationError> {
        let checks = [
            require_min_len(FormField::Name, &self.name, Self::MIN_NAME_LEN),
            require_email(&self.email),
            require_min_len(FormField::Subject, &self.subject, Self::MIN_SUBJECT_LEN),
            require_min_len(FormField::Message, &self.message, Self::MIN_MESSAGE_LEN),
        ];
        checks.into_iter().filter_map(Result::err).collect()
    }
}
