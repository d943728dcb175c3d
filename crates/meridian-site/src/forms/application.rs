use crate::mail::Attachment;

use super::validation::{require_email, require_min_len, FormField, FormValidationError};

/// Fallbacks applied when the upload carries no filename or content type,
/// matching what browsers send for a bare file input.
const DEFAULT_RESUME_FILENAME: &str = "cv.pdf";
const DEFAULT_RESUME_CONTENT_TYPE: &str = "application/pdf";

/// The uploaded resume. Forwarded as a mail attachment, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    /// Build an upload from whatever the multipart field declared.
    pub fn new(
        filename: Option<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            filename: filename
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_RESUME_FILENAME.to_string()),
            content_type: content_type
                .filter(|ct| !ct.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_RESUME_CONTENT_TYPE.to_string()),
            bytes,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    pub fn to_attachment(&self) -> Attachment {
        Attachment {
            filename: self.filename.clone(),
            content_type: self.content_type.clone(),
            bytes: self.bytes.clone(),
        }
    }
}

/// One job application. Transient, like [`super::ContactSubmission`];
/// the resume binary exists only to be attached to the notification mail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    /// Free text, optional.
    pub experience: String,
    /// Cover letter, optional.
    pub message: String,
    pub resume: Option<ResumeUpload>,
}

impl ApplicationSubmission {
    pub const MIN_NAME_LEN: usize = 2;
    pub const MIN_PHONE_LEN: usize = 5;

    /// Authoritative shape check; stops at the first failing field.
    ///
    /// Position membership in the open-positions list is checked by the
    /// submission service, which owns the canonical list.
    pub fn validate(&self, max_resume_bytes: usize) -> Result<(), FormValidationError> {
        require_min_len(FormField::Name, &self.name, Self::MIN_NAME_LEN)?;
        require_email(&self.email)?;
        require_min_len(FormField::Phone, &self.phone, Self::MIN_PHONE_LEN)?;
        if self.position.trim().is_empty() {
            return Err(FormValidationError::Missing(FormField::Position));
        }

        let resume = self
            .resume
            .as_ref()
            .ok_or(FormValidationError::MissingResume)?;
        if resume.bytes.is_empty() {
            return Err(FormValidationError::MissingResume);
        }
        if resume.size_bytes() > max_resume_bytes {
            return Err(FormValidationError::ResumeTooLarge {
                limit_mb: (max_resume_bytes / (1024 * 1024)) as u64,
            });
        }
        if resume.content_type.parse::<mime::Mime>().is_err() {
            return Err(FormValidationError::InvalidResumeContentType);
        }

        Ok(())
    }

    /// Every failing field at once, for inline display next to the inputs.
    pub fn field_errors(&self, max_resume_bytes: usize) -> Vec<FormValidationError> {
        let mut errors: Vec<FormValidationError> = [
            require_min_len(FormField::Name, &self.name, Self::MIN_NAME_LEN),
            require_email(&self.email),
            require_min_len(FormField::Phone, &self.phone, Self::MIN_PHONE_LEN),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        if self.position.trim().is_empty() {
            errors.push(FormValidationError::Missing(FormField::Position));
        }

        match &self.resume {
            None => errors.push(FormValidationError::MissingResume),
            Some(resume) if resume.bytes.is_empty() => {
                errors.push(FormValidationError::MissingResume)
            }
            Some(resume) if resume.size_bytes() > max_resume_bytes => {
                errors.push(FormValidationError::ResumeTooLarge {
                    limit_mb: (max_resume_bytes / (1024 * 1024)) as u64,
                })
            }
            Some(resume) if resume.content_type.parse::<mime::Mime>().is_err() => {
                errors.push(FormValidationError::InvalidResumeContentType)
            }
            Some(_) => {}
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: usize = 5 * 1024 * 1024;

    fn well_formed() -> ApplicationSubmission {
        ApplicationSubmission {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+31 6 1234 5678".to_string(),
            position: "Fiber Optic Technician".to_string(),
            experience: "5 years".to_string(),
            message: String::new(),
            resume: Some(ResumeUpload::new(
                Some("jane-doe-cv.pdf".to_string()),
                Some("application/pdf".to_string()),
                b"%PDF-1.4 sample".to_vec(),
            )),
        }
    }

    #[test]
    fn well_formed_application_passes() {
        assert!(well_formed().validate(MAX).is_ok());
    }

    #[test]
    fn missing_resume_is_rejected() {
        let mut submission = well_formed();
        submission.resume = None;
        assert_eq!(
            submission.validate(MAX),
            Err(FormValidationError::MissingResume)
        );
    }

    #[test]
    fn empty_resume_counts_as_missing() {
        let mut submission = well_formed();
        submission.resume = Some(ResumeUpload::new(None, None, Vec::new()));
        assert_eq!(
            submission.validate(MAX),
            Err(FormValidationError::MissingResume)
        );
    }

    #[test]
    fn oversized_resume_is_rejected() {
        let mut submission = well_formed();
        submission.resume = Some(ResumeUpload::new(
            Some("huge.pdf".to_string()),
            Some("application/pdf".to_string()),
            vec![0u8; MAX + 1],
        ));
        assert_eq!(
            submission.validate(MAX),
            Err(FormValidationError::ResumeTooLarge { limit_mb: 5 })
        );
    }

    #[test]
    fn short_phone_is_rejected() {
        let mut submission = well_formed();
        submission.phone = "123".to_string();
        assert_eq!(
            submission.validate(MAX),
            Err(FormValidationError::TooShort {
                field: FormField::Phone,
                min: 5
            })
        );
    }

    #[test]
    fn upload_defaults_apply_when_metadata_missing() {
        let upload = ResumeUpload::new(None, Some("  ".to_string()), vec![1, 2, 3]);
        assert_eq!(upload.filename, "cv.pdf");
        assert_eq!(upload.content_type, "application/pdf");
    }

    #[test]
    fn garbage_content_type_is_rejected() {
        let mut submission = well_formed();
        submission.resume = Some(ResumeUpload::new(
            Some("cv.pdf".to_string()),
            Some("not a mime type at all".to_string()),
            vec![1, 2, 3],
        ));
        assert_eq!(
            submission.validate(MAX),
            Err(FormValidationError::InvalidResumeContentType)
        );
    }
}
