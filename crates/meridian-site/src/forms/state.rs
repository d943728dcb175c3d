/// UI state for one submission form.
///
/// The transitions encode the form contract: the submit control is
/// disabled only while an attempt is in flight, exactly one of the success
/// and error messages is visible at a time, and starting a new attempt
/// clears both. Resubmission is allowed any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded {
        message: String,
    },
    Failed {
        message: String,
    },
}

impl FormPhase {
    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !matches!(self, FormPhase::Submitting)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, FormPhase::Submitting)
    }

    pub fn success_message(&self) -> Option<&str> {
        match self {
            FormPhase::Succeeded { message } => Some(message),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FormPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Enter the submitting state, clearing any previous outcome.
    /// Returns false (and stays put) while an attempt is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = FormPhase::Submitting;
        true
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        *self = FormPhase::Succeeded {
            message: message.into(),
        };
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = FormPhase::Failed {
            message: message.into(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_blocks_while_submitting() {
        let mut phase = FormPhase::default();
        assert!(phase.begin());
        assert!(!phase.can_submit());
        assert!(!phase.begin());
    }

    #[test]
    fn outcomes_are_mutually_exclusive() {
        let mut phase = FormPhase::default();
        phase.begin();
        phase.succeed("Your message has been sent.");
        assert!(phase.success_message().is_some());
        assert!(phase.error_message().is_none());

        phase.begin();
        assert!(phase.success_message().is_none());
        phase.fail("Failed to send message");
        assert!(phase.success_message().is_none());
        assert!(phase.error_message().is_some());
    }

    #[test]
    fn failure_returns_to_an_actionable_state() {
        let mut phase = FormPhase::default();
        phase.begin();
        phase.fail("Failed to send message");
        assert!(phase.can_submit());
        assert!(phase.begin());
    }
}
