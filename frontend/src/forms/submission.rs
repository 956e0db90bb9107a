use thiserror::Error;

/// Lifecycle of one form submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// A new submit is only accepted from an editable, settled form.
    pub fn accepts_submit(self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed)
    }

    pub fn is_pending(self) -> bool {
        self == SubmissionState::Pending
    }

    pub fn is_confirmed(self) -> bool {
        self == SubmissionState::Succeeded
    }
}

/// Request-in-flight flag read and flipped inside the submit handler itself,
/// so a second event before the next render cannot start another request.
#[derive(Debug, Default)]
pub struct SubmitGate {
    in_flight: bool,
}

impl SubmitGate {
    /// Claims the gate. Returns false if a request is already running.
    pub fn try_begin(&mut self) -> bool {
        !std::mem::replace(&mut self.in_flight, true)
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Please upload all required documents: Aadhar card, PAN card and photo")]
    MissingDocuments,
    #[error("{0} must be an image or PDF")]
    RejectedDocument(&'static str),
    #[error("{0} must be an image")]
    RejectedPhoto(&'static str),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Could not reach the server. Please check your connection and try again.")]
    Transport(String),
    #[error("Could not prepare your request. Please try again.")]
    Encode(String),
}

/// Result of a finished request: the success message to show, if any.
pub type SubmitOutcome = Result<Option<String>, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_settled_forms_accept_a_submit() {
        assert!(SubmissionState::Idle.accepts_submit());
        assert!(SubmissionState::Failed.accepts_submit());
        assert!(!SubmissionState::Pending.accepts_submit());
        assert!(!SubmissionState::Succeeded.accepts_submit());
    }

    #[test]
    fn gate_admits_one_request_until_finished() {
        let mut gate = SubmitGate::default();
        assert!(gate.try_begin());
        assert!(!gate.try_begin());
        assert!(!gate.try_begin());
        gate.finish();
        assert!(gate.try_begin());
    }

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(SubmitError::MissingField("City").to_string(), "City is required");
        let server = SubmitError::Server { status: 422, message: "Phone already registered".into() };
        assert_eq!(server.to_string(), "Phone already registered");
        assert!(!SubmitError::Transport("TypeError: Failed to fetch".into())
            .to_string()
            .contains("TypeError"));
    }
}
