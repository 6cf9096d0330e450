/// Status text while the simulated send is in flight.
pub const STATUS_SENDING: &str = "Sending\u{2026}";
/// Status text once the simulated send lands.
pub const STATUS_SENT: &str = "Thanks \u{2014} your message was sent (demo).";
/// Fixed simulated send delay.
pub const SEND_DELAY_SECONDS: f64 = 0.7;

/// Identifies one demo form; each has its own isolated status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormId(pub usize);

/// One submission's raw field values, as read from the inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    MissingName,
    InvalidEmail,
    MissingMessage,
}

impl FieldError {
    pub fn status_text(self) -> &'static str {
        match self {
            FieldError::MissingName => "Please enter your name.",
            FieldError::InvalidEmail => "Please enter a valid email.",
            FieldError::MissingMessage => "Please include a message.",
        }
    }
}

/// Field checks, run in order, stopping at the first failure.
pub fn validate(submission: &Submission) -> Result<(), FieldError> {
    if submission.name.trim().is_empty() {
        return Err(FieldError::MissingName);
    }
    if !email_looks_valid(submission.email.trim()) {
        return Err(FieldError::InvalidEmail);
    }
    if submission.message.trim().is_empty() {
        return Err(FieldError::MissingMessage);
    }
    Ok(())
}

/// Permissive shape check, not an RFC parse: something before an '@', a '.'
/// somewhere after it, five characters overall. Good enough for a demo form
/// that never transmits anything.
pub fn email_looks_valid(email: &str) -> bool {
    if email.is_empty() {
        return false;
    }
    let at = match email.find('@') {
        Some(i) => i,
        None => return false,
    };
    if at == 0 {
        return false;
    }
    if !email[at + 1..].contains('.') {
        return false;
    }
    email.chars().count() >= 5
}

/// The demo send delay as an explicitly cancellable scheduled task. Each
/// submit hands out a fresh generation; a timer firing with a stale one is
/// ignored. The production flow never cancels, but the contract is there.
#[derive(Debug, Default)]
pub struct ScheduledSend {
    generation: u64,
    armed: bool,
}

impl ScheduledSend {
    /// Arm for a fresh submission, invalidating any earlier timer.
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.armed = true;
        self.generation
    }

    /// Invalidate the pending send without firing it.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.armed = false;
    }

    /// True exactly once, for the generation handed out by the latest `arm`.
    pub fn fire(&mut self, generation: u64) -> bool {
        if self.armed && generation == self.generation {
            self.armed = false;
            true
        } else {
            false
        }
    }
}

/// What the UI should do after a submit was processed.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed: show the message, leave the fields alone.
    Rejected(&'static str),
    /// Accepted: show the sending status and schedule the acknowledgment.
    Accepted { generation: u64 },
}

/// Per-form submission state machine. Owns the scheduled-send bookkeeping;
/// reading inputs and writing status text stays in the UI layer.
#[derive(Debug, Default)]
pub struct FormController {
    send: ScheduledSend,
}

impl FormController {
    pub fn submit(&mut self, submission: &Submission) -> SubmitOutcome {
        match validate(submission) {
            Err(err) => SubmitOutcome::Rejected(err.status_text()),
            Ok(()) => SubmitOutcome::Accepted {
                generation: self.send.arm(),
            },
        }
    }

    /// True when the acknowledgment for `generation` should land.
    pub fn send_elapsed(&mut self, generation: u64) -> bool {
        self.send.fire(generation)
    }

    pub fn cancel_pending(&mut self) {
        self.send.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> Submission {
        Submission {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_missing_name_rejected_first() {
        // Name is checked before the (also invalid) email.
        let result = validate(&submission("", "bad-email", "hi"));
        assert_eq!(result, Err(FieldError::MissingName));
        assert_eq!(
            FieldError::MissingName.status_text(),
            "Please enter your name."
        );
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let result = validate(&submission("   ", "a@b.com", "hi"));
        assert_eq!(result, Err(FieldError::MissingName));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let result = validate(&submission("Ann", "bad-email", "hi"));
        assert_eq!(result, Err(FieldError::InvalidEmail));
        assert_eq!(
            FieldError::InvalidEmail.status_text(),
            "Please enter a valid email."
        );
    }

    #[test]
    fn test_missing_message_rejected() {
        let result = validate(&submission("Ann", "a@b.co", "  "));
        assert_eq!(result, Err(FieldError::MissingMessage));
        assert_eq!(
            FieldError::MissingMessage.status_text(),
            "Please include a message."
        );
    }

    #[test]
    fn test_complete_submission_accepted() {
        assert_eq!(validate(&submission("Ann", "a@b.co", "hi")), Ok(()));
    }

    #[test]
    fn test_email_shape() {
        assert!(email_looks_valid("a@b.co"));
        assert!(email_looks_valid("first.last@example.org"));

        // Empty, no '@', or '@' first.
        assert!(!email_looks_valid(""));
        assert!(!email_looks_valid("nobody"));
        assert!(!email_looks_valid("@example.com"));

        // No '.' after the '@'. A dot before it doesn't count.
        assert!(!email_looks_valid("ab@cd"));
        assert!(!email_looks_valid("a.b@cd"));

        // Shorter than five characters.
        assert!(!email_looks_valid("a@.c"));
    }

    #[test]
    fn test_email_is_trimmed_before_checking() {
        assert_eq!(validate(&submission("Ann", "  a@b.co  ", "hi")), Ok(()));
    }

    #[test]
    fn test_status_texts() {
        assert_eq!(STATUS_SENDING, "Sending…");
        assert_eq!(STATUS_SENT, "Thanks — your message was sent (demo).");
    }

    #[test]
    fn test_submit_outcomes() {
        let mut controller = FormController::default();

        let rejected = controller.submit(&submission("", "a@b.co", "hi"));
        assert_eq!(rejected, SubmitOutcome::Rejected("Please enter your name."));

        let accepted = controller.submit(&submission("Ann", "a@b.co", "hi"));
        assert!(matches!(accepted, SubmitOutcome::Accepted { .. }));
    }

    #[test]
    fn test_send_fires_once() {
        let mut controller = FormController::default();
        let generation = match controller.submit(&submission("Ann", "a@b.co", "hi")) {
            SubmitOutcome::Accepted { generation } => generation,
            other => panic!("unexpected outcome: {:?}", other),
        };

        assert!(controller.send_elapsed(generation));
        assert!(!controller.send_elapsed(generation));
    }

    #[test]
    fn test_resubmit_invalidates_earlier_send() {
        let mut controller = FormController::default();
        let first = match controller.submit(&submission("Ann", "a@b.co", "hi")) {
            SubmitOutcome::Accepted { generation } => generation,
            other => panic!("unexpected outcome: {:?}", other),
        };
        let second = match controller.submit(&submission("Ann", "a@b.co", "hello again")) {
            SubmitOutcome::Accepted { generation } => generation,
            other => panic!("unexpected outcome: {:?}", other),
        };

        assert!(!controller.send_elapsed(first));
        assert!(controller.send_elapsed(second));
    }

    #[test]
    fn test_cancel_suppresses_pending_send() {
        let mut controller = FormController::default();
        let generation = match controller.submit(&submission("Ann", "a@b.co", "hi")) {
            SubmitOutcome::Accepted { generation } => generation,
            other => panic!("unexpected outcome: {:?}", other),
        };

        controller.cancel_pending();
        assert!(!controller.send_elapsed(generation));
    }

    #[test]
    fn test_rejected_submit_does_not_arm_send() {
        let mut controller = FormController::default();
        controller.submit(&submission("", "", ""));
        // No generation was handed out, so nothing may fire.
        assert!(!controller.send_elapsed(1));
    }
}
