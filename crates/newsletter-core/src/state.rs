//! Signup form state machine.

use crate::email::validate_email;
use crate::error::{SignupError, SubscribeError};

/// Mutable state behind one rendered signup form.
///
/// Drives the whole submit lifecycle: [`begin_submit`](Self::begin_submit)
/// validates and marks the form submitting, the caller dispatches the
/// subscribe call, and [`settle`](Self::settle) records the outcome.
/// Rendering is a projection over the accessors; the struct itself performs
/// no I/O.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    email: String,
    submitting: bool,
    error: Option<SignupError>,
    success: bool,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input value.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// True while a subscribe call is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// True once a subscribe call has succeeded. There is no reset path:
    /// the confirmation notice replaces the form for the life of the
    /// instance.
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn error(&self) -> Option<&SignupError> {
        self.error.as_ref()
    }

    /// Copy shown under the input, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(SignupError::user_message)
    }

    /// Record a keystroke.
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Start a submit attempt.
    ///
    /// Returns the address to hand to the subscribe handler, or `None` when
    /// no call should be dispatched. A submit while one is already in
    /// flight, or after success, is ignored without touching state, so the
    /// handler cannot be invoked twice concurrently even when the form is
    /// driven programmatically. An accepted attempt clears any prior error
    /// before validating; a validation failure stores its message and
    /// dispatches nothing.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.submitting || self.success {
            return None;
        }
        self.error = None;
        if let Err(err) = validate_email(&self.email) {
            self.error = Some(err);
            return None;
        }
        self.submitting = true;
        Some(self.email.clone())
    }

    /// Record the settlement of the call dispatched by
    /// [`begin_submit`](Self::begin_submit).
    ///
    /// Always drops the submitting flag, whatever the outcome. Success
    /// clears the input and flips the form into its terminal confirmation
    /// state; failure keeps the input and stores the generic failure copy.
    pub fn settle(&mut self, outcome: Result<(), SubscribeError>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.success = true;
                self.error = None;
                self.email.clear();
            }
            Err(err) => {
                self.error = Some(SignupError::SubscribeFailed(err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let form = SignupForm::new();
        assert_eq!(form.email(), "");
        assert!(!form.is_submitting());
        assert!(!form.is_success());
        assert!(form.error().is_none());
    }

    #[test]
    fn test_valid_email_dispatches_once() {
        let mut form = SignupForm::new();
        form.set_email("a@b.c");

        assert_eq!(form.begin_submit(), Some("a@b.c".to_string()));
        assert!(form.is_submitting());
        assert!(form.error().is_none());

        // A second submit while in flight dispatches nothing.
        assert_eq!(form.begin_submit(), None);
        assert!(form.is_submitting());
    }

    #[test]
    fn test_empty_email_blocks_dispatch() {
        let mut form = SignupForm::new();
        assert_eq!(form.begin_submit(), None);
        assert!(!form.is_submitting());
        assert_eq!(form.error_message(), Some("Please enter an email address"));
    }

    #[test]
    fn test_malformed_email_blocks_dispatch() {
        let mut form = SignupForm::new();
        form.set_email("not-an-email");
        assert_eq!(form.begin_submit(), None);
        assert!(!form.is_submitting());
        assert_eq!(
            form.error_message(),
            Some("Please enter a valid email address")
        );
        assert!(!form.is_success());
    }

    #[test]
    fn test_successful_settlement() {
        let mut form = SignupForm::new();
        form.set_email("a@b.c");
        form.begin_submit().unwrap();

        form.settle(Ok(()));
        assert!(!form.is_submitting());
        assert!(form.is_success());
        assert_eq!(form.email(), "");
        assert!(form.error().is_none());
    }

    #[test]
    fn test_failed_settlement_keeps_input_and_sets_generic_copy() {
        let mut form = SignupForm::new();
        form.set_email("a@b.c");
        form.begin_submit().unwrap();

        form.settle(Err(SubscribeError::new("connection reset")));
        assert!(!form.is_submitting());
        assert!(!form.is_success());
        assert_eq!(form.email(), "a@b.c");
        // Detail stays in the error value; the user sees the generic copy.
        assert_eq!(
            form.error_message(),
            Some("Failed to subscribe. Please try again.")
        );
    }

    #[test]
    fn test_failure_copy_is_independent_of_detail() {
        for detail in ["timeout", "500", ""] {
            let mut form = SignupForm::new();
            form.set_email("a@b.c");
            form.begin_submit().unwrap();
            form.settle(Err(SubscribeError::new(detail)));
            assert_eq!(
                form.error_message(),
                Some("Failed to subscribe. Please try again.")
            );
        }
    }

    #[test]
    fn test_retry_after_failure_clears_error() {
        let mut form = SignupForm::new();
        form.set_email("a@b.c");
        form.begin_submit().unwrap();
        form.settle(Err(SubscribeError::new("boom")));
        assert!(form.error().is_some());

        // The next accepted attempt clears the stale message first.
        assert_eq!(form.begin_submit(), Some("a@b.c".to_string()));
        assert!(form.error().is_none());
    }

    #[test]
    fn test_success_is_terminal() {
        let mut form = SignupForm::new();
        form.set_email("a@b.c");
        form.begin_submit().unwrap();
        form.settle(Ok(()));

        form.set_email("d@e.f");
        assert_eq!(form.begin_submit(), None);
        assert!(form.is_success());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_in_flight_guard_preserves_existing_error() {
        let mut form = SignupForm::new();
        form.set_email("a@b.c");
        form.begin_submit().unwrap();
        form.settle(Err(SubscribeError::new("boom")));

        form.begin_submit().unwrap();
        // Ignored submit while in flight leaves state untouched.
        assert_eq!(form.begin_submit(), None);
        assert!(form.error().is_none());
        assert!(form.is_submitting());
    }

    #[test]
    fn test_success_flow_clears_input() {
        // "a@b.c" submitted, callback resolves -> empty input, success, no error.
        let mut form = SignupForm::new();
        form.set_email("a@b.c");
        let email = form.begin_submit().unwrap();
        assert_eq!(email, "a@b.c");
        form.settle(Ok(()));
        assert_eq!(form.email(), "");
        assert!(form.is_success());
        assert!(form.error_message().is_none());
    }
}
