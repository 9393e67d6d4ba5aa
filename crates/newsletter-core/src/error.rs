//! Signup error types.

use thiserror::Error;

/// Failure reported by a subscribe handler.
///
/// The message is operational detail for the log; it is never shown to the
/// user, who only sees the generic copy from
/// [`SignupError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SubscribeError(String);

impl SubscribeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors surfaced by the signup form.
///
/// All variants are recovered locally and rendered as short copy under the
/// input; none propagate to the hosting application.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignupError {
    /// No address was entered.
    #[error("email address is empty")]
    EmptyEmail,

    /// Address does not match the permissive shape check.
    #[error("email address is malformed")]
    MalformedEmail,

    /// The subscribe handler reported a failure.
    #[error("subscribe handler failed: {0}")]
    SubscribeFailed(#[from] SubscribeError),
}

impl SignupError {
    /// Copy shown under the input for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            SignupError::EmptyEmail => "Please enter an email address",
            SignupError::MalformedEmail => "Please enter a valid email address",
            SignupError::SubscribeFailed(_) => "Failed to subscribe. Please try again.",
        }
    }
}
