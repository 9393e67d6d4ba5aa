//! Permissive email shape check.
//!
//! Reproduces the classic `^[^\s@]+@[^\s@]+\.[^\s@]+$` check without a
//! regex engine. The shape is intentionally loose: it accepts many
//! syntactically invalid addresses (`a@...` passes) and rejects none with
//! unusual but valid structure. Compatibility freezes the accept set, so
//! tightening it here would be a behavior change, not a fix.

use crate::error::SignupError;

/// Check a candidate address against the permissive shape.
///
/// Accepts exactly: one-or-more non-whitespace-non-`@` characters, `@`,
/// one-or-more non-whitespace-non-`@` characters, `.`, one-or-more
/// non-whitespace-non-`@` characters.
pub fn matches_email_shape(input: &str) -> bool {
    let mut parts = input.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    has_interior_dot(domain)
}

/// True when the domain contains a `.` that is neither its first nor its
/// last character. `.` is ASCII, so byte positions are safe here.
fn has_interior_dot(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    bytes.len() >= 3 && bytes[1..bytes.len() - 1].contains(&b'.')
}

/// Validate a candidate address before dispatching a subscribe call.
///
/// The empty check runs first so a blank form gets its own message.
pub fn validate_email(input: &str) -> Result<(), SignupError> {
    if input.is_empty() {
        return Err(SignupError::EmptyEmail);
    }
    if !matches_email_shape(input) {
        return Err(SignupError::MalformedEmail);
    }
    Ok(())
}
