//! Domain types and logic for the newsletter signup section.
//!
//! This crate holds everything about the form that is not rendering:
//!
//! - **Validation**: the permissive email shape check
//! - **State**: the submission state machine ([`SignupForm`])
//! - **Content**: display copy with CMS-friendly defaults
//! - **Theme**: fixed palettes with silent fallback
//! - **Subscribe**: the injected callback capability
//!
//! # Example
//!
//! ```rust
//! use newsletter_core::prelude::*;
//!
//! let mut form = SignupForm::new();
//! form.set_email("a@b.c");
//!
//! // Validation passed, a subscribe call may be dispatched.
//! let email = form.begin_submit().unwrap();
//! assert_eq!(email, "a@b.c");
//! assert!(form.is_submitting());
//!
//! // The call settled successfully.
//! form.settle(Ok(()));
//! assert!(form.is_success());
//! assert_eq!(form.email(), "");
//! ```

pub mod content;
pub mod email;
pub mod error;
pub mod state;
pub mod subscribe;
pub mod theme;

pub use content::NewsletterContent;
pub use email::{matches_email_shape, validate_email};
pub use error::{SignupError, SubscribeError};
pub use state::SignupForm;
pub use subscribe::{SubscribeFuture, SubscribeHandler};
pub use theme::{Palette, Theme};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::content::NewsletterContent;
    pub use crate::email::{matches_email_shape, validate_email};
    pub use crate::error::{SignupError, SubscribeError};
    pub use crate::state::SignupForm;
    pub use crate::subscribe::{SubscribeFuture, SubscribeHandler};
    pub use crate::theme::{Palette, Theme};
}
