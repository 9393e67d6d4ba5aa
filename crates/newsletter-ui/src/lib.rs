//! Themeable newsletter signup section for Leptos.
//!
//! One component, [`NewsletterSection`]: a labeled email input, a submit
//! button that disables while a subscribe call is in flight, inline
//! validation copy, and a confirmation notice that permanently replaces the
//! form after a successful signup. Validation and the submission state
//! machine live in [`newsletter_core`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use newsletter_ui::prelude::*;
//!
//! #[component]
//! fn Footer() -> impl IntoView {
//!     let on_subscribe = SubscribeHandler::new(|email| async move {
//!         subscribe_via_api(&email).await.map_err(|e| SubscribeError::new(e.to_string()))
//!     });
//!
//!     view! {
//!         <NewsletterSection theme="light" on_subscribe=on_subscribe/>
//!     }
//! }
//! ```
//!
//! Include [`NEWSLETTER_STYLES`] once per page for layout and hover states;
//! palette colors are applied inline by the component itself.

mod section;
mod styles;

pub use section::NewsletterSection;
pub use styles::NEWSLETTER_STYLES;

// Re-export the domain crate surface for consumers.
pub use newsletter_core::{
    NewsletterContent, Palette, SignupError, SignupForm, SubscribeError, SubscribeHandler, Theme,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::section::NewsletterSection;
    pub use crate::styles::NEWSLETTER_STYLES;
    pub use newsletter_core::prelude::*;
}
