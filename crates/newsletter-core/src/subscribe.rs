//! Subscribe callback capability.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::SubscribeError;

/// Boxed future returned by a subscribe handler.
pub type SubscribeFuture = Pin<Box<dyn Future<Output = Result<(), SubscribeError>> + Send>>;

/// Cloneable handle to the injected subscribe callback.
///
/// The form never inspects the handler; it only dispatches the candidate
/// address and waits for the future to settle. A handler that never settles
/// leaves the form submitting indefinitely.
#[derive(Clone)]
pub struct SubscribeHandler {
    inner: Arc<dyn Fn(String) -> SubscribeFuture + Send + Sync>,
}

impl SubscribeHandler {
    /// Wrap an async function taking the candidate email.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), SubscribeError>> + Send + 'static,
    {
        Self {
            inner: Arc::new(move |email| Box::pin(f(email))),
        }
    }

    /// Invoke the handler with the candidate email.
    pub fn call(&self, email: String) -> SubscribeFuture {
        (self.inner)(email)
    }
}

impl fmt::Debug for SubscribeHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubscribeHandler")
    }
}
