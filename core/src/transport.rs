//! The transport contract every network layer and decorator implements.
//!
//! # Design
//! `HttpClient::perform` takes ownership of a request and a [`Completion`].
//! The completion is an `FnOnce`, so it cannot run twice. Implementations
//! must still make sure it runs once: on success, on transport error, and
//! when the transport produced nothing usable. Dropping it without calling it
//! leaves the caller waiting forever.
//!
//! Blanket impls for references, `Box` and `Arc` let a decorator own its
//! decoratee by value while the caller keeps a shared handle to the same
//! transport.

use std::sync::Arc;

use crate::http::{HttpRequest, Outcome};

/// Callback receiving the single outcome of a `perform` call.
pub type Completion = Box<dyn FnOnce(Outcome) + Send + 'static>;

/// Send one request, report one outcome.
pub trait HttpClient: Send + Sync {
    /// Dispatch `request` and invoke `completion` exactly once with the
    /// outcome. May complete inline or on another thread.
    fn perform(&self, request: HttpRequest, completion: Completion);
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn perform(&self, request: HttpRequest, completion: Completion) {
        (**self).perform(request, completion)
    }
}

impl<T: HttpClient + ?Sized> HttpClient for Box<T> {
    fn perform(&self, request: HttpRequest, completion: Completion) {
        (**self).perform(request, completion)
    }
}

impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    fn perform(&self, request: HttpRequest, completion: Completion) {
        (**self).perform(request, completion)
    }
}
