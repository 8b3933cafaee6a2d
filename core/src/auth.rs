//! Bearer-token decorator over any [`HttpClient`].
//!
//! # Design
//! `AuthenticatorDecorator` is itself an `HttpClient`. It copies the incoming
//! request, sets `Authorization: Bearer <token>` and hands the copy to the
//! wrapped client together with the caller's completion, untouched. Nothing
//! else about the request changes, so callers cannot tell it apart from the
//! wrapped client apart from that header.
//!
//! The token is fixed for the decorator's lifetime. Refresh, retry or caching
//! belong in their own decorators stacked around this one.

use std::fmt;

use crate::http::HttpRequest;
use crate::transport::{Completion, HttpClient};

pub const AUTHORIZATION: &str = "Authorization";

/// Opaque bearer token. Its `Debug` output never shows the value.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

impl From<&str> for AuthToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for AuthToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Adds a bearer `Authorization` header to every request sent through it.
#[derive(Debug)]
pub struct AuthenticatorDecorator<C> {
    decoratee: C,
    token: AuthToken,
}

impl<C: HttpClient> AuthenticatorDecorator<C> {
    pub fn new(decoratee: C, token: impl Into<AuthToken>) -> Self {
        Self {
            decoratee,
            token: token.into(),
        }
    }

    pub fn decoratee(&self) -> &C {
        &self.decoratee
    }

    fn authorize(&self, request: &HttpRequest) -> HttpRequest {
        let mut authorized = request.clone();
        authorized
            .headers
            .insert(AUTHORIZATION.to_string(), self.token.bearer());
        authorized
    }
}

impl<C: HttpClient> HttpClient for AuthenticatorDecorator<C> {
    fn perform(&self, request: HttpRequest, completion: Completion) {
        self.decoratee.perform(self.authorize(&request), completion)
    }
}
