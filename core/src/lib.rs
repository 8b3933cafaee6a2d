//! Client-side login pipeline over a pluggable HTTP transport.
//!
//! # Overview
//! A login travels through five small pieces:
//! 1. [`RequestDescriptor`] declares the request; [`build`] resolves it into
//!    an [`HttpRequest`].
//! 2. An [`HttpClient`] dispatches it and reports one [`Outcome`].
//! 3. [`AuthenticatorDecorator`] can wrap any `HttpClient` to add a bearer
//!    token without the caller or the transport noticing.
//! 4. [`mapper::map`] turns the outcome into a [`UserInfo`] or a
//!    [`LoginError`].
//! 5. [`RemoteLoginLoader`] ties them together behind one callback.
//!
//! # Design
//! - Transports are swappable behind a single-method trait. [`UreqHttpClient`]
//!   is the bundled implementation; tests use spies.
//! - Completions are `FnOnce` and every implementation calls them exactly
//!   once.
//! - Response interpretation fails closed: anything other than a `200` with
//!   the expected JSON becomes `InvalidData`.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod login;
pub mod mapper;
pub mod request;
pub mod transport;
pub mod types;
pub mod ureq_client;

pub use auth::{AuthToken, AuthenticatorDecorator};
pub use config::ClientConfig;
pub use error::{ConfigError, LoginError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Outcome};
pub use login::{LoginRequest, LoginResult, RemoteLoginLoader, LOGIN_PATH};
pub use request::{build, RequestDescriptor};
pub use transport::{Completion, HttpClient};
pub use types::{Credentials, UserInfo};
pub use ureq_client::UreqHttpClient;
