//! The login use case: credentials in, [`UserInfo`] or [`LoginError`] out.
//!
//! # Design
//! `RemoteLoginLoader` composes the other pieces and holds no per-call state:
//! each `execute` builds a fresh descriptor, dispatches it through whatever
//! `HttpClient` it was given (possibly decorated), maps the outcome and calls
//! the caller back once. Timeouts and retries are left to the transport and
//! to the caller respectively.

use tokio::sync::oneshot;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::LoginError;
use crate::http::HttpMethod;
use crate::mapper;
use crate::request::RequestDescriptor;
use crate::transport::HttpClient;
use crate::types::{Credentials, UserInfo};

pub const LOGIN_PATH: &str = "/path";

pub type LoginResult = Result<UserInfo, LoginError>;

/// Describes the login call: a `GET` to [`LOGIN_PATH`] whose JSON body
/// carries the credentials.
#[derive(Debug, Clone)]
pub struct LoginRequest<'a> {
    credentials: &'a Credentials,
}

impl<'a> LoginRequest<'a> {
    pub fn new(credentials: &'a Credentials) -> Self {
        Self { credentials }
    }

    pub fn descriptor(&self, config: &ClientConfig) -> RequestDescriptor {
        RequestDescriptor::new(config, HttpMethod::Get, LOGIN_PATH)
            .with_parameter("username", &self.credentials.username)
            .with_parameter("password", &self.credentials.password)
    }
}

/// Logs a user in through an [`HttpClient`].
#[derive(Debug)]
pub struct RemoteLoginLoader<C> {
    client: C,
    config: ClientConfig,
}

impl<C: HttpClient> RemoteLoginLoader<C> {
    pub fn new(client: C) -> Self {
        Self::with_config(client, ClientConfig::default())
    }

    pub fn with_config(client: C, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one login request; `completion` runs exactly once with the
    /// mapped result, on whichever thread the transport completes on.
    pub fn execute<F>(&self, credentials: &Credentials, completion: F)
    where
        F: FnOnce(LoginResult) + Send + 'static,
    {
        let request = LoginRequest::new(credentials).descriptor(&self.config).build();
        debug!(url = %request.url, method = %request.method, "dispatching login request");

        self.client.perform(
            request,
            Box::new(move |outcome| {
                let result = mapper::map(outcome);
                match &result {
                    Ok(user) => debug!(premium = user.is_premium, "login succeeded"),
                    Err(err) => debug!(error = %err, "login failed"),
                }
                completion(result)
            }),
        );
    }

    /// Future-based form of [`execute`](Self::execute). A transport that
    /// drops the completion without calling it resolves to `Connectivity`.
    pub async fn load(&self, credentials: &Credentials) -> LoginResult {
        let (tx, rx) = oneshot::channel();
        self.execute(credentials, move |result| {
            let _ = tx.send(result);
        });
        rx.await.unwrap_or(Err(LoginError::Connectivity))
    }
}
