//! Domain values for the login use case.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Caller-supplied login input. Never stored by the pipeline.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// The result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub is_premium: bool,
    pub token: String,
}

impl UserInfo {
    pub fn new(is_premium: bool, token: impl Into<String>) -> Self {
        Self {
            is_premium,
            token: token.into(),
        }
    }
}
