//! System-wide request defaults.
//!
//! Every [`crate::RequestDescriptor`] starts from a `ClientConfig` and may
//! override any field it carries. The defaults are resolved once, when the
//! descriptor is constructed.

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_SCHEME: &str = "https";
pub const DEFAULT_HOST: &str = "google.com";

/// Scheme, host and optional port applied to descriptors that do not set
/// their own.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: None,
        }
    }
}

impl ClientConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Derive scheme, host and port from a base URL such as
    /// `http://127.0.0.1:3000`. Any path on the base URL is ignored.
    pub fn for_base_url(base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url)?;
        let host = url
            .host_str()
            .ok_or_else(|| ConfigError::MissingHost(base_url.to_string()))?;
        Ok(Self {
            scheme: url.scheme().to_string(),
            host: host.to_string(),
            port: url.port(),
        })
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }
}
