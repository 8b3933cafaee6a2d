//! Declarative request descriptors and the builder that resolves them.
//!
//! # Design
//! A `RequestDescriptor` says what a logical request is: where it goes, which
//! method it uses, the JSON parameters it carries and any extra headers.
//! Defaults for scheme, host and port come from a [`ClientConfig`] and are
//! copied in when the descriptor is created, so a descriptor is a
//! self-contained value that can be inspected in tests.
//!
//! [`build`] turns a descriptor into an [`HttpRequest`]. It is pure: the same
//! descriptor always yields the same request and is never modified.
//!
//! Two failure modes are handled differently on purpose:
//! - An unassemblable URL means the descriptor itself is wrong. URL parts are
//!   static and owned by whoever wrote the descriptor, so `build` panics.
//! - Parameters that cannot be encoded produce a request without a body. The
//!   failure surfaces downstream as a rejected request, and is logged here.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;
use url::{Host, Url};

use crate::config::ClientConfig;
use crate::http::{HttpMethod, HttpRequest};

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// A logical HTTP request, before URL assembly and body encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub scheme: String,
    pub host: String,
    pub port: Option<u16>,
    /// Absolute path, starting with `/`. Empty means the root.
    pub path: String,
    pub method: HttpMethod,
    /// JSON object sent as the body. `None` means no body at all.
    pub parameters: Option<Map<String, Value>>,
    /// Extra headers; these win over the builder's defaults.
    pub headers: BTreeMap<String, String>,
    unencodable_parameter: Option<String>,
}

impl RequestDescriptor {
    pub fn new(config: &ClientConfig, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            scheme: config.scheme.clone(),
            host: config.host.clone(),
            port: config.port,
            path: path.into(),
            method,
            parameters: None,
            headers: BTreeMap::new(),
            unencodable_parameter: None,
        }
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

    pub fn with_parameters(mut self, parameters: Map<String, Value>) -> Self {
        self.parameters = Some(parameters);
        self.unencodable_parameter = None;
        self
    }

    /// Add one parameter. A value that cannot be represented as JSON marks
    /// the parameters as unencodable and the built request carries no body.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let key = key.into();
        let parameters = self.parameters.get_or_insert_with(Map::new);
        match serde_json::to_value(value) {
            Ok(value) => {
                parameters.insert(key, value);
            }
            Err(_) => {
                self.unencodable_parameter = Some(key);
            }
        }
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn build(&self) -> HttpRequest {
        build(self)
    }
}

/// Resolve a descriptor into a canonical request.
///
/// # Panics
/// When scheme, host, port and path do not form a valid URL.
pub fn build(descriptor: &RequestDescriptor) -> HttpRequest {
    HttpRequest {
        url: make_url(descriptor),
        method: descriptor.method,
        headers: make_headers(&descriptor.headers),
        body: make_body(descriptor),
    }
}

fn make_url(descriptor: &RequestDescriptor) -> String {
    let RequestDescriptor {
        scheme,
        host,
        port,
        path,
        ..
    } = descriptor;

    if !(path.is_empty() || path.starts_with('/')) {
        invalid_url(descriptor);
    }
    // Rejects `/`, `?`, `#`, `@` and `:` so nothing in the host can leak into
    // another URL component.
    let expected_host = match Host::parse(host) {
        Ok(parsed) => parsed.to_string(),
        Err(_) => invalid_url(descriptor),
    };

    let authority = match port {
        Some(port) => format!("{host}:{port}"),
        None => host.clone(),
    };
    let mut url = match Url::parse(&format!("{scheme}://{authority}")) {
        Ok(url) => url,
        Err(_) => invalid_url(descriptor),
    };
    let intact = url
        .host_str()
        .is_some_and(|parsed| parsed.eq_ignore_ascii_case(&expected_host))
        && url.username().is_empty()
        && url.password().is_none()
        && url.query().is_none()
        && url.fragment().is_none();
    if !intact {
        invalid_url(descriptor);
    }

    url.set_path(path);
    url.to_string()
}

fn invalid_url(descriptor: &RequestDescriptor) -> ! {
    let RequestDescriptor {
        scheme, host, path, ..
    } = descriptor;
    panic!("could not generate URL: scheme={scheme:?} host={host:?} path={path:?}");
}

fn make_headers(overrides: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
    headers.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    headers
}

fn make_body(descriptor: &RequestDescriptor) -> Option<Vec<u8>> {
    let parameters = descriptor.parameters.as_ref()?;
    if let Some(parameter) = &descriptor.unencodable_parameter {
        warn!(
            path = %descriptor.path,
            parameter = %parameter,
            "dropping request body: parameters could not be encoded"
        );
        return None;
    }
    match serde_json::to_vec(parameters) {
        Ok(body) => Some(body),
        Err(err) => {
            warn!(
                path = %descriptor.path,
                error = %err,
                "dropping request body: parameters could not be encoded"
            );
            None
        }
    }
}
