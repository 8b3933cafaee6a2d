//! HTTP wire types shared by the builder, transports and the response mapper.
//!
//! # Design
//! Requests and responses are plain data. The request builder produces an
//! `HttpRequest`, a transport turns it into an `Outcome`, and the response
//! mapper consumes that outcome. None of these types know which transport
//! carried them.
//!
//! Bodies are raw bytes so a transport can hand back whatever the server sent
//! without first deciding it is UTF-8.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::TransportError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved, transport-ready request.
///
/// Built by [`crate::request::build`]. Header keys are matched exactly, the
/// same way they were supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

/// A response that completed at the protocol level: a status line was read
/// and a body (possibly empty) was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}

/// Result of dispatching one request through an [`crate::HttpClient`].
pub type Outcome = Result<HttpResponse, TransportError>;
