//! Blocking `ureq` transport behind the [`HttpClient`] contract.
//!
//! # Design
//! The agent is configured so 4xx/5xx statuses come back as data rather than
//! errors; interpreting status codes is the response mapper's job. `perform`
//! runs the exchange on a worker thread and completes from there, so callers
//! are never blocked by the network.
//!
//! A `GET` or `DELETE` that carries a body is sent as-is.

use std::thread;

use tracing::debug;
use ureq::Agent;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Outcome};
use crate::transport::{Completion, HttpClient};

#[derive(Debug, Clone)]
pub struct UreqHttpClient {
    agent: Agent,
}

impl Default for UreqHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqHttpClient {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a caller-configured agent. Status-as-error should stay disabled or
    /// every non-2xx answer will surface as a transport failure.
    pub fn with_agent(agent: Agent) -> Self {
        Self { agent }
    }

    /// Run one exchange on the current thread.
    pub fn execute(&self, request: &HttpRequest) -> Outcome {
        let url = request.url.as_str();
        let mut builder = match request.method {
            HttpMethod::Get => self.agent.get(url).force_send_body(),
            HttpMethod::Post => self.agent.post(url),
            HttpMethod::Put => self.agent.put(url),
            HttpMethod::Delete => self.agent.delete(url).force_send_body(),
        };
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        let sent = match &request.body {
            Some(body) => builder.send(&body[..]),
            None => builder.send_empty(),
        };
        let mut response = sent.map_err(|err| TransportError::Network(err.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                let value = value.to_str().ok()?;
                Some((name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(|_| TransportError::UnexpectedRepresentation)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

impl HttpClient for UreqHttpClient {
    fn perform(&self, request: HttpRequest, completion: Completion) {
        let client = self.clone();
        thread::spawn(move || {
            debug!(url = %request.url, method = %request.method, "sending request");
            let outcome = client.execute(&request);
            match &outcome {
                Ok(response) => debug!(
                    status = response.status,
                    bytes = response.body.len(),
                    "request completed"
                ),
                Err(err) => debug!(error = %err, "request failed"),
            }
            completion(outcome)
        });
    }
}
