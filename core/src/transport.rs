//! Network execution of `HttpRequest` values.
//!
//! # Design
//! `Transport` is the only I/O seam in the crate. `UreqTransport` runs the
//! request on the calling thread and blocks until a response or a failure.
//! Status codes are returned as data, so a 401 or 500 is a successful
//! exchange from the transport's point of view.

use std::time::Duration;

use tracing::debug;

use crate::error::ProbeError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP request. Implementations must not retry.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ProbeError>;
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl UreqTransport {
    /// `timeout` bounds the whole exchange. `None` leaves it unbounded.
    pub fn new(timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ProbeError> {
        debug!(method = request.method.as_str(), url = %request.url, "executing request");

        let mut builder = match request.method {
            HttpMethod::Post => self.agent.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let result = match &request.body {
            Some(body) => builder.send(body.as_bytes()),
            None => builder.send_empty(),
        };
        let mut response = result.map_err(transport_error)?;

        let status = response.status().as_u16();
        // Reported whole, however large, and whatever its encoding.
        let bytes = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(transport_error)?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        debug!(status, bytes = body.len(), "response received");
        Ok(HttpResponse { status, body })
    }
}

fn transport_error(err: ureq::Error) -> ProbeError {
    ProbeError::Transport(err.to_string())
}
