//! Stateless request builder for the login endpoint.
//!
//! # Design
//! `LoginClient` holds only the endpoint URL. `build_login` produces an
//! `HttpRequest` and nothing else; executing it is a `Transport`'s job.

use crate::error::ProbeError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::Credentials;

/// Endpoint probed when no URL is supplied.
pub const DEFAULT_LOGIN_URL: &str = "https://deepcodev.com/api/auth/login";

/// Builds login requests for a single endpoint.
#[derive(Debug, Clone)]
pub struct LoginClient {
    url: String,
}

impl Default for LoginClient {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_URL)
    }
}

impl LoginClient {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn build_login(&self, credentials: &Credentials) -> Result<HttpRequest, ProbeError> {
        let body = serde_json::to_string(&credentials.payload())
            .map_err(|e| ProbeError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.url.clone(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}
