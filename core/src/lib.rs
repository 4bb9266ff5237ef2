//! Blocking login probe for a JSON auth endpoint.
//!
//! # Overview
//! Builds one `POST` login request, executes it exactly once through a
//! `Transport`, and writes a short human-readable report: the target URL,
//! then either the status code and raw body or the transport error.
//!
//! # Design
//! - `LoginClient` builds `HttpRequest` values as plain data and never does I/O.
//! - `Transport` is the only seam that touches the network; `UreqTransport`
//!   is the real one, tests substitute their own.
//! - `LoginProbe` owns the sequence and the report format. It never retries
//!   and never interprets the response body.
//! - Credentials are always supplied by the caller.

pub mod client;
pub mod error;
pub mod http;
pub mod probe;
pub mod transport;
pub mod types;

pub use client::{LoginClient, DEFAULT_LOGIN_URL};
pub use error::ProbeError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use probe::{LoginProbe, Outcome};
pub use transport::{Transport, UreqTransport};
pub use types::{Credentials, LoginPayload};
