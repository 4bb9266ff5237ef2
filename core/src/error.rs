//! Error types for the login probe.
//!
//! # Design
//! On the console every failure reads the same way (`Error: ...`). The enum
//! still separates "the request never left" from "the exchange failed" so a
//! caller can pick an exit code without string matching.

use std::fmt;

/// Errors produced while building or executing the login request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// Anything below the application layer: DNS, connect, TLS, timeout,
    /// malformed URL, or a body that could not be read.
    Transport(String),

    /// The login payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Transport(msg) => write!(f, "{msg}"),
            ProbeError::Serialization(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ProbeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_displays_underlying_description() {
        let err = ProbeError::Transport("Connection refused (os error 111)".to_string());
        assert_eq!(err.to_string(), "Connection refused (os error 111)");
    }

    #[test]
    fn serialization_error_is_prefixed() {
        let err = ProbeError::Serialization("boom".to_string());
        assert_eq!(err.to_string(), "serialization failed: boom");
    }
}
