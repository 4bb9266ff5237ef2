//! The login probe: one request, one report.
//!
//! The report is written to any `io::Write` so the binary can hand it
//! stdout and tests can hand it a `Vec<u8>`. Lines are:
//!
//! ```text
//! Sending POST to <url>...
//! Status Code: <n>
//! Response Body: <raw body>
//! ```
//!
//! or, when the exchange fails, the first line followed by `Error: <description>`.

use std::io::{self, Write};

use tracing::{info, warn};

use crate::client::LoginClient;
use crate::error::ProbeError;
use crate::http::HttpResponse;
use crate::transport::Transport;
use crate::types::Credentials;

/// Result of a single probe run. Exactly one of the two is produced.
#[derive(Debug, Clone)]
pub enum Outcome {
    Response(HttpResponse),
    Failed(ProbeError),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Outcome::Response(response) => Some(response.status),
            Outcome::Failed(_) => None,
        }
    }
}

/// Sends one login request and reports what came back.
#[derive(Debug, Clone)]
pub struct LoginProbe {
    client: LoginClient,
    credentials: Credentials,
}

impl LoginProbe {
    pub fn new(client: LoginClient, credentials: Credentials) -> Self {
        Self {
            client,
            credentials,
        }
    }

    pub fn url(&self) -> &str {
        self.client.url()
    }

    /// Runs the probe once. The only `Err` is a failure to write the report;
    /// everything else ends up in the returned `Outcome`.
    pub fn run<W: Write>(&self, transport: &dyn Transport, out: &mut W) -> io::Result<Outcome> {
        let request = self.client.build_login(&self.credentials);

        writeln!(out, "Sending POST to {}...", self.client.url())?;

        let outcome = match request.and_then(|req| transport.execute(&req)) {
            Ok(response) => {
                info!(status = response.status, "login endpoint answered");
                writeln!(out, "Status Code: {}", response.status)?;
                writeln!(out, "Response Body: {}", response.body)?;
                Outcome::Response(response)
            }
            Err(err) => {
                warn!(error = %err, "login probe failed");
                writeln!(out, "Error: {err}")?;
                Outcome::Failed(err)
            }
        };
        out.flush()?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::http::HttpRequest;

    /// Replays canned results and records every request it sees.
    struct ScriptedTransport {
        results: RefCell<Vec<Result<HttpResponse, ProbeError>>>,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn new(results: Vec<Result<HttpResponse, ProbeError>>) -> Self {
            Self {
                results: RefCell::new(results),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for ScriptedTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ProbeError> {
            self.seen.borrow_mut().push(request.clone());
            self.results.borrow_mut().remove(0)
        }
    }

    fn ok(status: u16, body: &str) -> Result<HttpResponse, ProbeError> {
        Ok(HttpResponse {
            status,
            body: body.to_string(),
        })
    }

    fn probe() -> LoginProbe {
        LoginProbe::new(
            LoginClient::default(),
            Credentials::new("user@example.com", "pw"),
        )
    }

    fn run(probe: &LoginProbe, transport: &ScriptedTransport) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = probe.run(transport, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn success_prints_status_and_raw_body() {
        let transport = ScriptedTransport::new(vec![ok(200, r#"{"token":"abc"}"#)]);
        let (outcome, out) = run(&probe(), &transport);

        assert_eq!(outcome.status(), Some(200));
        assert_eq!(
            out,
            "Sending POST to https://deepcodev.com/api/auth/login...\n\
             Status Code: 200\n\
             Response Body: {\"token\":\"abc\"}\n"
        );
    }

    #[test]
    fn error_statuses_print_like_success() {
        for status in [401, 500] {
            let transport = ScriptedTransport::new(vec![ok(status, "nope")]);
            let (outcome, out) = run(&probe(), &transport);
            assert!(!outcome.is_failure());
            assert!(out.contains(&format!("Status Code: {status}\n")));
            assert!(out.ends_with("Response Body: nope\n"));
        }
    }

    #[test]
    fn transport_failure_prints_single_error_line() {
        let transport = ScriptedTransport::new(vec![Err(ProbeError::Transport(
            "Connection refused".to_string(),
        ))]);
        let (outcome, out) = run(&probe(), &transport);

        assert!(outcome.is_failure());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Sending POST to https://deepcodev.com/api/auth/login..."
        );
        assert!(lines[1].starts_with("Error: "));
        assert!(lines[1].contains("Connection refused"));
        assert!(!out.contains("Status Code"));
    }

    #[test]
    fn failure_is_not_retried() {
        let transport = ScriptedTransport::new(vec![
            Err(ProbeError::Transport("timed out".to_string())),
            ok(200, "late"),
        ]);
        run(&probe(), &transport);
        assert_eq!(transport.seen.borrow().len(), 1);
    }

    #[test]
    fn each_run_sends_its_own_request() {
        let transport = ScriptedTransport::new(vec![ok(200, "one"), ok(200, "two")]);
        let probe = probe();

        let (_, first) = run(&probe, &transport);
        let (_, second) = run(&probe, &transport);

        assert!(first.ends_with("Response Body: one\n"));
        assert!(second.ends_with("Response Body: two\n"));
        assert_eq!(transport.seen.borrow().len(), 2);
    }

    #[test]
    fn sent_request_is_json_with_two_keys() {
        let transport = ScriptedTransport::new(vec![Err(ProbeError::Transport(
            "unreachable".to_string(),
        ))]);
        run(&probe(), &transport);

        let seen = transport.seen.borrow();
        let req = &seen[0];
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 2);
        assert!(body.get("email").is_some());
        assert!(body.get("password").is_some());
    }
}
