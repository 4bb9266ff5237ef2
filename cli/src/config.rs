use std::time::Duration;

use clap::Parser;
use probe_core::{Credentials, LoginClient, LoginProbe, DEFAULT_LOGIN_URL};

/// Send one login request and print what the endpoint answers.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Login endpoint to probe
    #[arg(long, env = "LOGIN_PROBE_URL", default_value = DEFAULT_LOGIN_URL)]
    pub url: String,

    /// Account identifier sent as `email`
    #[arg(long, env = "LOGIN_PROBE_EMAIL")]
    pub email: String,

    /// Password sent as `password`. Prefer the environment variable over the flag
    #[arg(long, env = "LOGIN_PROBE_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Give up after this many seconds. Without it the request may wait forever
    #[arg(long, env = "LOGIN_PROBE_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    pub fn probe(&self) -> LoginProbe {
        LoginProbe::new(
            LoginClient::new(&self.url),
            Credentials::new(self.email.as_str(), self.password.as_str()),
        )
    }
}
