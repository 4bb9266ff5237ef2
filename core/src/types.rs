//! Login DTOs.
//!
//! # Design
//! `Credentials` is the only place the password lives. Its `Debug` output is
//! redacted so it can sit inside logged structs. `LoginPayload` borrows from
//! it for serialization and carries exactly the two wire fields.

use std::fmt;

use serde::Serialize;

/// Login identity supplied by the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn payload(&self) -> LoginPayload<'_> {
        LoginPayload {
            email: &self.email,
            password: &self.password,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// JSON body of a login request: `{"email": ..., "password": ...}`.
#[derive(Debug, Serialize)]
pub struct LoginPayload<'a> {
    pub email: &'a str,
    pub password: &'a str,
}
