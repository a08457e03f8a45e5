//! Basic-Auth credentials.

use std::fmt;

use base64::{engine::general_purpose, Engine};

/// Username and password sent as HTTP Basic authentication.
///
/// No validation is applied: empty usernames or passwords are encoded as-is.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Value for the `Authorization` header: `Basic base64(username:password)`.
    pub fn basic_auth_header(&self) -> String {
        let encoded =
            general_purpose::STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {}", encoded)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
