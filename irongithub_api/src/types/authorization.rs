//! OAuth authorizations created with Basic authentication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Scopes;

/// Numeric identifier for an authorization.
pub type AuthorizationID = u64;

/// Authorization record returned by the `/authorizations` endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Authorization {
    pub id: AuthorizationID,
    pub url: String,
    pub app: AuthorizationApp,

    /// Only populated in the response to the request that created it.
    #[serde(default)]
    pub token: String,
    pub hashed_token: Option<String>,
    pub token_last_eight: Option<String>,

    pub note: Option<String>,
    pub note_url: Option<String>,
    pub fingerprint: Option<String>,

    #[serde(default)]
    pub scopes: Scopes,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The OAuth application an authorization belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AuthorizationApp {
    pub name: String,
    pub url: String,
    pub client_id: String,
}

/// Body for `POST /authorizations`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NewAuthorization {
    pub scopes: Scopes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

impl NewAuthorization {
    pub fn new(scopes: Scopes) -> Self {
        Self {
            scopes,
            ..Default::default()
        }
    }

    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    pub fn with_note_url(mut self, note_url: &str) -> Self {
        self.note_url = Some(note_url.to_string());
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: &str) -> Self {
        self.fingerprint = Some(fingerprint.to_string());
        self
    }
}
