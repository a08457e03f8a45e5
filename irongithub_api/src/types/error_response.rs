//! The JSON body GitHub sends with a non-success status.

use serde::{Deserialize, Serialize};

/// Error payload, e.g.
/// `{"message": "Validation Failed", "documentation_url": "...", "errors": [...]}`.
///
/// Every field defaults, so an empty or partial body still parses.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GitHubErrorResponse {
    pub message: String,
    pub documentation_url: Option<String>,
    pub errors: Vec<FieldError>,
}

/// One field-level problem reported alongside a 422.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FieldError {
    pub resource: String,
    pub field: String,
    /// `missing`, `missing_field`, `invalid`, `already_exists`, `unprocessable` or `custom`.
    pub code: String,
    pub message: Option<String>,
}
