//! The authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile returned by `GET /user`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct User {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    pub html_url: String,

    /// `User` or `Organization`.
    #[serde(rename = "type")]
    pub account_type: String,

    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,

    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub public_gists: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
