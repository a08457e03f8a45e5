//! HTTP client for the GitHub REST API.

use std::time::Duration;

use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Method;
use url::Url;

use crate::{
    types::{Authorization, AuthorizationID, NewAuthorization, User},
    user_agent::get_user_agent,
    ApiRequest, ApiResponse, Credential, Error, Result,
};

/// Request timeout for GitHub API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// HTTP client for the GitHub REST API.
///
/// Cheap to clone. Every request it creates carries the crate's user agent,
/// the GitHub JSON media type, and, when a credential is set, Basic auth.
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://api.github.com`.
    base_api_url: String,
    credential: Option<Credential>,
}

impl Client {
    /// Creates a new client pointing at the public GitHub API.
    pub fn new() -> Result<Self> {
        Self::with_base_url("https://api.github.com")
    }

    /// Creates a new client with a custom base URL, e.g. a GitHub Enterprise
    /// host or a wiremock server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
            credential: None,
        })
    }

    /// Authenticates every subsequent request with `credential`.
    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    /// Builds a request for `path` relative to the base URL.
    pub fn request(&self, method: Method, path: &str) -> Result<ApiRequest> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(format!("{}{}: {}", &self.base_api_url, path, e))
        })?;
        let mut request = ApiRequest::new(self.http.clone(), method, url);
        request
            .headers_mut()
            .insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        if let Some(credential) = &self.credential {
            request.add_authorization_credential(credential)?;
        }
        Ok(request)
    }

    /// Fetches the user the credential belongs to.
    pub async fn get_authenticated_user(&self) -> Result<ApiResponse<User>> {
        self.request(Method::GET, "/user")?.complete_as().await
    }

    /// Lists the OAuth authorizations of the authenticated user.
    pub async fn list_authorizations(&self) -> Result<ApiResponse<Vec<Authorization>>> {
        self.request(Method::GET, "/authorizations")?
            .complete_as()
            .await
    }

    /// Fetches a single authorization by ID.
    pub async fn get_authorization(
        &self,
        id: AuthorizationID,
    ) -> Result<ApiResponse<Authorization>> {
        self.request(Method::GET, format!("/authorizations/{}", id).as_str())?
            .complete_as()
            .await
    }

    /// Creates an authorization. The token is only readable in this response.
    pub async fn create_authorization(
        &self,
        authorization: &NewAuthorization,
    ) -> Result<ApiResponse<Authorization>> {
        let mut request = self.request(Method::POST, "/authorizations")?;
        request.post_as_json(authorization)?;
        request.complete_as().await
    }

    /// Revokes an authorization. GitHub answers 204 No Content.
    pub async fn delete_authorization(&self, id: AuthorizationID) -> Result<ApiResponse> {
        self.request(Method::DELETE, format!("/authorizations/{}", id).as_str())?
            .delete()
            .await
    }
}
