//! Error types for the API client.

use std::fmt;

use reqwest::header::InvalidHeaderValue;
use reqwest::StatusCode;

use crate::response::HttpResponse;
use crate::types::GitHubErrorResponse;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// No HTTP response was obtained (connect, DNS, timeout, or body read failure).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error(transparent)]
    Api(Box<ApiError>),
    /// The deserializer was handed no response.
    #[error("No response to deserialize")]
    MissingResponse,
    /// A request body could not be encoded as JSON.
    #[error("Failed to serialize request body: {0}")]
    Serialization(#[source] serde_json::Error),
    /// A successful response body did not match the expected type. `body`
    /// holds a truncated copy of what was received.
    #[error("Failed to parse response body: {source} | body: {body}")]
    Deserialization {
        #[source]
        source: serde_json::Error,
        body: String,
    },
    /// The base URL and path did not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// A header value contained bytes HTTP does not allow.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The API failure, if this error came from a non-success response.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(api) => Some(&**api),
            _ => None,
        }
    }

    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api(api) => Some(api.status()),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }
}

impl From<ApiError> for Error {
    fn from(value: ApiError) -> Self {
        Error::Api(Box::new(value))
    }
}

/// Coarse classification of an API failure by status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 401: missing or bad credentials.
    Unauthorized,
    /// 403: authenticated but not allowed.
    Forbidden,
    NotFound,
    /// 422: the request body failed validation.
    Validation,
    /// Any other 4xx.
    Client,
    /// 5xx.
    Server,
    /// Anything that is neither success nor 4xx/5xx, e.g. an unfollowed 3xx.
    Unexpected,
}

impl ApiErrorKind {
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiErrorKind::Unauthorized,
            StatusCode::FORBIDDEN => ApiErrorKind::Forbidden,
            StatusCode::NOT_FOUND => ApiErrorKind::NotFound,
            StatusCode::UNPROCESSABLE_ENTITY => ApiErrorKind::Validation,
            s if s.is_client_error() => ApiErrorKind::Client,
            s if s.is_server_error() => ApiErrorKind::Server,
            _ => ApiErrorKind::Unexpected,
        }
    }
}

/// A non-success response together with its parsed error payload.
#[derive(Debug)]
pub struct ApiError {
    kind: ApiErrorKind,
    response: HttpResponse,
    payload: GitHubErrorResponse,
}

impl ApiError {
    /// Builds the typed failure for a response the server rejected.
    pub fn from_response(response: HttpResponse, payload: GitHubErrorResponse) -> Self {
        Self {
            kind: ApiErrorKind::from_status(response.status()),
            response,
            payload,
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn status(&self) -> StatusCode {
        self.response.status()
    }

    /// The raw response the server sent.
    pub fn response(&self) -> &HttpResponse {
        &self.response
    }

    /// The error body, as parsed. Fields are empty when the body was missing or unreadable.
    pub fn payload(&self) -> &GitHubErrorResponse {
        &self.payload
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GitHub API returned {}", self.status())?;
        if !self.payload.message.is_empty() {
            write!(f, ": {}", self.payload.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use url::Url;

    fn response(status: u16) -> HttpResponse {
        HttpResponse::new(
            StatusCode::from_u16(status).unwrap(),
            HeaderMap::new(),
            Url::parse("https://api.github.com/user").unwrap(),
            None,
        )
    }

    #[test]
    fn kind_from_status() {
        let cases = [
            (401, ApiErrorKind::Unauthorized),
            (403, ApiErrorKind::Forbidden),
            (404, ApiErrorKind::NotFound),
            (422, ApiErrorKind::Validation),
            (409, ApiErrorKind::Client),
            (500, ApiErrorKind::Server),
            (503, ApiErrorKind::Server),
            (304, ApiErrorKind::Unexpected),
        ];
        for (status, kind) in cases {
            assert_eq!(
                ApiErrorKind::from_status(StatusCode::from_u16(status).unwrap()),
                kind,
                "status {}",
                status
            );
        }
    }

    #[test]
    fn from_response_keeps_response_and_payload() {
        let payload = GitHubErrorResponse {
            message: "Not Found".to_string(),
            documentation_url: Some("https://docs.github.com/rest".to_string()),
            errors: vec![],
        };
        let err = ApiError::from_response(response(404), payload.clone());
        assert_eq!(err.kind(), ApiErrorKind::NotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.payload(), &payload);
        assert_eq!(err.response().url().path(), "/user");
    }

    #[test]
    fn api_error_display() {
        let payload = GitHubErrorResponse {
            message: "Bad credentials".to_string(),
            ..Default::default()
        };
        let err = ApiError::from_response(response(401), payload);
        assert_eq!(
            err.to_string(),
            "GitHub API returned 401 Unauthorized: Bad credentials"
        );

        let err = ApiError::from_response(response(500), GitHubErrorResponse::default());
        assert_eq!(err.to_string(), "GitHub API returned 500 Internal Server Error");
    }

    #[test]
    fn error_status_and_api_accessors() {
        let err: Error = ApiError::from_response(response(403), GitHubErrorResponse::default()).into();
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
        assert_eq!(err.as_api_error().map(ApiError::kind), Some(ApiErrorKind::Forbidden));

        let err = Error::MissingResponse;
        assert!(err.status().is_none());
        assert!(err.as_api_error().is_none());
    }
}
