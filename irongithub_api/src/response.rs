//! Completed responses and body deserialization.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::types::Scopes;
use crate::{Error, Result};

const OAUTH_SCOPES_HEADER: &str = "x-oauth-scopes";

/// A completed HTTP exchange with its body fully read.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
    body: Option<Vec<u8>>,
}

impl HttpResponse {
    /// An empty or whitespace-only body is stored as no body.
    pub fn new(status: StatusCode, headers: HeaderMap, url: Url, body: Option<Vec<u8>>) -> Self {
        let body = body.filter(|b| !b.iter().all(u8::is_ascii_whitespace));
        Self {
            status,
            headers,
            url,
            body,
        }
    }

    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let url = response.url().clone();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;
        Ok(Self::new(status, headers, url, Some(body.to_vec())))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The body bytes, or `None` when the server sent no content.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Scopes granted to the credential, from the `X-OAuth-Scopes` header.
    pub fn oauth_scopes(&self) -> Option<Scopes> {
        let value = self.headers.get(OAUTH_SCOPES_HEADER)?.to_str().ok()?;
        value.parse().ok()
    }

    /// Parses the body as JSON into `T`. See [`deserialize`].
    pub fn deserialize<T>(&self) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        deserialize(Some(self))
    }
}

/// Parses a response body as JSON into `T`.
///
/// Fails with [`Error::MissingResponse`] when there is no response at all.
/// A response without a body yields `T::default()`.
pub fn deserialize<T>(response: Option<&HttpResponse>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let response = response.ok_or(Error::MissingResponse)?;
    let Some(body) = response.body() else {
        return Ok(T::default());
    };
    serde_json::from_slice(body).map_err(|source| {
        let snippet = truncate_body(body);
        tracing::error!("Failed to parse response: {} | body: {}", source, snippet);
        Error::Deserialization {
            source,
            body: snippet,
        }
    })
}

/// A response that was classified as successful, with the typed result
/// extracted from its body. The untyped form carries `()`.
#[derive(Debug, Clone)]
pub struct ApiResponse<T = ()> {
    http_response: HttpResponse,
    result: T,
}

impl ApiResponse {
    pub(crate) fn new(http_response: HttpResponse) -> Self {
        Self {
            http_response,
            result: (),
        }
    }

    /// Deserializes the successful body into `T`.
    pub fn deserialize_into<T>(self) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Default,
    {
        let result = self.http_response.deserialize::<T>()?;
        Ok(ApiResponse {
            http_response: self.http_response,
            result,
        })
    }
}

impl<T> ApiResponse<T> {
    pub fn http_response(&self) -> &HttpResponse {
        &self.http_response
    }

    pub fn status(&self) -> StatusCode {
        self.http_response.status()
    }

    pub fn result(&self) -> &T {
        &self.result
    }

    pub fn into_result(self) -> T {
        self.result
    }

    pub fn into_parts(self) -> (HttpResponse, T) {
        (self.http_response, self.result)
    }
}

fn truncate_body(body: &[u8]) -> String {
    const MAX: usize = 2000;
    let text = String::from_utf8_lossy(body);
    if text.chars().count() <= MAX {
        text.into_owned()
    } else {
        format!("{}...[truncated]", text.chars().take(MAX).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use serde::Deserialize;

    #[derive(Deserialize, Default, Debug, PartialEq)]
    struct Repo {
        name: String,
        private: bool,
    }

    fn response(status: u16, body: Option<&str>) -> HttpResponse {
        HttpResponse::new(
            StatusCode::from_u16(status).unwrap(),
            HeaderMap::new(),
            Url::parse("https://api.github.com/repos/octocat/hello").unwrap(),
            body.map(|b| b.as_bytes().to_vec()),
        )
    }

    #[test]
    fn missing_response_is_an_argument_error() {
        let result = deserialize::<Repo>(None);
        assert!(matches!(result, Err(Error::MissingResponse)));
    }

    #[test]
    fn absent_body_yields_default() {
        let resp = response(200, None);
        assert_eq!(resp.deserialize::<Repo>().unwrap(), Repo::default());
        assert_eq!(resp.deserialize::<Option<Repo>>().unwrap(), None);
        assert!(resp.deserialize::<Vec<Repo>>().unwrap().is_empty());
    }

    #[test]
    fn empty_and_whitespace_bodies_count_as_absent() {
        assert!(response(204, Some("")).body().is_none());
        assert!(response(200, Some(" \r\n")).body().is_none());
        assert_eq!(response(200, Some("")).deserialize::<Repo>().unwrap(), Repo::default());
    }

    #[test]
    fn parses_json_body() {
        let resp = response(200, Some(r#"{"name": "hello", "private": true}"#));
        let repo: Repo = resp.deserialize().unwrap();
        assert_eq!(
            repo,
            Repo {
                name: "hello".to_string(),
                private: true
            }
        );
    }

    #[test]
    fn malformed_body_is_a_deserialization_error() {
        let resp = response(200, Some("{not valid json}"));
        let err = resp.deserialize::<Repo>().unwrap_err();
        match err {
            Error::Deserialization { body, .. } => assert_eq!(body, "{not valid json}"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn deserialize_into_keeps_http_response() {
        let api = ApiResponse::new(response(201, Some(r#"{"name": "x", "private": false}"#)));
        let typed = api.deserialize_into::<Repo>().unwrap();
        assert_eq!(typed.status(), StatusCode::CREATED);
        assert_eq!(typed.result().name, "x");
        let (http, repo) = typed.into_parts();
        assert_eq!(http.url().path(), "/repos/octocat/hello");
        assert!(!repo.private);
    }

    #[test]
    fn oauth_scopes_header() {
        let mut headers = HeaderMap::new();
        headers.insert(OAUTH_SCOPES_HEADER, HeaderValue::from_static("repo, gist"));
        let resp = HttpResponse::new(
            StatusCode::OK,
            headers,
            Url::parse("https://api.github.com/user").unwrap(),
            None,
        );
        let scopes = resp.oauth_scopes().unwrap();
        assert_eq!(scopes.len(), 2);
        assert!(response(200, None).oauth_scopes().is_none());
    }

    #[test]
    fn truncate_long_body() {
        let long = "é".repeat(2500);
        let snippet = truncate_body(long.as_bytes());
        assert!(snippet.ends_with("...[truncated]"));
        assert_eq!(snippet.chars().count(), 2000 + "...[truncated]".len());
    }
}
