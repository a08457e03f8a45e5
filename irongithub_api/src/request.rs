//! A single outgoing API request and its completion pipeline.

use std::io;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::response::{ApiResponse, HttpResponse};
use crate::types::GitHubErrorResponse;
use crate::{ApiError, Credential, Error, Result};

const APPLICATION_JSON: &str = "application/json";

/// An outgoing request. Consumed by [`ApiRequest::complete`], so each request
/// is sent at most once.
#[derive(Debug)]
pub struct ApiRequest {
    client: reqwest::Client,
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(client: reqwest::Client, method: Method, url: Url) -> Self {
        Self {
            client,
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Sets `Authorization: Basic base64(username:password)`.
    pub fn add_authorization_credential(&mut self, credential: &Credential) -> Result<()> {
        let value = HeaderValue::try_from(credential.basic_auth_header())?;
        self.headers.insert(AUTHORIZATION, value);
        Ok(())
    }

    /// Writable request body. Bytes written here are sent when the request completes.
    pub fn request_stream(&mut self) -> RequestStream<'_> {
        RequestStream {
            buf: self.body.get_or_insert_with(Vec::new),
        }
    }

    /// Turns this into a POST carrying `body` serialized as JSON.
    ///
    /// The request is left untouched when `body` fails to serialize.
    pub fn post_as_json<B>(&mut self, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let json = serde_json::to_vec(body).map_err(|e| {
            tracing::error!("Failed to serialize request body: {}", e);
            Error::Serialization(e)
        })?;
        self.method = Method::POST;
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        self.body = Some(json);
        Ok(())
    }

    /// Sends the request and reads the full response, whatever its status.
    ///
    /// Only transport faults are errors here; classification happens in
    /// [`ApiRequest::complete`].
    pub(crate) async fn get_response(self) -> Result<HttpResponse> {
        let mut builder = self
            .client
            .request(self.method.clone(), self.url.clone())
            .headers(self.headers);
        if let Some(body) = self.body {
            builder = builder.body(body);
        }
        tracing::debug!("{} {}", self.method, self.url);
        let response = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send {} {}: {}", self.method, self.url, e);
            Error::Transport(e)
        })?;
        HttpResponse::read(response).await
    }

    /// Sends the request and classifies the outcome.
    ///
    /// A 2xx response becomes an [`ApiResponse`]. Any other status has its body
    /// parsed as a [`GitHubErrorResponse`] and is returned as [`Error::Api`].
    /// Transport faults are returned unchanged as [`Error::Transport`].
    pub async fn complete(self) -> Result<ApiResponse> {
        let response = self.get_response().await?;
        if response.is_success() {
            tracing::debug!("{} from {}", response.status(), response.url());
            return Ok(ApiResponse::new(response));
        }

        let payload: GitHubErrorResponse = match response.body() {
            None => GitHubErrorResponse::default(),
            Some(body) => serde_json::from_slice(body).unwrap_or_else(|e| {
                tracing::warn!("Unreadable error body from {}: {}", response.url(), e);
                GitHubErrorResponse::default()
            }),
        };
        let error = ApiError::from_response(response, payload);
        tracing::warn!("{} ({})", error, error.response().url());
        Err(error.into())
    }

    /// [`ApiRequest::complete`], then deserializes the successful body into `T`.
    pub async fn complete_as<T>(self) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned + Default,
    {
        self.complete().await?.deserialize_into::<T>()
    }

    /// Sends this request as a DELETE.
    pub async fn delete(mut self) -> Result<ApiResponse> {
        self.method = Method::DELETE;
        self.complete().await
    }
}

/// Write half of an [`ApiRequest`]'s body.
pub struct RequestStream<'a> {
    buf: &'a mut Vec<u8>,
}

impl io::Write for RequestStream<'_> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
