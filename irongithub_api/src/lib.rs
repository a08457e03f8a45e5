mod client;
mod credential;
mod errors;
mod request;
mod response;
pub mod types;
mod user_agent;
pub use self::client::Client;
pub use self::credential::Credential;
pub use self::errors::{ApiError, ApiErrorKind, Error, Result};
pub use self::request::{ApiRequest, RequestStream};
pub use self::response::{deserialize, ApiResponse, HttpResponse};
pub use reqwest::{Method, StatusCode};
