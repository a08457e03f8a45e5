mod error_response;
pub use self::error_response::{FieldError, GitHubErrorResponse};

mod scopes;
pub use self::scopes::{Scope, Scopes};

mod user;
pub use self::user::User;

mod authorization;
pub use self::authorization::{Authorization, AuthorizationApp, AuthorizationID, NewAuthorization};
