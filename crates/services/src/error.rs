//! Shared error types for the services crate.

use thiserror::Error;

use course_core::model::CredentialsError;
use storage::repository::StorageError;

/// Shown when the auth backend rejects a login without its own message.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
/// Shown when the login request never produced a usable reply.
pub const CONNECTION_FAILED_MESSAGE: &str = "Connection failed. Please try again.";
/// Shown when any dashboard fetch fails.
pub const DASHBOARD_FAILED_MESSAGE: &str = "Failed to load dashboard data";

/// Transport-level failures talking to a backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("response body could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("backend reported success without {0}")]
    MissingField(&'static str),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `SessionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `AuthService::login`.
///
/// `Display` is the text shown under the login form.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] CredentialsError),
    #[error("{}", .message.as_deref().unwrap_or(INVALID_CREDENTIALS_MESSAGE))]
    Rejected { message: Option<String> },
    #[error("{}", CONNECTION_FAILED_MESSAGE)]
    Connection(#[from] ApiError),
    #[error("{}", CONNECTION_FAILED_MESSAGE)]
    Session(#[from] SessionError),
}

impl LoginError {
    /// True when the error was raised before any request was sent.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Errors emitted by `DashboardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DashboardError {
    #[error("{}", DASHBOARD_FAILED_MESSAGE)]
    Api(#[from] ApiError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Session(#[from] SessionError),
}
