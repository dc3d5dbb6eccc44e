use std::sync::Arc;

use course_core::model::{CredentialsDraft, Session};
use tracing::{info, warn};

use crate::api::{ApiResponse, AuthApi};
use crate::error::LoginError;
use crate::session_service::SessionService;

/// Validates credentials, calls the auth backend, and persists the session.
#[derive(Clone)]
pub struct AuthService {
    api: Arc<dyn AuthApi>,
    sessions: Arc<SessionService>,
}

impl AuthService {
    #[must_use]
    pub fn new(api: Arc<dyn AuthApi>, sessions: Arc<SessionService>) -> Self {
        Self { api, sessions }
    }

    /// Sign in with the given form input.
    ///
    /// Invalid input fails before any request is made. On success the
    /// session is already persisted when this returns.
    ///
    /// # Errors
    ///
    /// Returns `LoginError` for invalid input, a rejected login, a transport
    /// failure, or a storage failure while persisting the session.
    pub async fn login(&self, draft: CredentialsDraft) -> Result<Session, LoginError> {
        let credentials = draft.validate()?;

        let reply = self.api.login(&credentials).await.map_err(|err| {
            warn!(error = %err, "login request failed");
            LoginError::from(err)
        })?;

        match reply {
            ApiResponse::Ok(token) => {
                let session = Session::new(token);
                self.sessions.store(&session).await?;
                info!(email = credentials.email(), "login succeeded");
                Ok(session)
            }
            ApiResponse::Err { message } => {
                warn!(email = credentials.email(), "login rejected");
                Err(LoginError::Rejected { message })
            }
        }
    }

    /// Forget the persisted session.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::Session` if storage cannot be written.
    pub async fn logout(&self) -> Result<(), LoginError> {
        self.sessions.clear().await?;
        Ok(())
    }
}
