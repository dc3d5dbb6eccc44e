use std::sync::Arc;

use course_core::model::{LOGGED_IN_KEY, LOGGED_IN_VALUE, Session, TOKEN_KEY};
use storage::repository::KeyValueRepository;
use tracing::{info, warn};

use crate::error::SessionError;

/// Owns the two persisted session keys.
///
/// Nothing else reads or writes `loggedIn` / `token` directly.
#[derive(Clone)]
pub struct SessionService {
    kv: Arc<dyn KeyValueRepository>,
}

impl SessionService {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueRepository>) -> Self {
        Self { kv }
    }

    /// Read the persisted session, if the logged-in flag is set.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` on storage failures.
    pub async fn hydrate(&self) -> Result<Option<Session>, SessionError> {
        let logged_in = self.kv.get(LOGGED_IN_KEY).await?;
        let token = self.kv.get(TOKEN_KEY).await?;
        Ok(Session::from_persisted(logged_in.as_deref(), token))
    }

    /// Persist the token, then the flag.
    ///
    /// The flag is what `hydrate` trusts, so it is written last and removed
    /// again if either write fails.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` on storage failures.
    pub async fn store(&self, session: &Session) -> Result<(), SessionError> {
        if let Err(err) = self.write_keys(session).await {
            if let Err(cleanup) = self.kv.remove(LOGGED_IN_KEY).await {
                warn!(error = %cleanup, "could not roll back logged-in flag");
            }
            return Err(err);
        }
        info!("session stored");
        Ok(())
    }

    async fn write_keys(&self, session: &Session) -> Result<(), SessionError> {
        self.kv.set(TOKEN_KEY, session.token().as_str()).await?;
        self.kv.set(LOGGED_IN_KEY, LOGGED_IN_VALUE).await?;
        Ok(())
    }

    /// Log out: remove both keys.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` on storage failures.
    pub async fn clear(&self) -> Result<(), SessionError> {
        self.kv.remove(LOGGED_IN_KEY).await?;
        self.kv.remove(TOKEN_KEY).await?;
        info!("session cleared");
        Ok(())
    }
}
