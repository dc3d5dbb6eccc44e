use std::fmt;

/// Storage key holding the logged-in marker.
pub const LOGGED_IN_KEY: &str = "loggedIn";
/// Storage key holding the bearer token returned by the auth backend.
pub const TOKEN_KEY: &str = "token";
/// Value written under [`LOGGED_IN_KEY`] after a successful login.
pub const LOGGED_IN_VALUE: &str = "true";

/// Opaque bearer token. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// Client-side login state: the logged-in flag plus the token.
///
/// There is no expiry. A session lives until it is cleared by logout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    token: SessionToken,
}

impl Session {
    #[must_use]
    pub fn new(token: SessionToken) -> Self {
        Self { token }
    }

    /// Rebuild a session from the two persisted values.
    ///
    /// Only the flag decides whether a session exists. A missing token with
    /// the flag set yields an empty token, which is what a reader of the raw
    /// store would see too.
    #[must_use]
    pub fn from_persisted(logged_in: Option<&str>, token: Option<String>) -> Option<Self> {
        if logged_in != Some(LOGGED_IN_VALUE) {
            return None;
        }
        Some(Self::new(SessionToken::new(token.unwrap_or_default())))
    }

    #[must_use]
    pub fn token(&self) -> &SessionToken {
        &self.token
    }
}
