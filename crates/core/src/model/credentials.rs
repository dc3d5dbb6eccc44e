use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Minimum number of characters accepted for a password.
pub const MIN_PASSWORD_LEN: usize = 6;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CredentialsError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// Raw form input, not yet checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialsDraft {
    pub email: String,
    pub password: String,
}

impl CredentialsDraft {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Check the draft before anything is sent over the network.
    ///
    /// The email is checked first, so a draft with both problems reports
    /// `InvalidEmail`.
    ///
    /// # Errors
    ///
    /// Returns `CredentialsError` when the email does not look like
    /// `local@domain.tld` or the password is shorter than [`MIN_PASSWORD_LEN`].
    pub fn validate(self) -> Result<Credentials, CredentialsError> {
        if !is_valid_email(&self.email) {
            return Err(CredentialsError::InvalidEmail);
        }
        // Measured in UTF-16 code units, the unit browsers report as length.
        if self.password.encode_utf16().count() < MIN_PASSWORD_LEN {
            return Err(CredentialsError::PasswordTooShort);
        }

        Ok(Credentials {
            email: self.email,
            password: self.password,
        })
    }
}

/// Credentials that passed client-side validation.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keep the password out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE
        .get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
        .is_match(email)
}
