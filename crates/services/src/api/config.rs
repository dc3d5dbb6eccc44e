use std::env;

use url::Url;

use crate::error::ApiError;

pub const DEFAULT_AUTH_BASE_URL: &str = "https://learningwebsitebackend.vercel.app";
pub const DEFAULT_COURSE_BASE_URL: &str = "http://localhost:7005";

/// Base URLs of the auth and course backends.
///
/// The two are separate deployments and are configured independently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    auth_base_url: Url,
    course_base_url: Url,
}

impl ApiConfig {
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if either URL does not parse.
    pub fn new(auth_base_url: &str, course_base_url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            auth_base_url: parse_base(auth_base_url)?,
            course_base_url: parse_base(course_base_url)?,
        })
    }

    /// Read `LEARN_AUTH_URL` and `LEARN_COURSE_URL`, falling back to the
    /// built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidUrl` if a configured URL does not parse.
    pub fn from_env() -> Result<Self, ApiError> {
        let auth = non_empty_var("LEARN_AUTH_URL").unwrap_or_else(|| DEFAULT_AUTH_BASE_URL.into());
        let course =
            non_empty_var("LEARN_COURSE_URL").unwrap_or_else(|| DEFAULT_COURSE_BASE_URL.into());
        Self::new(&auth, &course)
    }

    #[must_use]
    pub fn auth_base_url(&self) -> &Url {
        &self.auth_base_url
    }

    #[must_use]
    pub fn course_base_url(&self) -> &Url {
        &self.course_base_url
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

// A trailing slash keeps `Url::join` from dropping the last path segment.
fn parse_base(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Ok(Url::parse(&with_slash)?)
}

pub(crate) fn endpoint(base: &Url, path: &str) -> Result<Url, ApiError> {
    Ok(base.join(path.trim_start_matches('/'))?)
}
