//! Typed boundary to the two HTTP backends.
//!
//! Everything above this module sees `ApiResponse` and canonical domain
//! types; the loose JSON shapes stay in `wire`.

mod config;
mod http;
mod wire;

use async_trait::async_trait;
use course_core::model::{Course, CourseId, Credentials, DashboardStats, SessionToken, UserId};

use crate::error::ApiError;

pub use config::{ApiConfig, DEFAULT_AUTH_BASE_URL, DEFAULT_COURSE_BASE_URL};
pub use http::{HttpAuthApi, HttpCourseApi};

pub const LOGIN_PATH: &str = "api/login";
pub const DASHBOARD_STATS_PATH: &str = "course/dashboard/stats";
pub const COURSE_DETAILS_PATH: &str = "course/courses/details";

/// Outcome of a request that reached the backend and was understood.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse<T> {
    Ok(T),
    Err { message: Option<String> },
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    #[must_use]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err { .. } => None,
        }
    }
}

/// Login endpoint of the auth backend.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Submit credentials.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the reply is unreadable.
    /// A rejected login is `Ok(ApiResponse::Err { .. })`.
    async fn login(&self, credentials: &Credentials) -> Result<ApiResponse<SessionToken>, ApiError>;
}

/// Stats and course-detail endpoints of the course backend.
#[async_trait]
pub trait CourseApi: Send + Sync {
    /// Fetch aggregate dashboard counters for a learner.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the reply is unreadable.
    async fn dashboard_stats(
        &self,
        user_id: UserId,
    ) -> Result<ApiResponse<DashboardStats>, ApiError>;

    /// Fetch details for specific courses.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the request fails or the reply is unreadable.
    async fn course_details(
        &self,
        course_ids: &[CourseId],
        user_id: UserId,
    ) -> Result<ApiResponse<Vec<Course>>, ApiError>;
}
