use async_trait::async_trait;
use course_core::model::{Course, CourseId, Credentials, DashboardStats, SessionToken, UserId};
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::config::{ApiConfig, endpoint};
use super::wire::{
    CourseDetailsEnvelope, CourseDetailsRequest, ErrorReply, LoginReply, LoginRequest,
    StatsEnvelope, non_empty, normalize_courses,
};
use super::{
    ApiResponse, AuthApi, COURSE_DETAILS_PATH, CourseApi, DASHBOARD_STATS_PATH, LOGIN_PATH,
};
use crate::error::ApiError;

/// `reqwest`-backed client for the auth backend.
#[derive(Clone)]
pub struct HttpAuthApi {
    client: Client,
    base_url: Url,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            base_url: config.auth_base_url().clone(),
        }
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<ApiResponse<SessionToken>, ApiError> {
        let url = endpoint(&self.base_url, LOGIN_PATH)?;
        debug!(%url, email = credentials.email(), "submitting login");

        let response = self
            .client
            .post(url)
            .json(&LoginRequest {
                email: credentials.email(),
                password: credentials.password(),
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, "login reply received");

        if status.is_success() {
            let reply: LoginReply = serde_json::from_str(&body)?;
            return Ok(match reply.token {
                Some(token) => ApiResponse::Ok(SessionToken::new(token)),
                None => ApiResponse::Err { message: None },
            });
        }

        let reply: ErrorReply = serde_json::from_str(&body)?;
        Ok(ApiResponse::Err {
            message: non_empty(reply.message),
        })
    }
}

/// `reqwest`-backed client for the course backend.
#[derive(Clone)]
pub struct HttpCourseApi {
    client: Client,
    base_url: Url,
}

impl HttpCourseApi {
    #[must_use]
    pub fn new(client: Client, config: &ApiConfig) -> Self {
        Self {
            client,
            base_url: config.course_base_url().clone(),
        }
    }
}

#[async_trait]
impl CourseApi for HttpCourseApi {
    async fn dashboard_stats(
        &self,
        user_id: UserId,
    ) -> Result<ApiResponse<DashboardStats>, ApiError> {
        let mut url = endpoint(&self.base_url, DASHBOARD_STATS_PATH)?;
        url.query_pairs_mut()
            .append_pair("userId", &user_id.to_string());
        debug!(%url, "fetching dashboard stats");

        // The body decides success; the HTTP status is not consulted.
        let body = self.client.get(url).send().await?.text().await?;
        let envelope: StatsEnvelope = serde_json::from_str(&body)?;

        if !envelope.is_success() {
            return Ok(ApiResponse::Err {
                message: non_empty(envelope.message),
            });
        }
        let data = envelope.data.ok_or(ApiError::MissingField("data"))?;
        Ok(ApiResponse::Ok(DashboardStats::from(data)))
    }

    async fn course_details(
        &self,
        course_ids: &[CourseId],
        user_id: UserId,
    ) -> Result<ApiResponse<Vec<Course>>, ApiError> {
        let url = endpoint(&self.base_url, COURSE_DETAILS_PATH)?;
        debug!(%url, count = course_ids.len(), "fetching course details");

        let body = self
            .client
            .post(url)
            .json(&CourseDetailsRequest {
                course_ids,
                user_id,
            })
            .send()
            .await?
            .text()
            .await?;
        let envelope: CourseDetailsEnvelope = serde_json::from_str(&body)?;

        if !envelope.is_success() {
            return Ok(ApiResponse::Err {
                message: non_empty(envelope.message),
            });
        }
        Ok(ApiResponse::Ok(normalize_courses(
            envelope.courses.unwrap_or_default(),
        )))
    }
}
