use std::sync::Arc;

use course_core::model::Session;
use reqwest::Client;
use storage::repository::Storage;

use crate::api::{ApiConfig, AuthApi, CourseApi, HttpAuthApi, HttpCourseApi};
use crate::auth_service::AuthService;
use crate::dashboard_service::{DashboardConfig, DashboardService};
use crate::error::AppServicesError;
use crate::session_service::SessionService;

/// Assembles app-facing services and hydrates the persisted session once.
#[derive(Clone)]
pub struct AppServices {
    initial_session: Option<Session>,
    auth: Arc<AuthService>,
    dashboard: Arc<DashboardService>,
}

impl AppServices {
    /// Build services over HTTP backends and the given storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the persisted session cannot be read.
    pub async fn new(
        storage: &Storage,
        api: &ApiConfig,
        dashboard: DashboardConfig,
    ) -> Result<Self, AppServicesError> {
        let client = Client::new();
        let auth_api: Arc<dyn AuthApi> = Arc::new(HttpAuthApi::new(client.clone(), api));
        let course_api: Arc<dyn CourseApi> = Arc::new(HttpCourseApi::new(client, api));
        Self::with_apis(storage, auth_api, course_api, dashboard).await
    }

    /// Build services over caller-supplied API implementations.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the persisted session cannot be read.
    pub async fn with_apis(
        storage: &Storage,
        auth_api: Arc<dyn AuthApi>,
        course_api: Arc<dyn CourseApi>,
        dashboard: DashboardConfig,
    ) -> Result<Self, AppServicesError> {
        let sessions = Arc::new(SessionService::new(Arc::clone(&storage.kv)));
        let initial_session = sessions.hydrate().await?;
        let auth = Arc::new(AuthService::new(auth_api, sessions));
        let dashboard = Arc::new(DashboardService::new(course_api, dashboard));

        Ok(Self {
            initial_session,
            auth,
            dashboard,
        })
    }

    /// Session read from storage when the services were built.
    #[must_use]
    pub fn initial_session(&self) -> Option<Session> {
        self.initial_session.clone()
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }
}
