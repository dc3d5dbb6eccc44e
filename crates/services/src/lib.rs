#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod auth_service;
pub mod dashboard_service;
pub mod error;
pub mod session_service;

pub use course_core::Clock;

pub use api::{ApiConfig, ApiResponse, AuthApi, CourseApi, HttpAuthApi, HttpCourseApi};
pub use app_services::AppServices;
pub use auth_service::AuthService;
pub use dashboard_service::{DashboardConfig, DashboardData, DashboardService};
pub use error::{
    ApiError, AppServicesError, CONNECTION_FAILED_MESSAGE, DASHBOARD_FAILED_MESSAGE, DashboardError,
    INVALID_CREDENTIALS_MESSAGE, LoginError, SessionError,
};
pub use session_service::SessionService;
