use std::env;
use std::sync::Arc;

use course_core::model::{CompletionBreakdown, Course, CourseId, DashboardStats, UserId};
use course_core::recommendations::next_steps;
use tracing::{debug, warn};

use crate::api::{ApiResponse, CourseApi};
use crate::error::DashboardError;

/// Course ids requested when the stats reply embeds no recent courses.
pub const DEFAULT_COURSE_IDS: [u64; 2] = [1, 2];
pub const DEFAULT_USER_ID: u64 = 1;

/// Which learner and which fallback courses the dashboard asks about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardConfig {
    pub user_id: UserId,
    pub course_ids: Vec<CourseId>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            user_id: UserId::new(DEFAULT_USER_ID),
            course_ids: DEFAULT_COURSE_IDS.into_iter().map(CourseId::new).collect(),
        }
    }
}

impl DashboardConfig {
    /// Defaults, with `LEARN_USER_ID` applied when it parses.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(user_id) = env::var("LEARN_USER_ID")
            .ok()
            .and_then(|value| value.parse::<UserId>().ok())
        {
            config.user_id = user_id;
        }
        config
    }
}

/// Everything the dashboard view renders from one load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub stats: Option<DashboardStats>,
    pub courses: Vec<Course>,
}

impl DashboardData {
    #[must_use]
    pub fn next_steps(&self) -> Vec<&Course> {
        next_steps(&self.courses)
    }

    #[must_use]
    pub fn completion_breakdown(&self) -> CompletionBreakdown {
        CompletionBreakdown::for_stats(self.stats.as_ref())
    }
}

#[derive(Clone)]
pub struct DashboardService {
    api: Arc<dyn CourseApi>,
    config: DashboardConfig,
}

impl DashboardService {
    #[must_use]
    pub fn new(api: Arc<dyn CourseApi>, config: DashboardConfig) -> Self {
        Self { api, config }
    }

    /// Fetch stats, then course details only if the stats carried no
    /// recent courses.
    ///
    /// A non-success stats reply is not an error: it yields empty data.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError` if either request fails or cannot be decoded.
    pub async fn load(&self) -> Result<DashboardData, DashboardError> {
        let user_id = self.config.user_id;
        let reply = self.api.dashboard_stats(user_id).await.map_err(|err| {
            warn!(error = %err, %user_id, "dashboard stats request failed");
            DashboardError::from(err)
        })?;

        let mut stats = match reply {
            ApiResponse::Ok(stats) => stats,
            ApiResponse::Err { message } => {
                debug!(?message, "dashboard stats reply was not a success");
                return Ok(DashboardData::default());
            }
        };

        if !stats.recent_courses.is_empty() {
            let courses = std::mem::take(&mut stats.recent_courses);
            debug!(count = courses.len(), "using recent courses from stats");
            return Ok(DashboardData {
                stats: Some(stats),
                courses,
            });
        }

        let reply = self
            .api
            .course_details(&self.config.course_ids, user_id)
            .await
            .map_err(|err| {
                warn!(error = %err, "course details request failed");
                DashboardError::from(err)
            })?;

        let courses = match reply {
            ApiResponse::Ok(courses) => courses,
            ApiResponse::Err { message } => {
                debug!(?message, "course details reply was not a success");
                Vec::new()
            }
        };

        Ok(DashboardData {
            stats: Some(stats),
            courses,
        })
    }
}
