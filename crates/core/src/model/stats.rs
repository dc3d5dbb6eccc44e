use crate::model::Course;

/// Aggregate counters reported by the course backend.
///
/// The counters are taken as-is. Nothing ties them to `recent_courses`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardStats {
    pub total_courses: i64,
    pub total_time_spent: f64,
    pub average_progress: f64,
    pub completed_courses: i64,
    pub in_progress_courses: i64,
    pub recent_courses: Vec<Course>,
}

impl DashboardStats {
    #[must_use]
    pub fn completion_breakdown(&self) -> CompletionBreakdown {
        CompletionBreakdown {
            completed: self.completed_courses,
            in_progress: self.in_progress_courses,
            remaining: self.total_courses - self.completed_courses - self.in_progress_courses,
        }
    }
}

/// Completed / in-progress / not-started split used by the donut chart.
///
/// `remaining` is plain subtraction and goes negative when the backend's
/// counters disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompletionBreakdown {
    pub completed: i64,
    pub in_progress: i64,
    pub remaining: i64,
}

impl CompletionBreakdown {
    #[must_use]
    pub fn series(&self) -> [i64; 3] {
        [self.completed, self.in_progress, self.remaining]
    }

    #[must_use]
    pub fn for_stats(stats: Option<&DashboardStats>) -> Self {
        stats
            .map(DashboardStats::completion_breakdown)
            .unwrap_or_default()
    }
}
