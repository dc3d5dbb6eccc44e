//! "Next steps" selection for the dashboard.

use crate::model::Course;

/// Shown instead of an empty recommendation list.
pub const ALL_COMPLETE_MESSAGE: &str = "All courses completed! Explore new courses.";

/// Courses still worth continuing, in the order they were fetched.
#[must_use]
pub fn next_steps(courses: &[Course]) -> Vec<&Course> {
    courses.iter().filter(|course| !course.is_finished()).collect()
}
