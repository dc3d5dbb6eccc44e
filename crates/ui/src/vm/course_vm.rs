use chrono::{DateTime, Utc};
use course_core::model::Course;
use course_core::time::days_ago_label;

use crate::vm::format::format_number;

#[derive(Clone, Debug, PartialEq)]
pub struct CourseCardVm {
    pub key: String,
    pub title: String,
    pub description: String,
    pub thumbnail: Option<String>,
    pub lessons_label: String,
    /// Bar fill in percent, clamped to `0..=100`.
    pub bar_percent: f64,
    pub percent_label: String,
    pub time_label: String,
    pub time_note: Option<String>,
    pub last_accessed_label: Option<String>,
}

#[must_use]
pub fn course_key(course: &Course, index: usize) -> String {
    if !course.record_id().is_empty() {
        return course.record_id().to_string();
    }
    course
        .course_id()
        .map_or_else(|| format!("course-{index}"), |id| format!("course-id-{id}"))
}

#[must_use]
pub fn map_course_card(course: &Course, index: usize, now: DateTime<Utc>) -> CourseCardVm {
    CourseCardVm {
        key: course_key(course, index),
        title: course.title().to_string(),
        description: course.description().to_string(),
        thumbnail: course.thumbnail().map(str::to_owned),
        lessons_label: format!(
            "{}/{} lessons",
            course.completed_lessons(),
            course.total_lessons()
        ),
        bar_percent: course.progress().clamp(0.0, 100.0),
        percent_label: format!("{}% Complete", format_number(course.progress())),
        time_label: format!("⏱ {}h", format_number(course.time_spent())),
        time_note: course.time_note().map(str::to_owned),
        last_accessed_label: course
            .last_accessed()
            .map(|at| format!("Last accessed {}", days_ago_label(at, now))),
    }
}

#[must_use]
pub fn map_course_cards(courses: &[Course], now: DateTime<Utc>) -> Vec<CourseCardVm> {
    courses
        .iter()
        .enumerate()
        .map(|(index, course)| map_course_card(course, index, now))
        .collect()
}
