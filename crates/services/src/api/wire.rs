//! JSON shapes exchanged with the backends.

use course_core::model::{
    Course, CourseDraft, CourseId, DashboardStats, ProgressSnapshotDraft, UserId,
};
use serde::{Deserialize, Serialize};

const SUCCESS_STATUS: &str = "success";

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginReply {
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorReply {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CourseDetailsRequest<'a> {
    pub course_ids: &'a [CourseId],
    pub user_id: UserId,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatsEnvelope {
    pub status: Option<String>,
    pub data: Option<WireStats>,
    pub message: Option<String>,
}

impl StatsEnvelope {
    pub fn is_success(&self) -> bool {
        is_success(self.status.as_deref())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CourseDetailsEnvelope {
    pub status: Option<String>,
    pub courses: Option<Vec<WireCourse>>,
    pub message: Option<String>,
}

impl CourseDetailsEnvelope {
    pub fn is_success(&self) -> bool {
        is_success(self.status.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireStats {
    pub total_courses: Option<f64>,
    pub total_time_spent: Option<f64>,
    pub average_progress: Option<f64>,
    pub completed_courses: Option<f64>,
    pub in_progress_courses: Option<f64>,
    pub recent_courses: Option<Vec<WireCourse>>,
}

impl From<WireStats> for DashboardStats {
    fn from(wire: WireStats) -> Self {
        Self {
            total_courses: wire.total_courses.map_or(0, whole_count),
            total_time_spent: wire.total_time_spent.unwrap_or(0.0),
            average_progress: wire.average_progress.unwrap_or(0.0),
            completed_courses: wire.completed_courses.map_or(0, whole_count),
            in_progress_courses: wire.in_progress_courses.map_or(0, whole_count),
            recent_courses: normalize_courses(wire.recent_courses.unwrap_or_default()),
        }
    }
}

/// A course in whichever shape the backend chose to send.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireCourse {
    #[serde(rename = "_id")]
    pub record_id: Option<String>,
    #[serde(rename = "courseId")]
    pub course_id: Option<CourseId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub total_lessons: Option<f64>,
    #[serde(rename = "studentProgress")]
    pub student_progress: Option<WireProgress>,
    pub completed_lessons: Option<f64>,
    pub progress: Option<f64>,
    pub time_spent: Option<f64>,
    pub time_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireProgress {
    pub completed_lessons: Option<f64>,
    pub total_lessons: Option<f64>,
    pub time_spent: Option<f64>,
    pub progress: Option<f64>,
    pub last_accessed: Option<String>,
}

impl From<WireCourse> for CourseDraft {
    fn from(wire: WireCourse) -> Self {
        Self {
            record_id: wire.record_id,
            course_id: wire.course_id,
            title: wire.title,
            description: wire.description,
            thumbnail: wire.thumbnail,
            total_lessons: wire.total_lessons.map(lesson_count),
            snapshot: wire.student_progress.map(|progress| ProgressSnapshotDraft {
                completed_lessons: progress.completed_lessons.map(lesson_count),
                total_lessons: progress.total_lessons.map(lesson_count),
                time_spent: progress.time_spent,
                progress: progress.progress,
                last_accessed: progress.last_accessed,
            }),
            legacy_completed_lessons: wire.completed_lessons.map(lesson_count),
            legacy_progress: wire.progress,
            legacy_time_spent: wire.time_spent,
            time_note: wire.time_agent,
        }
    }
}

pub(crate) fn normalize_courses(courses: Vec<WireCourse>) -> Vec<Course> {
    courses
        .into_iter()
        .map(|course| CourseDraft::from(course).normalize())
        .collect()
}

pub(crate) fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|text| !text.trim().is_empty())
}

// Counts arrive as plain JSON numbers, often `10.0`. Casts saturate and NaN
// becomes 0.
fn whole_count(value: f64) -> i64 {
    value.round() as i64
}

fn lesson_count(value: f64) -> u32 {
    value.round() as u32
}

fn is_success(status: Option<&str>) -> bool {
    status == Some(SUCCESS_STATUS)
}
