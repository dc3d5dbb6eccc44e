use chrono::{DateTime, Utc};

use crate::model::CourseId;

/// Progress value at which a course counts as finished.
pub const COMPLETE_PROGRESS: f64 = 100.0;

/// Nested per-learner progress block, as the backend sends it.
///
/// Every field is optional because the backend omits them freely.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProgressSnapshotDraft {
    pub completed_lessons: Option<u32>,
    pub total_lessons: Option<u32>,
    pub time_spent: Option<f64>,
    pub progress: Option<f64>,
    pub last_accessed: Option<String>,
}

/// A course in either of the two shapes the backend produces.
///
/// Newer replies carry `snapshot`; older ones carry the flattened
/// `legacy_*` fields. [`CourseDraft::normalize`] folds both into [`Course`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CourseDraft {
    pub record_id: Option<String>,
    pub course_id: Option<CourseId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub total_lessons: Option<u32>,
    pub snapshot: Option<ProgressSnapshotDraft>,
    pub legacy_completed_lessons: Option<u32>,
    pub legacy_progress: Option<f64>,
    pub legacy_time_spent: Option<f64>,
    pub time_note: Option<String>,
}

impl CourseDraft {
    /// Resolve every display field once.
    ///
    /// Each value comes from the snapshot when it is present and non-zero,
    /// otherwise from the legacy field, otherwise zero.
    #[must_use]
    pub fn normalize(self) -> Course {
        let snapshot = self.snapshot.unwrap_or_default();

        let completed_lessons =
            first_nonzero_u32(snapshot.completed_lessons, self.legacy_completed_lessons);
        let progress = first_nonzero_f64(snapshot.progress, self.legacy_progress);
        let time_spent = first_nonzero_f64(snapshot.time_spent, self.legacy_time_spent);
        let total_lessons = first_nonzero_u32(self.total_lessons, snapshot.total_lessons);
        let last_accessed = snapshot
            .last_accessed
            .as_deref()
            .and_then(parse_timestamp);

        Course {
            record_id: self.record_id.unwrap_or_default(),
            course_id: self.course_id,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            thumbnail: self.thumbnail.filter(|value| !value.trim().is_empty()),
            total_lessons,
            completed_lessons,
            progress,
            time_spent,
            last_accessed,
            time_note: self.time_note.filter(|value| !value.trim().is_empty()),
        }
    }
}

/// Canonical course shape used everywhere after the network boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    record_id: String,
    course_id: Option<CourseId>,
    title: String,
    description: String,
    thumbnail: Option<String>,
    total_lessons: u32,
    completed_lessons: u32,
    progress: f64,
    time_spent: f64,
    last_accessed: Option<DateTime<Utc>>,
    time_note: Option<String>,
}

impl Course {
    /// Backend record id (`_id`). May be empty when the backend omits it.
    #[must_use]
    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    #[must_use]
    pub fn course_id(&self) -> Option<CourseId> {
        self.course_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref()
    }

    #[must_use]
    pub fn total_lessons(&self) -> u32 {
        self.total_lessons
    }

    #[must_use]
    pub fn completed_lessons(&self) -> u32 {
        self.completed_lessons
    }

    /// Percent complete, as reported by the backend (not clamped).
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Hours spent in the course.
    #[must_use]
    pub fn time_spent(&self) -> f64 {
        self.time_spent
    }

    #[must_use]
    pub fn last_accessed(&self) -> Option<DateTime<Utc>> {
        self.last_accessed
    }

    #[must_use]
    pub fn time_note(&self) -> Option<&str> {
        self.time_note.as_deref()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress >= COMPLETE_PROGRESS
    }
}

fn first_nonzero_u32(preferred: Option<u32>, fallback: Option<u32>) -> u32 {
    preferred
        .filter(|value| *value != 0)
        .or(fallback)
        .unwrap_or(0)
}

fn first_nonzero_f64(preferred: Option<f64>, fallback: Option<f64>) -> f64 {
    preferred
        .filter(|value| *value != 0.0 && !value.is_nan())
        .or(fallback.filter(|value| !value.is_nan()))
        .unwrap_or(0.0)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|value| value.with_timezone(&Utc))
}
