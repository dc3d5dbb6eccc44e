use course_core::model::Course;
use course_core::recommendations::{ALL_COMPLETE_MESSAGE, next_steps};

use crate::vm::course_vm::course_key;
use crate::vm::format::format_number;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecommendationVm {
    pub key: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecommendationsVm {
    Items(Vec<RecommendationVm>),
    AllComplete(&'static str),
}

#[must_use]
pub fn map_recommendations(courses: &[Course]) -> RecommendationsVm {
    let items = next_steps(courses)
        .into_iter()
        .enumerate()
        .map(|(index, course)| RecommendationVm {
            key: course_key(course, index),
            label: format!(
                "Continue {} - {}% complete",
                course.title(),
                format_number(course.progress())
            ),
        })
        .collect::<Vec<_>>();

    if items.is_empty() {
        RecommendationsVm::AllComplete(ALL_COMPLETE_MESSAGE)
    } else {
        RecommendationsVm::Items(items)
    }
}
