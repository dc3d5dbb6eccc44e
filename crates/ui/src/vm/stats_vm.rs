use course_core::model::DashboardStats;

use crate::vm::format::format_one_decimal;

/// Icon shown next to a summary card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatIcon {
    Courses,
    Clock,
    Chart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCardVm {
    pub label: &'static str,
    pub value: String,
    pub icon: StatIcon,
}

/// Summary cards; absent stats read as zero.
#[must_use]
pub fn map_stat_cards(stats: Option<&DashboardStats>) -> Vec<StatCardVm> {
    let total_courses = stats.map_or(0, |s| s.total_courses);
    let total_time = stats.map_or(0.0, |s| s.total_time_spent);
    let average = stats.map_or(0.0, |s| s.average_progress);

    vec![
        StatCardVm {
            label: "Total Courses",
            value: total_courses.to_string(),
            icon: StatIcon::Courses,
        },
        StatCardVm {
            label: "Total Time Spent",
            value: format!("{} hours", format_one_decimal(total_time)),
            icon: StatIcon::Clock,
        },
        StatCardVm {
            label: "Average Progress",
            value: format!("{}%", format_one_decimal(average)),
            icon: StatIcon::Chart,
        },
    ]
}
