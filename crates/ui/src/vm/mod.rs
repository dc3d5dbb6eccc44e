mod chart_vm;
mod course_vm;
mod format;
mod recommendation_vm;
mod stats_vm;

pub use chart_vm::{
    AxisLabelVm, DONUT_CENTER, DONUT_RADIUS, DonutChartVm, DonutSliceVm, GridBandVm, LINE_HEIGHT,
    LINE_WIDTH, LineChartVm, LineSeriesVm, completion_donut, learning_trend_chart,
};
pub use course_vm::{CourseCardVm, course_key, map_course_card, map_course_cards};
pub use format::{format_number, format_one_decimal};
pub use recommendation_vm::{RecommendationVm, RecommendationsVm, map_recommendations};
pub use stats_vm::{StatCardVm, StatIcon, map_stat_cards};
