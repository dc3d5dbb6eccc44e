//! Geometry for the two dashboard charts, computed outside of rendering.

use course_core::model::CompletionBreakdown;

pub const LINE_CHART_TITLE: &str = "Learning Progress Over Time";
pub const DONUT_CHART_TITLE: &str = "Course Completion Status";

const LINE_CATEGORIES: [&str; 7] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul"];
const LINE_SERIES: [(&str, &str, [f64; 7]); 2] = [
    (
        "JavaScript",
        "#008FFB",
        [10.0, 25.0, 35.0, 50.0, 49.0, 60.0, 70.0],
    ),
    (
        "React.js",
        "#00E396",
        [5.0, 15.0, 25.0, 30.0, 40.0, 45.0, 55.0],
    ),
];
const GRID_ROW_COLORS: [&str; 2] = ["#f3f3f3", "transparent"];

const DONUT_LABELS: [&str; 3] = ["Completed", "In Progress", "Not Started"];
const DONUT_COLORS: [&str; 3] = ["#00C851", "#ffbb33", "#ff4444"];

pub const LINE_WIDTH: f64 = 480.0;
pub const LINE_HEIGHT: f64 = 240.0;
const PAD_LEFT: f64 = 36.0;
const PAD_RIGHT: f64 = 12.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 28.0;
const TICK_COUNT: u32 = 4;

/// Radius giving a circumference of 100, so dash lengths are percentages.
pub const DONUT_RADIUS: f64 = 15.915_494_309_189_533;
pub const DONUT_CENTER: f64 = 21.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LineSeriesVm {
    pub name: &'static str,
    pub color: &'static str,
    pub points: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabelVm {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridBandVm {
    pub y: f64,
    pub height: f64,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineChartVm {
    pub title: &'static str,
    pub series: Vec<LineSeriesVm>,
    pub x_labels: Vec<AxisLabelVm>,
    pub y_labels: Vec<AxisLabelVm>,
    pub bands: Vec<GridBandVm>,
    pub plot_left: f64,
    pub plot_right: f64,
    pub plot_bottom: f64,
}

/// The progress trend chart. Its series are fixed sample data.
#[must_use]
pub fn learning_trend_chart() -> LineChartVm {
    let max = LINE_SERIES
        .iter()
        .flat_map(|(_, _, values)| values.iter().copied())
        .fold(0.0_f64, f64::max);
    let step = nice_step(max / f64::from(TICK_COUNT));
    let y_max = step * f64::from(TICK_COUNT);

    let plot_left = PAD_LEFT;
    let plot_right = LINE_WIDTH - PAD_RIGHT;
    let plot_top = PAD_TOP;
    let plot_bottom = LINE_HEIGHT - PAD_BOTTOM;
    let x_step = (plot_right - plot_left) / (LINE_CATEGORIES.len() - 1) as f64;
    let scale_y = |value: f64| plot_bottom - value / y_max * (plot_bottom - plot_top);

    let series = LINE_SERIES
        .iter()
        .map(|(name, color, values)| LineSeriesVm {
            name,
            color,
            points: values
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    format!("{:.1},{:.1}", plot_left + x_step * i as f64, scale_y(*value))
                })
                .collect::<Vec<_>>()
                .join(" "),
        })
        .collect();

    let x_labels = LINE_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, label)| AxisLabelVm {
            text: (*label).to_string(),
            x: plot_left + x_step * i as f64,
            y: LINE_HEIGHT - PAD_BOTTOM / 3.0,
        })
        .collect();

    let y_labels = (0..=TICK_COUNT)
        .map(|tick| {
            let value = step * f64::from(tick);
            AxisLabelVm {
                text: format!("{value}"),
                x: plot_left - 6.0,
                y: scale_y(value) + 3.0,
            }
        })
        .collect();

    let band_height = (plot_bottom - plot_top) / f64::from(TICK_COUNT);
    let bands = (0..TICK_COUNT)
        .map(|row| GridBandVm {
            y: plot_top + band_height * f64::from(row),
            height: band_height,
            color: GRID_ROW_COLORS[row as usize % GRID_ROW_COLORS.len()],
        })
        .collect();

    LineChartVm {
        title: LINE_CHART_TITLE,
        series,
        x_labels,
        y_labels,
        bands,
        plot_left,
        plot_right,
        plot_bottom,
    }
}

// Smallest of 1, 2, 5 x 10^n that is >= raw.
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10_f64.powf(raw.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|factor| factor * magnitude)
        .find(|candidate| *candidate >= raw)
        .unwrap_or(10.0 * magnitude)
}

#[derive(Clone, Debug, PartialEq)]
pub struct DonutSliceVm {
    pub label: &'static str,
    pub color: &'static str,
    pub value: i64,
    /// `stroke-dasharray`, present only for slices that draw an arc.
    pub dash_array: Option<String>,
    pub dash_offset: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DonutChartVm {
    pub title: &'static str,
    pub series: [i64; 3],
    pub slices: Vec<DonutSliceVm>,
    pub drawn_total: i64,
}

/// Completion donut. Negative values stay in the legend but draw no arc.
#[must_use]
pub fn completion_donut(breakdown: CompletionBreakdown) -> DonutChartVm {
    let series = breakdown.series();
    let drawn_total: i64 = series.iter().filter(|v| **v > 0).sum();

    let mut cumulative = 0.0_f64;
    let slices = series
        .iter()
        .zip(DONUT_LABELS)
        .zip(DONUT_COLORS)
        .map(|((value, label), color)| {
            let (dash_array, dash_offset) = if *value > 0 && drawn_total > 0 {
                let percent = *value as f64 / drawn_total as f64 * 100.0;
                let offset = 25.0 - cumulative;
                cumulative += percent;
                (
                    Some(format!("{percent:.3} {:.3}", 100.0 - percent)),
                    offset,
                )
            } else {
                (None, 0.0)
            };
            DonutSliceVm {
                label,
                color,
                value: *value,
                dash_array,
                dash_offset,
            }
        })
        .collect();

    DonutChartVm {
        title: DONUT_CHART_TITLE,
        series,
        slices,
        drawn_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn donut_series_follows_breakdown() {
        let donut = completion_donut(CompletionBreakdown {
            completed: 2,
            in_progress: 1,
            remaining: 2,
        });
        assert_eq!(donut.series, [2, 1, 2]);
        assert_eq!(donut.drawn_total, 5);
        assert_eq!(donut.slices[0].dash_array.as_deref(), Some("40.000 60.000"));
        assert!((donut.slices[0].dash_offset - 25.0).abs() < 1e-9);
        assert!((donut.slices[1].dash_offset - -15.0).abs() < 1e-9);
    }

    #[test]
    fn negative_remainder_draws_no_arc() {
        let donut = completion_donut(CompletionBreakdown {
            completed: 2,
            in_progress: 1,
            remaining: -2,
        });
        assert_eq!(donut.slices[2].value, -2);
        assert!(donut.slices[2].dash_array.is_none());
        assert_eq!(donut.drawn_total, 3);
    }

    #[test]
    fn empty_breakdown_draws_nothing() {
        let donut = completion_donut(CompletionBreakdown::default());
        assert_eq!(donut.series, [0, 0, 0]);
        assert!(donut.slices.iter().all(|s| s.dash_array.is_none()));
    }

    #[test]
    fn trend_chart_has_two_series_over_seven_months() {
        let chart = learning_trend_chart();
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].name, "JavaScript");
        assert_eq!(chart.series[1].name, "React.js");
        assert_eq!(chart.x_labels.len(), 7);
        assert_eq!(chart.series[0].points.split(' ').count(), 7);
    }

    #[test]
    fn trend_chart_axis_tops_out_above_max() {
        let chart = learning_trend_chart();
        let labels: Vec<_> = chart.y_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(labels, vec!["0", "20", "40", "60", "80"]);
    }

    #[test]
    fn nice_step_rounds_up() {
        assert!((nice_step(17.5) - 20.0).abs() < f64::EPSILON);
        assert!((nice_step(3.0) - 5.0).abs() < f64::EPSILON);
        assert!((nice_step(0.0) - 1.0).abs() < f64::EPSILON);
    }
}
