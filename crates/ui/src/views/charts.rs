use dioxus::prelude::*;

use crate::vm::{DONUT_CENTER, DONUT_RADIUS, DonutChartVm, LINE_HEIGHT, LINE_WIDTH, LineChartVm};

#[component]
pub fn LineChart(chart: LineChartVm) -> Element {
    let view_box = format!("0 0 {LINE_WIDTH} {LINE_HEIGHT}");

    rsx! {
        div { class: "chart-card",
            h3 { class: "chart-title", "{chart.title}" }
            svg {
                class: "line-chart",
                view_box: "{view_box}",
                width: "100%",
                for band in chart.bands.iter() {
                    rect {
                        x: "{chart.plot_left}",
                        y: "{band.y}",
                        width: "{chart.plot_right - chart.plot_left}",
                        height: "{band.height}",
                        fill: "{band.color}",
                        fill_opacity: "0.5",
                    }
                }
                line {
                    x1: "{chart.plot_left}",
                    y1: "{chart.plot_bottom}",
                    x2: "{chart.plot_right}",
                    y2: "{chart.plot_bottom}",
                    stroke: "#d0d0d0",
                }
                for label in chart.y_labels.iter() {
                    text {
                        class: "axis-label",
                        x: "{label.x}",
                        y: "{label.y}",
                        text_anchor: "end",
                        "{label.text}"
                    }
                }
                for label in chart.x_labels.iter() {
                    text {
                        class: "axis-label",
                        x: "{label.x}",
                        y: "{label.y}",
                        text_anchor: "middle",
                        "{label.text}"
                    }
                }
                for series in chart.series.iter() {
                    polyline {
                        key: "{series.name}",
                        points: "{series.points}",
                        fill: "none",
                        stroke: "{series.color}",
                        stroke_width: "3",
                        stroke_linejoin: "round",
                    }
                }
            }
            ul { class: "chart-legend",
                for series in chart.series.iter() {
                    li { key: "{series.name}",
                        span { class: "legend-swatch", style: "background: {series.color}" }
                        "{series.name}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn DonutChart(chart: DonutChartVm) -> Element {
    rsx! {
        div { class: "chart-card",
            h3 { class: "chart-title", "{chart.title}" }
            svg {
                class: "donut-chart",
                view_box: "0 0 42 42",
                width: "100%",
                circle {
                    cx: "{DONUT_CENTER}",
                    cy: "{DONUT_CENTER}",
                    r: "{DONUT_RADIUS}",
                    fill: "transparent",
                    stroke: "#eeeeee",
                    stroke_width: "5",
                }
                for slice in chart.slices.iter() {
                    if let Some(dash_array) = slice.dash_array.clone() {
                        circle {
                            key: "{slice.label}",
                            cx: "{DONUT_CENTER}",
                            cy: "{DONUT_CENTER}",
                            r: "{DONUT_RADIUS}",
                            fill: "transparent",
                            stroke: "{slice.color}",
                            stroke_width: "5",
                            stroke_dasharray: "{dash_array}",
                            stroke_dashoffset: "{slice.dash_offset}",
                        }
                    }
                }
            }
            ul { class: "chart-legend",
                for slice in chart.slices.iter() {
                    li { key: "{slice.label}",
                        span { class: "legend-swatch", style: "background: {slice.color}" }
                        "{slice.label}: {slice.value}"
                    }
                }
            }
        }
    }
}
