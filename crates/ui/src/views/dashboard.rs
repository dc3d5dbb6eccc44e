use dioxus::prelude::*;
use dioxus_router::Link;
use tracing::debug;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::charts::{DonutChart, LineChart};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    CourseCardVm, DonutChartVm, LineChartVm, RecommendationsVm, StatCardVm, StatIcon,
    completion_donut, learning_trend_chart, map_course_cards, map_recommendations, map_stat_cards,
};

#[derive(Clone, Debug, PartialEq)]
struct DashboardVm {
    stat_cards: Vec<StatCardVm>,
    course_cards: Vec<CourseCardVm>,
    trend: LineChartVm,
    donut: DonutChartVm,
    recommendations: RecommendationsVm,
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let dashboard = ctx.dashboard();
    let clock = ctx.clock();

    let mut resource = use_resource(move || {
        let dashboard = dashboard.clone();
        async move {
            let data = dashboard.load().await.map_err(|err| {
                debug!(error = %err, "dashboard load failed");
                ViewError::DashboardLoad
            })?;
            Ok(DashboardVm {
                stat_cards: map_stat_cards(data.stats.as_ref()),
                course_cards: map_course_cards(&data.courses, clock.now()),
                trend: learning_trend_chart(),
                donut: completion_donut(data.completion_breakdown()),
                recommendations: map_recommendations(&data.courses),
            })
        }
    });

    let retry = use_callback(move |()| resource.restart());

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<crate::views::test_harness::TestHandles>() {
                handles.register_retry(retry);
            }
        }
    }

    let state = view_state_from_resource(&resource);

    match state {
        ViewState::Idle | ViewState::Loading => rsx! {
            div { class: "page dashboard-loading",
                div { class: "spinner" }
                p { "Loading Dashboard..." }
            }
        },
        ViewState::Error(err) => rsx! {
            div { class: "page dashboard-error",
                p { class: "error", "{err.message()}" }
                button { class: "btn", onclick: move |_| retry.call(()), "Retry" }
            }
        },
        ViewState::Ready(vm) => rsx! {
            div { class: "page dashboard",
                nav { class: "breadcrumb",
                    Link { to: Route::Index {}, "Home" }
                    span { class: "breadcrumb-sep", "/" }
                    span { class: "breadcrumb-current", "Dashboard" }
                }
                h2 { "Student Learning Dashboard" }

                div { class: "stat-grid",
                    for card in vm.stat_cards {
                        StatCard { card }
                    }
                }

                section { class: "courses",
                    h3 { "My Courses" }
                    div { class: "course-grid",
                        for card in vm.course_cards {
                            CourseCard { card }
                        }
                    }
                }

                div { class: "chart-grid",
                    LineChart { chart: vm.trend }
                    DonutChart { chart: vm.donut }
                }

                section { class: "recommendations",
                    h3 { "Recommended Next Steps" }
                    match vm.recommendations {
                        RecommendationsVm::Items(items) => rsx! {
                            ul {
                                for item in items {
                                    li { key: "{item.key}",
                                        span { "{item.label}" }
                                        button { class: "btn btn-small", "Continue" }
                                    }
                                }
                            }
                        },
                        RecommendationsVm::AllComplete(message) => rsx! {
                            p { class: "all-complete", "{message}" }
                        },
                    }
                }
            }
        },
    }
}

#[component]
fn StatCard(card: StatCardVm) -> Element {
    rsx! {
        div { class: "stat-card",
            StatIconSvg { icon: card.icon }
            div { class: "stat-body",
                p { class: "stat-label", "{card.label}" }
                p { class: "stat-value", "{card.value}" }
            }
        }
    }
}

#[component]
fn StatIconSvg(icon: StatIcon) -> Element {
    let path = match icon {
        StatIcon::Courses => "M4 19.5A2.5 2.5 0 0 1 6.5 17H20V2H6.5A2.5 2.5 0 0 0 4 4.5v15z",
        StatIcon::Clock => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm1 10.4 3.5 2.1-.8 1.3L11 13V7h2z",
        StatIcon::Chart => "M3 3v18h18v-2H5V3H3zm4 12h2v-5H7v5zm4 0h2V7h-2v8zm4 0h2v-3h-2v3z",
    };

    rsx! {
        svg {
            class: "stat-icon",
            view_box: "0 0 24 24",
            width: "32",
            height: "32",
            fill: "currentColor",
            path { d: "{path}" }
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm) -> Element {
    rsx! {
        article { class: "course-card",
            if let Some(src) = card.thumbnail.clone() {
                img { class: "course-thumb", src: "{src}", alt: "{card.title}" }
            }
            div { class: "course-body",
                h4 { "{card.title}" }
                p { class: "course-lessons", "{card.lessons_label}" }
                p { class: "course-description", "{card.description}" }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {card.bar_percent}%" }
                }
                p { class: "course-progress", "{card.percent_label}" }
                div { class: "course-meta",
                    span { "{card.time_label}" }
                    if let Some(note) = card.time_note.clone() {
                        span { class: "course-time-note", "{note}" }
                    }
                }
                if let Some(label) = card.last_accessed_label.clone() {
                    p { class: "course-last-accessed", "{label}" }
                }
                button { class: "btn", "Continue Learning" }
            }
        }
    }
}
