use dioxus::prelude::WritableExt;

use course_core::model::{Course, DashboardStats, LOGGED_IN_KEY, LOGGED_IN_VALUE, TOKEN_KEY};

use super::test_harness::{
    FAKE_TOKEN, FakeCourseApi, ViewKind, legacy_course, setup_app_harness, setup_view_harness,
};
use super::{TEST_EMAIL, TEST_PASSWORD};

fn stats_with(courses: Vec<Course>) -> DashboardStats {
    DashboardStats {
        total_courses: 5,
        total_time_spent: 12.26,
        average_progress: 40.0,
        completed_courses: 2,
        in_progress_courses: 1,
        recent_courses: courses,
    }
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_smoke_renders_form() {
    let mut harness =
        setup_view_harness(ViewKind::Login, FakeCourseApi::default()).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Sign in to your account"), "missing subtitle in {html}");
    assert!(html.contains("sneha@example.com"), "missing hint in {html}");
    assert!(html.contains("Sign In"), "missing submit in {html}");
    assert!(
        html.contains("Secure authentication system"),
        "missing footer in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_legacy_course() {
    let api = FakeCourseApi::with_stats(Some(stats_with(vec![legacy_course(
        "JavaScript Basics",
        40.0,
    )])));
    let mut harness = setup_view_harness(ViewKind::Dashboard, api).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Student Learning Dashboard"),
        "missing heading in {html}"
    );
    assert!(html.contains("40% Complete"), "missing progress in {html}");
    assert!(html.contains("4/10 lessons"), "missing lessons in {html}");
    assert!(html.contains("12.3 hours"), "missing time stat in {html}");
    assert!(
        html.contains("Continue JavaScript Basics - 40% complete"),
        "missing recommendation in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_all_complete_message() {
    let api = FakeCourseApi::with_stats(Some(stats_with(vec![legacy_course("Finished", 100.0)])));
    let mut harness = setup_view_harness(ViewKind::Dashboard, api).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("All courses completed! Explore new courses."),
        "missing all-complete message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_error_state() {
    let mut harness =
        setup_view_harness(ViewKind::Dashboard, FakeCourseApi::default()).await;
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(
        html.contains("Failed to load dashboard data"),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_retry_reloads_stats_then_details() {
    let api = FakeCourseApi::with_stats(None)
        .with_details(vec![legacy_course("Rust Foundations", 40.0)]);
    let mut harness = setup_view_harness(ViewKind::Dashboard, api).await;
    harness.rebuild();
    harness.drive_async().await;
    assert!(harness.render().contains("Failed to load dashboard data"));
    assert_eq!(harness.course_api.stats_calls(), 1);
    assert_eq!(harness.course_api.detail_calls(), 0);

    harness.course_api.set_stats(Some(stats_with(Vec::new())));
    let retry = harness.handles.retry();
    harness.in_runtime(|| retry.call(()));
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Rust Foundations"), "missing detail course in {html}");
    assert!(!html.contains("Failed to load dashboard data"), "stale error in {html}");
    assert_eq!(harness.course_api.stats_calls(), 2);
    assert_eq!(harness.course_api.detail_calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn index_sends_visitor_without_session_to_login() {
    let mut harness = setup_app_harness(FakeCourseApi::default(), false).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Sign in to your account"), "not on login in {html}");
    assert!(!html.contains("Log out"), "sidebar shown in {html}");
    assert_eq!(harness.course_api.stats_calls(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn index_sends_stored_session_to_dashboard() {
    let api = FakeCourseApi::with_stats(Some(stats_with(vec![legacy_course(
        "JavaScript Basics",
        40.0,
    )])));
    let mut harness = setup_app_harness(api, true).await;
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Student Learning Dashboard"),
        "not on dashboard in {html}"
    );
    assert!(html.contains("Log out"), "missing sidebar in {html}");
    assert!(html.contains(r#"href="/""#), "breadcrumb does not link home in {html}");
    assert_eq!(harness.course_api.stats_calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn login_submit_stores_session_and_opens_dashboard() {
    let mut harness =
        setup_app_harness(FakeCourseApi::with_stats(Some(stats_with(Vec::new()))), false).await;
    harness.rebuild();
    harness.settle().await;
    assert!(harness.render().contains("Sign in to your account"));

    let login = harness.handles.login();
    harness.in_runtime(|| {
        let mut email = login.email;
        let mut password = login.password;
        email.set(TEST_EMAIL.to_string());
        password.set(TEST_PASSWORD.to_string());
        // A second submit while the first is in flight is ignored.
        login.submit.call(());
        login.submit.call(());
    });
    harness.settle().await;

    assert_eq!(harness.auth_api.calls(), 1);
    assert!(harness.in_runtime(|| harness.handles.session().is_logged_in()));
    assert_eq!(
        harness.stored(LOGGED_IN_KEY).await.as_deref(),
        Some(LOGGED_IN_VALUE)
    );
    assert_eq!(harness.stored(TOKEN_KEY).await.as_deref(), Some(FAKE_TOKEN));

    let html = harness.render();
    assert!(
        html.contains("Student Learning Dashboard"),
        "not on dashboard in {html}"
    );
    assert_eq!(harness.course_api.stats_calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn login_submit_with_short_password_stays_on_form() {
    let mut harness = setup_app_harness(FakeCourseApi::default(), false).await;
    harness.rebuild();
    harness.settle().await;

    let login = harness.handles.login();
    harness.in_runtime(|| {
        let mut email = login.email;
        let mut password = login.password;
        email.set(TEST_EMAIL.to_string());
        password.set("123".to_string());
        login.submit.call(());
    });
    harness.settle().await;

    assert_eq!(harness.auth_api.calls(), 0);
    assert_eq!(harness.stored(LOGGED_IN_KEY).await, None);
    let html = harness.render();
    assert!(
        html.contains("Password must be at least 6 characters"),
        "missing validation message in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn layout_sends_cleared_session_to_login() {
    let mut harness =
        setup_app_harness(FakeCourseApi::with_stats(Some(stats_with(Vec::new()))), true).await;
    harness.rebuild();
    harness.settle().await;
    assert!(harness.render().contains("Log out"));

    harness.in_runtime(|| harness.handles.session().clear());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Sign in to your account"), "not on login in {html}");
    assert!(!html.contains("Student Learning Dashboard"), "dashboard kept in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn logout_clears_both_keys_and_returns_to_login() {
    let mut harness =
        setup_app_harness(FakeCourseApi::with_stats(Some(stats_with(Vec::new()))), true).await;
    harness.rebuild();
    harness.settle().await;
    assert_eq!(harness.stored(TOKEN_KEY).await.as_deref(), Some(FAKE_TOKEN));

    let logout = harness.handles.logout();
    harness.in_runtime(|| logout.call(()));
    harness.settle().await;

    assert_eq!(harness.stored(LOGGED_IN_KEY).await, None);
    assert_eq!(harness.stored(TOKEN_KEY).await, None);
    assert!(!harness.in_runtime(|| harness.handles.session().is_logged_in()));
    let html = harness.render();
    assert!(html.contains("Sign in to your account"), "not on login in {html}");
}
