use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use course_core::model::{
    Course, CourseDraft, CourseId, Credentials, DashboardStats, Session, SessionToken, UserId,
};
use course_core::time::fixed_now;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    ApiError, ApiResponse, AppServices, AuthApi, AuthService, Clock, CourseApi, DashboardConfig,
    DashboardService, SessionService,
};
use storage::repository::Storage;

use crate::context::{SessionHandle, UiApp, build_app_context, use_session_provider};
use crate::routes::Route;
use crate::views::{DashboardView, LoginView};

pub const FAKE_TOKEN: &str = "test-token";

/// Auth backend double that accepts every login and counts the calls.
#[derive(Default)]
pub struct FakeAuthApi {
    calls: AtomicUsize,
}

impl FakeAuthApi {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthApi for FakeAuthApi {
    async fn login(&self, _credentials: &Credentials) -> Result<ApiResponse<SessionToken>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ApiResponse::Ok(SessionToken::new(FAKE_TOKEN)))
    }
}

/// Course backend double; `None` stats simulates an unreadable reply.
#[derive(Default)]
pub struct FakeCourseApi {
    stats: Mutex<Option<DashboardStats>>,
    details: Vec<Course>,
    stats_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl FakeCourseApi {
    pub fn with_stats(stats: Option<DashboardStats>) -> Self {
        Self {
            stats: Mutex::new(stats),
            ..Self::default()
        }
    }

    pub fn with_details(mut self, details: Vec<Course>) -> Self {
        self.details = details;
        self
    }

    pub fn set_stats(&self, stats: Option<DashboardStats>) {
        *self.stats.lock().expect("stats lock") = stats;
    }

    pub fn stats_calls(&self) -> usize {
        self.stats_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CourseApi for FakeCourseApi {
    async fn dashboard_stats(
        &self,
        _user_id: UserId,
    ) -> Result<ApiResponse<DashboardStats>, ApiError> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        self.stats
            .lock()
            .expect("stats lock")
            .clone()
            .map(ApiResponse::Ok)
            .ok_or(ApiError::MissingField("data"))
    }

    async fn course_details(
        &self,
        _course_ids: &[CourseId],
        _user_id: UserId,
    ) -> Result<ApiResponse<Vec<Course>>, ApiError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        Ok(ApiResponse::Ok(self.details.clone()))
    }
}

/// Actions and state the views hand out so tests can drive them directly.
#[derive(Clone, Default)]
pub struct TestHandles {
    login: Rc<RefCell<Option<LoginHandles>>>,
    retry: Rc<RefCell<Option<Callback<()>>>>,
    logout: Rc<RefCell<Option<Callback<()>>>>,
    session: Rc<RefCell<Option<SessionHandle>>>,
}

#[derive(Clone, Copy)]
pub struct LoginHandles {
    pub email: Signal<String>,
    pub password: Signal<String>,
    pub submit: Callback<()>,
}

impl TestHandles {
    pub fn register_login(&self, handles: LoginHandles) {
        *self.login.borrow_mut() = Some(handles);
    }

    pub fn register_retry(&self, retry: Callback<()>) {
        *self.retry.borrow_mut() = Some(retry);
    }

    pub fn register_logout(&self, logout: Callback<()>) {
        *self.logout.borrow_mut() = Some(logout);
    }

    pub fn login(&self) -> LoginHandles {
        let current = *self.login.borrow();
        current.expect("login view mounted")
    }

    pub fn retry(&self) -> Callback<()> {
        let current = *self.retry.borrow();
        current.expect("retry button mounted")
    }

    pub fn logout(&self) -> Callback<()> {
        let current = *self.logout.borrow();
        current.expect("sidebar mounted")
    }

    pub fn session(&self) -> SessionHandle {
        let current = *self.session.borrow();
        current.expect("session provided")
    }
}

#[derive(Clone)]
struct TestApp {
    initial_session: Option<Session>,
    auth: Arc<AuthService>,
    dashboard: Arc<DashboardService>,
}

impl UiApp for TestApp {
    fn initial_session(&self) -> Option<Session> {
        self.initial_session.clone()
    }

    fn clock(&self) -> Clock {
        Clock::fixed(fixed_now())
    }

    fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Dashboard,
    /// The real route table, starting at `/`.
    App,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: TestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    let session = use_session_provider();
    *props.handles.session.borrow_mut() = Some(session);

    match props.view {
        ViewKind::App => rsx! { Router::<Route> {} },
        ViewKind::Login | ViewKind::Dashboard => rsx! { Router::<TestRoute> {} },
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Dashboard | ViewKind::App => rsx! { DashboardView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub auth_api: Arc<FakeAuthApi>,
    pub course_api: Arc<FakeCourseApi>,
    pub handles: TestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    /// Drive until redirects, spawned tasks and the resources they start are done.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn in_runtime<O>(&self, f: impl FnOnce() -> O) -> O {
        self.dom.in_runtime(f)
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub async fn stored(&self, key: &str) -> Option<String> {
        self.storage.kv.get(key).await.expect("read storage")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Views with a stored session, as after a previous login.
pub async fn setup_view_harness(view: ViewKind, course_api: FakeCourseApi) -> ViewHarness {
    build_harness(view, course_api, true).await
}

/// The routed app over fresh storage; `logged_in` persists a session first.
pub async fn setup_app_harness(course_api: FakeCourseApi, logged_in: bool) -> ViewHarness {
    build_harness(ViewKind::App, course_api, logged_in).await
}

async fn build_harness(view: ViewKind, course_api: FakeCourseApi, logged_in: bool) -> ViewHarness {
    let storage = Storage::in_memory();
    if logged_in {
        SessionService::new(Arc::clone(&storage.kv))
            .store(&Session::new(SessionToken::new(FAKE_TOKEN)))
            .await
            .expect("store session");
    }

    let auth_api = Arc::new(FakeAuthApi::default());
    let course_api = Arc::new(course_api);
    let services = AppServices::with_apis(
        &storage,
        Arc::clone(&auth_api) as Arc<dyn AuthApi>,
        Arc::clone(&course_api) as Arc<dyn CourseApi>,
        DashboardConfig::default(),
    )
    .await
    .expect("build services");

    let app = Arc::new(TestApp {
        initial_session: services.initial_session(),
        auth: services.auth(),
        dashboard: services.dashboard(),
    });

    let handles = TestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );
    ViewHarness {
        dom,
        storage,
        auth_api,
        course_api,
        handles,
    }
}

pub fn legacy_course(title: &str, progress: f64) -> Course {
    CourseDraft {
        record_id: Some(format!("rec-{title}")),
        course_id: Some(CourseId::new(1)),
        title: Some(title.to_string()),
        description: Some("Intro course".to_string()),
        total_lessons: Some(10),
        legacy_completed_lessons: Some(4),
        legacy_progress: Some(progress),
        legacy_time_spent: Some(2.5),
        ..CourseDraft::default()
    }
    .normalize()
}
