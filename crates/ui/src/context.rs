use std::sync::Arc;

use course_core::model::Session;
use dioxus::prelude::*;
use services::{AuthService, Clock, DashboardService};

pub trait UiApp: Send + Sync {
    fn initial_session(&self) -> Option<Session>;
    fn clock(&self) -> Clock;

    fn auth(&self) -> Arc<AuthService>;
    fn dashboard(&self) -> Arc<DashboardService>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_session: Option<Session>,
    clock: Clock,

    auth: Arc<AuthService>,
    dashboard: Arc<DashboardService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_session: app.initial_session(),
            clock: app.clock(),
            auth: app.auth(),
            dashboard: app.dashboard(),
        }
    }

    #[must_use]
    pub fn initial_session(&self) -> Option<Session> {
        self.initial_session.clone()
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn dashboard(&self) -> Arc<DashboardService> {
        Arc::clone(&self.dashboard)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Reactive login state shared by every view.
///
/// Seeded from the persisted session; views update it after login and logout
/// so the router guards see the change without re-reading storage.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionHandle(Signal<Option<Session>>);

impl SessionHandle {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.0.read().is_some()
    }

    pub fn set(&self, session: Session) {
        let mut signal = self.0;
        signal.set(Some(session));
    }

    pub fn clear(&self) {
        let mut signal = self.0;
        signal.set(None);
    }
}

/// Provide a `SessionHandle` seeded from the `AppContext` in scope.
pub fn use_session_provider() -> SessionHandle {
    let ctx = use_context::<AppContext>();
    let signal = use_signal(move || ctx.initial_session());
    use_context_provider(|| SessionHandle(signal))
}

#[must_use]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}
