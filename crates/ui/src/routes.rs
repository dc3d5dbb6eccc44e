use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};
use tracing::warn;

use crate::context::{AppContext, use_session};
use crate::views::{DashboardView, IndexView, LoginView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", IndexView)] Index {},
    #[route("/login", LoginView)] Login {},
    #[layout(Layout)]
        #[route("/dashboard", DashboardView)] Dashboard {},
}

/// Shell for pages that need a session; sends visitors without one to login.
#[component]
fn Layout() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    use_effect(move || {
        if !session.is_logged_in() {
            navigator.replace(Route::Login {});
        }
    });

    if !session.is_logged_in() {
        return rsx! {};
    }

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let navigator = use_navigator();

    let logout = use_callback(move |()| {
        let auth = ctx.auth();
        spawn(async move {
            if let Err(err) = auth.logout().await {
                warn!(error = %err, "failed to clear persisted session");
            }
            session.clear();
            navigator.replace(Route::Login {});
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<crate::views::test_harness::TestHandles>() {
                handles.register_logout(logout);
            }
        }
    }

    rsx! {
        nav { class: "sidebar",
            h1 { "Learn" }
            ul {
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
            }
            button { class: "sidebar-logout", r#type: "button", onclick: move |_| logout.call(()), "Log out" }
        }
    }
}
