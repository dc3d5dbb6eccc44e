use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::use_session;
use crate::routes::Route;

/// Entry route: forwards to the dashboard or the login page.
#[component]
pub fn IndexView() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    use_effect(move || {
        if session.is_logged_in() {
            navigator.replace(Route::Dashboard {});
        } else {
            navigator.replace(Route::Login {});
        }
    });

    rsx! {
        div { class: "page page-redirect" }
    }
}
