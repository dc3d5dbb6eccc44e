use course_core::model::CredentialsDraft;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::debug;

use crate::context::{AppContext, use_session};
use crate::routes::Route;

pub const TEST_EMAIL: &str = "sneha@example.com";
pub const TEST_PASSWORD: &str = "test123";

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_session();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| false);

    let submit = use_callback(move |()| {
        if loading() {
            return;
        }
        error.set(None);
        loading.set(true);

        let auth = ctx.auth();
        let draft = CredentialsDraft::new(email(), password());
        spawn(async move {
            match auth.login(draft).await {
                Ok(signed_in) => {
                    session.set(signed_in);
                    navigator.replace(Route::Dashboard {});
                }
                Err(err) => {
                    debug!(validation = err.is_validation(), "login attempt failed");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<crate::views::test_harness::TestHandles>() {
                handles.register_login(crate::views::test_harness::LoginHandles {
                    email,
                    password,
                    submit,
                });
            }
        }
    }

    let password_type = if show_password() { "text" } else { "password" };
    let toggle_label = if show_password() { "Hide" } else { "Show" };
    let submit_label = if loading() { "Signing in..." } else { "Sign In" };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h2 { "Login" }
                    p { "Sign in to your account" }
                }

                if let Some(message) = error() {
                    div { class: "login-error", role: "alert", "{message}" }
                }

                form {
                    class: "login-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        submit.call(());
                    },
                    label { r#for: "login-email", "Email Address" }
                    input {
                        id: "login-email",
                        r#type: "email",
                        placeholder: "Enter your email",
                        value: "{email}",
                        disabled: loading(),
                        oninput: move |evt| email.set(evt.value()),
                    }

                    label { r#for: "login-password", "Password" }
                    div { class: "password-field",
                        input {
                            id: "login-password",
                            r#type: "{password_type}",
                            placeholder: "Enter your password",
                            value: "{password}",
                            disabled: loading(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                        button {
                            class: "password-toggle",
                            r#type: "button",
                            disabled: loading(),
                            onclick: move |_| show_password.toggle(),
                            "{toggle_label}"
                        }
                    }

                    button {
                        class: "login-submit",
                        r#type: "submit",
                        disabled: loading(),
                        "{submit_label}"
                    }
                }

                div { class: "login-hint",
                    p { "Test credentials:" }
                    p { "Email: {TEST_EMAIL}" }
                    p { "Password: {TEST_PASSWORD}" }
                }

                p { class: "login-footer", "Secure authentication system" }
            }
        }
    }
}
