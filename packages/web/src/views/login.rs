//! Login page view with email/password form.

use api::auth::LOGIN_FAILED;
use api::Credentials;
use dioxus::prelude::*;
use ui::{log_activity, use_activity_log, use_auth, AuthState, ConsoleClient, LogLevel};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut activity = use_activity_log();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the dashboard
    if !auth().loading && auth().session.is_some() {
        nav.replace(Route::Dashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        spawn(async move {
            error.set(None);
            loading.set(true);

            let client = consume_context::<ConsoleClient>();
            let credentials = Credentials::new(email().trim(), password());
            match api::login(&client, &credentials).await {
                Ok(session) => {
                    let greeting = format!("Signed in as {}", session.user.display_name());
                    auth.set(AuthState::signed_in(session));
                    log_activity(&mut activity, LogLevel::Success, &greeting);
                    loading.set(false);
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.user_message(LOGIN_FAILED)));
                }
            }
        });
    };

    rsx! {
        main {
            class: "login",

            h1 { "Sign in" }

            form {
                onsubmit: handle_login,
                class: "login-form",

                if let Some(err) = error() {
                    div { class: "login-error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
