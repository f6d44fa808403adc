//! Authentication context and hooks for the UI.

use api::ApiError;
use dioxus::prelude::*;
use store::Session;

use crate::activity_log::{log_activity, ActivityLog, LogLevel};
use crate::client::{use_client, ConsoleClient};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the persisted session has been read.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            session: None,
            loading: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that rehydrates the session from client storage.
/// Wrap your router with this component; it needs a [`ConsoleClient`] in context.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let client = use_client();
    let mut auth_state = use_signal(AuthState::default);

    use_effect(move || {
        let state = match api::restore(&client) {
            Some(session) => AuthState::signed_in(session),
            None => AuthState::signed_out(),
        };
        auth_state.set(state);
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Log a failed API call to the activity log; a 401 also ends the session,
/// which sends every guarded screen back to the login page.
pub fn report_api_error(
    auth: &mut Signal<AuthState>,
    log: &mut Signal<ActivityLog>,
    action: &str,
    err: &ApiError,
) {
    tracing::error!("{action} failed: {err}");
    if err.is_unauthorized() {
        log_activity(log, LogLevel::Warning, "Session expired, please sign in again");
        auth.set(AuthState::signed_out());
    } else {
        log_activity(log, LogLevel::Error, &format!("{action} failed: {err}"));
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        let client = consume_context::<ConsoleClient>();
        api::logout(&client);
        auth_state.set(AuthState::signed_out());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
