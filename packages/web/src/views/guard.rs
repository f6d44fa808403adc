//! Route guards. Each renders its children only once the session satisfies
//! its policy and redirects otherwise.

use api::{evaluate_guard, GuardOutcome, GuardPolicy};
use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

fn guard(policy: GuardPolicy) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth();
    match evaluate_guard(policy, state.loading, state.session.as_ref()) {
        GuardOutcome::Allow => rsx! {
            Outlet::<Route> {}
        },
        GuardOutcome::Pending => rsx! {
            div { class: "guard-pending", "Loading..." }
        },
        GuardOutcome::RedirectToLogin => {
            tracing::info!("No session, redirecting to login");
            nav.replace(Route::Login {});
            rsx! {}
        }
        GuardOutcome::RedirectToLanding => {
            tracing::warn!(role = state.session.as_ref().map(|s| s.role()), "Admin role required");
            nav.replace(Route::Landing {});
            rsx! {}
        }
    }
}

/// Any signed-in user.
#[component]
pub fn RequireSession() -> Element {
    guard(GuardPolicy::Authenticated)
}

/// Signed-in users with the admin role.
#[component]
pub fn RequireAdmin() -> Element {
    guard(GuardPolicy::Admin)
}
