use dioxus::prelude::*;
use ui::{use_auth, ActivityLogPanel, ActivityLogToggle, LogoutButton};

use crate::Route;

/// Sidebar navigation around every dashboard screen.
#[component]
pub fn ConsoleLayout() -> Element {
    let auth = use_auth();
    let (name, is_admin) = match &auth().session {
        Some(session) => (
            session.user.display_name().to_string(),
            session.user.is_admin(),
        ),
        None => (String::new(), false),
    };

    rsx! {
        div {
            class: "console",
            nav {
                class: "console-sidebar",
                div { class: "console-user", "{name}" }
                Link { to: Route::Dashboard {}, "Dashboard" }
                if is_admin {
                    Link { to: Route::Users {}, "Users" }
                    Link { to: Route::Articles {}, "Experience" }
                    Link { to: Route::Projects {}, "Projects" }
                    Link { to: Route::Reviews {}, "Reviews" }
                }
                div {
                    class: "console-sidebar-footer",
                    ActivityLogToggle {}
                    LogoutButton { class: "btn" }
                }
            }
            main {
                class: "console-main",
                Outlet::<Route> {}
            }
            ActivityLogPanel {}
        }
    }
}
