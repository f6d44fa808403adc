use dioxus::prelude::*;
use ui::use_auth;

use crate::Route;

#[component]
pub fn Landing() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Signed-in visitors go straight to the console
    if !auth().loading && auth().session.is_some() {
        nav.replace(Route::Dashboard {});
    }

    rsx! {
        main {
            class: "landing",
            h1 { "Portfolio admin" }
            p { "Manage users, professional experience, projects and reviews." }
            Link {
                class: "btn btn-primary",
                to: Route::Login {},
                "Sign in"
            }
        }
    }
}
