use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use views::{
    Articles, ConsoleLayout, Dashboard, Landing, Login, Projects, RequireAdmin, RequireSession,
    Reviews, Users,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[layout(RequireSession)]
        #[layout(ConsoleLayout)]
            #[route("/dashboard")]
            Dashboard {},
            #[layout(RequireAdmin)]
                #[route("/dashboard/users")]
                Users {},
                #[route("/dashboard/articles")]
                Articles {},
                #[route("/dashboard/projects")]
                Projects {},
                #[route("/dashboard/reviews")]
                Reviews {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(ui::load_config);
    use_context_provider(|| ui::make_client(&config));
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::CONSOLE_CSS }

        ui::AuthProvider {
            Router::<Route> {}
        }
    }
}
