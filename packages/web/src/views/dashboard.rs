use dioxus::prelude::*;
use ui::DashboardSummary;

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        DashboardSummary {}
    }
}
