use std::time::Duration;

use api::{format_marker, CountUp, Stats};
use dioxus::prelude::*;
use store::ConsoleConfig;

use crate::activity_log::use_activity_log;
use crate::auth::{report_api_error, use_auth};
use crate::client::use_client;
use crate::icons::{FaFileLines, FaFolderOpen, FaMoon, FaStar, FaSun, FaUsers};
use crate::timer::sleep;
use crate::Icon;

/// Summary counts with a count-up animation, plus the latest activity dates.
#[component]
pub fn DashboardSummary() -> Element {
    let config = use_context::<ConsoleConfig>();
    let mut auth = use_auth();
    let mut log = use_activity_log();
    let displayed = use_signal(Stats::default);
    let mut dark = use_signal(|| false);

    let steps = config.dashboard.count_up_steps;
    let total = Duration::from_millis(u64::from(config.dashboard.count_up_duration_ms));

    let client = use_client();
    let stats = use_resource(move || {
        let client = client.clone();
        async move {
            match api::fetch_stats(&client).await {
                Ok(stats) => {
                    spawn(count_up(displayed, stats.clone(), steps, total));
                    Some(stats)
                }
                Err(e) => {
                    report_api_error(&mut auth, &mut log, "Loading statistics", &e);
                    None
                }
            }
        }
    });

    let current = displayed();
    let status = load_status(Option::as_ref(&*stats.read()));
    let last_article = format_marker(current.last_article_date.as_deref());
    let last_review = format_marker(current.last_review_date.as_deref());

    rsx! {
        section {
            class: if dark() { "dashboard-summary dark" } else { "dashboard-summary" },
            header {
                class: "dashboard-summary-header",
                h1 { "Dashboard" }
                button {
                    class: "btn",
                    title: "Toggle dark mode",
                    onclick: move |_| dark.toggle(),
                    if dark() {
                        Icon { width: 16, height: 16, icon: FaSun }
                    } else {
                        Icon { width: 16, height: 16, icon: FaMoon }
                    }
                }
            }

            if let Some(status) = status {
                p { class: "dashboard-status", "{status}" }
            }

            div {
                class: "stat-grid",
                StatCard { label: "Articles", value: current.articles,
                    Icon { width: 24, height: 24, icon: FaFileLines }
                }
                StatCard { label: "Reviews", value: current.reviews,
                    Icon { width: 24, height: 24, icon: FaStar }
                }
                StatCard { label: "Users", value: current.users,
                    Icon { width: 24, height: 24, icon: FaUsers }
                }
                StatCard { label: "Projects", value: current.projects,
                    Icon { width: 24, height: 24, icon: FaFolderOpen }
                }
            }

            dl {
                class: "dashboard-markers",
                dt { "Last article" }
                dd { "{last_article}" }
                dt { "Last review" }
                dd { "{last_review}" }
            }
        }
    }
}

/// Notice shown above the counts: `None` once the fetch has resolved with data,
/// independent of the count-up still running.
fn load_status(fetched: Option<&Option<Stats>>) -> Option<&'static str> {
    match fetched {
        None => Some("Loading statistics..."),
        Some(None) => Some("Statistics are unavailable."),
        Some(Some(_)) => None,
    }
}

/// Step `displayed` from zero to `target`; the resource has already resolved,
/// so the loading notice is gone while this runs.
async fn count_up(mut displayed: Signal<Stats>, target: Stats, steps: u32, total: Duration) {
    let interval = CountUp::new(0, steps).frame_interval(total);
    for step in 1..=steps {
        sleep(interval).await;
        displayed.set(target.frame(steps, step));
    }
    displayed.set(target);
}

#[component]
fn StatCard(label: &'static str, value: u64, children: Element) -> Element {
    rsx! {
        div {
            class: "stat-card",
            div { class: "stat-icon", {children} }
            div { class: "stat-value", "{value}" }
            div { class: "stat-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_notice_clears_as_soon_as_stats_arrive() {
        assert_eq!(load_status(None), Some("Loading statistics..."));
        assert_eq!(load_status(Some(&None)), Some("Statistics are unavailable."));

        let fetched = Some(Stats {
            articles: 12,
            ..Stats::default()
        });
        assert_eq!(load_status(Some(&fetched)), None);
    }
}
