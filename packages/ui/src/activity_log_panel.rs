//! Floating list of what the console did, with problems pulled forward.

use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogFilter, LogLevel};

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/styling/activity_log.css");

#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();
    let mut filter = use_signal(LogFilter::default);

    if !log.read().visible {
        return rsx! {};
    }

    let snapshot = log.read().clone();
    let errors = snapshot.count(LogLevel::Error);
    let warnings = snapshot.count(LogLevel::Warning);
    let listed = snapshot.listed(filter());
    let filter_class = |f: LogFilter| {
        if filter() == f {
            "btn btn-small active"
        } else {
            "btn btn-small"
        }
    };

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        aside {
            class: "activity-log-panel",
            header {
                class: "activity-log-header",
                span { "Activity" }
                span { class: "activity-log-summary", "{errors} errors, {warnings} warnings" }
                button {
                    class: "btn btn-small",
                    title: "Hide",
                    onclick: move |_| log.write().visible = false,
                    "Hide"
                }
            }
            nav {
                class: "activity-log-filters",
                button {
                    class: filter_class(LogFilter::All),
                    onclick: move |_| filter.set(LogFilter::All),
                    "All"
                }
                button {
                    class: filter_class(LogFilter::Problems),
                    onclick: move |_| filter.set(LogFilter::Problems),
                    "Problems"
                }
                button {
                    class: "btn btn-small",
                    disabled: snapshot.entries.is_empty(),
                    onclick: move |_| log.write().entries.clear(),
                    "Clear all"
                }
            }
            ul {
                class: "activity-log-entries",
                if listed.is_empty() {
                    li { class: "activity-log-empty", "Nothing to show" }
                }
                for entry in listed {
                    li {
                        key: "{entry.id}",
                        class: entry.level.css_class(),
                        span { class: "activity-log-time", "{entry.timestamp}" }
                        span { class: "activity-log-level", {entry.level.label()} }
                        span { class: "activity-log-message", "{entry.message}" }
                        button {
                            class: "activity-log-dismiss",
                            title: "Dismiss",
                            onclick: move |_| log.write().dismiss(entry.id),
                            "×"
                        }
                    }
                }
            }
        }
    }
}

/// Sidebar button that shows or hides the panel; it flags unseen problems.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let problems = {
        let log = log.read();
        log.count(LogLevel::Error) + log.count(LogLevel::Warning)
    };

    rsx! {
        button {
            class: if problems > 0 { "activity-log-toggle has-errors" } else { "activity-log-toggle" },
            onclick: move |_| {
                let visible = log.read().visible;
                log.write().visible = !visible;
            },
            if problems > 0 {
                "Activity ({problems})"
            } else {
                "Activity"
            }
        }
    }
}
