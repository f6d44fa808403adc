//! This crate contains all shared UI for the admin console.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const CONSOLE_CSS: Asset = asset!("/assets/console.css");

mod client;
pub use client::{load_config, make_client, use_client, ConsoleClient, ConsoleStorage};

mod auth;
pub use auth::{report_api_error, use_auth, AuthProvider, AuthState, LogoutButton};

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod resource_form;
pub use resource_form::ResourceForm;

mod resource_list;
pub use resource_list::ResourceList;

mod resource_editor;
pub use resource_editor::ResourceEditor;

mod dashboard_summary;
pub use dashboard_summary::DashboardSummary;

mod timer;
