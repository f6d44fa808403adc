//! # API crate: the console's side of the content REST API
//!
//! Everything the admin console knows about the remote service lives here,
//! independent of any rendering. The `ui` crate drives these types from Dioxus
//! components; the tests drive them against an in-memory backend.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`request`] | Plain-data requests, bodies (JSON, multipart), responses and the `data` envelope |
//! | [`transport`] | [`Transport`] trait and the `reqwest`-backed [`HttpTransport`] |
//! | [`client`] | [`ApiClient`]: bearer token injection, envelope unwrapping, 401 → signed out |
//! | [`error`] | [`ApiError`] taxonomy |
//! | [`auth`] | Sign-in, sign-out, session restore |
//! | [`schema`] | [`ResourceSchema`] descriptors for users, articles, projects, reviews |
//! | [`models`] | [`Record`], [`Stats`] and the dashboard [`CountUp`] |
//! | [`editor`] | [`ListEditor`]: the generic create/read/update/delete state machine |
//! | [`guard`] | Route guard policy |
//!
//! ## Endpoints consumed
//!
//! - `POST /auth/sign-in`
//! - `GET|POST /users`, `PUT|DELETE /users/:id` (JSON)
//! - `GET|POST /articles`, `PUT|DELETE /articles/:id` (multipart)
//! - `GET|POST /projects`, `PUT|DELETE /projects/:id` (multipart)
//! - `GET|POST /reviews`, `PUT|DELETE /reviews/:id` (multipart)
//! - `GET /stats`

pub mod auth;
pub mod client;
pub mod editor;
pub mod error;
pub mod guard;
pub mod models;
pub mod request;
pub mod schema;
pub mod transport;

#[cfg(test)]
mod mock;

pub use auth::{login, logout, restore, Credentials};
pub use client::ApiClient;
pub use editor::{Draft, EditorMode, ListEditor, Mutation};
pub use error::ApiError;
pub use guard::{evaluate as evaluate_guard, GuardOutcome, GuardPolicy};
pub use models::{format_marker, CountUp, Record, Stats};
pub use request::{ApiRequest, FileUpload, Method, RequestBody};
pub use schema::{Encoding, Field, FieldKind, FileField, ResourceSchema};
pub use transport::{HttpTransport, Transport};

pub use store::{Identity, Session};

/// Fetch the dashboard aggregate.
///
/// # Errors
///
/// Any [`ApiError`]; the dashboard logs it and keeps showing its placeholder.
pub async fn fetch_stats<T: Transport, S: store::KeyValueStorage>(
    client: &ApiClient<T, S>,
) -> Result<Stats, ApiError> {
    client.send(ApiRequest::get(models::STATS_PATH)).await
}
