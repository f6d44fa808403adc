//! # List editor — the create/read/update/delete screen, minus the rendering
//!
//! A [`ListEditor`] is parameterised by a [`ResourceSchema`] and owns three
//! pieces of state for one open screen: the last fetched collection, a single
//! [`Draft`], and the [`EditorMode`].
//!
//! ```text
//!            enter_edit(item)
//!   Create ───────────────────▶ Edit { id }
//!     ▲                            │
//!     └──── submit_edit ok / cancel┘
//! ```
//!
//! ## Operations
//!
//! | Method | Network | On success | On failure |
//! |--------|---------|------------|------------|
//! | [`list`](ListEditor::list) | `GET {path}` | replace the collection | keep the previous collection |
//! | [`submit_create`](ListEditor::submit_create) | `POST {path}` | clear draft, refetch | keep draft |
//! | [`submit_edit`](ListEditor::submit_edit) | `PUT {path}/{id}` | clear draft, back to create, refetch | keep draft and mode |
//! | [`remove`](ListEditor::remove) | `DELETE {path}/{id}` | refetch | nothing to undo |
//! | [`enter_edit`](ListEditor::enter_edit) | — | copy item into draft, drop pending files | — |
//! | [`cancel`](ListEditor::cancel) | — | blank draft, back to create | — |
//!
//! Failures are logged here and also returned, so the caller can react to
//! [`ApiError::Unauthorized`]. The collection is never patched locally: every
//! successful mutation is followed by a full refetch. A failed refetch does not
//! make the mutation fail; it comes back as [`Mutation::RefreshFailed`] with the
//! previous collection still in place.

use std::collections::BTreeMap;

use serde_json::Value;
use store::KeyValueStorage;
use tracing::{error, info, warn};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::Record;
use crate::request::{ApiRequest, FileUpload};
use crate::schema::{join_lines, FieldKind, ResourceSchema};
use crate::transport::Transport;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Create,
    Edit {
        id: String,
    },
}

impl EditorMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit { .. })
    }

    pub fn editing_id(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Edit { id } => Some(id),
        }
    }
}

/// Uncommitted form values plus pending file attachments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    values: BTreeMap<String, String>,
    files: BTreeMap<String, FileUpload>,
}

impl Draft {
    /// Empty form with each field's default.
    pub fn blank(schema: &ResourceSchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|f| (f.name.to_string(), f.default.to_string()))
            .collect();
        Self {
            values,
            files: BTreeMap::new(),
        }
    }

    /// Form pre-filled from an existing item. Files are never pre-filled.
    pub fn from_record(schema: &ResourceSchema, record: &Record) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|field| {
                let value = match field.kind {
                    FieldKind::Password => String::new(),
                    FieldKind::Lines => join_lines(&record.lines(field.name)),
                    FieldKind::Date => record.text(field.name).chars().take(10).collect(),
                    FieldKind::Choice(_) => {
                        let text = record.text(field.name);
                        if text.is_empty() {
                            field.default.to_string()
                        } else {
                            text
                        }
                    }
                    FieldKind::Text | FieldKind::Email | FieldKind::LongText => {
                        record.text(field.name)
                    }
                };
                (field.name.to_string(), value)
            })
            .collect();
        Self {
            values,
            files: BTreeMap::new(),
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn file(&self, name: &str) -> Option<&FileUpload> {
        self.files.get(name)
    }

    pub fn attach(&mut self, name: &str, file: FileUpload) {
        self.files.insert(name.to_string(), file);
    }

    pub fn detach(&mut self, name: &str) {
        self.files.remove(name);
    }

    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }
}

/// Result of a mutation the API accepted.
#[derive(Clone, Debug, PartialEq)]
pub enum Mutation {
    /// The collection was refetched.
    Refreshed,
    /// The refetch failed; the collection is the one from before the mutation.
    RefreshFailed(ApiError),
}

/// State and operations of one resource management screen.
#[derive(Clone, Debug, PartialEq)]
pub struct ListEditor {
    schema: &'static ResourceSchema,
    items: Vec<Record>,
    draft: Draft,
    mode: EditorMode,
}

impl ListEditor {
    pub fn new(schema: &'static ResourceSchema) -> Self {
        Self {
            schema,
            items: Vec::new(),
            draft: Draft::blank(schema),
            mode: EditorMode::Create,
        }
    }

    pub fn schema(&self) -> &'static ResourceSchema {
        self.schema
    }

    pub fn items(&self) -> &[Record] {
        &self.items
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// Fetch the whole collection, replacing the one on screen.
    pub async fn list<T: Transport, S: KeyValueStorage>(
        &mut self,
        client: &ApiClient<T, S>,
    ) -> Result<(), ApiError> {
        match client
            .send::<Vec<Value>>(ApiRequest::get(self.schema.path))
            .await
        {
            Ok(values) => {
                let total = values.len();
                self.items = values.into_iter().filter_map(Record::from_value).collect();
                if self.items.len() < total {
                    warn!(
                        resource = self.schema.name,
                        skipped = total - self.items.len(),
                        "items without a usable _id were skipped"
                    );
                }
                Ok(())
            }
            Err(e) => {
                error!(resource = self.schema.name, "failed to fetch: {e}");
                Err(e)
            }
        }
    }

    /// Create or update depending on the current mode.
    pub async fn submit<T: Transport, S: KeyValueStorage>(
        &mut self,
        client: &ApiClient<T, S>,
    ) -> Result<Mutation, ApiError> {
        match self.mode.clone() {
            EditorMode::Create => self.submit_create(client).await,
            EditorMode::Edit { id } => self.submit_edit(client, &id).await,
        }
    }

    pub async fn submit_create<T: Transport, S: KeyValueStorage>(
        &mut self,
        client: &ApiClient<T, S>,
    ) -> Result<Mutation, ApiError> {
        let body = self.schema.payload(&self.draft, &EditorMode::Create);
        let request = ApiRequest::post(self.schema.path).with_body(body);
        if let Err(e) = client.send_discarding(request).await {
            error!(resource = self.schema.name, "failed to create: {e}");
            return Err(e);
        }
        info!(resource = self.schema.name, "created");
        self.draft = Draft::blank(self.schema);
        Ok(self.refresh_after_mutation(client).await)
    }

    /// Copy `record` into the draft and target it for the next submit.
    pub fn enter_edit(&mut self, record: &Record) {
        self.draft = Draft::from_record(self.schema, record);
        self.mode = EditorMode::Edit {
            id: record.id.clone(),
        };
    }

    /// Update the item at `id` from the draft. Files left unset are not sent,
    /// which keeps the server-side images.
    pub async fn submit_edit<T: Transport, S: KeyValueStorage>(
        &mut self,
        client: &ApiClient<T, S>,
        id: &str,
    ) -> Result<Mutation, ApiError> {
        let mode = EditorMode::Edit { id: id.to_string() };
        let body = self.schema.payload(&self.draft, &mode);
        let request = ApiRequest::put(self.schema.item_path(id)).with_body(body);
        if let Err(e) = client.send_discarding(request).await {
            error!(resource = self.schema.name, id, "failed to update: {e}");
            return Err(e);
        }
        info!(resource = self.schema.name, id, "updated");
        self.cancel();
        Ok(self.refresh_after_mutation(client).await)
    }

    pub async fn remove<T: Transport, S: KeyValueStorage>(
        &mut self,
        client: &ApiClient<T, S>,
        id: &str,
    ) -> Result<Mutation, ApiError> {
        let request = ApiRequest::delete(self.schema.item_path(id));
        if let Err(e) = client.send_discarding(request).await {
            error!(resource = self.schema.name, id, "failed to delete: {e}");
            return Err(e);
        }
        info!(resource = self.schema.name, id, "deleted");
        Ok(self.refresh_after_mutation(client).await)
    }

    async fn refresh_after_mutation<T: Transport, S: KeyValueStorage>(
        &mut self,
        client: &ApiClient<T, S>,
    ) -> Mutation {
        match self.list(client).await {
            Ok(()) => Mutation::Refreshed,
            Err(e) => {
                warn!(resource = self.schema.name, "mutation applied but refetch failed");
                Mutation::RefreshFailed(e)
            }
        }
    }

    /// Drop the draft and return to create mode.
    pub fn cancel(&mut self) {
        self.draft = Draft::blank(self.schema);
        self.mode = EditorMode::Create;
    }
}
