//! # Resource descriptors
//!
//! Every management screen follows the same pattern, so the differences between
//! them are captured as data. A [`ResourceSchema`] names the endpoint, the form
//! fields, the file attachments, and how create/update bodies are encoded. The
//! generic [`ListEditor`](crate::editor::ListEditor) and the UI's resource screen
//! are driven entirely by it.
//!
//! | Schema | Endpoint | Body | Files |
//! |--------|----------|------|-------|
//! | [`USERS`] | `/users` | JSON | — |
//! | [`ARTICLES`] | `/articles` | multipart | `imgPath`, `logoPath` |
//! | [`PROJECTS`] | `/projects` | multipart | `imgPath` |
//! | [`REVIEWS`] | `/reviews` | multipart | `imgPath` |
//!
//! ## Field kinds
//!
//! [`FieldKind::Lines`] fields are edited as newline-separated text and sent as an
//! ordered list: a JSON array in JSON bodies, a JSON-encoded array string in
//! multipart bodies. [`FieldKind::Password`] fields are only sent when creating.
//! Everything else is sent as the raw string, empty values included.

use serde_json::{Map, Value};

use crate::editor::{Draft, EditorMode};
use crate::request::{MultipartBody, RequestBody};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Multipart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    LongText,
    /// `YYYY-MM-DD`; longer timestamps are truncated when editing.
    Date,
    /// One entry per line.
    Lines,
    /// `(value, label)` pairs.
    Choice(&'static [(&'static str, &'static str)]),
    /// Write-only, create-only.
    Password,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: &'static str,
}

impl Field {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            default: "",
        }
    }

    const fn with_default(self, default: &'static str) -> Self {
        Self { default, ..self }
    }

    /// Whether the field is part of the form and payload in `mode`.
    pub fn applies_to(&self, mode: &EditorMode) -> bool {
        !(self.kind == FieldKind::Password && mode.is_edit())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileField {
    pub name: &'static str,
    pub label: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ResourceSchema {
    /// Collection name, e.g. `"projects"`.
    pub name: &'static str,
    /// Screen title.
    pub label: &'static str,
    /// Label for one item, used on buttons.
    pub singular: &'static str,
    /// Collection endpoint; items live at `{path}/{id}`.
    pub path: &'static str,
    pub encoding: Encoding,
    pub fields: &'static [Field],
    pub files: &'static [FileField],
}

impl ResourceSchema {
    pub fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.path, id)
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// First text-like field, used as an item's heading.
    pub fn title_field(&self) -> Option<&Field> {
        self.fields
            .iter()
            .find(|f| matches!(f.kind, FieldKind::Text | FieldKind::Email))
    }

    /// Build the create/update body for `draft`.
    pub fn payload(&self, draft: &Draft, mode: &EditorMode) -> RequestBody {
        let fields = self.fields.iter().filter(|f| f.applies_to(mode));
        match self.encoding {
            Encoding::Json => {
                let mut body = Map::new();
                for field in fields {
                    let raw = draft.value(field.name);
                    let value = match field.kind {
                        FieldKind::Lines => Value::from(split_lines(raw)),
                        _ => Value::String(raw.to_string()),
                    };
                    body.insert(field.name.to_string(), value);
                }
                RequestBody::Json(Value::Object(body))
            }
            Encoding::Multipart => {
                let mut body = MultipartBody::default();
                for field in fields {
                    let raw = draft.value(field.name);
                    match field.kind {
                        FieldKind::Lines => {
                            let encoded = Value::from(split_lines(raw)).to_string();
                            body.text(field.name, encoded);
                        }
                        _ => body.text(field.name, raw),
                    }
                }
                for file in self.files {
                    if let Some(upload) = draft.file(file.name) {
                        body.file(file.name, upload.clone());
                    }
                }
                RequestBody::Multipart(body)
            }
        }
    }
}

/// Split newline-separated text into trimmed, non-blank entries, in order.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`split_lines`] for editing.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

const ROLES: &[(&str, &str)] = &[("user", "User"), ("admin", "Admin")];

pub static USERS: ResourceSchema = ResourceSchema {
    name: "users",
    label: "Users",
    singular: "User",
    path: "/users",
    encoding: Encoding::Json,
    fields: &[
        Field::new("name", "Name", FieldKind::Text),
        Field::new("email", "Email", FieldKind::Email),
        Field::new("password", "Password", FieldKind::Password),
        Field::new("role", "Role", FieldKind::Choice(ROLES)).with_default("user"),
    ],
    files: &[],
};

pub static ARTICLES: ResourceSchema = ResourceSchema {
    name: "articles",
    label: "Professional experience",
    singular: "Article",
    path: "/articles",
    encoding: Encoding::Multipart,
    fields: &[
        Field::new("title", "Title", FieldKind::Text),
        Field::new("review", "Review", FieldKind::LongText),
        Field::new("date", "Date", FieldKind::Date),
        Field::new(
            "responsibilities",
            "Responsibilities (one per line)",
            FieldKind::Lines,
        ),
    ],
    files: &[
        FileField {
            name: "imgPath",
            label: "Banner",
        },
        FileField {
            name: "logoPath",
            label: "Logo",
        },
    ],
};

pub static PROJECTS: ResourceSchema = ResourceSchema {
    name: "projects",
    label: "Projects",
    singular: "Project",
    path: "/projects",
    encoding: Encoding::Multipart,
    fields: &[
        Field::new("title", "Project title", FieldKind::Text),
        Field::new("description", "Description", FieldKind::LongText),
        Field::new("date", "Date", FieldKind::Date),
        Field::new(
            "technologies",
            "Technologies (one per line)",
            FieldKind::Lines,
        ),
    ],
    files: &[FileField {
        name: "imgPath",
        label: "Image",
    }],
};

pub static REVIEWS: ResourceSchema = ResourceSchema {
    name: "reviews",
    label: "Reviews",
    singular: "Review",
    path: "/reviews",
    encoding: Encoding::Multipart,
    fields: &[
        Field::new("name", "Name", FieldKind::Text),
        Field::new("mentions", "Mentions", FieldKind::Text),
        Field::new("review", "Review", FieldKind::LongText),
    ],
    files: &[FileField {
        name: "imgPath",
        label: "Photo",
    }],
};

/// All managed resources, in navigation order.
pub static ALL: [&ResourceSchema; 4] = [&USERS, &ARTICLES, &PROJECTS, &REVIEWS];
