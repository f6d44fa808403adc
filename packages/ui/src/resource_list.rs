use api::{format_marker, FieldKind, Record, ResourceSchema};
use dioxus::prelude::*;

/// Cards for every item of a collection, each with edit and delete actions.
#[component]
pub fn ResourceList(
    schema: &'static ResourceSchema,
    items: Vec<Record>,
    busy: bool,
    editing: Option<String>,
    on_edit: EventHandler<Record>,
    on_delete: EventHandler<String>,
) -> Element {
    if items.is_empty() {
        let label = schema.label.to_lowercase();
        return rsx! {
            p { class: "resource-empty", "No {label} yet." }
        };
    }

    let cards: Vec<(Record, bool)> = items
        .into_iter()
        .map(|record| {
            let is_editing = editing.as_deref() == Some(record.id.as_str());
            (record, is_editing)
        })
        .collect();

    rsx! {
        ul {
            class: "resource-list",
            for (record, is_editing) in cards {
                ResourceCard {
                    key: "{record.id}",
                    schema,
                    record,
                    editing: is_editing,
                    busy,
                    on_edit,
                    on_delete,
                }
            }
        }
    }
}

#[component]
fn ResourceCard(
    schema: &'static ResourceSchema,
    record: Record,
    editing: bool,
    busy: bool,
    on_edit: EventHandler<Record>,
    on_delete: EventHandler<String>,
) -> Element {
    let title_field = schema.title_field().map(|f| f.name);
    let title = title_field.map(|name| record.text(name)).unwrap_or_default();
    let details: Vec<(&'static str, FieldKind)> = schema
        .fields
        .iter()
        .filter(|f| f.kind != FieldKind::Password && Some(f.name) != title_field)
        .map(|f| (f.name, f.kind))
        .collect();
    let images: Vec<(String, &'static str)> = schema
        .files
        .iter()
        .filter_map(|f| record.image(f.name).map(|src| (src.to_string(), f.label)))
        .collect();
    let id = record.id.clone();
    let edit_target = record.clone();

    rsx! {
        li {
            class: if editing { "resource-card editing" } else { "resource-card" },
            h3 { "{title}" }
            for (name, kind) in details {
                {match kind {
                    FieldKind::Lines => rsx! {
                        ul {
                            class: "resource-lines",
                            for line in record.lines(name) {
                                li { "{line}" }
                            }
                        }
                    },
                    FieldKind::Date => {
                        let date = format_marker(Some(record.text(name).as_str()));
                        rsx! {
                            p { class: "resource-date", "{date}" }
                        }
                    }
                    _ => {
                        let text = record.text(name);
                        rsx! {
                            p { class: "resource-{name}", "{text}" }
                        }
                    }
                }}
            }
            for (src, label) in images {
                img { class: "resource-image", src: "{src}", alt: "{label}" }
            }
            div {
                class: "resource-card-actions",
                button {
                    class: "btn",
                    disabled: busy,
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-danger",
                    disabled: busy,
                    onclick: move |_| on_delete.call(id.clone()),
                    "Delete"
                }
            }
        }
    }
}
