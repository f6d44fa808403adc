use api::{EditorMode, Field, FieldKind, FileField, FileUpload, ListEditor, ResourceSchema};
use dioxus::prelude::*;

/// Create/edit form for one resource, bound to the editor's draft.
#[component]
pub fn ResourceForm(
    schema: &'static ResourceSchema,
    editor: Signal<ListEditor>,
    busy: bool,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mode = editor.read().mode().clone();
    let heading = match &mode {
        EditorMode::Create => format!("New {}", schema.singular.to_lowercase()),
        EditorMode::Edit { .. } => format!("Edit {}", schema.singular.to_lowercase()),
    };
    let fields: Vec<Field> = schema
        .fields
        .iter()
        .filter(|f| f.applies_to(&mode))
        .copied()
        .collect();
    let files: Vec<(FileField, bool)> = schema
        .files
        .iter()
        .map(|f| (*f, editor.read().draft().file(f.name).is_some()))
        .collect();

    rsx! {
        form {
            class: "resource-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },

            h2 { "{heading}" }

            fieldset {
                disabled: busy,
                for field in fields {
                    FieldInput { key: "{field.name}", field, editor }
                }
                for (file, attached) in files {
                    FileInput {
                        key: "{file.name}:{attached}",
                        file,
                        editor,
                    }
                }
            }

            div {
                class: "resource-form-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy {
                        "Saving..."
                    } else if mode.is_edit() {
                        "Update"
                    } else {
                        "Add {schema.singular}"
                    }
                }
                if mode.is_edit() {
                    button {
                        class: "btn",
                        r#type: "button",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[component]
fn FieldInput(field: Field, editor: Signal<ListEditor>) -> Element {
    let mut editor = editor;
    let value = editor.read().draft().value(field.name).to_string();
    let name = field.name;
    let oninput = move |evt: FormEvent| editor.write().draft_mut().set(name, evt.value());
    let rows = if field.kind == FieldKind::Lines { "4" } else { "3" };

    let control = match field.kind {
        FieldKind::LongText | FieldKind::Lines => rsx! {
            textarea {
                id: "{name}",
                rows,
                value: "{value}",
                oninput,
            }
        },
        FieldKind::Choice(options) => rsx! {
            select {
                id: "{name}",
                value: "{value}",
                oninput,
                for (choice, label) in options.iter().copied() {
                    option { value: choice, selected: choice == value, "{label}" }
                }
            }
        },
        kind => {
            let input_type = match kind {
                FieldKind::Email => "email",
                FieldKind::Date => "date",
                FieldKind::Password => "password",
                _ => "text",
            };
            rsx! {
                input {
                    id: "{name}",
                    r#type: input_type,
                    value: "{value}",
                    oninput,
                }
            }
        }
    };

    rsx! {
        div {
            class: "form-field",
            label { r#for: "{name}", "{field.label}" }
            {control}
        }
    }
}

#[component]
fn FileInput(file: FileField, editor: Signal<ListEditor>) -> Element {
    let mut editor = editor;
    let attached = editor
        .read()
        .draft()
        .file(file.name)
        .map(|f| f.file_name.clone());
    let name = file.name;

    let onchange = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(selected) = engine.files().into_iter().next() else {
            editor.write().draft_mut().detach(name);
            return;
        };
        match engine.read_file(&selected).await {
            Some(bytes) => {
                let file_name = selected.rsplit(['/', '\\']).next().unwrap_or(&selected);
                editor
                    .write()
                    .draft_mut()
                    .attach(name, FileUpload::new(file_name, bytes));
            }
            None => tracing::warn!("Could not read {selected}"),
        }
    };

    rsx! {
        div {
            class: "form-field",
            label { r#for: "{name}", "{file.label}" }
            input {
                id: "{name}",
                r#type: "file",
                accept: "image/*",
                onchange,
            }
            if let Some(file_name) = attached {
                div {
                    class: "file-attached",
                    span { "{file_name}" }
                    button {
                        class: "btn btn-small",
                        r#type: "button",
                        onclick: move |_| editor.write().draft_mut().detach(name),
                        "Remove"
                    }
                }
            }
        }
    }
}
