//! Generic management screen: list a collection, create, edit and delete items.
//!
//! Everything resource-specific comes from the [`ResourceSchema`]; the state
//! machine itself is [`ListEditor`].

use api::{ApiError, ListEditor, Mutation, Record, ResourceSchema};
use dioxus::prelude::*;

use crate::activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};
use crate::auth::{report_api_error, use_auth, AuthState};
use crate::client::ConsoleClient;
use crate::resource_form::ResourceForm;
use crate::resource_list::ResourceList;

#[derive(Clone, Debug, PartialEq)]
enum Operation {
    Refresh,
    Submit,
    Remove(String),
}

impl Operation {
    fn describe(&self, schema: &ResourceSchema) -> String {
        let singular = schema.singular.to_lowercase();
        match self {
            Operation::Refresh => format!("Loading {}", schema.label.to_lowercase()),
            Operation::Submit => format!("Saving {singular}"),
            Operation::Remove(_) => format!("Deleting {singular}"),
        }
    }
}

#[derive(Clone, Copy)]
struct EditorHandles {
    editor: Signal<ListEditor>,
    busy: Signal<bool>,
    auth: Signal<AuthState>,
    log: Signal<ActivityLog>,
}

/// Run one operation against a working copy of the editor, then publish it.
/// Calls made while another is in flight are ignored.
async fn perform(client: ConsoleClient, handles: EditorHandles, op: Operation) {
    let EditorHandles {
        mut editor,
        mut busy,
        mut auth,
        mut log,
    } = handles;
    if *busy.peek() {
        return;
    }
    busy.set(true);

    let mut working = editor.peek().clone();
    let schema = working.schema();
    let was_edit = working.mode().is_edit();
    let result: Result<Mutation, ApiError> = match &op {
        Operation::Refresh => working.list(&client).await.map(|()| Mutation::Refreshed),
        Operation::Submit => working.submit(&client).await,
        Operation::Remove(id) => working.remove(&client, id).await,
    };
    editor.set(working);

    match result {
        Ok(mutation) => {
            let done = match op {
                Operation::Refresh => None,
                Operation::Submit if was_edit => Some(format!("{} updated", schema.singular)),
                Operation::Submit => Some(format!("{} created", schema.singular)),
                Operation::Remove(_) => Some(format!("{} deleted", schema.singular)),
            };
            if let Some(message) = done {
                log_activity(&mut log, LogLevel::Success, &message);
            }
            if let Mutation::RefreshFailed(e) = mutation {
                let action = Operation::Refresh.describe(schema);
                report_api_error(&mut auth, &mut log, &action, &e);
            }
        }
        Err(e) => report_api_error(&mut auth, &mut log, &op.describe(schema), &e),
    }
    busy.set(false);
}

#[component]
pub fn ResourceEditor(schema: &'static ResourceSchema) -> Element {
    let mut editor = use_signal(|| ListEditor::new(schema));
    let busy = use_signal(|| false);
    let handles = EditorHandles {
        editor,
        busy,
        auth: use_auth(),
        log: use_activity_log(),
    };

    let run = move |op: Operation| {
        let client = consume_context::<ConsoleClient>();
        spawn(perform(client, handles, op));
    };

    use_effect(move || run(Operation::Refresh));

    let snapshot = editor.read().clone();
    let editing = snapshot.mode().editing_id().map(str::to_string);

    rsx! {
        section {
            class: "resource-editor",
            header {
                class: "resource-editor-header",
                h1 { "{schema.label}" }
                button {
                    class: "btn",
                    disabled: busy(),
                    onclick: move |_| run(Operation::Refresh),
                    "Refresh"
                }
            }

            ResourceForm {
                schema,
                editor,
                busy: busy(),
                on_submit: move |_| run(Operation::Submit),
                on_cancel: move |_| editor.write().cancel(),
            }

            ResourceList {
                schema,
                items: snapshot.items().to_vec(),
                busy: busy(),
                editing,
                on_edit: move |record: Record| editor.write().enter_edit(&record),
                on_delete: move |id: String| run(Operation::Remove(id)),
            }
        }
    }
}
