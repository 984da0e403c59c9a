use dioxus::prelude::*;

use store::UserRecord;

const FORM_CSS: Asset = asset!("/assets/form.css");

/// Add/edit form for a single user record.
///
/// Owns its edit buffer and performs the save itself: `PUT` when seeded with
/// an existing record, `POST` otherwise. On success the caller receives the
/// record the API returned, which may differ from the buffer (the server
/// assigns identifiers). On failure the error is logged and the form stays
/// open with the buffer intact.
#[component]
pub fn UserForm(
    user: Option<UserRecord>,
    on_save: EventHandler<UserRecord>,
    on_cancel: EventHandler<()>,
) -> Element {
    let title = if user.is_some() {
        "Edit User"
    } else {
        "Add New User"
    };

    // Track the seeded record in a signal so the buffer re-adopts when the
    // caller hands us a different identity without remounting.
    let seed = user.clone();
    let mut buffer = use_signal(move || seed.unwrap_or_default());
    if buffer.peek().id != user.as_ref().and_then(|u| u.id) {
        buffer.set(user.clone().unwrap_or_default());
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let record = buffer();
        if !record.is_submittable() {
            return;
        }
        spawn(async move {
            let client = api::UsersApi::default();
            let result = match record.id {
                Some(id) => client.update(id, &record).await,
                None => client.create(&record).await,
            };
            match result {
                Ok(saved) => on_save.call(saved),
                Err(e) => tracing::error!("failed to save user: {e}"),
            }
        });
    };

    rsx! {
        document::Stylesheet { href: FORM_CSS }

        div {
            class: "form-card",
            form {
                onsubmit: handle_submit,
                h3 { "{title}" }

                label {
                    "Name:"
                    input {
                        r#type: "text",
                        name: "name",
                        required: true,
                        value: "{buffer.read().name}",
                        oninput: move |evt| buffer.write().name = evt.value(),
                    }
                }
                label {
                    "Username:"
                    input {
                        r#type: "text",
                        name: "username",
                        required: true,
                        value: "{buffer.read().username}",
                        oninput: move |evt| buffer.write().username = evt.value(),
                    }
                }
                label {
                    "Email:"
                    input {
                        r#type: "email",
                        name: "email",
                        required: true,
                        value: "{buffer.read().email}",
                        oninput: move |evt| buffer.write().email = evt.value(),
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        r#type: "submit",
                        class: "primary",
                        disabled: !buffer.read().is_submittable(),
                        "Save"
                    }
                    button {
                        r#type: "button",
                        class: "secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
