use dioxus::prelude::*;

use store::UserRecord;

use crate::{LoadingSpinner, UserForm};

const DETAIL_CSS: Asset = asset!("/assets/detail.css");

/// Single-record page: fetches by identifier, renders the edit form and a
/// standalone delete action. Navigation back to the collection is supplied
/// by the platform router.
///
/// Page states: loading, then either the form or a terminal error message
/// (no retry affordance).
#[component]
pub fn UserDetailView(id: u64, on_navigate_home: EventHandler<()>) -> Element {
    // Track the route parameter in a signal so the loader re-runs when it
    // changes without remounting the component.
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let mut user = use_signal(|| Option::<UserRecord>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            loading.set(true);
            match api::UsersApi::default().get(id).await {
                Ok(record) => user.set(Some(record)),
                Err(e) => {
                    tracing::error!("failed to fetch user {id}: {e}");
                    error.set(Some("Failed to fetch user.".to_string()));
                }
            }
            loading.set(false);
        }
    });

    let handle_delete = move |_| {
        let id = id_signal();
        spawn(async move {
            match api::UsersApi::default().delete(id).await {
                Ok(()) => on_navigate_home.call(()),
                Err(e) => {
                    tracing::error!("failed to delete user {id}: {e}");
                    error.set(Some("Failed to delete user.".to_string()));
                }
            }
        });
    };

    rsx! {
        document::Stylesheet { href: DETAIL_CSS }

        if loading() {
            LoadingSpinner {}
        } else if let Some(message) = error() {
            div { class: "error", "{message}" }
        } else if let Some(record) = user() {
            div {
                class: "detail-container",
                UserForm {
                    user: Some(record.clone()),
                    on_save: move |_| on_navigate_home.call(()),
                    on_cancel: move |_| on_navigate_home.call(()),
                }
                button {
                    class: "delete-user",
                    onclick: handle_delete,
                    "Delete"
                }
            }
        }
    }
}
