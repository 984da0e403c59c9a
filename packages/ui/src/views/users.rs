use dioxus::prelude::*;

use store::{UserCollection, UserRecord};

use crate::icons::{FaCircleInfo, FaPen, FaPlus, FaTrashCan};
use crate::{make_cache, Icon, LoadingSpinner, UserForm};

const USERS_CSS: Asset = asset!("/assets/users.css");

/// Collection view: live search, paginated table and the embedded add/edit
/// form.
///
/// Mount protocol: adopt the cached list when present, otherwise fetch the
/// full list and warm the cache. A failed initial fetch replaces the page
/// with an error message; a failed delete only raises a dismissible banner
/// and leaves the table interactive.
#[component]
pub fn UsersView() -> Element {
    let mut collection = use_signal(UserCollection::new);
    let mut loading = use_signal(|| true);
    let mut load_error = use_signal(|| Option::<String>::None);
    let mut delete_error = use_signal(|| Option::<String>::None);
    let mut editing = use_signal(|| false);
    let mut current_user = use_signal(|| Option::<UserRecord>::None);

    let _loader = use_resource(move || async move {
        let cache = make_cache();
        if let Some(users) = cache.load().await {
            collection.write().adopt(users);
            loading.set(false);
            return;
        }
        match api::UsersApi::default().list().await {
            Ok(users) => {
                cache.save(&users).await;
                collection.write().adopt(users);
            }
            Err(e) => {
                tracing::error!("failed to fetch users: {e}");
                load_error.set(Some("Failed to fetch users.".to_string()));
            }
        }
        loading.set(false);
    });

    let handle_delete = move |id: u64| {
        spawn(async move {
            match api::UsersApi::default().delete(id).await {
                Ok(()) => {
                    let users = {
                        let mut collection = collection.write();
                        collection.remove(id);
                        collection.users().to_vec()
                    };
                    make_cache().save(&users).await;
                    delete_error.set(None);
                }
                Err(e) => {
                    tracing::error!("failed to delete user {id}: {e}");
                    delete_error.set(Some("Failed to delete user.".to_string()));
                }
            }
        });
    };

    let handle_save = move |saved: UserRecord| {
        let was_editing = current_user.peek().is_some();
        let users = {
            let mut collection = collection.write();
            collection.apply_save(saved, was_editing);
            collection.users().to_vec()
        };
        spawn(async move {
            make_cache().save(&users).await;
        });
        editing.set(false);
        current_user.set(None);
    };

    rsx! {
        document::Stylesheet { href: USERS_CSS }

        if loading() {
            LoadingSpinner {}
        } else if let Some(message) = load_error() {
            div { class: "error", "{message}" }
        } else {
            div {
                class: "users-container",

                div {
                    class: "users-header",
                    h2 { "User Management" }
                    input {
                        class: "search-input",
                        r#type: "text",
                        placeholder: "Search by username, name, or email",
                        value: "{collection.read().term()}",
                        oninput: move |evt| collection.write().search(&evt.value()),
                    }
                    button {
                        class: "add-user",
                        onclick: move |_| {
                            current_user.set(None);
                            editing.set(true);
                        },
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        "Add New User"
                    }
                }

                if editing() {
                    UserForm {
                        user: current_user(),
                        on_save: handle_save,
                        on_cancel: move |_| {
                            editing.set(false);
                            current_user.set(None);
                        },
                    }
                } else {
                    if let Some(message) = delete_error() {
                        div {
                            class: "banner",
                            span { "{message}" }
                            button {
                                class: "banner-dismiss",
                                onclick: move |_| delete_error.set(None),
                                "Dismiss"
                            }
                        }
                    }

                    table {
                        class: "user-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Username" }
                                th { "Name" }
                                th { "Email" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for user in collection.read().current_page().to_vec() {
                                UserRow {
                                    key: "{user.id.unwrap_or_default()}-{user.username}",
                                    user: user.clone(),
                                    on_more: move |user: UserRecord| {
                                        tracing::info!("more details for {user:?}");
                                    },
                                    on_edit: move |user: UserRecord| {
                                        current_user.set(Some(user));
                                        editing.set(true);
                                    },
                                    on_delete: handle_delete,
                                }
                            }
                        }
                    }

                    div {
                        class: "pagination",
                        for page in 1..=collection.read().page_count() {
                            button {
                                key: "{page}",
                                class: if collection.read().page() == page { "active" },
                                onclick: move |_| collection.write().set_page(page),
                                "{page}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One table row with its per-record actions. "More" is a log-only action;
/// edit and delete bubble up to the view.
#[component]
fn UserRow(
    user: UserRecord,
    on_more: EventHandler<UserRecord>,
    on_edit: EventHandler<UserRecord>,
    on_delete: EventHandler<u64>,
) -> Element {
    let id_label = user.id.map(|id| id.to_string()).unwrap_or_default();
    let row_user = user.clone();

    rsx! {
        tr {
            td { "{id_label}" }
            td { "{user.username}" }
            td { "{user.name}" }
            td { "{user.email}" }
            td {
                class: "row-actions",
                button {
                    class: "more",
                    title: "More details",
                    onclick: {
                        let user = row_user.clone();
                        move |_| on_more.call(user.clone())
                    },
                    Icon { icon: FaCircleInfo, width: 14, height: 14 }
                }
                button {
                    class: "edit",
                    title: "Edit",
                    onclick: {
                        let user = row_user.clone();
                        move |_| on_edit.call(user.clone())
                    },
                    Icon { icon: FaPen, width: 14, height: 14 }
                }
                if let Some(id) = user.id {
                    button {
                        class: "delete",
                        title: "Delete",
                        onclick: move |_| on_delete.call(id),
                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
