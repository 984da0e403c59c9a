use dioxus::prelude::*;

use ui::views::UserDetailView;

use crate::Route;

/// Detail/edit page at `/user/:id`.
#[component]
pub fn UserDetail(id: u64) -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "page",
            UserDetailView {
                id,
                on_navigate_home: move |_| {
                    nav.push(Route::Home {});
                },
            }
        }
    }
}
