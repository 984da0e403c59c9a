use dioxus::prelude::*;

use ui::views::UsersView;

/// Collection view at `/`.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "page",
            h1 { class: "page-heading", "User Management" }
            UsersView {}
        }
    }
}
