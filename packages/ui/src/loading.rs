use dioxus::prelude::*;

const SPINNER_CSS: Asset = asset!("/assets/spinner.css");

/// Spinner shown while a network load is in flight.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        document::Stylesheet { href: SPINNER_CSS }

        div {
            class: "spinner-wrap",
            div { class: "spinner" }
            span { class: "spinner-label", "Loading..." }
        }
    }
}
