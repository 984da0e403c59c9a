//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod cache;
pub use cache::make_cache;

mod loading;
pub use loading::LoadingSpinner;

mod user_form;
pub use user_form::UserForm;

pub mod views;
