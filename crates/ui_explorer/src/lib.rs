//! Component explorer for `atomize_ui`.
//!
//! Every component ships a registry of stories: named, argument-driven
//! renderings that mirror how the component is meant to be used. The explorer
//! lists them by component, renders the selected story live, and documents the
//! component's arguments next to it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod app;
mod icons;
pub mod stories;
mod story;
mod subscribe;

pub use app::ExplorerApp;
pub use icons::{Glyph, Icon};
pub use stories::{all_docs, all_stories, docs_for, find_story};
pub use story::{kebab_case, ArgDoc, ComponentDocs, InputType, Story, StoryArgs};
pub use subscribe::{validate_email, SubscribeForm, SubscribeStatus};

/// Mounts the explorer into the document body.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <ExplorerApp /> })
}
