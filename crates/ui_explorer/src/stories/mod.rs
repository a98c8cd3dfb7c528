//! Story registries for every component.

use atomize_ui::prelude::*;
use leptos::*;

use crate::icons::{Glyph, Icon};
use crate::story::{ArgDoc, ComponentDocs, InputType, Story, StoryArgs};

pub mod button;
pub mod input;
pub mod label;

/// Every story, grouped by component in sidebar order.
pub fn all_stories() -> Vec<Story> {
    let mut stories = button::stories();
    stories.extend(input::stories());
    stories.extend(label::stories());
    stories
}

/// Documentation for every component, in sidebar order.
pub fn all_docs() -> [ComponentDocs; 3] {
    [button::docs(), input::docs(), label::docs()]
}

/// Documentation for one component by name.
pub fn docs_for(component: &str) -> Option<ComponentDocs> {
    all_docs().into_iter().find(|docs| docs.title == component)
}

/// Looks up a story by its id.
pub fn find_story(id: &str) -> Option<Story> {
    let found = all_stories().into_iter().find(|story| story.id == id);
    if found.is_none() {
        logging::warn!("no story with id `{id}`");
    }
    found
}
