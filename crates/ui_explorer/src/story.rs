//! Story and documentation model shared by every component registry.

use atomize_ui::{ButtonSize, ButtonVariant};
use leptos::View;
use serde::{Deserialize, Serialize};

/// Native input types the stories exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
    /// `text`
    Text,
    /// `email`
    Email,
    /// `password`
    Password,
    /// `search`
    Search,
    /// `tel`
    Tel,
    /// `url`
    Url,
    /// `number`
    Number,
    /// `date`
    Date,
    /// `time`
    Time,
    /// `datetime-local`
    DatetimeLocal,
    /// `month`
    Month,
    /// `week`
    Week,
    /// `file`
    File,
}

impl InputType {
    /// Value of the native `type` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Search => "search",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Number => "number",
            Self::Date => "date",
            Self::Time => "time",
            Self::DatetimeLocal => "datetime-local",
            Self::Month => "month",
            Self::Week => "week",
            Self::File => "file",
        }
    }
}

/// Arguments a story renders from, shown as JSON in the docs panel.
///
/// Unset fields are omitted from the JSON and leave the component default in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoryArgs {
    /// Button variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<ButtonVariant>,
    /// Button size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ButtonSize>,
    /// Caller classes.
    #[serde(rename = "className", skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<String>,
    /// Native input type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<InputType>,
    /// Input placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Disabled state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Read-only input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    /// Required input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Invalid input.
    #[serde(rename = "aria-invalid", skip_serializing_if = "Option::is_none")]
    pub aria_invalid: Option<bool>,
    /// Accessible name.
    #[serde(rename = "aria-label", skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    /// Autofill hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_complete: Option<String>,
    /// Input pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Virtual keyboard hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_mode: Option<String>,
    /// Id of the labelled control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_for: Option<String>,
    /// Adopt the story's child element as the root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_child: Option<bool>,
}

impl StoryArgs {
    /// Variant, or the default variant when unset.
    pub fn variant(&self) -> ButtonVariant {
        self.variant.unwrap_or_default()
    }

    /// Size, or the default size when unset.
    pub fn size(&self) -> ButtonSize {
        self.size.unwrap_or_default()
    }

    /// Caller classes, empty when unset.
    pub fn class(&self) -> String {
        self.class.clone().unwrap_or_default()
    }

    /// Input type token, `text` when unset.
    pub fn input_type(&self) -> &'static str {
        self.input_type.map_or("text", InputType::token)
    }

    /// Whether the control is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }

    /// Pretty-printed JSON for the docs panel.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|err| format!("{{\"error\": \"{err}\"}}"))
    }
}

/// One documented row of a component's argument table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgDoc {
    /// Argument name as written at the call site.
    pub name: &'static str,
    /// Type summary.
    pub type_summary: &'static str,
    /// Default value, if any.
    pub default: Option<&'static str>,
    /// Usage guidance.
    pub description: &'static str,
}

/// Component-level documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentDocs {
    /// Component name.
    pub title: &'static str,
    /// One-paragraph description.
    pub summary: &'static str,
    /// Argument table.
    pub args: &'static [ArgDoc],
}

/// A named, renderable example of a component.
#[derive(Clone)]
pub struct Story {
    /// Stable kebab-case id, `component--story`.
    pub id: String,
    /// Component the story belongs to.
    pub component: &'static str,
    /// Story name.
    pub title: &'static str,
    /// What the story demonstrates.
    pub summary: &'static str,
    /// Arguments passed to `render`.
    pub args: StoryArgs,
    /// Renders the story from its arguments.
    pub render: fn(&StoryArgs) -> View,
}

impl Story {
    /// Creates a story and derives its id from the component and story names.
    pub fn new(
        component: &'static str,
        title: &'static str,
        summary: &'static str,
        args: StoryArgs,
        render: fn(&StoryArgs) -> View,
    ) -> Self {
        Self {
            id: format!("{}--{}", kebab_case(component), kebab_case(title)),
            component,
            title,
            summary,
            args,
            render,
        }
    }

    /// Renders the story.
    pub fn view(&self) -> View {
        (self.render)(&self.args)
    }
}

impl std::fmt::Debug for Story {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Story")
            .field("id", &self.id)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// Converts `PascalCase` names to `kebab-case`.
pub fn kebab_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (index, &ch) in chars.iter().enumerate() {
        if ch.is_ascii_uppercase() && index > 0 {
            let prev = chars[index - 1];
            let next_is_lower = chars.get(index + 1).is_some_and(|next| next.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push('-');
            }
        }
        if ch == ' ' || ch == '_' {
            if !out.ends_with('-') {
                out.push('-');
            }
            continue;
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}
