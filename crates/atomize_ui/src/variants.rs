//! Variant and size tables for the styled controls.
//!
//! Each axis is a closed enum with a stable kebab-case token. Resolution is a
//! compile-time table lookup followed by [`merge_classes`], so identical inputs
//! always produce byte-identical class strings.

use std::fmt;
use std::str::FromStr;

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::class_names::{merge_class, merge_classes};

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive";

const INPUT_BASE: &str = "file:text-foreground placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground dark:bg-input/30 border-input h-9 w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none file:inline-flex file:h-7 file:border-0 file:bg-transparent file:text-sm file:font-medium disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-50 md:text-sm focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-[3px] aria-invalid:ring-destructive/20 dark:aria-invalid:ring-destructive/40 aria-invalid:border-destructive";

const LABEL_BASE: &str = "flex items-center gap-2 text-sm leading-none font-medium select-none group-data-[disabled=true]:pointer-events-none group-data-[disabled=true]:opacity-50 peer-disabled:cursor-not-allowed peer-disabled:opacity-50";

/// Error returned when a style token does not name a known variant or size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleTokenError {
    /// The token is not one of [`ButtonVariant::ALL`].
    #[error("unknown button variant `{0}`")]
    UnknownVariant(String),
    /// The token is not one of [`ButtonSize::ALL`].
    #[error("unknown button size `{0}`")]
    UnknownSize(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
/// Visual style category of a button.
pub enum ButtonVariant {
    /// Primary action.
    Default,
    /// Risky or irreversible action.
    Destructive,
    /// Bordered, reduced emphasis.
    Outline,
    /// Muted fill, reduced emphasis.
    Secondary,
    /// No chrome until hovered.
    Ghost,
    /// Inline textual action. Has no size axis.
    Link,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl ButtonVariant {
    /// Every variant in declaration order.
    pub const ALL: [ButtonVariant; 6] = [
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    /// Stable kebab-case token, also emitted as `data-variant`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
            Self::Secondary => "secondary",
            Self::Ghost => "ghost",
            Self::Link => "link",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Destructive => "bg-destructive text-white hover:bg-destructive/90 focus-visible:ring-destructive/20 dark:focus-visible:ring-destructive/40 dark:bg-destructive/60",
            Self::Outline => "border bg-background shadow-xs hover:bg-accent hover:text-accent-foreground dark:bg-input/30 dark:border-input dark:hover:bg-input/50",
            Self::Secondary => "bg-secondary text-secondary-foreground hover:bg-secondary/80",
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground dark:hover:bg-accent/50",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }

    /// Parses a token, falling back to [`ButtonVariant::Default`] with a
    /// warning when it is unknown.
    pub fn from_token_or_default(token: &str) -> Self {
        token.parse().unwrap_or_else(|err: StyleTokenError| {
            logging::warn!("{err}; falling back to `default`");
            Self::default()
        })
    }
}

impl FromStr for ButtonVariant {
    type Err = StyleTokenError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.token() == token.trim())
            .ok_or_else(|| StyleTokenError::UnknownVariant(token.to_string()))
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl From<String> for ButtonVariant {
    fn from(token: String) -> Self {
        Self::from_token_or_default(&token)
    }
}

impl From<ButtonVariant> for String {
    fn from(variant: ButtonVariant) -> Self {
        variant.token().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
/// Control dimension, independent of the variant.
pub enum ButtonSize {
    /// Standard text button.
    Default,
    /// Compact text button.
    Sm,
    /// Large text button.
    Lg,
    /// Square icon-only button.
    Icon,
    /// Compact icon-only button.
    IconSm,
    /// Large icon-only button.
    IconLg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Default
    }
}

impl ButtonSize {
    /// Every size in declaration order.
    pub const ALL: [ButtonSize; 6] = [
        Self::Default,
        Self::Sm,
        Self::Lg,
        Self::Icon,
        Self::IconSm,
        Self::IconLg,
    ];

    /// Stable kebab-case token, also emitted as `data-size`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Lg => "lg",
            Self::Icon => "icon",
            Self::IconSm => "icon-sm",
            Self::IconLg => "icon-lg",
        }
    }

    /// Icon sizes render no text, so the caller must supply an accessible name.
    pub fn is_icon(self) -> bool {
        matches!(self, Self::Icon | Self::IconSm | Self::IconLg)
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Default => "h-9 px-4 py-2 has-[>svg]:px-3",
            Self::Sm => "h-8 rounded-md gap-1.5 px-3 has-[>svg]:px-2.5",
            Self::Lg => "h-10 rounded-md px-6 has-[>svg]:px-4",
            Self::Icon => "size-9",
            Self::IconSm => "size-8",
            Self::IconLg => "size-10",
        }
    }

    /// Parses a token, falling back to [`ButtonSize::Default`] with a warning
    /// when it is unknown.
    pub fn from_token_or_default(token: &str) -> Self {
        token.parse().unwrap_or_else(|err: StyleTokenError| {
            logging::warn!("{err}; falling back to `default`");
            Self::default()
        })
    }
}

impl FromStr for ButtonSize {
    type Err = StyleTokenError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.token() == token.trim())
            .ok_or_else(|| StyleTokenError::UnknownSize(token.to_string()))
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl From<String> for ButtonSize {
    fn from(token: String) -> Self {
        Self::from_token_or_default(&token)
    }
}

impl From<ButtonSize> for String {
    fn from(size: ButtonSize) -> Self {
        size.token().to_string()
    }
}

/// A button style selection: one point on the variant × size grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    /// Visual style category.
    pub variant: ButtonVariant,
    /// Control dimension.
    pub size: ButtonSize,
}

impl ButtonStyle {
    /// Creates a selection from typed axes.
    pub fn new(variant: ButtonVariant, size: ButtonSize) -> Self {
        Self { variant, size }
    }

    /// Creates a selection from raw tokens; unknown tokens fall back to the
    /// default entry of their axis.
    pub fn from_tokens(variant: &str, size: &str) -> Self {
        Self {
            variant: ButtonVariant::from_token_or_default(variant),
            size: ButtonSize::from_token_or_default(size),
        }
    }

    /// Resolves the selection to its class string. See [`button_variants`].
    pub fn resolve(self, extra: &str) -> String {
        button_variants(self, extra)
    }
}

/// Resolves a button style plus caller classes into one class string.
///
/// Tokens are ordered base, variant, size, caller. Caller tokens win any
/// conflict with library tokens. The link variant carries no size tokens.
pub fn button_variants(style: ButtonStyle, extra: &str) -> String {
    let size = match style.variant {
        ButtonVariant::Link => "",
        _ => style.size.classes(),
    };
    merge_classes([BUTTON_BASE, style.variant.classes(), size, extra])
}

/// Input base presentation merged with caller classes.
pub fn input_classes(extra: &str) -> String {
    merge_class(INPUT_BASE, extra)
}

/// Label base presentation merged with caller classes.
pub fn label_classes(extra: &str) -> String {
    merge_class(LABEL_BASE, extra)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(classes: &str) -> Vec<&str> {
        classes.split_ascii_whitespace().collect()
    }

    #[test]
    fn tokens_round_trip_through_from_str() {
        for variant in ButtonVariant::ALL {
            assert_eq!(variant.token().parse::<ButtonVariant>(), Ok(variant));
        }
        for size in ButtonSize::ALL {
            assert_eq!(size.token().parse::<ButtonSize>(), Ok(size));
        }
    }

    #[test]
    fn unknown_tokens_are_typed_errors() {
        assert_eq!(
            "primary".parse::<ButtonVariant>(),
            Err(StyleTokenError::UnknownVariant("primary".to_string()))
        );
        assert_eq!(
            "xl".parse::<ButtonSize>(),
            Err(StyleTokenError::UnknownSize("xl".to_string()))
        );
        assert_eq!(
            StyleTokenError::UnknownSize("xl".to_string()).to_string(),
            "unknown button size `xl`"
        );
    }

    #[test]
    fn unknown_tokens_fall_back_to_defaults() {
        let style = ButtonStyle::from_tokens("shiny", "huge");
        assert_eq!(style, ButtonStyle::default());
        assert_eq!(
            ButtonStyle::from_tokens("ghost", "icon-sm"),
            ButtonStyle::new(ButtonVariant::Ghost, ButtonSize::IconSm)
        );
    }

    #[test]
    fn default_style_carries_primary_and_default_size_tokens() {
        let classes = button_variants(ButtonStyle::default(), "");
        let tokens = tokens(&classes);
        for expected in ["bg-primary", "text-primary-foreground", "h-9", "px-4", "py-2"] {
            assert!(tokens.contains(&expected), "missing {expected} in {classes}");
        }
    }

    #[test]
    fn text_sizes_carry_distinct_height_tokens() {
        let expected = [
            (ButtonSize::Default, "h-9"),
            (ButtonSize::Sm, "h-8"),
            (ButtonSize::Lg, "h-10"),
            (ButtonSize::Icon, "size-9"),
            (ButtonSize::IconSm, "size-8"),
            (ButtonSize::IconLg, "size-10"),
        ];
        for variant in ButtonVariant::ALL
            .into_iter()
            .filter(|variant| *variant != ButtonVariant::Link)
        {
            for (size, token) in expected {
                let classes = button_variants(ButtonStyle::new(variant, size), "");
                assert!(
                    tokens(&classes).contains(&token),
                    "{variant}/{size} should carry {token}: {classes}"
                );
            }
        }
    }

    #[test]
    fn link_variant_ignores_size_axis() {
        for size in ButtonSize::ALL {
            let classes = button_variants(ButtonStyle::new(ButtonVariant::Link, size), "");
            assert_eq!(
                classes,
                button_variants(ButtonStyle::new(ButtonVariant::Link, ButtonSize::Default), "")
            );
            assert!(tokens(&classes).contains(&"underline-offset-4"));
            assert!(!tokens(&classes).contains(&"h-9"));
        }
    }

    #[test]
    fn outline_variant_has_border() {
        let style = ButtonStyle::new(ButtonVariant::Outline, ButtonSize::Default);
        let classes = button_variants(style, "");
        assert!(tokens(&classes).contains(&"border"));
    }

    #[test]
    fn caller_classes_come_last_and_win_conflicts() {
        let style = ButtonStyle::new(ButtonVariant::Outline, ButtonSize::Icon);
        let classes = button_variants(style, "rounded-full");
        let tokens = tokens(&classes);
        assert_eq!(tokens.last(), Some(&"rounded-full"));
        assert!(!tokens.contains(&"rounded-md"));

        let classes = button_variants(ButtonStyle::default(), "h-12 bg-emerald-600");
        let tokens = self::tokens(&classes);
        assert!(!tokens.contains(&"h-9"));
        assert!(!tokens.contains(&"bg-primary"));
        assert!(tokens.contains(&"hover:bg-primary/90"));
    }

    #[test]
    fn resolution_is_idempotent() {
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let style = ButtonStyle::new(variant, size);
                assert_eq!(
                    button_variants(style, "w-full mt-2"),
                    button_variants(style, "w-full mt-2")
                );
                assert_eq!(style.resolve(""), button_variants(style, ""));
            }
        }
    }

    #[test]
    fn field_bases_merge_caller_classes() {
        let label = label_classes("font-bold text-red-600");
        let label_tokens = tokens(&label);
        assert!(label_tokens.contains(&"text-sm"));
        assert!(label_tokens.contains(&"select-none"));
        assert!(label_tokens.contains(&"font-bold"));
        assert!(!label_tokens.contains(&"font-medium"));

        let input = input_classes("w-96");
        let input_tokens = tokens(&input);
        assert!(input_tokens.contains(&"w-96"));
        assert!(!input_tokens.contains(&"w-full"));
        assert!(input_tokens.contains(&"h-9"));
    }

    #[test]
    fn style_serializes_as_tokens() {
        let style = ButtonStyle::new(ButtonVariant::Destructive, ButtonSize::IconLg);
        let json = serde_json::to_string(&style).expect("serialize");
        assert_eq!(json, r#"{"variant":"destructive","size":"icon-lg"}"#);

        let parsed: ButtonStyle = serde_json::from_str(r#"{"variant":"bogus"}"#).expect("parse");
        assert_eq!(parsed, ButtonStyle::default());
    }
}
