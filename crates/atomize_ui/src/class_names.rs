//! Utility class-list merging.
//!
//! Class lists are merged left to right. A later token removes every earlier
//! token that sets the same utility property under the same modifiers, so
//! caller-supplied classes appended after the library defaults win. Tokens the
//! merger does not recognise never conflict with anything; exact duplicates
//! keep their last occurrence.

use std::collections::HashSet;

/// Merges whitespace-separated class lists, resolving utility conflicts in
/// favour of later tokens.
pub fn merge_classes<I, S>(lists: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lists = lists.into_iter().collect::<Vec<_>>();
    let tokens = lists
        .iter()
        .flat_map(|list| list.as_ref().split_ascii_whitespace())
        .collect::<Vec<_>>();

    let mut seen_tokens = HashSet::new();
    let mut seen_groups = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());

    for token in tokens.iter().rev() {
        if !seen_tokens.insert(*token) {
            continue;
        }
        let parsed = ParsedClass::parse(token);
        if let Some(group) = parsed.group {
            let key = (parsed.modifiers.clone(), parsed.important, group);
            if seen_groups.contains(&key) {
                continue;
            }
            for overridden in group.overrides() {
                seen_groups.insert((parsed.modifiers.clone(), parsed.important, overridden));
            }
            seen_groups.insert(key);
        }
        kept.push(*token);
    }

    kept.reverse();
    kept.join(" ")
}

/// Two-list convenience used by the components: library base first, caller
/// override last.
pub fn merge_class(base: &str, extra: &str) -> String {
    merge_classes([base, extra])
}

#[derive(Debug)]
struct ParsedClass {
    modifiers: String,
    important: bool,
    group: Option<Group>,
}

impl ParsedClass {
    fn parse(token: &str) -> Self {
        let segments = split_modifiers(token);
        let (base, modifiers) = match segments.split_last() {
            Some((base, modifiers)) => (*base, modifiers),
            None => (token, &[][..]),
        };

        let mut modifiers = modifiers.to_vec();
        modifiers.sort_unstable();

        let (base, important) = strip_important(base);
        let base = base.strip_prefix('-').unwrap_or(base);

        Self {
            modifiers: modifiers.join(":"),
            important,
            group: class_group(base),
        }
    }
}

fn split_modifiers(token: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (index, ch) in token.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                segments.push(&token[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    segments.push(&token[start..]);
    segments
}

fn strip_important(base: &str) -> (&str, bool) {
    if let Some(rest) = base.strip_prefix('!') {
        (rest, true)
    } else if let Some(rest) = base.strip_suffix('!') {
        (rest, true)
    } else {
        (base, false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Side {
    All,
    X,
    Y,
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    fn from_short(short: &str) -> Option<Self> {
        match short {
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            "t" => Some(Self::Top),
            "r" => Some(Self::Right),
            "b" => Some(Self::Bottom),
            "l" => Some(Self::Left),
            _ => None,
        }
    }

    fn overrides(self) -> &'static [Side] {
        match self {
            Self::All => &[
                Self::X,
                Self::Y,
                Self::Top,
                Self::Right,
                Self::Bottom,
                Self::Left,
            ],
            Self::X => &[Self::Right, Self::Left],
            Self::Y => &[Self::Top, Self::Bottom],
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Group {
    Display,
    Position,
    Width,
    Height,
    Size,
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,
    Padding(Side),
    Margin(Side),
    Inset(Side),
    Gap,
    GapX,
    GapY,
    SpaceX,
    SpaceY,
    Rounded,
    RoundedEdge(&'static str),
    BorderWidth(Side),
    BorderStyle,
    BorderColor,
    BgColor,
    BgImage,
    BgSize,
    BgPosition,
    BgRepeat,
    FontSize,
    TextAlign,
    TextColor,
    TextOverflow,
    TextWrap,
    FontWeight,
    FontFamily,
    FontStyle,
    Leading,
    Tracking,
    Shadow,
    ShadowColor,
    Opacity,
    Cursor,
    PointerEvents,
    UserSelect,
    Whitespace,
    AlignItems,
    JustifyContent,
    JustifyItems,
    Shrink,
    Grow,
    Flex,
    FlexDirection,
    FlexWrap,
    OutlineStyle,
    OutlineWidth,
    OutlineColor,
    OutlineOffset,
    RingWidth,
    RingColor,
    RingOffsetWidth,
    RingOffsetColor,
    Transition,
    Duration,
    Ease,
    Animate,
    TextDecoration,
    UnderlineOffset,
    TextTransform,
    ScreenReader,
    Overflow,
    OverflowX,
    OverflowY,
    ZIndex,
}

impl Group {
    fn overrides(self) -> Vec<Group> {
        match self {
            Self::Size => vec![Self::Width, Self::Height],
            Self::Padding(side) => side.overrides().iter().map(|s| Self::Padding(*s)).collect(),
            Self::Margin(side) => side.overrides().iter().map(|s| Self::Margin(*s)).collect(),
            Self::Inset(side) => side.overrides().iter().map(|s| Self::Inset(*s)).collect(),
            Self::BorderWidth(side) => side
                .overrides()
                .iter()
                .map(|s| Self::BorderWidth(*s))
                .collect(),
            Self::Gap => vec![Self::GapX, Self::GapY],
            Self::Rounded => ROUNDED_EDGES
                .iter()
                .map(|edge| Self::RoundedEdge(*edge))
                .collect(),
            Self::Overflow => vec![Self::OverflowX, Self::OverflowY],
            _ => Vec::new(),
        }
    }
}

const ROUNDED_EDGES: &[&str] = &[
    "t", "r", "b", "l", "s", "e", "tl", "tr", "br", "bl", "ss", "se", "es", "ee",
];
const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];
const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];
const LINE_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

fn class_group(base: &str) -> Option<Group> {
    keyword_group(base)
        .or_else(|| spacing_group(base))
        .or_else(|| fixed_prefix_group(base))
        .or_else(|| valued_prefix_group(base))
}

// Longer prefixes first; `min-w-` must not fall through to `w-`.
const FIXED_PREFIXES: &[(&str, Group)] = &[
    ("min-w-", Group::MinWidth),
    ("max-w-", Group::MaxWidth),
    ("min-h-", Group::MinHeight),
    ("max-h-", Group::MaxHeight),
    ("size-", Group::Size),
    ("w-", Group::Width),
    ("h-", Group::Height),
    ("gap-x-", Group::GapX),
    ("gap-y-", Group::GapY),
    ("gap-", Group::Gap),
    ("space-x-", Group::SpaceX),
    ("space-y-", Group::SpaceY),
    ("inset-x-", Group::Inset(Side::X)),
    ("inset-y-", Group::Inset(Side::Y)),
    ("inset-", Group::Inset(Side::All)),
    ("top-", Group::Inset(Side::Top)),
    ("right-", Group::Inset(Side::Right)),
    ("bottom-", Group::Inset(Side::Bottom)),
    ("left-", Group::Inset(Side::Left)),
    ("leading-", Group::Leading),
    ("tracking-", Group::Tracking),
    ("opacity-", Group::Opacity),
    ("cursor-", Group::Cursor),
    ("pointer-events-", Group::PointerEvents),
    ("select-", Group::UserSelect),
    ("whitespace-", Group::Whitespace),
    ("items-", Group::AlignItems),
    ("justify-items-", Group::JustifyItems),
    ("justify-", Group::JustifyContent),
    ("shrink-", Group::Shrink),
    ("grow-", Group::Grow),
    ("outline-offset-", Group::OutlineOffset),
    ("transition-", Group::Transition),
    ("duration-", Group::Duration),
    ("ease-", Group::Ease),
    ("animate-", Group::Animate),
    ("underline-offset-", Group::UnderlineOffset),
    ("overflow-x-", Group::OverflowX),
    ("overflow-y-", Group::OverflowY),
    ("overflow-", Group::Overflow),
    ("z-", Group::ZIndex),
];

fn utility_value<'a>(base: &'a str, prefix: &str) -> Option<&'a str> {
    base.strip_prefix(prefix).filter(|value| !value.is_empty())
}

fn fixed_prefix_group(base: &str) -> Option<Group> {
    FIXED_PREFIXES
        .iter()
        .find(|(prefix, _)| utility_value(base, prefix).is_some())
        .map(|(_, group)| *group)
}

fn valued_prefix_group(base: &str) -> Option<Group> {
    if let Some(value) = utility_value(base, "rounded-") {
        rounded_group(value)
    } else if let Some(value) = utility_value(base, "border-") {
        border_group(value)
    } else if let Some(value) = utility_value(base, "bg-") {
        bg_group(value)
    } else if let Some(value) = utility_value(base, "text-") {
        text_group(value)
    } else if let Some(value) = utility_value(base, "font-") {
        font_group(value)
    } else if let Some(value) = utility_value(base, "shadow-") {
        shadow_group(value)
    } else if let Some(value) = utility_value(base, "flex-") {
        flex_group(value)
    } else if let Some(value) = utility_value(base, "outline-") {
        outline_group(value)
    } else if let Some(value) = utility_value(base, "ring-offset-") {
        ring_offset_group(value)
    } else if let Some(value) = utility_value(base, "ring-") {
        ring_group(value)
    } else {
        None
    }
}

fn keyword_group(base: &str) -> Option<Group> {
    let group = match base {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "grid" | "inline-grid"
        | "contents" | "hidden" | "table" | "flow-root" => Group::Display,
        "static" | "fixed" | "absolute" | "relative" | "sticky" => Group::Position,
        "sr-only" | "not-sr-only" => Group::ScreenReader,
        "underline" | "overline" | "line-through" | "no-underline" => Group::TextDecoration,
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => Group::TextTransform,
        "italic" | "not-italic" => Group::FontStyle,
        "border" => Group::BorderWidth(Side::All),
        "rounded" => Group::Rounded,
        "shadow" => Group::Shadow,
        "ring" => Group::RingWidth,
        "outline" => Group::OutlineStyle,
        "transition" => Group::Transition,
        "grow" => Group::Grow,
        "shrink" => Group::Shrink,
        _ => return None,
    };
    Some(group)
}

fn spacing_group(base: &str) -> Option<Group> {
    let (kind, rest) = match base.as_bytes().first() {
        Some(b'p') => (Group::Padding as fn(Side) -> Group, &base[1..]),
        Some(b'm') => (Group::Margin as fn(Side) -> Group, &base[1..]),
        _ => return None,
    };
    let (side, value) = rest.split_once('-')?;
    if value.is_empty() {
        return None;
    }
    let side = if side.is_empty() {
        Side::All
    } else {
        Side::from_short(side)?
    };
    Some(kind(side))
}

fn rounded_group(value: &str) -> Option<Group> {
    let edge = value.split('-').next().unwrap_or(value);
    match ROUNDED_EDGES.iter().find(|candidate| **candidate == edge) {
        Some(known) => Some(Group::RoundedEdge(*known)),
        None => Some(Group::Rounded),
    }
}

fn border_group(value: &str) -> Option<Group> {
    if LINE_STYLES.contains(&value) {
        return Some(Group::BorderStyle);
    }
    if is_number(value) || is_arbitrary_length(value) {
        return Some(Group::BorderWidth(Side::All));
    }
    let (head, rest) = value.split_once('-').unwrap_or((value, ""));
    if let Some(side) = Side::from_short(head) {
        if rest.is_empty() || is_number(rest) || is_arbitrary_length(rest) {
            return Some(Group::BorderWidth(side));
        }
        return None;
    }
    Some(Group::BorderColor)
}

fn bg_group(value: &str) -> Option<Group> {
    let group = match value {
        "none" => Group::BgImage,
        "auto" | "cover" | "contain" => Group::BgSize,
        "center" | "top" | "bottom" | "left" | "right" | "left-top" | "left-bottom"
        | "right-top" | "right-bottom" => Group::BgPosition,
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            Group::BgRepeat
        }
        _ if value.starts_with("gradient-") || value.starts_with("linear-") => Group::BgImage,
        _ => Group::BgColor,
    };
    Some(group)
}

fn text_group(value: &str) -> Option<Group> {
    let group = match value {
        _ if FONT_SIZES.contains(&value) => Group::FontSize,
        "left" | "center" | "right" | "justify" | "start" | "end" => Group::TextAlign,
        "ellipsis" | "clip" => Group::TextOverflow,
        "wrap" | "nowrap" | "balance" | "pretty" => Group::TextWrap,
        _ if is_arbitrary_length(value) => Group::FontSize,
        _ => Group::TextColor,
    };
    Some(group)
}

fn font_group(value: &str) -> Option<Group> {
    if FONT_WEIGHTS.contains(&value) {
        return Some(Group::FontWeight);
    }
    match arbitrary_inner(value) {
        Some(inner) if is_number(inner) => Some(Group::FontWeight),
        _ => Some(Group::FontFamily),
    }
}

fn shadow_group(value: &str) -> Option<Group> {
    if SHADOW_SIZES.contains(&value) || arbitrary_inner(value).is_some() {
        Some(Group::Shadow)
    } else {
        Some(Group::ShadowColor)
    }
}

fn flex_group(value: &str) -> Option<Group> {
    let group = match value {
        "row" | "row-reverse" | "col" | "col-reverse" => Group::FlexDirection,
        "wrap" | "wrap-reverse" | "nowrap" => Group::FlexWrap,
        _ => Group::Flex,
    };
    Some(group)
}

fn outline_group(value: &str) -> Option<Group> {
    if LINE_STYLES.contains(&value) {
        Some(Group::OutlineStyle)
    } else if is_number(value) || is_arbitrary_length(value) {
        Some(Group::OutlineWidth)
    } else {
        Some(Group::OutlineColor)
    }
}

fn ring_group(value: &str) -> Option<Group> {
    if value == "inset" || is_number(value) || is_arbitrary_length(value) {
        Some(Group::RingWidth)
    } else {
        Some(Group::RingColor)
    }
}

fn ring_offset_group(value: &str) -> Option<Group> {
    if is_number(value) || is_arbitrary_length(value) {
        Some(Group::RingOffsetWidth)
    } else {
        Some(Group::RingOffsetColor)
    }
}

fn is_number(value: &str) -> bool {
    value == "px" || value.parse::<f64>().is_ok()
}

fn arbitrary_inner(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

fn is_arbitrary_length(value: &str) -> bool {
    match arbitrary_inner(value) {
        Some(inner) => {
            inner.starts_with("length:")
                || inner.starts_with("calc(")
                || inner
                    .chars()
                    .next()
                    .is_some_and(|ch| ch.is_ascii_digit() || ch == '.')
        }
        None => false,
    }
}
