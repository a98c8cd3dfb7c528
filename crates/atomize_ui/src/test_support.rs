//! Helpers for asserting on rendered markup in unit tests.

use leptos::*;

/// Renders a view to an HTML string inside a throwaway reactive runtime.
pub(crate) fn render<F, N>(view: F) -> String
where
    F: FnOnce() -> N,
    N: IntoView,
{
    let runtime = create_runtime();
    let html = view().into_view().render_to_string().to_string();
    runtime.dispose();
    html
}

/// Tag name of the first element, skipping comment markers.
pub(crate) fn root_tag(html: &str) -> Option<String> {
    let start = first_element_start(html)?;
    Some(
        html[start + 1..]
            .chars()
            .take_while(|ch| ch.is_ascii_alphanumeric() || *ch == '-')
            .collect(),
    )
}

/// Attributes of the first element, in source order. Boolean attributes
/// carry an empty value.
pub(crate) fn root_attrs(html: &str) -> Vec<(String, String)> {
    let Some(start) = first_element_start(html) else {
        return Vec::new();
    };
    let tag = &html[start + 1..];
    let mut chars = tag
        .char_indices()
        .skip_while(|(_, ch)| !ch.is_whitespace() && *ch != '>' && *ch != '/')
        .peekable();
    let mut attrs = Vec::new();

    loop {
        while chars.next_if(|(_, ch)| ch.is_whitespace()).is_some() {}
        match chars.peek() {
            None | Some((_, '>')) | Some((_, '/')) => break,
            _ => {}
        }

        let mut name = String::new();
        while let Some((_, ch)) =
            chars.next_if(|(_, ch)| !ch.is_whitespace() && !matches!(ch, '=' | '>' | '/'))
        {
            name.push(ch);
        }

        let mut value = String::new();
        if chars.next_if(|(_, ch)| *ch == '=').is_some() {
            if chars.next_if(|(_, ch)| *ch == '"').is_some() {
                for (_, ch) in chars.by_ref() {
                    if ch == '"' {
                        break;
                    }
                    value.push(ch);
                }
            } else {
                while let Some((_, ch)) =
                    chars.next_if(|(_, ch)| !ch.is_whitespace() && *ch != '>')
                {
                    value.push(ch);
                }
            }
        }

        if name.is_empty() {
            break;
        }
        attrs.push((name, value));
    }

    attrs
}

/// Value of one attribute on the first element.
pub(crate) fn attr(html: &str, name: &str) -> Option<String> {
    root_attrs(html)
        .into_iter()
        .find(|(attr_name, _)| attr_name == name)
        .map(|(_, value)| value)
}

/// Whether the first element carries an attribute at all.
pub(crate) fn has_attr(html: &str, name: &str) -> bool {
    attr(html, name).is_some()
}

/// Class tokens on the first element.
pub(crate) fn class_tokens(html: &str) -> Vec<String> {
    attr(html, "class")
        .unwrap_or_default()
        .split_ascii_whitespace()
        .map(str::to_string)
        .collect()
}

fn first_element_start(html: &str) -> Option<usize> {
    let mut offset = 0;
    while let Some(found) = html[offset..].find('<') {
        let start = offset + found;
        let rest = &html[start..];
        if rest.starts_with("<!--") {
            offset = start + rest.find("-->")? + 3;
            continue;
        }
        if rest[1..].starts_with(|ch: char| ch.is_ascii_alphabetic()) {
            return Some(start);
        }
        offset = start + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_first_element_after_comments() {
        let html = r#"<!--leptos-view|Button-open--><button type="button" disabled class="a b" data-x="1>2"><span class="c"></span></button>"#;
        assert_eq!(root_tag(html).as_deref(), Some("button"));
        assert_eq!(attr(html, "type").as_deref(), Some("button"));
        assert!(has_attr(html, "disabled"));
        assert_eq!(class_tokens(html), vec!["a", "b"]);
        assert_eq!(attr(html, "data-x").as_deref(), Some("1>2"));
        assert!(!has_attr(html, "span"));
    }

    #[test]
    fn self_closing_elements() {
        let html = r#"<input type="email" required/>"#;
        assert_eq!(root_tag(html).as_deref(), Some("input"));
        assert!(has_attr(html, "required"));
        assert_eq!(attr(html, "type").as_deref(), Some("email"));
    }
}
