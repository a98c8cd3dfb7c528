use super::*;

#[component]
/// Styled button with variant and size axes.
///
/// Without `as_child` the button renders its own `<button>`. With `as_child`
/// the supplied element (typically an `<a>`) becomes the root, keeping its own
/// semantics while picking up the button presentation; `children` are ignored
/// in that mode.
pub fn Button(
    /// Visual style category.
    #[prop(default = ButtonVariant::Default)]
    variant: ButtonVariant,
    /// Control dimension. Ignored by [`ButtonVariant::Link`].
    #[prop(default = ButtonSize::Default)]
    size: ButtonSize,
    /// Caller classes, merged after the resolved variant classes.
    #[prop(optional, into)]
    class: MaybeSignal<String>,
    /// Element to adopt as the root instead of rendering a `<button>`.
    #[prop(optional, into)]
    as_child: Option<Slot>,
    /// Disables the control and suppresses `on_click`.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Native `type` of the rendered `<button>`.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Element id.
    #[prop(optional, into)]
    id: Option<String>,
    /// Accessible name. Required for icon sizes.
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Activation handler.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// Extra attributes (`attr:*`) forwarded to the root element.
    #[prop(attrs)]
    attributes: Vec<(&'static str, Attribute)>,
    /// Button content.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let style = ButtonStyle::new(variant, size);

    if style.size.is_icon() && aria_label.is_none() && !has_forwarded_name(&attributes) {
        logging::warn!(
            "icon-only button (size `{}`) rendered without an accessible name; pass `aria_label`",
            style.size
        );
    }

    let props = RootProps {
        class: Signal::derive(move || button_variants(style, &class.get())),
        data_slot: "button",
        style,
        disabled,
        id,
        aria_label,
        on_click,
        attributes,
    };

    let root = match as_child {
        Some(slot) => ButtonRoot::Child(slot),
        None => ButtonRoot::Native(NativeButton {
            button_type,
            children,
        }),
    };

    root.apply(props)
}

fn has_forwarded_name(attributes: &[(&'static str, Attribute)]) -> bool {
    attributes.iter().any(|(name, value)| {
        matches!(*name, "aria-label" | "aria-labelledby") && carries_text(value)
    })
}

fn carries_text(value: &Attribute) -> bool {
    match value {
        Attribute::String(text) => !text.trim().is_empty(),
        Attribute::Option(text) => text.as_deref().is_some_and(|text| !text.trim().is_empty()),
        Attribute::Bool(_) => false,
        // Reactive values are only known at render time.
        _ => true,
    }
}
