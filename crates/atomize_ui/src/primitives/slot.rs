//! Polymorphic root rendering for [`Button`](super::Button).
//!
//! A button either owns its `<button>` element or adopts a single element the
//! caller built (an anchor, a router link) and applies the resolved
//! presentation to it. Both strategies implement [`RenderTarget`], so the
//! component body never branches on markup.

use leptos::html::{AnyElement, ElementDescriptor};

use super::*;

/// Everything a root element receives, whichever element that turns out to be.
pub struct RootProps {
    /// Resolved class string.
    pub class: Signal<String>,
    /// `data-slot` value identifying the component.
    pub data_slot: &'static str,
    /// Style selection, emitted as `data-variant` / `data-size`.
    pub style: ButtonStyle,
    /// Disabled state.
    pub disabled: MaybeSignal<bool>,
    /// Element id.
    pub id: Option<String>,
    /// Accessible name override.
    pub aria_label: Option<String>,
    /// Activation handler, never invoked while disabled.
    pub on_click: Option<Callback<MouseEvent>>,
    /// Caller attributes forwarded verbatim.
    pub attributes: Vec<(&'static str, Attribute)>,
}

/// A strategy for turning [`RootProps`] into rendered markup.
pub trait RenderTarget {
    /// Applies the props and renders the root.
    fn apply(self, props: RootProps) -> View;
}

/// Renders a native `<button>` that owns its children.
pub struct NativeButton {
    /// Native `type` attribute (`button`, `submit`, `reset`).
    pub button_type: &'static str,
    /// Button content.
    pub children: Option<Children>,
}

impl RenderTarget for NativeButton {
    fn apply(self, props: RootProps) -> View {
        let NativeButton {
            button_type,
            children,
        } = self;
        let RootProps {
            class,
            data_slot,
            style,
            disabled,
            id,
            aria_label,
            on_click,
            attributes,
        } = props;

        view! {
            <button
                type=button_type
                class=move || class.get()
                id=id
                aria-label=aria_label
                disabled=move || disabled.get()
                data-slot=data_slot
                data-variant=style.variant.token()
                data-size=style.size.token()
                on:click=move |ev| {
                    dispatch_unless_disabled(disabled.get_untracked(), on_click.as_ref(), ev);
                }
                {..attributes}
            >
                {children.map(|children| children())}
            </button>
        }
        .into_view()
    }
}

/// A single caller-built element that takes over the root role.
///
/// The element keeps its own tag, children and attributes. Resolved classes
/// are added next to its own and follow the class signal; the click handler
/// runs alongside any the element already has. For every other attribute the
/// element's own value wins over what the button forwards.
pub struct Slot(HtmlElement<AnyElement>);

impl Slot {
    /// Wraps an element so a button can adopt it.
    pub fn new<El: ElementDescriptor + 'static>(element: HtmlElement<El>) -> Self {
        Self(element.into_any())
    }

    /// Sets `name` unless the element already carries it.
    fn forward(self, name: &'static str, value: impl IntoAttribute) -> Self {
        if self.owns(name) {
            self
        } else {
            Self(self.0.attr(name, value))
        }
    }

    #[cfg(all(target_arch = "wasm32", feature = "csr"))]
    fn owns(&self, name: &str) -> bool {
        self.0.has_attribute(name)
    }

    // String rendering lists the element's own attributes first, and HTML
    // parsers keep the first of duplicated attributes.
    #[cfg(not(all(target_arch = "wasm32", feature = "csr")))]
    fn owns(&self, _name: &str) -> bool {
        false
    }
}

impl<El: ElementDescriptor + 'static> From<HtmlElement<El>> for Slot {
    fn from(element: HtmlElement<El>) -> Self {
        Self::new(element)
    }
}

impl RenderTarget for Slot {
    fn apply(self, props: RootProps) -> View {
        let RootProps {
            class,
            data_slot,
            style,
            disabled,
            id,
            aria_label,
            on_click,
            attributes,
        } = props;

        let mut slot = self
            .forward("data-slot", data_slot)
            .forward("data-variant", style.variant.token())
            .forward("data-size", style.size.token());
        if let Some(id) = id {
            slot = slot.forward("id", id);
        }
        if let Some(aria_label) = aria_label {
            slot = slot.forward("aria-label", aria_label);
        }
        for (name, value) in attributes {
            slot = slot.forward(name, value);
        }

        slot.0
            .dyn_classes(move || {
                class
                    .get()
                    .split_ascii_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .attr("aria-disabled", move || disabled.get().then_some("true"))
            .attr("data-disabled", move || disabled.get().then_some(""))
            .on(ev::click, move |ev: MouseEvent| {
                let disabled = disabled.get_untracked();
                if disabled {
                    // Adopted elements have no native disabled state; stop navigation here.
                    ev.prevent_default();
                }
                dispatch_unless_disabled(disabled, on_click.as_ref(), ev);
            })
            .into_view()
    }
}

/// The two root strategies a button can use.
pub enum ButtonRoot {
    /// Render a native `<button>`.
    Native(NativeButton),
    /// Adopt a caller-built element.
    Child(Slot),
}

impl RenderTarget for ButtonRoot {
    fn apply(self, props: RootProps) -> View {
        match self {
            Self::Native(native) => native.apply(props),
            Self::Child(slot) => slot.apply(props),
        }
    }
}
