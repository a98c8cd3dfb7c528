//! Styled form controls for Leptos: [`Button`], [`Input`], and [`Label`].
//!
//! Every control is a thin wrapper over its native element. Presentation comes
//! from utility classes resolved per variant and size, merged with caller
//! classes so that a caller token always wins a conflict with a library token.
//! Attributes the components do not model are forwarded through `attr:*`.
//!
//! The utility classes assume a Tailwind build that includes [`STYLESHEET`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_names;
mod primitives;
mod variants;

#[cfg(test)]
mod test_support;

pub use class_names::{merge_class, merge_classes};
pub use primitives::{Button, ButtonRoot, Input, Label, NativeButton, RenderTarget, RootProps, Slot};
pub use variants::{
    button_variants, input_classes, label_classes, ButtonSize, ButtonStyle, ButtonVariant,
    StyleTokenError,
};

/// Theme stylesheet: light and dark design tokens mapped onto the utility theme.
pub const STYLESHEET: &str = include_str!("../style/atomize.css");

/// Convenience imports for crates composing the controls.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonStyle, ButtonVariant, Input, Label, Slot, STYLESHEET,
    };
}
