//! Styled control primitives: button, text input, and label.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::variants::{
    button_variants, input_classes, label_classes, ButtonSize, ButtonStyle, ButtonVariant,
};

mod button;
mod field;
mod slot;

pub use button::Button;
pub use field::{Input, Label};
pub use slot::{ButtonRoot, NativeButton, RenderTarget, RootProps, Slot};

/// Forwards an activation event unless the control is disabled.
///
/// Returns whether the event reached the handler slot.
pub(crate) fn dispatch_unless_disabled<E>(
    disabled: bool,
    handler: Option<&Callback<E>>,
    event: E,
) -> bool {
    if disabled {
        return false;
    }
    if let Some(handler) = handler {
        handler.call(event);
    }
    true
}

/// Repeated presses on label text would otherwise select it; the first press
/// still reaches the browser so focus moves to the associated control.
pub(crate) fn suppress_text_selection(click_count: i32, already_prevented: bool) -> bool {
    !already_prevented && click_count > 1
}
