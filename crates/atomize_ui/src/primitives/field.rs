use leptos::wasm_bindgen::JsCast;

use super::*;

#[component]
/// Styled single-line text input.
///
/// Holds no state of its own. Pass `value` for a controlled input (bound as the
/// live DOM property) or `default_value` for an uncontrolled one (rendered as
/// the initial attribute).
pub fn Input(
    /// Caller classes, merged after the input base classes.
    #[prop(optional, into)]
    class: MaybeSignal<String>,
    /// Element id, shared with a [`Label`]'s `html_for`.
    #[prop(optional, into)]
    id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    /// Native `type` attribute.
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional, into)] placeholder: Option<String>,
    /// Controlled value.
    #[prop(optional, into)]
    value: Option<MaybeSignal<String>>,
    /// Initial value for an uncontrolled input.
    #[prop(optional, into)]
    default_value: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] readonly: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: Option<String>,
    /// Marks the value as failing validation.
    #[prop(optional, into)]
    aria_invalid: MaybeSignal<bool>,
    #[prop(optional, into)] aria_describedby: Option<String>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional, into)] min: Option<String>,
    #[prop(optional, into)] max: Option<String>,
    #[prop(optional, into)] step: Option<String>,
    #[prop(optional, into)] pattern: Option<String>,
    #[prop(optional)] inputmode: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
    /// Extra attributes (`attr:*`) forwarded to the `<input>`.
    #[prop(attrs)]
    attributes: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let input = view! {
        <input
            data-slot="input"
            class=move || input_classes(&class.get())
            id=id
            name=name
            type=input_type
            placeholder=placeholder
            value=default_value
            disabled=move || disabled.get()
            readonly=move || readonly.get()
            required=move || required.get()
            aria-label=aria_label
            aria-invalid=move || aria_invalid.get().then_some("true")
            aria-describedby=aria_describedby
            autocomplete=autocomplete
            min=min
            max=max
            step=step
            pattern=pattern
            inputmode=inputmode
            node_ref=node_ref
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
            on:focus=move |ev| {
                if let Some(on_focus) = on_focus.as_ref() {
                    on_focus.call(ev);
                }
            }
            on:blur=move |ev| {
                if let Some(on_blur) = on_blur.as_ref() {
                    on_blur.call(ev);
                }
            }
            {..attributes}
        />
    };

    match value {
        Some(value) => input.prop("value", move || value.get()),
        None => input,
    }
}

#[component]
/// Caption for a form control.
///
/// Clicking the label moves focus to the control whose id matches `html_for`.
/// Rapid repeated presses on the label text do not select it.
pub fn Label(
    /// Id of the labelled control, rendered as `for`.
    #[prop(optional, into)]
    html_for: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    /// Caller classes, merged after the label base classes.
    #[prop(optional, into)]
    class: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    /// Runs before text-selection suppression; calling `prevent_default`
    /// here opts out of it.
    #[prop(optional)]
    on_mousedown: Option<Callback<MouseEvent>>,
    /// Extra attributes (`attr:*`) forwarded to the `<label>`.
    #[prop(attrs)]
    attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <label
            data-slot="label"
            for=html_for
            id=id
            class=move || label_classes(&class.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:mousedown=move |ev: MouseEvent| {
                if let Some(on_mousedown) = on_mousedown.as_ref() {
                    on_mousedown.call(ev.clone());
                }
                if pressed_on_form_control(&ev) {
                    return;
                }
                if suppress_text_selection(ev.detail(), ev.default_prevented()) {
                    ev.prevent_default();
                }
            }
            {..attributes}
        >
            {children()}
        </label>
    }
}

/// Presses that land on a control nested inside the label belong to that control.
fn pressed_on_form_control(ev: &MouseEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .and_then(|element| element.closest("button, input, select, textarea").ok().flatten())
        .is_some()
}
