#![cfg(target_arch = "wasm32")]

use leptos::*;
use ui_explorer::{find_story, SubscribeForm};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn mount<F, N>(view: F) -> HtmlElement
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let document = document();
    let container: HtmlElement = document
        .create_element("div")
        .unwrap()
        .unchecked_into();
    document.body().unwrap().append_child(&container).unwrap();
    mount_to(container.clone(), view);
    container
}

fn type_into(input: &HtmlInputElement, text: &str) {
    input.set_value(text);
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

fn submit(container: &HtmlElement) {
    container
        .query_selector("button[type=submit]")
        .unwrap()
        .unwrap()
        .unchecked_into::<HtmlElement>()
        .click();
}

fn text_of(container: &HtmlElement, selector: &str) -> Option<String> {
    container
        .query_selector(selector)
        .unwrap()
        .and_then(|element| element.text_content())
}

#[wasm_bindgen_test]
fn invalid_then_valid_submission() {
    let container = mount(|| view! { <SubscribeForm placeholder="Email" /> });
    let input: HtmlInputElement = container
        .query_selector("#subscribe-email")
        .unwrap()
        .unwrap()
        .unchecked_into();

    type_into(&input, "exampleemail.com");
    submit(&container);
    assert_eq!(
        text_of(&container, "[role=alert]").as_deref(),
        Some("Please enter a valid email.")
    );
    assert_eq!(input.get_attribute("aria-invalid").as_deref(), Some("true"));

    type_into(&input, "example@email.com");
    submit(&container);
    assert_eq!(text_of(&container, "[role=status]").as_deref(), Some("Subscribed!"));
    assert!(text_of(&container, "[role=alert]").is_none());
    assert!(input.get_attribute("aria-invalid").is_none());
}

#[wasm_bindgen_test]
fn controlled_story_echoes_typed_text() {
    let story = find_story("input--controlled").unwrap();
    let container = mount(move || story.view());
    let input: HtmlInputElement = container
        .query_selector("#controlled")
        .unwrap()
        .unwrap()
        .unchecked_into();

    assert_eq!(input.value(), "Hello");
    type_into(&input, "");
    assert_eq!(text_of(&container, "p").as_deref(), Some("Current: ∅"));
    type_into(&input, "Leptos");
    assert_eq!(text_of(&container, "p").as_deref(), Some("Current: Leptos"));
}
