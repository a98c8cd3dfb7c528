#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use atomize_ui::prelude::*;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, HtmlInputElement, MouseEventInit};

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

fn query(container: &HtmlElement, selector: &str) -> HtmlElement {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .unchecked_into()
}

fn counter() -> (Rc<Cell<u32>>, Callback<ev::MouseEvent>) {
    let count = Rc::new(Cell::new(0));
    let handler = {
        let count = Rc::clone(&count);
        Callback::new(move |_: ev::MouseEvent| count.set(count.get() + 1))
    };
    (count, handler)
}

fn mousedown(detail: i32) -> web_sys::MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_detail(detail);
    web_sys::MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).unwrap()
}

#[wasm_bindgen_test]
fn click_handler_runs_once_per_click() {
    let (count, on_click) = counter();
    let container = mount(move || view! { <Button on_click=on_click>"Save"</Button> });

    let button = query(&container, "button");
    button.click();
    button.click();
    assert_eq!(count.get(), 2);
}

#[wasm_bindgen_test]
fn disabled_button_ignores_clicks() {
    let (count, on_click) = counter();
    let container = mount(move || {
        view! { <Button disabled=true on_click=on_click>"Save"</Button> }
    });

    query(&container, "button").click();
    assert_eq!(count.get(), 0);
}

#[wasm_bindgen_test]
fn disabled_as_child_link_blocks_navigation_and_handler() {
    let (count, on_click) = counter();
    let container = mount(move || {
        view! {
            <Button
                disabled=true
                on_click=on_click
                as_child=view! { <a href="#disabled-target">"Docs"</a> }
            />
        }
    });

    let link = query(&container, "a");
    assert_eq!(link.get_attribute("aria-disabled").as_deref(), Some("true"));
    link.click();
    assert_eq!(count.get(), 0);
    assert_ne!(window().location().hash().unwrap(), "#disabled-target");
}

#[wasm_bindgen_test]
fn as_child_link_keeps_link_semantics() {
    let container = mount(|| {
        view! { <Button as_child=view! { <a href="#login">"Login"</a> } /> }
    });

    assert!(container.query_selector("button").unwrap().is_none());
    let link = query(&container, "a");
    assert_eq!(link.get_attribute("href").as_deref(), Some("#login"));
    let classes = link.class_list();
    for expected in ["bg-primary", "text-primary-foreground", "h-9", "px-4"] {
        assert!(classes.contains(expected), "missing {expected}");
    }
}

#[wasm_bindgen_test]
fn as_child_classes_follow_the_class_signal() {
    let (class, set_class) = create_signal(String::from("tracking-wide"));
    let container = mount(move || {
        view! {
            <Button
                class=Signal::derive(move || class.get())
                as_child=view! { <a href="#docs" class="nav-link">"Docs"</a> }
            />
        }
    });

    let classes = query(&container, "a").class_list();
    assert!(classes.contains("tracking-wide"));
    assert!(classes.contains("nav-link"));

    set_class.set(String::from("tracking-tight"));
    assert!(classes.contains("tracking-tight"));
    assert!(!classes.contains("tracking-wide"));
    assert!(classes.contains("nav-link"));
    assert!(classes.contains("bg-primary"));
}

#[wasm_bindgen_test]
fn adopted_element_attributes_win_over_forwarded_ones() {
    let container = mount(|| {
        view! {
            <Button
                id="outer"
                attr:data-testid="outer"
                attr:title="Open docs"
                as_child=view! { <a id="inner" data-testid="inner" href="#x">"Docs"</a> }
            />
        }
    });

    let link = query(&container, "a");
    assert_eq!(link.id(), "inner");
    assert_eq!(link.get_attribute("data-testid").as_deref(), Some("inner"));
    assert_eq!(link.get_attribute("title").as_deref(), Some("Open docs"));
    assert_eq!(link.get_attribute("data-slot").as_deref(), Some("button"));
}

#[wasm_bindgen_test]
fn label_click_focuses_its_input() {
    let container = mount(|| {
        view! {
            <div>
                <Label html_for="browser-email">"Email"</Label>
                <Input id="browser-email" input_type="email" />
            </div>
        }
    });

    query(&container, "label").click();
    let active = document().active_element().unwrap();
    assert_eq!(active.id(), "browser-email");
}

#[wasm_bindgen_test]
fn repeated_mousedown_on_label_text_is_cancelled() {
    let container = mount(|| view! { <Label>"Caption"</Label> });
    let label = query(&container, "label");

    assert!(label.dispatch_event(&mousedown(1)).unwrap());
    assert!(!label.dispatch_event(&mousedown(2)).unwrap());
}

#[wasm_bindgen_test]
fn repeated_mousedown_on_nested_control_is_left_alone() {
    let container = mount(|| {
        view! {
            <Label>
                <Input input_type="checkbox" />
                "Accept"
            </Label>
        }
    });

    let checkbox = query(&container, "input");
    assert!(checkbox.dispatch_event(&mousedown(2)).unwrap());
}

#[wasm_bindgen_test]
fn controlled_input_follows_its_signal() {
    let (value, set_value) = create_signal(String::from("first"));
    let container = mount(move || view! { <Input value=value /> });

    let input: HtmlInputElement = query(&container, "input").unchecked_into();
    assert_eq!(input.value(), "first");
    set_value.set(String::from("second"));
    assert_eq!(input.value(), "second");
}
