//! Input stories.

use super::*;
use crate::subscribe::SubscribeForm;

const COMPONENT: &str = "Input";

/// Input documentation.
pub fn docs() -> ComponentDocs {
    ComponentDocs {
        title: COMPONENT,
        summary: "Displays a form input field or a component that looks like an input field.",
        args: &[
            ArgDoc {
                name: "class",
                type_summary: "String",
                default: None,
                description: "Extra classes merged after the base presentation; they win any conflict.",
            },
            ArgDoc {
                name: "input_type",
                type_summary: r#""text" | "email" | "password" | "search" | "tel" | "url" | "number" | "date" | "time" | "datetime-local" | "month" | "week" | "file""#,
                default: Some(r#""text""#),
                description: "Input field type. Choose the semantic type that matches the expected data.",
            },
            ArgDoc {
                name: "placeholder",
                type_summary: "String",
                default: None,
                description: "Hint text shown while the input is empty. Not a replacement for a label.",
            },
            ArgDoc {
                name: "readonly",
                type_summary: "bool",
                default: Some("false"),
                description: "Prevents editing while allowing focus and selection.",
            },
            ArgDoc {
                name: "disabled",
                type_summary: "bool",
                default: Some("false"),
                description: "Disables the input and prevents user interaction.",
            },
            ArgDoc {
                name: "required",
                type_summary: "bool",
                default: Some("false"),
                description: "Marks the field as required for form submission.",
            },
            ArgDoc {
                name: "autocomplete",
                type_summary: "&'static str",
                default: None,
                description: "Autofill hint such as email, username, name, tel, or organization.",
            },
        ],
    }
}

fn meta_args() -> StoryArgs {
    StoryArgs {
        class: Some("w-96".into()),
        input_type: Some(InputType::Email),
        placeholder: Some("Email".into()),
        disabled: Some(false),
        read_only: Some(false),
        required: Some(false),
        ..StoryArgs::default()
    }
}

fn with_type(input_type: InputType) -> StoryArgs {
    StoryArgs {
        input_type: Some(input_type),
        ..meta_args()
    }
}

/// Input stories in display order.
pub fn stories() -> Vec<Story> {
    vec![
        Story::new(
            COMPONENT,
            "Default",
            "The default form of the input field.",
            meta_args(),
            |args| story_input(args, "input-default"),
        ),
        Story::new(
            COMPONENT,
            "Placeholder",
            "Placeholder-only usage. Production forms should still carry a label.",
            StoryArgs {
                placeholder: Some("Your email".into()),
                ..meta_args()
            },
            |args| story_input(args, "input-placeholder"),
        ),
        Story::new(
            COMPONENT,
            "File",
            "The file type lets users pick files from their device.",
            with_type(InputType::File),
            |args| labelled(args, "picture", "Picture"),
        ),
        Story::new(
            COMPONENT,
            "Disabled",
            "A disabled input appears faded and accepts no input.",
            StoryArgs {
                disabled: Some(true),
                ..meta_args()
            },
            |args| story_input(args, "input-disabled"),
        ),
        Story::new(
            COMPONENT,
            "Password",
            "The password type masks what the user types.",
            StoryArgs {
                placeholder: Some("Enter your password".into()),
                ..with_type(InputType::Password)
            },
            |args| labelled(args, "password", "Password"),
        ),
        Story::new(
            COMPONENT,
            "ReadOnly",
            "A read-only input can be focused and selected but not edited.",
            StoryArgs {
                read_only: Some(true),
                ..meta_args()
            },
            |args| story_input(args, "input-read-only"),
        ),
        Story::new(
            COMPONENT,
            "Required",
            "Marks the field as required with a decorative indicator.",
            StoryArgs {
                required: Some(true),
                ..meta_args()
            },
            render_required,
        ),
        Story::new(
            COMPONENT,
            "Invalid",
            "An invalid state exposed through aria-invalid for accessible styling.",
            StoryArgs {
                aria_invalid: Some(true),
                placeholder: Some("Invalid value".into()),
                ..meta_args()
            },
            |args| story_input(args, "input-invalid"),
        ),
        Story::new(
            COMPONENT,
            "WithAutocomplete",
            "Suggests an autofill context to the browser.",
            StoryArgs {
                auto_complete: Some("email".into()),
                placeholder: Some("email@example.com".into()),
                ..meta_args()
            },
            |args| story_input(args, "input-autocomplete"),
        ),
        Story::new(
            COMPONENT,
            "Controlled",
            "A controlled input whose value lives in a signal and is echoed below.",
            StoryArgs {
                placeholder: Some("Type something…".into()),
                ..meta_args()
            },
            render_controlled,
        ),
        Story::new(
            COMPONENT,
            "Uncontrolled",
            "An uncontrolled input seeded with an initial value.",
            StoryArgs {
                placeholder: Some("Uncontrolled".into()),
                ..meta_args()
            },
            render_uncontrolled,
        ),
        Story::new(
            COMPONENT,
            "NumberWithConstraints",
            "A number input with minimum, maximum, and step.",
            with_type(InputType::Number),
            render_number,
        ),
        Story::new(
            COMPONENT,
            "Search",
            "Search field.",
            StoryArgs {
                placeholder: Some("Search…".into()),
                ..with_type(InputType::Search)
            },
            |args| story_input(args, "input-search"),
        ),
        Story::new(
            COMPONENT,
            "Telephone",
            "Telephone field with a pattern and a keypad hint.",
            StoryArgs {
                placeholder: Some("+1 555 0100".into()),
                pattern: Some("+?[0-9 -]+".into()),
                input_mode: Some("tel".into()),
                ..with_type(InputType::Tel)
            },
            |args| story_input(args, "input-telephone"),
        ),
        Story::new(
            COMPONENT,
            "Url",
            "URL field.",
            StoryArgs {
                placeholder: Some("https://example.com".into()),
                ..with_type(InputType::Url)
            },
            |args| story_input(args, "input-url"),
        ),
        Story::new(
            COMPONENT,
            "Date",
            "Date field.",
            with_type(InputType::Date),
            |args| story_input(args, "input-date"),
        ),
        Story::new(
            COMPONENT,
            "Time",
            "Time field.",
            with_type(InputType::Time),
            |args| story_input(args, "input-time"),
        ),
        Story::new(
            COMPONENT,
            "DateTimeLocal",
            "Local date and time field.",
            with_type(InputType::DatetimeLocal),
            |args| story_input(args, "input-date-time-local"),
        ),
        Story::new(
            COMPONENT,
            "Month",
            "Month field.",
            with_type(InputType::Month),
            |args| story_input(args, "input-month"),
        ),
        Story::new(
            COMPONENT,
            "Week",
            "Week field.",
            with_type(InputType::Week),
            |args| story_input(args, "input-week"),
        ),
        Story::new(
            COMPONENT,
            "WithLabel",
            "A descriptive label next to the input guides the user.",
            meta_args(),
            |args| {
                let caption = args.placeholder.clone().unwrap_or_default();
                labelled_with_caption(args, "email", caption, None)
            },
        ),
        Story::new(
            COMPONENT,
            "WithHelperText",
            "Helper text below the input gives extra instructions.",
            meta_args(),
            |args| {
                let caption = args.placeholder.clone().unwrap_or_default();
                labelled_with_caption(args, "email-2", caption, Some("Enter your email address."))
            },
        ),
        Story::new(
            COMPONENT,
            "WithButton",
            "An adjacent button submits the field or triggers an action.",
            meta_args(),
            render_with_button,
        ),
        Story::new(
            COMPONENT,
            "WithButtonInteractive",
            "Submit an invalid email to see the error state, then a valid one to see the success message.",
            meta_args(),
            render_interactive,
        ),
    ]
}

/// An input carrying every field-level argument.
fn story_input(args: &StoryArgs, id: &'static str) -> View {
    view! {
        <Input
            id=id
            class=args.class()
            input_type=args.input_type()
            disabled=args.is_disabled()
            readonly=args.read_only.unwrap_or(false)
            required=args.required.unwrap_or(false)
            aria_invalid=args.aria_invalid.unwrap_or(false)
            attr:placeholder=args.placeholder.clone()
            attr:autocomplete=args.auto_complete.clone()
            attr:pattern=args.pattern.clone()
            attr:inputmode=args.input_mode.clone()
        />
    }
    .into_view()
}

fn labelled(args: &StoryArgs, id: &'static str, caption: &'static str) -> View {
    labelled_with_caption(args, id, caption.to_string(), None)
}

fn labelled_with_caption(
    args: &StoryArgs,
    id: &'static str,
    caption: String,
    helper: Option<&'static str>,
) -> View {
    view! {
        <div class="grid items-center gap-1.5">
            <Label html_for=id>{caption}</Label>
            {story_input(args, id)}
            {helper.map(|helper| view! { <p class="text-foreground/60 text-sm">{helper}</p> })}
        </div>
    }
    .into_view()
}

fn render_required(args: &StoryArgs) -> View {
    view! {
        <div class="grid items-center gap-1.5">
            <Label html_for="email-required">
                "Email"
                <span aria-hidden="true" class="text-destructive">" *"</span>
            </Label>
            {story_input(args, "email-required")}
        </div>
    }
    .into_view()
}

fn render_controlled(args: &StoryArgs) -> View {
    let (value, set_value) = create_signal(String::from("Hello"));
    let current = move || {
        let value = value.get();
        if value.is_empty() {
            "Current: ∅".to_string()
        } else {
            format!("Current: {value}")
        }
    };

    view! {
        <div class="grid w-96 items-center gap-1.5">
            <Label html_for="controlled">"Controlled"</Label>
            <Input
                id="controlled"
                class=args.class()
                input_type=args.input_type()
                attr:placeholder=args.placeholder.clone()
                value=value
                on_input=Callback::new(move |ev| set_value.set(event_target_value(&ev)))
            />
            <p class="text-foreground/60 text-sm">{current}</p>
        </div>
    }
    .into_view()
}

fn render_uncontrolled(args: &StoryArgs) -> View {
    view! {
        <div class="grid w-96 items-center gap-1.5">
            <Label html_for="uncontrolled">"Uncontrolled"</Label>
            <Input
                id="uncontrolled"
                class=args.class()
                input_type=args.input_type()
                attr:placeholder=args.placeholder.clone()
                default_value="Initial"
            />
        </div>
    }
    .into_view()
}

fn render_number(args: &StoryArgs) -> View {
    view! {
        <div class="grid w-64 items-center gap-1.5">
            <Label html_for="age">"Age"</Label>
            <Input
                id="age"
                class=args.class()
                input_type=args.input_type()
                min="0"
                max="120"
                step="1"
                placeholder="0"
            />
        </div>
    }
    .into_view()
}

fn render_with_button(args: &StoryArgs) -> View {
    view! {
        <div class="flex items-center space-x-2">
            {story_input(args, "input-with-button")}
            <Button button_type="submit">"Subscribe"</Button>
        </div>
    }
    .into_view()
}

fn render_interactive(args: &StoryArgs) -> View {
    view! {
        <SubscribeForm
            input_type=args.input_type()
            placeholder=args.placeholder.clone().unwrap_or_default()
        />
    }
    .into_view()
}
