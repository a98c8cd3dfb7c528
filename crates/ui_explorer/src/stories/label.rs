//! Label stories.

use super::*;

const COMPONENT: &str = "Label";

/// Label documentation.
pub fn docs() -> ComponentDocs {
    ComponentDocs {
        title: COMPONENT,
        summary: "Renders an accessible label associated with a form control.",
        args: &[
            ArgDoc {
                name: "children",
                type_summary: "Children",
                default: None,
                description: "Label content.",
            },
            ArgDoc {
                name: "html_for",
                type_summary: "String",
                default: None,
                description: "Id of the associated control. Clicking the label focuses it.",
            },
            ArgDoc {
                name: "class",
                type_summary: "String",
                default: None,
                description: "Additional classes merged after the base presentation.",
            },
        ],
    }
}

fn meta_args() -> StoryArgs {
    StoryArgs {
        children: Some("Your email address".into()),
        html_for: Some("email".into()),
        ..StoryArgs::default()
    }
}

/// Label stories in display order.
pub fn stories() -> Vec<Story> {
    vec![
        Story::new(
            COMPONENT,
            "Default",
            "The default form of the label.",
            meta_args(),
            render_label,
        ),
        Story::new(
            COMPONENT,
            "WithInput",
            "Associates a label with an input through a shared id.",
            meta_args(),
            |args| {
                with_email_input(
                    args,
                    "email-basic",
                    view! {
                        <Input id="email-basic" input_type="email" placeholder="you@example.com" />
                    },
                    "Email".into_view(),
                )
            },
        ),
        Story::new(
            COMPONENT,
            "RequiredIndicator",
            "A required indicator. The asterisk is decorative and hidden from assistive technology.",
            meta_args(),
            |args| {
                with_email_input(
                    args,
                    "email-required",
                    view! {
                        <Input
                            id="email-required"
                            input_type="email"
                            required=true
                            placeholder="you@example.com"
                        />
                    },
                    view! {
                        "Email "
                        <span aria-hidden="true" class="text-destructive">"*"</span>
                    }
                    .into_view(),
                )
            },
        ),
        Story::new(
            COMPONENT,
            "DisabledWithPeer",
            "Peer-disabled styling when the associated input is disabled.",
            meta_args(),
            |args| {
                with_email_input(
                    args,
                    "email-disabled-peer",
                    view! {
                        <Input
                            id="email-disabled-peer"
                            class="peer"
                            disabled=true
                            placeholder="Disabled"
                        />
                    },
                    "Email".into_view(),
                )
            },
        ),
        Story::new(
            COMPONENT,
            "DisabledWithGroup",
            "Group-disabled styling driven by a container state.",
            meta_args(),
            render_disabled_group,
        ),
        Story::new(
            COMPONENT,
            "VisuallyHidden",
            "A label hidden from sight for layouts with another visual affordance, still announced to assistive technology.",
            StoryArgs {
                class: Some("sr-only".into()),
                ..meta_args()
            },
            |args| {
                with_email_input(
                    args,
                    "email-sr",
                    view! { <Input id="email-sr" input_type="email" placeholder="Email" /> },
                    "Email".into_view(),
                )
            },
        ),
        Story::new(
            COMPONENT,
            "CustomClasses",
            "Caller classes adjusting tone and typography.",
            StoryArgs {
                class: Some("text-foreground/70 tracking-wide uppercase".into()),
                ..meta_args()
            },
            |args| {
                with_email_input(
                    args,
                    "email-custom",
                    view! {
                        <Input id="email-custom" input_type="email" placeholder="you@example.com" />
                    },
                    "Email".into_view(),
                )
            },
        ),
        Story::new(
            COMPONENT,
            "WithIcon",
            "An icon beside the text. Decorative icons stay hidden from assistive technology.",
            meta_args(),
            |args| {
                with_email_input(
                    args,
                    "email-icon",
                    view! {
                        <Input id="email-icon" input_type="email" placeholder="you@example.com" />
                    },
                    view! {
                        <Icon glyph=Glyph::Mail />
                        " Email"
                    }
                    .into_view(),
                )
            },
        ),
    ]
}

fn render_label(args: &StoryArgs) -> View {
    let text = args.children.clone().unwrap_or_default();
    view! {
        <Label html_for=args.html_for.clone().unwrap_or_default() class=args.class()>
            {text}
        </Label>
    }
    .into_view()
}

/// A label and its control stacked in a form row. The label points at `id`.
fn with_email_input(
    args: &StoryArgs,
    id: &'static str,
    input: impl IntoView,
    caption: View,
) -> View {
    view! {
        <div class="grid w-96 items-center gap-1.5">
            <Label html_for=id class=args.class()>
                {caption}
            </Label>
            {input}
        </div>
    }
    .into_view()
}

fn render_disabled_group(args: &StoryArgs) -> View {
    view! {
        <div
            class="group grid w-96 items-center gap-1.5 data-[disabled=true]:opacity-60"
            data-disabled="true"
        >
            <Label html_for="email-disabled-group" class=args.class()>
                "Email"
            </Label>
            <Input id="email-disabled-group" placeholder="Group disabled" />
        </div>
    }
    .into_view()
}
