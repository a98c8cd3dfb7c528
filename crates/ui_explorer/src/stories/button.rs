//! Button stories.

use super::*;

const COMPONENT: &str = "Button";

/// Button documentation.
pub fn docs() -> ComponentDocs {
    ComponentDocs {
        title: COMPONENT,
        summary: "Displays a button or a component that looks like a button.",
        args: &[
            ArgDoc {
                name: "variant",
                type_summary: r#""default" | "destructive" | "outline" | "secondary" | "ghost" | "link""#,
                default: Some(r#""default""#),
                description: "Visual style. Use default for primary actions, destructive for risky or irreversible actions, outline and secondary for reduced emphasis, ghost for very subtle actions, and link for inline textual actions.",
            },
            ArgDoc {
                name: "size",
                type_summary: r#""default" | "sm" | "lg" | "icon" | "icon-sm" | "icon-lg""#,
                default: Some(r#""default""#),
                description: "Button size. Icon sizes are only for icon-only buttons and need an aria-label. Ignored by the link variant.",
            },
            ArgDoc {
                name: "children",
                type_summary: "Children",
                default: None,
                description: "Content of the button. Ignored when as_child supplies the root element.",
            },
            ArgDoc {
                name: "disabled",
                type_summary: "bool",
                default: Some("false"),
                description: "Disables the button and prevents user interaction.",
            },
            ArgDoc {
                name: "as_child",
                type_summary: "Slot",
                default: None,
                description: "Element (typically an anchor) that takes over the root role with button styling.",
            },
        ],
    }
}

fn meta_args() -> StoryArgs {
    StoryArgs {
        variant: Some(ButtonVariant::Default),
        size: Some(ButtonSize::Default),
        children: Some("Button".into()),
        disabled: Some(false),
        ..StoryArgs::default()
    }
}

fn with_variant(variant: ButtonVariant) -> StoryArgs {
    StoryArgs {
        variant: Some(variant),
        ..meta_args()
    }
}

/// Button stories in display order.
pub fn stories() -> Vec<Story> {
    vec![
        Story::new(
            COMPONENT,
            "Default",
            "The default form of the button, used for primary actions and commands.",
            meta_args(),
            render_button,
        ),
        Story::new(
            COMPONENT,
            "Outline",
            "Reduces emphasis on secondary actions, such as cancelling or dismissing a dialog.",
            with_variant(ButtonVariant::Outline),
            render_button,
        ),
        Story::new(
            COMPONENT,
            "Ghost",
            "Minimal and subtle, for less intrusive actions.",
            with_variant(ButtonVariant::Ghost),
            render_button,
        ),
        Story::new(
            COMPONENT,
            "Secondary",
            "Less emphasized actions that complement the primary button.",
            with_variant(ButtonVariant::Secondary),
            render_button,
        ),
        Story::new(
            COMPONENT,
            "Destructive",
            "Signals errors, alerts, or actions that need immediate attention.",
            with_variant(ButtonVariant::Destructive),
            render_button,
        ),
        Story::new(
            COMPONENT,
            "Link",
            "Text-only styling for tertiary actions such as navigation.",
            with_variant(ButtonVariant::Link),
            render_button,
        ),
        Story::new(
            COMPONENT,
            "Icon",
            "The icon size for a button that shows only an icon.",
            StoryArgs {
                size: Some(ButtonSize::Icon),
                aria_label: Some("Mail".into()),
                children: None,
                ..with_variant(ButtonVariant::Secondary)
            },
            |args| render_icon_button(args, Glyph::Mail),
        ),
        Story::new(
            COMPONENT,
            "WithIcon",
            "An icon next to the label adds visual context for the action.",
            with_variant(ButtonVariant::Secondary),
            render_with_icon,
        ),
        Story::new(
            COMPONENT,
            "Rounded",
            "The rounded-full class turns an icon button into a circle.",
            StoryArgs {
                size: Some(ButtonSize::Icon),
                class: Some("rounded-full".into()),
                aria_label: Some("Scroll to top".into()),
                children: None,
                ..with_variant(ButtonVariant::Outline)
            },
            |args| render_icon_button(args, Glyph::ArrowUp),
        ),
        Story::new(
            COMPONENT,
            "Loading",
            "A disabled button with a spinner signals an action in progress.",
            StoryArgs {
                disabled: Some(true),
                ..with_variant(ButtonVariant::Outline)
            },
            render_loading,
        ),
        Story::new(
            COMPONENT,
            "Small",
            "A compact button for dense interfaces.",
            StoryArgs {
                size: Some(ButtonSize::Sm),
                ..meta_args()
            },
            render_button,
        ),
        Story::new(
            COMPONENT,
            "Large",
            "A larger button with more visual weight and a bigger hit area.",
            StoryArgs {
                size: Some(ButtonSize::Lg),
                ..meta_args()
            },
            render_button,
        ),
        Story::new(
            COMPONENT,
            "AllSizes",
            "Every text size next to its icon counterpart, for comparing scale and spacing.",
            with_variant(ButtonVariant::Outline),
            render_all_sizes,
        ),
        Story::new(
            COMPONENT,
            "Disabled",
            "A disabled button ignores interaction.",
            StoryArgs {
                disabled: Some(true),
                ..meta_args()
            },
            render_button,
        ),
        Story::new(
            COMPONENT,
            "AsChildLink",
            "Adopts an anchor as the root so navigation keeps link semantics with button styling.",
            StoryArgs {
                as_child: Some(true),
                children: None,
                ..meta_args()
            },
            render_as_child_link,
        ),
    ]
}

fn render_button(args: &StoryArgs) -> View {
    let label = args.children.clone().unwrap_or_default();
    view! {
        <Button
            variant=args.variant()
            size=args.size()
            class=args.class()
            disabled=args.is_disabled()
            attr:aria-label=args.aria_label.clone()
        >
            {label}
        </Button>
    }
    .into_view()
}

fn render_icon_button(args: &StoryArgs, glyph: Glyph) -> View {
    view! {
        <Button
            variant=args.variant()
            size=args.size()
            class=args.class()
            disabled=args.is_disabled()
            attr:aria-label=args.aria_label.clone()
        >
            <Icon glyph=glyph />
        </Button>
    }
    .into_view()
}

fn render_with_icon(args: &StoryArgs) -> View {
    view! {
        <Button variant=args.variant() size=args.size() disabled=args.is_disabled()>
            <Icon glyph=Glyph::Mail />
            " Login with Email Button"
        </Button>
    }
    .into_view()
}

fn render_loading(args: &StoryArgs) -> View {
    view! {
        <Button variant=args.variant() size=args.size() disabled=args.is_disabled()>
            <Icon glyph=Glyph::Loader class="animate-spin" />
            "Submitting..."
        </Button>
    }
    .into_view()
}

fn render_all_sizes(args: &StoryArgs) -> View {
    let variant = args.variant();
    let rows = [
        (ButtonSize::Sm, ButtonSize::IconSm, "Small"),
        (ButtonSize::Default, ButtonSize::Icon, "Default"),
        (ButtonSize::Lg, ButtonSize::IconLg, "Large"),
    ];

    view! {
        <div class="flex flex-col items-start gap-8 sm:flex-row">
            {rows
                .into_iter()
                .map(|(text_size, icon_size, label)| {
                    view! {
                        <div class="flex items-start gap-2">
                            <Button variant=variant size=text_size>{label}</Button>
                            <Button variant=variant size=icon_size aria_label="Open external">
                                <Icon glyph=Glyph::ArrowUpRight />
                            </Button>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

fn render_as_child_link(args: &StoryArgs) -> View {
    view! {
        <Button
            variant=args.variant()
            size=args.size()
            disabled=args.is_disabled()
            as_child=view! { <a href="#login">"Login"</a> }
        />
    }
    .into_view()
}
