//! Email subscription form: the end-to-end Input + Button scenario.

use std::sync::OnceLock;

use atomize_ui::prelude::*;
use leptos::*;
use regex::Regex;

const EMAIL_PATTERN: &str = r".+@.+\..+";

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                logging::warn!("email pattern failed to compile: {err}");
                None
            }
        })
        .as_ref()
}

/// Loose shape check: something, `@`, something, `.`, something.
pub fn validate_email(value: &str) -> bool {
    !value.is_empty() && email_pattern().is_some_and(|pattern| pattern.is_match(value))
}

/// Outcome of the last submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubscribeStatus {
    /// Nothing submitted yet.
    #[default]
    Initial,
    /// The last submission failed validation.
    Error,
    /// The last submission was accepted.
    Success,
}

impl SubscribeStatus {
    /// Status after submitting `value`.
    pub fn after_submit(value: &str) -> Self {
        if validate_email(value) {
            Self::Success
        } else {
            Self::Error
        }
    }

    /// Whether the input should be marked `aria-invalid`.
    pub fn is_invalid(self) -> bool {
        self == Self::Error
    }
}

#[component]
/// Email field with a subscribe button and accessible feedback.
///
/// An invalid submission shows an alert and marks the field invalid; a valid
/// one clears the invalid state and announces success.
pub fn SubscribeForm(
    #[prop(default = "email")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let (value, set_value) = create_signal(String::new());
    let (status, set_status) = create_signal(SubscribeStatus::Initial);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        set_status.set(SubscribeStatus::after_submit(&value.get_untracked()));
    };

    view! {
        <form novalidate=true class="grid w-96 items-center gap-1.5" on:submit=on_submit>
            <Label html_for="subscribe-email">"Email"</Label>
            <Input
                id="subscribe-email"
                input_type=input_type
                placeholder=placeholder
                value=value
                aria_invalid=Signal::derive(move || status.get().is_invalid())
                on_input=Callback::new(move |ev| set_value.set(event_target_value(&ev)))
            />
            {move || match status.get() {
                SubscribeStatus::Initial => None,
                SubscribeStatus::Error => Some(
                    view! {
                        <p role="alert" class="text-destructive text-sm">
                            "Please enter a valid email."
                        </p>
                    },
                ),
                SubscribeStatus::Success => Some(
                    view! {
                        <p role="status" class="text-primary text-sm">
                            "Subscribed!"
                        </p>
                    },
                ),
            }}
            <div class="pt-1.5">
                <Button button_type="submit">"Subscribe"</Button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validates_loose_email_shape() {
        assert!(validate_email("example@email.com"));
        assert!(validate_email("a@b.c"));
        assert!(!validate_email(""));
        assert!(!validate_email("exampleemail.com"));
        assert!(!validate_email("example@email"));
        assert!(!validate_email("@."));
    }

    #[test]
    fn status_follows_the_last_submission() {
        assert_eq!(SubscribeStatus::default(), SubscribeStatus::Initial);
        assert!(!SubscribeStatus::Initial.is_invalid());

        let status = SubscribeStatus::after_submit("exampleemail.com");
        assert_eq!(status, SubscribeStatus::Error);
        assert!(status.is_invalid());

        let status = SubscribeStatus::after_submit("example@email.com");
        assert_eq!(status, SubscribeStatus::Success);
        assert!(!status.is_invalid());
    }

    #[test]
    fn initial_render_has_no_feedback() {
        let runtime = create_runtime();
        let html = view! { <SubscribeForm placeholder="Email" /> }
            .into_view()
            .render_to_string()
            .to_string();
        runtime.dispose();

        assert!(html.contains("for=\"subscribe-email\""), "{html}");
        assert!(html.contains("id=\"subscribe-email\""), "{html}");
        assert!(html.contains("type=\"submit\""), "{html}");
        assert!(html.contains("novalidate"), "{html}");
        assert!(!html.contains("role=\"alert\""), "{html}");
        assert!(!html.contains("aria-invalid=\""), "{html}");
    }
}
