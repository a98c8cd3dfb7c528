//! Decorative outline glyphs used by the stories.

use leptos::*;

/// Glyphs available to stories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Envelope.
    Mail,
    /// Upward arrow.
    ArrowUp,
    /// Diagonal "open external" arrow.
    ArrowUpRight,
    /// Partial ring, spun for loading states.
    Loader,
}

#[component]
/// Inline 24px outline glyph. Always hidden from assistive technology; the
/// surrounding control carries the accessible name.
pub fn Icon(
    glyph: Glyph,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let shapes = match glyph {
        Glyph::Mail => view! {
            <rect width="20" height="16" x="2" y="4" rx="2"></rect>
            <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"></path>
        }
        .into_view(),
        Glyph::ArrowUp => view! {
            <path d="m5 12 7-7 7 7"></path>
            <path d="M12 19V5"></path>
        }
        .into_view(),
        Glyph::ArrowUpRight => view! {
            <path d="M7 7h10v10"></path>
            <path d="M7 17 17 7"></path>
        }
        .into_view(),
        Glyph::Loader => view! { <path d="M21 12a9 9 0 1 1-6.219-8.56"></path> }.into_view(),
    };

    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {shapes}
        </svg>
    }
}
