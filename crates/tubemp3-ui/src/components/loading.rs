//! Loading indicator components.

use leptos::prelude::*;

/// A spinning loading indicator.
///
/// Customizable size via the `size` prop (in pixels).
#[component]
pub fn Spinner(
    /// Size of the spinner in pixels.
    #[prop(default = 16)]
    size: u32,
) -> impl IntoView {
    let style = format!("width: {size}px; height: {size}px;");

    view! {
        <div class="spinner" style=style></div>
    }
}

/// A loading indicator with optional text.
///
/// Displays a spinner with an optional label below it.
#[component]
pub fn LoadingIndicator(
    /// Optional label to display below the spinner.
    #[prop(optional, into)]
    label: Option<String>,
    /// Size of the spinner in pixels.
    #[prop(default = 24)]
    size: u32,
) -> impl IntoView {
    view! {
        <div class="loading-indicator" data-testid="loader">
            <Spinner size=size />
            {label.map(|text| {
                view! {
                    <span class="loading-indicator-label">{text}</span>
                }
            })}
        </div>
    }
}
