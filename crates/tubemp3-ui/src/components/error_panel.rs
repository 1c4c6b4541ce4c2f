//! Error presentation.

use leptos::prelude::*;

/// Panel shown when validation or the exchange failed.
///
/// All error kinds converge here; the message already carries its
/// `Error:` prefix.
#[component]
pub fn ErrorPanel(
    /// Full text to display.
    message: String,
) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert" data-testid="error-panel">
            <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                <path d="M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm1 15h-2v-2h2v2zm0-4h-2V7h2v6z"/>
            </svg>
            <span>{message}</span>
        </div>
    }
}
