//! Success result presentation.

use leptos::prelude::*;

use tubemp3_core::ConversionResult;

/// Card shown after a successful conversion: thumbnail, title, and the
/// download link for the produced audio file.
#[component]
pub fn ResultCard(
    /// The conversion to present.
    result: ConversionResult,
) -> impl IntoView {
    view! {
        <div class="result-card" data-testid="result-card">
            <img
                class="result-thumbnail"
                src=result.thumbnail_url
                alt="Video thumbnail"
            />
            <h2 class="result-title" data-testid="result-title">{result.title}</h2>
            <a
                class="btn btn-primary result-download"
                href=result.download_url
                download=""
                data-testid="download-link"
            >
                <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                    <path d="M19 9h-4V3H9v6H5l7 7 7-7zM5 18v2h14v-2H5z"/>
                </svg>
                "Download MP3"
            </a>
        </div>
    }
}
