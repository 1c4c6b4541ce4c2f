//! Main application component.

use leptos::prelude::*;
use leptos::task::spawn_local;

use tubemp3_core::{SubmissionState, ThemePreference, ViewState};

use crate::components::{ConverterForm, ErrorPanel, LoadingIndicator, ResultCard, ThemeToggle};
use crate::theme::generate_css_variables;
use crate::{api, sound, theme};

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    // CSS variables
    let css_vars = generate_css_variables();

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("styles/main.css")}</style>
        <AppContent />
    }
}

/// Inner application content: the conversion form and the theme toggle.
#[component]
fn AppContent() -> impl IntoView {
    // State signals
    let (submission, set_submission) = signal(SubmissionState::Idle);
    let (active_theme, set_active_theme) = signal::<ThemePreference>(theme::load_initial_theme());

    // Render model, derived from the submission state
    let view_state = Memo::new(move |_| ViewState::from_state(&submission.get()));

    // Apply the theme on mount and on every change
    Effect::new(move || {
        theme::apply_theme(active_theme.get());
    });

    let on_toggle_theme = Callback::new(move |()| {
        let next = active_theme.get_untracked().toggled();
        theme::store_theme(next);
        set_active_theme.set(next);
    });

    // Submission handler: drive the state machine, then run the exchange.
    // The terminal state's render model restores the control and hides the
    // loader whichever way the exchange ends.
    let on_submit = Callback::new(move |raw: String| {
        let (next, request_url) = submission.get_untracked().submit(&raw);
        set_submission.set(next);

        let Some(url) = request_url else {
            return;
        };

        spawn_local(async move {
            let outcome = api::convert(&url).await;
            if let Err(err) = &outcome {
                leptos::logging::error!("Conversion error: {}", err.diagnostic());
            }

            let resolved = SubmissionState::resolve(outcome);
            if matches!(resolved, SubmissionState::Success(_)) {
                sound::play_success_sound();
            }
            set_submission.set(resolved);
        });
    });

    view! {
        <main class="converter-page">
            <header class="converter-header">
                <h1 class="converter-heading">"YouTube to MP3"</h1>
                <ThemeToggle theme=active_theme on_toggle=on_toggle_theme />
            </header>
            <p class="converter-tagline">
                "Paste a YouTube link and get the audio as an MP3 file."
            </p>

            <ConverterForm view_state=view_state on_submit=on_submit />

            {move || {
                view_state.get().loader_visible.then(|| view! {
                    <LoadingIndicator label="Converting your video...".to_string() size=32 />
                })
            }}

            {move || {
                view_state.get().result.map(|result| view! {
                    <ResultCard result=result />
                })
            }}

            {move || {
                view_state.get().error_text().map(|message| view! {
                    <ErrorPanel message=message />
                })
            }}
        </main>
    }
}
