//! The link submission form.

use leptos::prelude::*;

use tubemp3_core::ViewState;

/// Input field plus submit control.
///
/// The disabled state and label of the submit control mirror the current
/// [`ViewState`]; the component never mutates submission state itself, it
/// only reports the raw input upwards on submit.
#[component]
pub fn ConverterForm(
    /// Render model derived from the submission state.
    view_state: Memo<ViewState>,
    /// Called with the raw input when the form is submitted.
    on_submit: Callback<String>,
) -> impl IntoView {
    let (link, set_link) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(link.get_untracked());
    };

    view! {
        <form class="converter-form" on:submit=submit data-testid="converter-form">
            <input
                type="text"
                class="converter-input"
                placeholder="Paste a YouTube link here"
                aria-label="YouTube link"
                prop:value=link
                on:input=move |ev| set_link.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || !view_state.get().submit_enabled
                data-testid="convert-button"
            >
                {move || view_state.get().submit_label}
            </button>
        </form>
    }
}
