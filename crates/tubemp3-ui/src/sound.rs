//! Best-effort success sound.
//!
//! Playback failure (autoplay policy, missing asset) is logged and never
//! propagates into the result path.

use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

/// Location of the notification sound asset.
pub const SUCCESS_SOUND_SRC: &str = "/static/success.mp3";

/// Play the success notification sound, fire-and-forget.
pub fn play_success_sound() {
    let Ok(audio) = HtmlAudioElement::new_with_src(SUCCESS_SOUND_SRC) else {
        leptos::logging::error!("Audio element could not be created");
        return;
    };

    audio.set_current_time(0.0);
    match audio.play() {
        Ok(promise) => {
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    leptos::logging::error!("Audio play failed: {:?}", e);
                }
            });
        }
        Err(e) => {
            leptos::logging::error!("Audio play failed: {:?}", e);
        }
    }
}
