//! HTTP driver for the conversion exchange.
//!
//! One request/response exchange with the conversion service: POST the
//! validated link, decode the body with `tubemp3-core::protocol`. The
//! exchange carries an abort signal wired to a timeout so the form cannot
//! sit in the in-progress state forever if the network layer never
//! resolves.

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use web_sys::AbortController;

use tubemp3_core::{CONVERT_PATH, ConversionResult, ConvertError, ConvertRequest, decode_response};

/// How long an exchange may stay in flight before it is aborted.
/// Conversions transcode server-side, so the deadline is generous.
pub const REQUEST_TIMEOUT_MS: u32 = 180_000;

fn transport(detail: String) -> ConvertError {
    ConvertError::Transport { detail }
}

/// Submit a validated link to the conversion service.
///
/// # Errors
///
/// Returns [`ConvertError::Service`] when the service declines the request,
/// and [`ConvertError::Transport`] when the exchange cannot be completed
/// (network failure, timeout, malformed response body).
pub async fn convert(url: &str) -> Result<ConversionResult, ConvertError> {
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(AbortController::signal);

    // Abort the fetch if the deadline passes first; aborting an already
    // finished exchange is a no-op.
    if let Some(controller) = controller.clone() {
        spawn_local(async move {
            TimeoutFuture::new(REQUEST_TIMEOUT_MS).await;
            controller.abort();
        });
    }

    let response = Request::post(CONVERT_PATH)
        .abort_signal(signal.as_ref())
        .json(&ConvertRequest { url })
        .map_err(|e| transport(format!("failed to encode request: {e}")))?
        .send()
        .await
        .map_err(|e| transport(format!("request failed: {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| transport(format!("failed to read response body: {e}")))?;

    decode_response(status, &body, url)
}
