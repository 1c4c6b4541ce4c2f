//! Wire protocol spoken with the conversion service.
//!
//! The service exposes a single exchange: POST a validated link to
//! [`CONVERT_PATH`] and receive either a success payload (thumbnail, title,
//! download reference) or a failure payload with an optional error message.
//! Decoding is a pure function of the status code and body text so the
//! whole contract is testable without a browser.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConvertError, GENERIC_FAILURE_MESSAGE};

/// Path of the conversion endpoint.
pub const CONVERT_PATH: &str = "/convert";

/// Request body for the conversion endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertRequest<'a> {
    /// The validated link to convert.
    pub url: &'a str,
}

/// A successful conversion, as presented to the user.
///
/// Produced only by a successful service response; discarded when a new
/// submission begins.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversionResult {
    /// The link that was submitted.
    pub source_link: String,
    /// Thumbnail image URL for the converted video.
    pub thumbnail_url: String,
    /// Title of the converted video.
    pub title: String,
    /// Download reference for the produced audio file.
    pub download_url: String,
}

/// Success payload returned with a 2xx status.
#[derive(Debug, Deserialize)]
struct SuccessBody {
    thumbnail: String,
    title: String,
    file: String,
}

/// Failure payload returned with a non-2xx status. The `error` field is
/// optional; an absent or unparsable body falls back to the generic message.
#[derive(Debug, Default, Deserialize)]
struct FailureBody {
    #[serde(default)]
    error: Option<String>,
}

/// Decode a service response into a [`ConversionResult`].
///
/// `source_link` is the link the exchange was started with; it is carried
/// into the result so the presentation can reference it.
///
/// # Errors
///
/// Returns [`ConvertError::Service`] for non-2xx statuses (message taken
/// from the body's `error` field when present) and
/// [`ConvertError::Transport`] when a success body cannot be parsed.
pub fn decode_response(
    status: u16,
    body: &str,
    source_link: &str,
) -> Result<ConversionResult, ConvertError> {
    if !(200..300).contains(&status) {
        // A malformed failure body is not an extra error; the generic
        // message stands in for the missing detail.
        let failure: FailureBody = serde_json::from_str(body).unwrap_or_default();
        let message = failure
            .error
            .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
        debug!(status, %message, "conversion declined by service");
        return Err(ConvertError::Service { status, message });
    }

    let success: SuccessBody =
        serde_json::from_str(body).map_err(|e| ConvertError::Transport {
            detail: format!("malformed success body: {e}"),
        })?;

    Ok(ConversionResult {
        source_link: source_link.to_string(),
        thumbnail_url: success.thumbnail,
        title: success.title,
        download_url: success.file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let body = r#"{"thumbnail":"T","title":"Song","file":"F"}"#;
        let result = decode_response(200, body, "youtu.be/abc123");
        assert_eq!(
            result,
            Ok(ConversionResult {
                source_link: "youtu.be/abc123".to_string(),
                thumbnail_url: "T".to_string(),
                title: "Song".to_string(),
                download_url: "F".to_string(),
            })
        );
    }

    #[test]
    fn test_decode_failure_with_message() {
        let result = decode_response(500, r#"{"error":"quota exceeded"}"#, "youtu.be/abc123");
        assert_eq!(
            result,
            Err(ConvertError::Service {
                status: 500,
                message: "quota exceeded".to_string(),
            })
        );
    }

    #[test]
    fn test_decode_failure_without_message_uses_fallback() {
        let result = decode_response(502, "{}", "youtu.be/abc123");
        assert_eq!(
            result,
            Err(ConvertError::Service {
                status: 502,
                message: "Something went wrong.".to_string(),
            })
        );
    }

    #[test]
    fn test_decode_failure_with_unparsable_body_uses_fallback() {
        let result = decode_response(500, "<html>internal error</html>", "youtu.be/abc123");
        assert_eq!(
            result,
            Err(ConvertError::Service {
                status: 500,
                message: "Something went wrong.".to_string(),
            })
        );
    }

    #[test]
    fn test_decode_malformed_success_body_is_transport_error() {
        let result = decode_response(200, "not json", "youtu.be/abc123");
        assert!(matches!(result, Err(ConvertError::Transport { .. })));
    }

    #[test]
    fn test_decode_success_missing_field_is_transport_error() {
        let result = decode_response(200, r#"{"title":"Song"}"#, "youtu.be/abc123");
        assert!(matches!(result, Err(ConvertError::Transport { .. })));
    }

    #[test]
    fn test_request_body_shape() {
        let request = ConvertRequest {
            url: "https://youtu.be/abc123",
        };
        let json = serde_json::to_string(&request).unwrap_or_default();
        assert_eq!(json, r#"{"url":"https://youtu.be/abc123"}"#);
    }
}
