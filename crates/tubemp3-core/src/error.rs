//! Error types for the conversion workflow.

use thiserror::Error;

/// Message shown when the pasted link fails local validation.
pub const VALIDATION_MESSAGE: &str = "Please paste a valid YouTube URL.";

/// Fallback message when the service gives no structured detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong.";

/// Errors that can occur while converting a link.
///
/// All variants converge on the same presentation path (the error panel);
/// they differ only in where the message comes from and in the diagnostic
/// detail kept for logging.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// Link rejected locally; never reaches the network.
    #[error("{VALIDATION_MESSAGE}")]
    InvalidLink,

    /// Service was reachable but declined or failed the request.
    #[error("{message}")]
    Service {
        /// HTTP status code reported by the service.
        status: u16,
        /// Human-readable message from the response body (or the generic
        /// fallback when the body carried none).
        message: String,
    },

    /// Request could not be completed or the response body was malformed.
    #[error("{GENERIC_FAILURE_MESSAGE}")]
    Transport {
        /// Diagnostic detail, logged but never shown to the user.
        detail: String,
    },
}

impl ConvertError {
    /// The message shown in the error panel for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Diagnostic detail for logging. Falls back to the user message for
    /// variants that carry no extra detail.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        match self {
            Self::InvalidLink => VALIDATION_MESSAGE.to_string(),
            Self::Service { status, message } => {
                format!("service returned status {status}: {message}")
            }
            Self::Transport { detail } => detail.clone(),
        }
    }
}
