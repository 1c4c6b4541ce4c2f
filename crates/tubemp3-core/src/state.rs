//! The submission state machine and its render model.
//!
//! Transitions are pure functions over an explicit [`SubmissionState`]
//! value, and [`ViewState`] is a pure function of state, so the whole
//! request lifecycle can be unit tested without a rendering environment.
//! The UI crate's only job is to mirror the current `ViewState` into the
//! DOM.

use tracing::debug;

use crate::error::ConvertError;
use crate::protocol::ConversionResult;
use crate::validate::validate_link;

/// Submit control label while idle.
pub const SUBMIT_LABEL: &str = "Convert to MP3";

/// Submit control label while a conversion is in flight.
pub const SUBMIT_LABEL_BUSY: &str = "Converting...";

/// The lifecycle of one submission.
///
/// Exactly one state is active at a time. `Failed` doubles as the state
/// after a local validation rejection: no request was sent, but the error
/// panel is showing and the form is interactive again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// No submission has happened yet, or the user is editing the input.
    #[default]
    Idle,
    /// A validated link has been sent to the service; awaiting a response.
    InProgress,
    /// The service converted the link; the result panel is showing.
    Success(ConversionResult),
    /// Validation or the exchange failed; the error panel is showing.
    Failed(String),
}

impl SubmissionState {
    /// Handle a submission attempt with the raw input.
    ///
    /// Returns the next state, plus the validated link when a request
    /// should be issued. A rejected link produces a `Failed` state and no
    /// link: nothing leaves the controller. Submitting while a conversion
    /// is already in flight is ignored; the disabled submit control makes
    /// this unreachable from the UI, but the state machine enforces
    /// at-most-one-in-flight regardless.
    #[must_use]
    pub fn submit(&self, raw: &str) -> (Self, Option<String>) {
        if matches!(self, Self::InProgress) {
            debug!("submission ignored while one is in flight");
            return (Self::InProgress, None);
        }

        match validate_link(raw) {
            Ok(url) => {
                debug!(%url, "submission accepted");
                (Self::InProgress, Some(url))
            }
            Err(err) => (Self::Failed(err.user_message()), None),
        }
    }

    /// Resolve an in-flight submission with the outcome of the exchange.
    #[must_use]
    pub fn resolve(outcome: Result<ConversionResult, ConvertError>) -> Self {
        match outcome {
            Ok(result) => Self::Success(result),
            Err(err) => Self::Failed(err.user_message()),
        }
    }

    /// Whether a conversion is currently in flight.
    #[must_use]
    pub const fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress)
    }
}

/// What the form should look like for a given [`SubmissionState`].
///
/// At most one of the loading indicator, the result panel, and the error
/// panel is visible, by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Whether the submit control accepts clicks.
    pub submit_enabled: bool,
    /// Label on the submit control.
    pub submit_label: &'static str,
    /// Whether the loading indicator is showing.
    pub loader_visible: bool,
    /// Result panel content, when visible.
    pub result: Option<ConversionResult>,
    /// Error panel message, when visible.
    pub error_message: Option<String>,
}

impl ViewState {
    /// Derive the render model from the current state.
    #[must_use]
    pub fn from_state(state: &SubmissionState) -> Self {
        match state {
            SubmissionState::Idle => Self {
                submit_enabled: true,
                submit_label: SUBMIT_LABEL,
                loader_visible: false,
                result: None,
                error_message: None,
            },
            SubmissionState::InProgress => Self {
                submit_enabled: false,
                submit_label: SUBMIT_LABEL_BUSY,
                loader_visible: true,
                result: None,
                error_message: None,
            },
            SubmissionState::Success(result) => Self {
                submit_enabled: true,
                submit_label: SUBMIT_LABEL,
                loader_visible: false,
                result: Some(result.clone()),
                error_message: None,
            },
            SubmissionState::Failed(message) => Self {
                submit_enabled: true,
                submit_label: SUBMIT_LABEL,
                loader_visible: false,
                result: None,
                error_message: Some(message.clone()),
            },
        }
    }

    /// The error panel text, with its `Error:` prefix.
    #[must_use]
    pub fn error_text(&self) -> Option<String> {
        self.error_message
            .as_ref()
            .map(|message| format!("Error: {message}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ConversionResult {
        ConversionResult {
            source_link: "youtu.be/abc123".to_string(),
            thumbnail_url: "T".to_string(),
            title: "Song".to_string(),
            download_url: "F".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_enters_in_progress() {
        let (state, url) = SubmissionState::Idle.submit("youtu.be/abc123");
        assert_eq!(state, SubmissionState::InProgress);
        assert_eq!(url.as_deref(), Some("youtu.be/abc123"));
    }

    #[test]
    fn test_invalid_submission_short_circuits() {
        let (state, url) = SubmissionState::Idle.submit("https://example.com/watch?v=abc");
        assert_eq!(
            state,
            SubmissionState::Failed("Please paste a valid YouTube URL.".to_string())
        );
        assert!(url.is_none());
    }

    #[test]
    fn test_empty_submission_short_circuits() {
        let (state, url) = SubmissionState::Idle.submit("   ");
        assert!(matches!(state, SubmissionState::Failed(_)));
        assert!(url.is_none());
    }

    #[test]
    fn test_submit_while_in_progress_is_ignored() {
        let (state, url) = SubmissionState::InProgress.submit("youtu.be/abc123");
        assert_eq!(state, SubmissionState::InProgress);
        assert!(url.is_none());
    }

    #[test]
    fn test_resubmission_clears_prior_result() {
        let (state, url) = SubmissionState::Success(sample_result()).submit("youtu.be/xyz789");
        assert_eq!(state, SubmissionState::InProgress);
        assert_eq!(url.as_deref(), Some("youtu.be/xyz789"));
        let view = ViewState::from_state(&state);
        assert!(view.result.is_none());
        assert!(view.error_message.is_none());
    }

    #[test]
    fn test_resolve_success() {
        let state = SubmissionState::resolve(Ok(sample_result()));
        assert_eq!(state, SubmissionState::Success(sample_result()));
    }

    #[test]
    fn test_resolve_failure_carries_user_message() {
        let state = SubmissionState::resolve(Err(ConvertError::Service {
            status: 500,
            message: "quota exceeded".to_string(),
        }));
        assert_eq!(state, SubmissionState::Failed("quota exceeded".to_string()));
    }

    #[test]
    fn test_in_progress_view() {
        let view = ViewState::from_state(&SubmissionState::InProgress);
        assert!(!view.submit_enabled);
        assert_eq!(view.submit_label, "Converting...");
        assert!(view.loader_visible);
        assert!(view.result.is_none());
        assert!(view.error_message.is_none());
    }

    #[test]
    fn test_success_view_restores_control() {
        let view = ViewState::from_state(&SubmissionState::Success(sample_result()));
        assert!(view.submit_enabled);
        assert_eq!(view.submit_label, "Convert to MP3");
        assert!(!view.loader_visible);
        assert_eq!(view.result, Some(sample_result()));
    }

    #[test]
    fn test_failed_view_formats_error_text() {
        let view = ViewState::from_state(&SubmissionState::Failed("quota exceeded".to_string()));
        assert!(view.submit_enabled);
        assert!(!view.loader_visible);
        assert!(view.result.is_none());
        assert_eq!(view.error_text().as_deref(), Some("Error: quota exceeded"));
    }

    #[test]
    fn test_at_most_one_panel_visible() {
        let states = [
            SubmissionState::Idle,
            SubmissionState::InProgress,
            SubmissionState::Success(sample_result()),
            SubmissionState::Failed("boom".to_string()),
        ];
        for state in states {
            let view = ViewState::from_state(&state);
            let visible = usize::from(view.loader_visible)
                + usize::from(view.result.is_some())
                + usize::from(view.error_message.is_some());
            assert!(visible <= 1, "more than one panel visible for {state:?}");
        }
    }
}
