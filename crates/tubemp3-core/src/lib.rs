//! `TubeMp3` core - the logic behind the conversion form.
//!
//! Everything in this crate is pure and WASM-compatible: the submission
//! state machine, link validation, the wire protocol spoken with the
//! conversion service, and theme preference resolution. Rendering and
//! browser APIs live in the UI crate; this crate can be unit tested
//! without a rendering environment.

pub mod error;
pub mod protocol;
pub mod state;
pub mod theme;
pub mod validate;

pub use error::{ConvertError, GENERIC_FAILURE_MESSAGE, VALIDATION_MESSAGE};
pub use protocol::{CONVERT_PATH, ConversionResult, ConvertRequest, decode_response};
pub use state::{SubmissionState, ViewState};
pub use theme::ThemePreference;
pub use validate::validate_link;
