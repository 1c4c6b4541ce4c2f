//! UI components for the conversion form.

pub mod converter_form;
pub mod error_panel;
pub mod loading;
pub mod result_card;
pub mod theme_toggle;

pub use converter_form::ConverterForm;
pub use error_panel::ErrorPanel;
pub use loading::{LoadingIndicator, Spinner};
pub use result_card::ResultCard;
pub use theme_toggle::ThemeToggle;
