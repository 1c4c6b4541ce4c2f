//! Theme preference resolution.
//!
//! The preference itself is a binary value persisted as one of two literal
//! strings. Reading and writing the store, and applying the theme to the
//! document, are the UI crate's concern; the resolution order lives here
//! where it can be tested.

use serde::{Deserialize, Serialize};

/// Storage key under which the preference is persisted.
pub const THEME_STORAGE_KEY: &str = "theme";

/// The user's display-mode choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light presentation.
    #[default]
    Light,
    /// Dark presentation.
    Dark,
}

impl ThemePreference {
    /// The persisted literal for this preference.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted literal. Unknown values yield `None` so a
    /// corrupted store falls through to the ambient preference.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite preference.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Resolve the initial preference: stored choice first, then the
    /// platform's ambient appearance, then light.
    #[must_use]
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored
            .and_then(Self::parse)
            .unwrap_or(if prefers_dark { Self::Dark } else { Self::Light })
    }

    /// Whether this preference is the dark presentation.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}
