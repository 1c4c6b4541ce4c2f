//! Theme palettes and persistence glue.
//!
//! Two palettes, light and dark, emitted as CSS custom properties. Light
//! values live on `:root`; the dark palette overrides them under
//! `body.dark-mode`, so switching theme is one class toggle on the body.
//! The preference itself (and its resolution order) is defined in
//! `tubemp3-core::theme`; this module reads and writes the browser side.

use gloo_storage::{LocalStorage, Storage};

use tubemp3_core::theme::{THEME_STORAGE_KEY, ThemePreference};

/// Light palette.
pub mod light {
    /// Page background.
    pub const BACKGROUND: &str = "#f4f4f5";
    /// Card/panel surface.
    pub const SURFACE: &str = "#ffffff";
    /// Primary text color.
    pub const TEXT: &str = "#18181b";
    /// Secondary/muted text.
    pub const TEXT_MUTED: &str = "#52525b";
    /// Accent - refined violet.
    pub const ACCENT: &str = "#7c3aed";
    /// Accent hover state.
    pub const ACCENT_HOVER: &str = "#6d28d9";
    /// Error - coral red.
    pub const ERROR: &str = "#dc2626";
    /// Default border.
    pub const BORDER: &str = "rgba(0, 0, 0, 0.1)";
}

/// Dark palette.
pub mod dark {
    /// Page background - rich dark with slight warmth.
    pub const BACKGROUND: &str = "#09090b";
    /// Card/panel surface - subtle lift.
    pub const SURFACE: &str = "#1c1c21";
    /// Primary text color.
    pub const TEXT: &str = "#fafafa";
    /// Secondary/muted text.
    pub const TEXT_MUTED: &str = "#a1a1aa";
    /// Accent - refined violet with more saturation.
    pub const ACCENT: &str = "#a78bfa";
    /// Accent hover state.
    pub const ACCENT_HOVER: &str = "#8b5cf6";
    /// Error - soft coral red.
    pub const ERROR: &str = "#f87171";
    /// Default border.
    pub const BORDER: &str = "rgba(255, 255, 255, 0.08)";
}

/// Typography configuration shared by both palettes.
pub mod typography {
    /// Font family - system fonts for performance.
    pub const FONT_FAMILY: &str =
        "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";
}

/// Generate CSS custom properties for both themes.
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  --bg: {light_bg};
  --surface: {light_surface};
  --text: {light_text};
  --text-muted: {light_text_muted};
  --accent: {light_accent};
  --accent-hover: {light_accent_hover};
  --error: {light_error};
  --border: {light_border};
  --font-family: {font_family};
}}

body.dark-mode {{
  --bg: {dark_bg};
  --surface: {dark_surface};
  --text: {dark_text};
  --text-muted: {dark_text_muted};
  --accent: {dark_accent};
  --accent-hover: {dark_accent_hover};
  --error: {dark_error};
  --border: {dark_border};
}}",
        light_bg = light::BACKGROUND,
        light_surface = light::SURFACE,
        light_text = light::TEXT,
        light_text_muted = light::TEXT_MUTED,
        light_accent = light::ACCENT,
        light_accent_hover = light::ACCENT_HOVER,
        light_error = light::ERROR,
        light_border = light::BORDER,
        font_family = typography::FONT_FAMILY,
        dark_bg = dark::BACKGROUND,
        dark_surface = dark::SURFACE,
        dark_text = dark::TEXT,
        dark_text_muted = dark::TEXT_MUTED,
        dark_accent = dark::ACCENT,
        dark_accent_hover = dark::ACCENT_HOVER,
        dark_error = dark::ERROR,
        dark_border = dark::BORDER,
    )
}

/// Resolve the theme to use at startup: stored preference, else the
/// platform's ambient appearance, else light.
#[must_use]
pub fn load_initial_theme() -> ThemePreference {
    let stored = LocalStorage::raw()
        .get_item(THEME_STORAGE_KEY)
        .ok()
        .flatten();
    ThemePreference::resolve(stored.as_deref(), ambient_prefers_dark())
}

/// Whether the platform's ambient appearance is dark.
fn ambient_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
        })
        .is_some_and(|query| query.matches())
}

/// Apply a theme to the document by toggling the body class.
pub fn apply_theme(theme: ThemePreference) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        leptos::logging::warn!("No document body to apply theme to");
        return;
    };

    if let Err(e) = body
        .class_list()
        .toggle_with_force("dark-mode", theme.is_dark())
    {
        leptos::logging::warn!("Failed to toggle theme class: {:?}", e);
    }
}

/// Persist the theme preference. Storage unavailability is logged, never
/// surfaced to the user.
pub fn store_theme(theme: ThemePreference) {
    if let Err(e) = LocalStorage::raw().set_item(THEME_STORAGE_KEY, theme.as_str()) {
        leptos::logging::warn!("Failed to persist theme preference: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_css_variables() {
        let css = generate_css_variables();
        assert!(css.contains(":root"));
        assert!(css.contains("body.dark-mode"));
        assert!(css.contains("--bg"));
        assert!(css.contains("--accent"));
        assert!(css.contains("--font-family"));
    }

    #[test]
    fn test_color_values() {
        assert!(light::BACKGROUND.starts_with('#'));
        assert!(dark::BACKGROUND.starts_with('#'));
        assert_ne!(light::BACKGROUND, dark::BACKGROUND);
    }
}
