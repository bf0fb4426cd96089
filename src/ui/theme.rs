//! Color themes and ANSI escape sequence generation.
//!
//! Built-in themes are compiled in from `themes/*.toml`; custom themes are
//! read from a TOML file named by the `theme_file` option.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark (default)
//! - `catppuccin-latte`: light
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cba6f7"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#89b4fa"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! input_border = "#89b4fa"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! active_speciality_fg = "#1e1e2e"
//! active_speciality_bg = "#a6e3a1"
//! available_fg = "#a6e3a1"
//! unavailable_fg = "#6c7086"
//! rating_fg = "#f9e2af"
//! notice_info_fg = "#89dceb"
//! notice_warning_fg = "#fab387"
//! notice_error_fg = "#f38ba8"
//! ```

use crate::app::notice::NoticeLevel;
use crate::domain::error::{DocfinderError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// A named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`#rrggbb`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, table header and secondary details.
    pub text_dim: String,

    pub border: String,

    /// Frame of the search box and token prompt.
    pub input_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    pub active_speciality_fg: String,
    pub active_speciality_bg: String,

    /// Availability dot of a doctor taking appointments.
    pub available_fg: String,
    pub unavailable_fg: String,
    pub rating_fg: String,

    pub notice_info_fg: String,
    pub notice_warning_fg: String,
    pub notice_error_fg: String,
}

impl ThemeColors {
    /// Foreground color for a notice of `level`.
    #[must_use]
    pub fn notice(&self, level: NoticeLevel) -> &str {
        match level {
            NoticeLevel::Info => &self.notice_info_fg,
            NoticeLevel::Warning => &self.notice_warning_fg,
            NoticeLevel::Error => &self.notice_error_fg,
        }
    }
}

impl Theme {
    /// Loads a built-in theme by name, or `None` if the name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        match toml::from_str(toml_str) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!(theme = name, error = %e, "built-in theme failed to parse");
                None
            }
        }
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DocfinderError::Theme`] if the file cannot be read or is not
    /// a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| DocfinderError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| DocfinderError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Parses `#rrggbb`, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for `hex`.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for `hex`.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The built-in Catppuccin Mocha theme.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in theme file is malformed, which the tests
    /// below rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        for name in ["catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }

    #[test]
    fn escapes_from_hex() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("bogus"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn theme_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        assert_eq!(Theme::from_file(&path).unwrap(), theme);
    }

    #[test]
    fn incomplete_theme_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "name = \"broken\"\n").unwrap();

        assert!(matches!(Theme::from_file(&path), Err(DocfinderError::Theme(_))));
        assert!(Theme::from_file(dir.path().join("missing.toml")).is_err());
    }
}
