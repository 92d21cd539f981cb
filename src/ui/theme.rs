//! Theme management and ANSI escape sequence generation.
//!
//! Color schemes are TOML documents. Two are built in; custom ones can be
//! loaded from a file.
//!
//! # Built-in Themes
//!
//! - `slate`: dark theme (default)
//! - `paper`: light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#e2e8f0"
//! accent = "#60a5fa"
//! accent_fg = "#0f172a"
//! text_normal = "#cbd5e1"
//! text_dim = "#64748b"
//! border = "#334155"
//! search_bar_border = "#60a5fa"
//! score_fg = "#34d399"
//! empty_state_fg = "#93c5fd"
//! loading_fg = "#fbbf24"
//! ```

use crate::domain::{NcoSearchError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const SLATE: &str = include_str!("../../themes/slate.toml");
const PAPER: &str = include_str!("../../themes/paper.toml");

/// Color scheme for terminal rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (e.g. `"#cbd5e1"`) for every rendered element.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,

    /// Active mode tab and selected page size background.
    pub accent: String,
    /// Text drawn on top of `accent`.
    pub accent_fg: String,

    pub text_normal: String,
    /// Footer, column hints, inactive tabs.
    pub text_dim: String,

    pub border: String,
    pub search_bar_border: String,

    /// Similarity column.
    pub score_fg: String,

    pub empty_state_fg: String,
    pub loading_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name (`slate` or `paper`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "slate" => SLATE,
            "paper" => PAPER,
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NcoSearchError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| NcoSearchError::Theme(format!("failed to read {}: {e}", path.as_ref().display())))?;

        toml::from_str(&contents).map_err(|e| NcoSearchError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to RGB. Falls back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
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
    /// Returns the built-in `slate` theme.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("slate").expect("built-in slate theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::from_name("slate").unwrap().name, "slate");
        assert_eq!(Theme::from_name("paper").unwrap().name, "paper");
        assert!(Theme::from_name("neon").is_none());
    }

    #[test]
    fn loads_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PAPER.replace("name = \"paper\"", "name = \"custom\"").as_bytes())
            .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "custom");
    }

    #[test]
    fn malformed_theme_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"broken\"\n").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(NcoSearchError::Theme(_))));
    }

    #[test]
    fn hex_colors_become_escapes() {
        assert_eq!(Theme::fg("#ff0080"), "\u{001b}[38;2;255;0;128m");
        assert_eq!(Theme::bg("bogus"), "\u{001b}[48;2;255;255;255m");
    }
}
