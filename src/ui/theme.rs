//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin, supporting both
//! built-in themes (Catppuccin variants) and custom themes loaded from TOML files.
//! It provides utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! title_fg = "#89b4fa"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! button_fg = "#1e1e2e"
//! button_bg = "#f5c2e7"
//! banner_fg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```rust
//! use notesift::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! println!("{}", Theme::fg(&theme.colors.header_fg));
//! println!("{}Bold Text{}", Theme::bold(), Theme::reset());
//! ```

use crate::domain::error::{NotesiftError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
///
/// Contains theme metadata and color definitions. Can be loaded from built-in
/// themes or custom TOML files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are specified as hex strings (e.g., "#cdd6f4"). Optional fields
/// default to `None`, allowing themes to opt out of certain styling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Normal text color (note content).
    pub text_normal: String,
    /// Dimmed text color (footer, update times, placeholder).
    pub text_dim: String,
    /// Note title color.
    pub title_fg: String,

    /// Border and separator line color.
    pub border: String,

    /// Search box border color.
    pub search_bar_border: String,
    /// Search button label color.
    pub button_fg: String,
    /// Search button fill color.
    pub button_bg: String,

    /// No-results banner text color.
    pub banner_fg: String,
    /// Optional banner background color.
    #[serde(default)]
    pub banner_bg: Option<String>,

    /// Loading and error message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe`, `catppuccin-macchiato`.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    ///
    /// # Example
    ///
    /// ```rust
    /// use notesift::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-mocha").unwrap();
    /// assert_eq!(theme.name, "catppuccin-mocha");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`NotesiftError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| NotesiftError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| NotesiftError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Parses `#rrggbb` (the `#` is optional). Malformed colors yield `None`.
    fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    fn rgb_or_white(hex: &str) -> (u8, u8, u8) {
        Self::hex_to_rgb(hex).unwrap_or_else(|| {
            tracing::trace!(color = %hex, "invalid theme color, using white");
            (255, 255, 255)
        })
    }

    /// ANSI 24-bit foreground escape for a hex color.
    ///
    /// ```rust
    /// use notesift::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#1e1e2e"), "\u{1b}[38;2;30;30;46m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::rgb_or_white(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::rgb_or_white(hex);
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
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    /// Clears all styling (colors, bold, dim, italic).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn all_builtin_themes_parse() {
        for name in [
            "catppuccin-mocha",
            "catppuccin-latte",
            "catppuccin-frappe",
            "catppuccin-macchiato",
        ] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
            assert!(Theme::hex_to_rgb(&theme.colors.banner_fg).is_some(), "{name}");
            assert!(Theme::hex_to_rgb(&theme.colors.button_bg).is_some(), "{name}");
        }
    }

    #[test]
    fn malformed_colors_fall_back_to_white() {
        assert_eq!(Theme::hex_to_rgb("cdd6f4"), Some((205, 214, 244)));
        assert_eq!(Theme::hex_to_rgb("#zzzzzz"), None);
        assert_eq!(Theme::hex_to_rgb("#fff"), None);
        assert_eq!(Theme::bg("nope"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn custom_theme_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(include_bytes!("../../themes/catppuccin-latte.toml"))
            .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name, "catppuccin-latte");
    }

    #[test]
    fn incomplete_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"half\"\n[colors]\nheader_fg = \"#000000\"\n")
            .unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, NotesiftError::Theme(_)));
    }
}
