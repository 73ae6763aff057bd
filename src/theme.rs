// SPDX-License-Identifier: MPL-2.0
//! Process-wide color theme for flash messages.
//!
//! Each semantic [`MessageType`] maps to a background color. The defaults can
//! be overridden for the whole process with [`set_color_theme`], or loaded
//! from a TOML file with [`load_from_path`]. Per-message colors
//! (`MessageContent::background_color` / `color`) always win over the theme.

use crate::error::Result;
use crate::message::MessageType;
use iced_core::Color;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::{LazyLock, PoisonError, RwLock};

/// Default flash message colors.
pub mod palette {
    use iced_core::Color;

    pub const SUCCESS: Color = Color::from_rgb(0.361, 0.722, 0.361);
    pub const INFO: Color = Color::from_rgb(0.357, 0.753, 0.871);
    pub const WARNING: Color = Color::from_rgb(0.941, 0.678, 0.306);
    pub const DANGER: Color = Color::from_rgb(0.851, 0.325, 0.310);

    /// Background used when a message has no semantic type and no explicit color.
    pub const DEFAULT_BACKGROUND: Color = Color::from_rgb(0.412, 0.412, 0.412);

    /// Default text color.
    pub const TEXT: Color = Color::WHITE;
}

/// The color map used to resolve message backgrounds by semantic type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub success: Color,
    pub info: Color,
    pub warning: Color,
    pub danger: Color,
}

impl Theme {
    pub const DEFAULT: Theme = Theme {
        success: palette::SUCCESS,
        info: palette::INFO,
        warning: palette::WARNING,
        danger: palette::DANGER,
    };

    /// Returns the themed background color for a message type, or `None` for
    /// the untyped kinds (`Default` and `None`), which fall back to
    /// [`palette::DEFAULT_BACKGROUND`] at render time.
    #[must_use]
    pub fn color(&self, message_type: MessageType) -> Option<Color> {
        match message_type {
            MessageType::Success => Some(self.success),
            MessageType::Info => Some(self.info),
            MessageType::Warning => Some(self.warning),
            MessageType::Danger => Some(self.danger),
            MessageType::Default | MessageType::None => None,
        }
    }

    /// Returns a copy of this theme with the given partial overrides applied.
    ///
    /// Unparseable color strings are ignored rather than reported, keeping
    /// theme configuration best-effort.
    #[must_use]
    pub fn merged(&self, overrides: &ThemeOverrides) -> Theme {
        let mut theme = *self;
        if let Some(color) = overrides.success.as_deref().and_then(parse_hex) {
            theme.success = color;
        }
        if let Some(color) = overrides.info.as_deref().and_then(parse_hex) {
            theme.info = color;
        }
        if let Some(color) = overrides.warning.as_deref().and_then(parse_hex) {
            theme.warning = color;
        }
        if let Some(color) = overrides.danger.as_deref().and_then(parse_hex) {
            theme.danger = color;
        }
        theme
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::DEFAULT
    }
}

/// A partial color map, expressed as `#rrggbb` strings so it can be loaded
/// from configuration files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeOverrides {
    pub success: Option<String>,
    pub info: Option<String>,
    pub warning: Option<String>,
    pub danger: Option<String>,
}

impl ThemeOverrides {
    /// Parses overrides from a TOML document, reporting malformed input.
    pub fn from_toml_str(content: &str) -> Result<ThemeOverrides> {
        Ok(toml::from_str(content)?)
    }
}

/// Parses a `#rrggbb` (or bare `rrggbb`) color string.
#[must_use]
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::from_rgb8(r, g, b))
}

static THEME: LazyLock<RwLock<Theme>> = LazyLock::new(|| RwLock::new(Theme::DEFAULT));

/// Serializes tests that mutate or assert on the process-wide theme, since
/// the test harness runs them on parallel threads.
#[cfg(test)]
pub(crate) static THEME_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Merges a partial color map over the process-wide theme.
///
/// Registry and widget calls may come from UI-framework lifecycle hooks, so
/// the theme lives behind a lock even though the rest of the crate assumes a
/// single-threaded host.
pub fn set_color_theme(overrides: &ThemeOverrides) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.merged(overrides);
}

/// Restores the default color theme.
pub fn reset_color_theme() {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::DEFAULT;
}

/// Returns the current process-wide theme.
#[must_use]
pub fn current() -> Theme {
    *THEME.read().unwrap_or_else(PoisonError::into_inner)
}

/// Loads theme overrides from a TOML file.
///
/// Malformed TOML yields empty overrides rather than an error; only I/O
/// problems are reported.
pub fn load_from_path(path: &Path) -> Result<ThemeOverrides> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}
