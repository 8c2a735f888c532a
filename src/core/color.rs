// src/core/color.rs

use crate::models::PaletteConfig;
use anyhow::{Result, anyhow};
use colored::{Color, Colorize};

/// Parses a color name string (e.g., "red", "bright green") into a `colored::Color`.
pub fn parse_color_name(name: &str) -> Result<Color> {
    match name.trim().to_lowercase().replace('_', " ").as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "white" => Ok(Color::White),
        "bright red" => Ok(Color::BrightRed),
        "bright green" => Ok(Color::BrightGreen),
        "bright yellow" => Ok(Color::BrightYellow),
        "bright blue" => Ok(Color::BrightBlue),
        "bright magenta" => Ok(Color::BrightMagenta),
        "bright cyan" => Ok(Color::BrightCyan),
        _ => Err(anyhow!("Unknown color name: '{}'", name)),
    }
}

/// The colors used for each kind of terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Rejections and failures.
    pub error: Color,
    /// Completed actions.
    pub success: Color,
    /// Command keys and categories.
    pub info: Color,
    /// Missing configuration.
    pub warning: Color,
    /// Headers.
    pub accent: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            error: Color::Red,
            success: Color::Green,
            info: Color::Cyan,
            warning: Color::Yellow,
            accent: Color::Magenta,
        }
    }
}

impl Palette {
    /// Builds a palette from the configured names. Unknown names keep the default color.
    pub fn from_config(config: &PaletteConfig) -> Self {
        let defaults = Self::default();
        let pick = |role: &str, name: &str, fallback: Color| {
            parse_color_name(name).unwrap_or_else(|e| {
                log::warn!("Palette role '{}': {}. Using the default color.", role, e);
                fallback
            })
        };
        Self {
            error: pick("error", &config.error, defaults.error),
            success: pick("success", &config.success, defaults.success),
            info: pick("info", &config.info, defaults.info),
            warning: pick("warning", &config.warning, defaults.warning),
            accent: pick("accent", &config.accent, defaults.accent),
        }
    }

    /// Paints `text` in the error color.
    pub fn error(&self, text: &str) -> String {
        text.color(self.error).bold().to_string()
    }

    /// Paints `text` in the success color.
    pub fn success(&self, text: &str) -> String {
        text.color(self.success).to_string()
    }

    /// Paints `text` in the info color.
    pub fn info(&self, text: &str) -> String {
        text.color(self.info).to_string()
    }

    /// Paints `text` in the warning color.
    pub fn warning(&self, text: &str) -> String {
        text.color(self.warning).to_string()
    }

    /// Paints `text` in bold with the accent color.
    pub fn accent(&self, text: &str) -> String {
        text.color(self.accent).bold().to_string()
    }
}
