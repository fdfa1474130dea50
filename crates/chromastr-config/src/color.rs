//! Color output configuration.
//!
//! This module contains the `ColorConfig` struct which selects the color
//! format new styled text is quantized into.

use chromastr_core::ColorFormat;
use serde::{Deserialize, Serialize};

/// Color output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ColorConfig {
    /// Explicit color format (`"4b"`, `"8b"` or `"24b"`).
    /// Default: unset (chosen from terminal support)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<ColorFormat>,

    /// Override terminal detection of extended (8-bit and up) color support.
    /// Default: unset (detect from the environment)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended: Option<bool>,

    /// Emit a trailing reset after styled text.
    /// Default: unset (true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset: Option<bool>,
}

impl ColorConfig {
    /// Merge another ColorConfig into this one.
    ///
    /// Unset values in `other` leave `self` untouched.
    pub fn merge(&mut self, other: &ColorConfig) {
        if other.format.is_some() {
            self.format = other.format;
        }
        if other.extended.is_some() {
            self.extended = other.extended;
        }
        if other.reset.is_some() {
            self.reset = other.reset;
        }
    }

    /// Whether styled text ends with a reset; true unless set otherwise.
    pub fn reset(&self) -> bool {
        self.reset.unwrap_or(true)
    }

    /// The format to quantize into, given whether the terminal supports
    /// extended colors.
    ///
    /// An explicit `Format` wins; otherwise `Extended` (or the detected
    /// value when unset) picks 8-bit over 4-bit.
    ///
    /// ```
    /// use chromastr_config::ColorConfig;
    /// use chromastr_core::ColorFormat;
    ///
    /// let config = ColorConfig::default();
    /// assert_eq!(config.format_for(true), ColorFormat::Ansi8);
    /// assert_eq!(config.format_for(false), ColorFormat::Ansi4);
    /// ```
    pub fn format_for(&self, supports_extended: bool) -> ColorFormat {
        if let Some(format) = self.format {
            return format;
        }
        if self.extended.unwrap_or(supports_extended) {
            ColorFormat::Ansi8
        } else {
            ColorFormat::Ansi4
        }
    }

    /// Reset override to hand to styled text: `Some(true)` suppresses the
    /// trailing reset, `None` keeps the automatic behaviour.
    pub fn suppress_reset(&self) -> Option<bool> {
        if self.reset() {
            None
        } else {
            Some(true)
        }
    }
}
