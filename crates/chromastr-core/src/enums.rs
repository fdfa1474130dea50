//! Core enums shared by every chromastr crate.
//!
//! [`ColorSlot`] names the two independent color positions of an SGR
//! sequence and [`ColorFormat`] names the three wire resolutions.

use crate::error::{ChromaError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which color position a color assignment occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ColorSlot {
    /// Text color (`38`, `3x`, `9x`)
    #[serde(rename = "fg")]
    Foreground,
    /// Cell color (`48`, `4x`, `10x`)
    #[serde(rename = "bg")]
    Background,
}

impl ColorSlot {
    /// Both slots, foreground first.
    pub const ALL: [ColorSlot; 2] = [ColorSlot::Foreground, ColorSlot::Background];

    /// Short key used in color specs and config files.
    pub fn key(self) -> &'static str {
        match self {
            ColorSlot::Foreground => "fg",
            ColorSlot::Background => "bg",
        }
    }

    /// The extended-color introducer for this slot (`38` or `48`).
    pub fn extended_code(self) -> u8 {
        match self {
            ColorSlot::Foreground => 38,
            ColorSlot::Background => 48,
        }
    }

    /// Offset added to a foreground 4-bit code to address this slot.
    pub fn offset(self) -> u8 {
        match self {
            ColorSlot::Foreground => 0,
            ColorSlot::Background => 10,
        }
    }

    /// Array position for per-slot bookkeeping.
    pub fn index(self) -> usize {
        match self {
            ColorSlot::Foreground => 0,
            ColorSlot::Background => 1,
        }
    }
}

impl std::fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColorSlot {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fg" | "foreground" => Ok(ColorSlot::Foreground),
            "bg" | "background" => Ok(ColorSlot::Background),
            other => Err(ChromaError::InvalidColorSpec(format!(
                "unknown color slot {other:?}, expected 'fg' or 'bg'"
            ))),
        }
    }
}

/// Wire resolution of an ANSI color code.
///
/// Variants are declared from lowest to highest resolution; that order
/// breaks ties when choosing a dominant format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum ColorFormat {
    /// 16-color palette (`30-37`, `90-97`, ...)
    #[serde(rename = "4b")]
    Ansi4,
    /// 256-color palette (`38;5;n`)
    #[default]
    #[serde(rename = "8b")]
    Ansi8,
    /// Direct RGB (`38;2;r;g;b`)
    #[serde(rename = "24b")]
    Ansi24,
}

impl ColorFormat {
    /// All formats in declaration order.
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Ansi4, ColorFormat::Ansi8, ColorFormat::Ansi24];

    /// Short alias (`4b`, `8b`, `24b`).
    pub fn alias(self) -> &'static str {
        match self {
            ColorFormat::Ansi4 => "4b",
            ColorFormat::Ansi8 => "8b",
            ColorFormat::Ansi24 => "24b",
        }
    }
}

impl std::fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.alias())
    }
}

impl FromStr for ColorFormat {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "4b" | "4bit" | "4-bit" | "ansi4" | "16" => Ok(ColorFormat::Ansi4),
            "8b" | "8bit" | "8-bit" | "ansi8" | "256" => Ok(ColorFormat::Ansi8),
            "24b" | "24bit" | "24-bit" | "ansi24" | "truecolor" => Ok(ColorFormat::Ansi24),
            other => Err(ChromaError::InvalidParameter(format!(
                "invalid ANSI color format alias: {other:?}"
            ))),
        }
    }
}
