//! Chromastr - an ANSI SGR styled-text codec.
//!
//! Chromastr builds, merges, canonicalizes and serializes terminal text
//! styling. Colors can be given in 4-bit, 8-bit or 24-bit form and are
//! downconverted deterministically when a terminal cannot show them.
//!
//! The workspace is split into:
//! - `chromastr-core` - [`ColorValue`], slot and format enums, errors
//! - [`ansi`] (`chromastr-ansi`) - color codes, style sequences, styled text
//! - [`config`] (`chromastr-config`) - TOML config and default format selection
//!
//! # Example
//!
//! ```
//! use chromastr::prelude::*;
//!
//! let warn = StyledText::from_colors(
//!     "warn",
//!     Some(ColorValue::rgb(255, 170, 0)),
//!     None,
//!     ColorFormat::Ansi24,
//! );
//! assert_eq!(warn.serialize(), "\x1b[38;2;255;170;0mwarn\x1b[0m");
//! assert_eq!(warn.as_format(ColorFormat::Ansi8).serialize(), "\x1b[38;5;214mwarn\x1b[0m");
//! ```

pub use chromastr_ansi as ansi;
pub use chromastr_config as config;

pub use chromastr_ansi::{
    Ansi16, AnsiColorCode, ColorSpec, Painter, SgrAttribute, SgrEntry, SlotColors, StyleBuilder,
    StyleSequence, StyledText,
};
pub use chromastr_config::{ColorConfig, Config};
pub use chromastr_core::{ChromaError, ColorFormat, ColorSlot, ColorValue, Result};

/// Common imports.
pub mod prelude {
    pub use chromastr_ansi::{
        AnsiColorCode, ColorSpec, Painter, SgrAttribute, SgrEntry, StyleBuilder, StyleSequence,
        StyledText,
    };
    pub use chromastr_config::Config;
    pub use chromastr_core::{ChromaError, ColorFormat, ColorSlot, ColorValue};
}

/// Style `text` with `spec` using the format and reset behaviour `config` selects.
///
/// ```
/// use chromastr::{styled, ColorSpec, ColorValue, Config};
///
/// let config = Config::parse("[color]\nFormat = \"4b\"\nReset = false").unwrap();
/// let text = styled(&config, "ok", &ColorSpec::Scalar(ColorValue::rgb(0, 170, 0))).unwrap();
/// assert_eq!(text.serialize(), "\x1b[32mok");
/// ```
pub fn styled(config: &Config, text: &str, spec: &ColorSpec) -> Result<StyledText> {
    let format = config.default_format();
    log::debug!("styling {} chars as {format}", text.chars().count());
    let styled = StyledText::with_spec(text, spec, format)?;
    Ok(match config.color.suppress_reset() {
        Some(suppress) => styled.with_suppress_reset(suppress),
        None => styled,
    })
}
