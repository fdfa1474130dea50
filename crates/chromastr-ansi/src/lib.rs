//! Chromastr ANSI
//!
//! This crate models ANSI "Select Graphic Rendition" escapes: color
//! codes in the 4-bit, 8-bit and 24-bit formats, canonical style
//! sequences, and styled text values that round-trip through the wire
//! format.
//!
//! # Overview
//!
//! - [`codes`] - Escape constants and the non-color attribute table
//! - [`palette`] - 16 and 256 color palettes and nearest-color search
//! - [`color_code`] - [`AnsiColorCode`], one color in one wire format
//! - [`sequence`] - [`StyleSequence`] and its [`StyleBuilder`]
//! - [`color_spec`] - [`ColorSpec`], structured fg/bg specifications
//! - [`text`] - [`StyledText`], text plus style
//! - [`painter`] - [`Painter`], reusable styles built from color names
//! - [`utils`] - Escape-aware text helpers (visible width, prefix splitting)
//!
//! # Example
//!
//! ```
//! use chromastr_ansi::{StyledText, codes::SgrAttribute};
//!
//! let text = StyledText::parse("\x1b[1;34mdone\x1b[0m").unwrap();
//! assert_eq!(text.serialize(), "\x1b[94mdone\x1b[0m");
//!
//! let underlined = text.toggle_style(&[SgrAttribute::Underline.into()]);
//! assert_eq!(underlined.serialize(), "\x1b[94;4mdone\x1b[0m");
//! assert_eq!(underlined.width(), 4);
//! ```

pub mod codes;
pub mod color_code;
pub mod color_spec;
pub mod painter;
pub mod palette;
pub mod sequence;
pub mod text;
pub mod utils;

pub use codes::{SgrAttribute, RESET};
pub use color_code::{Ansi16, AnsiColorCode};
pub use color_spec::{ColorSpec, SlotColors};
pub use painter::Painter;
pub use sequence::{SgrEntry, StyleBuilder, StyleSequence};
pub use text::StyledText;
