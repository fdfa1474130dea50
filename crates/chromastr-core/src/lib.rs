//! Chromastr Core
//!
//! This crate provides the color value type, shared enums, and error
//! definitions for the chromastr SGR codec.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`ColorValue`] - Packed 24-bit RGB with inversion, difference, and HSL conversion
//! - [`ColorSlot`], [`ColorFormat`] - Color position and wire resolution enums
//! - [`ChromaError`] - Error types
//! - [`named`] - Named web colors

pub mod color;
pub mod enums;
pub mod error;
pub mod named;

pub use color::{ColorValue, MAX_PACKED};
pub use enums::{ColorFormat, ColorSlot};
pub use error::{ChromaError, Result};
