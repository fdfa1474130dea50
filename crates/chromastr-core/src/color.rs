//! Packed 24-bit RGB color values.
//!
//! [`ColorValue`] is the base of all color arithmetic in chromastr: every
//! palette entry and every ANSI color code resolves to one.

use crate::error::{ChromaError, Result};
use crate::named;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Largest packed RGB value.
pub const MAX_PACKED: u32 = 0xFF_FF_FF;

/// A packed 24-bit RGB color in `0..=0xFFFFFF`.
///
/// # Example
///
/// ```
/// use chromastr_core::ColorValue;
///
/// let orange = ColorValue::from_channels(255, 128, 0).unwrap();
/// assert_eq!(orange.packed(), 0xFF8000);
/// assert_eq!(orange.to_string(), "#ff8000");
/// assert!(ColorValue::from_channels(256, 0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ColorValue(u32);

impl ColorValue {
    /// Pure black.
    pub const BLACK: ColorValue = ColorValue(0x00_00_00);
    /// Pure white.
    pub const WHITE: ColorValue = ColorValue(MAX_PACKED);

    /// Build from three 8-bit channels. Never fails.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Build from three channel values, rejecting anything outside `0..=255`.
    pub fn from_channels(r: i64, g: i64, b: i64) -> Result<Self> {
        let channel = |name: &str, v: i64| {
            u8::try_from(v).map_err(|_| {
                ChromaError::Range(format!("{name} channel {v} is outside 0..=255"))
            })
        };
        Ok(Self::rgb(channel("red", r)?, channel("green", g)?, channel("blue", b)?))
    }

    /// Build from a packed `0xRRGGBB` integer.
    pub fn from_packed(n: u32) -> Result<Self> {
        if n > MAX_PACKED {
            return Err(ChromaError::Range(format!(
                "packed color {n:#x} is outside 0..=0xFFFFFF"
            )));
        }
        Ok(Self(n))
    }

    /// Look up one of the named web colors, case-insensitively.
    ///
    /// ```
    /// use chromastr_core::ColorValue;
    /// assert_eq!(ColorValue::from_name("Rebecca Purple"), Some(ColorValue::rgb(0x66, 0x33, 0x99)));
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        named::lookup(name)
    }

    /// The packed integer.
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// All three channels.
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r(), self.g(), self.b())
    }

    /// Channel complement (`0xFFFFFF ^ n`).
    pub const fn invert(self) -> Self {
        Self(MAX_PACKED ^ self.0)
    }

    /// Per-channel absolute difference against `other`.
    ///
    /// This is not a distance metric: each channel of the result is the
    /// magnitude of the signed channel difference.
    ///
    /// ```
    /// use chromastr_core::ColorValue;
    /// let a = ColorValue::rgb(200, 100, 50);
    /// let b = ColorValue::rgb(50, 100, 200);
    /// assert_eq!(a.difference(b), ColorValue::rgb(150, 0, 150));
    /// ```
    pub const fn difference(self, other: ColorValue) -> Self {
        Self::rgb(
            self.r().abs_diff(other.r()),
            self.g().abs_diff(other.g()),
            self.b().abs_diff(other.b()),
        )
    }

    /// Squared Euclidean distance in RGB space.
    pub fn distance_sq(self, other: ColorValue) -> u32 {
        let d = |a: u8, b: u8| {
            let d = u32::from(a.abs_diff(b));
            d * d
        };
        d(self.r(), other.r()) + d(self.g(), other.g()) + d(self.b(), other.b())
    }

    /// Perceived brightness (Rec. 601 luma) in `0.0..=255.0`.
    pub fn luma(self) -> f64 {
        0.299 * f64::from(self.r()) + 0.587 * f64::from(self.g()) + 0.114 * f64::from(self.b())
    }

    /// Convert to HSL with hue in `0.0..360.0` and saturation/lightness in `0.0..=1.0`.
    ///
    /// ```
    /// use chromastr_core::ColorValue;
    /// let (h, s, l) = ColorValue::rgb(255, 0, 0).to_hsl();
    /// assert!(h.abs() < 0.01);
    /// assert!((s - 1.0).abs() < 0.01);
    /// assert!((l - 0.5).abs() < 0.01);
    /// ```
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let r = f64::from(self.r()) / 255.0;
        let g = f64::from(self.g()) / 255.0;
        let b = f64::from(self.b()) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return (0.0, 0.0, l);
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());

        let h = if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        let h = if h < 0.0 { h + 360.0 } else { h };

        (h, s.clamp(0.0, 1.0), l)
    }

    /// Convert from HSL. Hue wraps modulo 360; saturation and lightness are
    /// clamped to `0.0..=1.0`, so every input maps to a color.
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = if h.is_finite() { h.rem_euclid(360.0) } else { 0.0 };
        let s = if s.is_nan() { 0.0 } else { s.clamp(0.0, 1.0) };
        let l = if l.is_nan() { 0.0 } else { l.clamp(0.0, 1.0) };

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r1, g1, b1) = if h < 60.0 {
            (c, x, 0.0)
        } else if h < 120.0 {
            (x, c, 0.0)
        } else if h < 180.0 {
            (0.0, c, x)
        } else if h < 240.0 {
            (0.0, x, c)
        } else if h < 300.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

        Self::rgb(channel(r1), channel(g1), channel(b1))
    }
}

impl From<(u8, u8, u8)> for ColorValue {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<ColorValue> for (u8, u8, u8) {
    fn from(color: ColorValue) -> Self {
        color.channels()
    }
}

impl From<ColorValue> for u32 {
    fn from(color: ColorValue) -> Self {
        color.packed()
    }
}

impl TryFrom<u32> for ColorValue {
    type Error = ChromaError;

    fn try_from(n: u32) -> Result<Self> {
        Self::from_packed(n)
    }
}

impl std::ops::Not for ColorValue {
    type Output = ColorValue;

    fn not(self) -> ColorValue {
        self.invert()
    }
}

impl std::fmt::Display for ColorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl std::fmt::LowerHex for ColorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.0, f)
    }
}

impl std::fmt::UpperHex for ColorValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::UpperHex::fmt(&self.0, f)
    }
}

/// Parse `#rrggbb`, `rrggbb`, `0xrrggbb`, or a color name.
impl FromStr for ColorValue {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            let n = u32::from_str_radix(hex, 16)
                .map_err(|e| ChromaError::Parse(format!("invalid hex color {s:?}: {e}")))?;
            return Self::from_packed(n);
        }

        Self::from_name(s)
            .ok_or_else(|| ChromaError::Parse(format!("not a hex color or color name: {s:?}")))
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
