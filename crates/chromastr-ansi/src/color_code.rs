//! ANSI color assignments in the three wire formats.
//!
//! An [`AnsiColorCode`] is one foreground or background color in 4-bit,
//! 8-bit or 24-bit form. It knows its exact RGB value, its canonical
//! parameter encoding, and how to quantize an arbitrary RGB value down
//! into each format.

use crate::codes::{CSI, EXTENDED_BG, EXTENDED_FG, EXTENDED_PALETTE, EXTENDED_RGB, SGR_END};
use crate::palette;
use crate::utils::parse_sgr_params;
use chromastr_core::{ChromaError, ColorFormat, ColorSlot, ColorValue, Result};
use crossterm::style::Color;

/// A validated 4-bit palette index in `0..16`.
///
/// Indices `0..8` are the standard hues, `8..16` their bright variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ansi16(u8);

impl Ansi16 {
    pub const BLACK: Ansi16 = Ansi16(0);
    pub const RED: Ansi16 = Ansi16(1);
    pub const GREEN: Ansi16 = Ansi16(2);
    pub const YELLOW: Ansi16 = Ansi16(3);
    pub const BLUE: Ansi16 = Ansi16(4);
    pub const MAGENTA: Ansi16 = Ansi16(5);
    pub const CYAN: Ansi16 = Ansi16(6);
    pub const WHITE: Ansi16 = Ansi16(7);
    pub const BRIGHT_BLACK: Ansi16 = Ansi16(8);
    pub const BRIGHT_RED: Ansi16 = Ansi16(9);
    pub const BRIGHT_GREEN: Ansi16 = Ansi16(10);
    pub const BRIGHT_YELLOW: Ansi16 = Ansi16(11);
    pub const BRIGHT_BLUE: Ansi16 = Ansi16(12);
    pub const BRIGHT_MAGENTA: Ansi16 = Ansi16(13);
    pub const BRIGHT_CYAN: Ansi16 = Ansi16(14);
    pub const BRIGHT_WHITE: Ansi16 = Ansi16(15);

    /// Validate an index.
    pub fn new(index: u8) -> Result<Self> {
        if index < 16 {
            Ok(Self(index))
        } else {
            Err(ChromaError::Range(format!(
                "4-bit color index {index} is outside 0..=15"
            )))
        }
    }

    /// The raw index.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Whether this is one of the 8 bright variants.
    pub const fn is_bright(self) -> bool {
        self.0 >= 8
    }

    /// The bright variant of the same hue.
    pub const fn brighten(self) -> Self {
        Self(self.0 | 8)
    }

    /// The standard-intensity variant of the same hue.
    pub const fn dim(self) -> Self {
        Self(self.0 & 7)
    }

    /// Wire parameter for this index in `slot` (`30-37`, `40-47`, `90-97`, `100-107`).
    pub fn code(self, slot: ColorSlot) -> u8 {
        let base = if self.is_bright() { 90 } else { 30 };
        base + slot.offset() + (self.0 & 7)
    }

    /// Decode a single 4-bit color parameter.
    ///
    /// ```
    /// use chromastr_ansi::color_code::Ansi16;
    /// use chromastr_core::ColorSlot;
    /// assert_eq!(Ansi16::from_code(91), Some((ColorSlot::Foreground, Ansi16::BRIGHT_RED)));
    /// assert_eq!(Ansi16::from_code(42), Some((ColorSlot::Background, Ansi16::GREEN)));
    /// assert_eq!(Ansi16::from_code(38), None);
    /// ```
    pub fn from_code(code: u32) -> Option<(ColorSlot, Self)> {
        let code = u8::try_from(code).ok()?;
        match code {
            30..=37 => Some((ColorSlot::Foreground, Self(code - 30))),
            40..=47 => Some((ColorSlot::Background, Self(code - 40))),
            90..=97 => Some((ColorSlot::Foreground, Self(code - 90 + 8))),
            100..=107 => Some((ColorSlot::Background, Self(code - 100 + 8))),
            _ => None,
        }
    }
}

/// One color assignment in one of the three wire formats.
///
/// Equality compares slot, variant and payload; two codes that resolve to
/// the same RGB value in different formats are not equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnsiColorCode {
    /// `30-37`, `40-47`, `90-97`, `100-107`
    Ansi4(ColorSlot, Ansi16),
    /// `38;5;n`, `48;5;n`
    Ansi8(ColorSlot, u8),
    /// `38;2;r;g;b`, `48;2;r;g;b`
    Ansi24(ColorSlot, ColorValue),
}

impl AnsiColorCode {
    /// Quantize `color` into `format` for `slot`. Never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use chromastr_ansi::AnsiColorCode;
    /// use chromastr_core::{ColorFormat, ColorSlot, ColorValue};
    ///
    /// let code = AnsiColorCode::from_color(
    ///     ColorSlot::Foreground,
    ///     ColorValue::rgb(255, 85, 85),
    ///     ColorFormat::Ansi4,
    /// );
    /// assert_eq!(code.encode(), "91");
    /// ```
    pub fn from_color(slot: ColorSlot, color: ColorValue, format: ColorFormat) -> Self {
        match format {
            ColorFormat::Ansi4 => {
                let (index, _) = palette::nearest_ansi4(color);
                AnsiColorCode::Ansi4(slot, Ansi16(index))
            }
            ColorFormat::Ansi8 => AnsiColorCode::Ansi8(slot, palette::nearest_ansi8(color)),
            ColorFormat::Ansi24 => AnsiColorCode::Ansi24(slot, color),
        }
    }

    /// Parse a single color from parameters (`"31"`, `"48;5;200"`) or a
    /// full escape (`"\x1b[38;2;1;2;3m"`).
    ///
    /// ```
    /// use chromastr_ansi::AnsiColorCode;
    /// use chromastr_core::{ColorSlot, ColorValue};
    ///
    /// let code = AnsiColorCode::parse("\x1b[48;2;1;2;3m").unwrap();
    /// assert_eq!(code, AnsiColorCode::Ansi24(ColorSlot::Background, ColorValue::rgb(1, 2, 3)));
    /// assert!(AnsiColorCode::parse("38;5").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let inner = s.strip_prefix(CSI).unwrap_or(s);
        let inner = inner.strip_suffix(SGR_END).unwrap_or(inner);
        let params = parse_sgr_params(inner)?;
        Self::from_params(&params)
    }

    /// Build from an exact parameter list. The list must be one of the
    /// three accepted shapes and nothing more.
    pub fn from_params(params: &[u32]) -> Result<Self> {
        let channel = |v: u32| {
            u8::try_from(v).map_err(|_| {
                ChromaError::Parse(format!("color component {v} is outside 0..=255"))
            })
        };
        let slot_of = |intro: u32| match intro {
            EXTENDED_FG => Some(ColorSlot::Foreground),
            EXTENDED_BG => Some(ColorSlot::Background),
            _ => None,
        };

        match *params {
            [code] => Ansi16::from_code(code)
                .map(|(slot, index)| AnsiColorCode::Ansi4(slot, index))
                .ok_or_else(|| ChromaError::Parse(format!("{code} is not a 4-bit color code"))),
            [intro, EXTENDED_PALETTE, n] if slot_of(intro).is_some() => {
                let slot = slot_of(intro).unwrap_or(ColorSlot::Foreground);
                Ok(AnsiColorCode::Ansi8(slot, channel(n)?))
            }
            [intro, EXTENDED_RGB, r, g, b] if slot_of(intro).is_some() => {
                let slot = slot_of(intro).unwrap_or(ColorSlot::Foreground);
                let color = ColorValue::rgb(channel(r)?, channel(g)?, channel(b)?);
                Ok(AnsiColorCode::Ansi24(slot, color))
            }
            _ => Err(ChromaError::Parse(format!(
                "{params:?} is not a 4-bit, 8-bit or 24-bit color sequence"
            ))),
        }
    }

    /// The slot this color occupies.
    pub fn slot(&self) -> ColorSlot {
        match *self {
            AnsiColorCode::Ansi4(slot, _)
            | AnsiColorCode::Ansi8(slot, _)
            | AnsiColorCode::Ansi24(slot, _) => slot,
        }
    }

    /// The wire format of this code.
    pub fn format(&self) -> ColorFormat {
        match self {
            AnsiColorCode::Ansi4(..) => ColorFormat::Ansi4,
            AnsiColorCode::Ansi8(..) => ColorFormat::Ansi8,
            AnsiColorCode::Ansi24(..) => ColorFormat::Ansi24,
        }
    }

    /// The exact RGB value this code displays as.
    pub fn resolve(&self) -> ColorValue {
        match *self {
            AnsiColorCode::Ansi4(_, index) => palette::ansi4_to_rgb(index.index()),
            AnsiColorCode::Ansi8(_, index) => palette::ansi8_to_rgb(index),
            AnsiColorCode::Ansi24(_, color) => color,
        }
    }

    /// Re-quantize into `format`. Returns `self` when already in that format.
    pub fn convert(self, format: ColorFormat) -> Self {
        if self.format() == format {
            return self;
        }
        Self::from_color(self.slot(), self.resolve(), format)
    }

    /// The same color assigned to another slot.
    pub fn with_slot(self, slot: ColorSlot) -> Self {
        match self {
            AnsiColorCode::Ansi4(_, index) => AnsiColorCode::Ansi4(slot, index),
            AnsiColorCode::Ansi8(_, index) => AnsiColorCode::Ansi8(slot, index),
            AnsiColorCode::Ansi24(_, color) => AnsiColorCode::Ansi24(slot, color),
        }
    }

    /// Whether this is a standard-intensity 4-bit color.
    pub fn is_standard_ansi4(&self) -> bool {
        matches!(self, AnsiColorCode::Ansi4(_, index) if !index.is_bright())
    }

    /// Whether this is a bright 4-bit color.
    pub fn is_bright_ansi4(&self) -> bool {
        matches!(self, AnsiColorCode::Ansi4(_, index) if index.is_bright())
    }

    /// Bright variant of a 4-bit color; other formats are returned unchanged.
    pub fn brighten(self) -> Self {
        match self {
            AnsiColorCode::Ansi4(slot, index) => AnsiColorCode::Ansi4(slot, index.brighten()),
            other => other,
        }
    }

    /// Standard variant of a 4-bit color; other formats are returned unchanged.
    pub fn dim(self) -> Self {
        match self {
            AnsiColorCode::Ansi4(slot, index) => AnsiColorCode::Ansi4(slot, index.dim()),
            other => other,
        }
    }

    /// Canonical parameter encoding without the escape framing.
    ///
    /// ```
    /// use chromastr_ansi::AnsiColorCode;
    /// use chromastr_core::ColorSlot;
    /// assert_eq!(AnsiColorCode::Ansi8(ColorSlot::Background, 200).encode(), "48;5;200");
    /// ```
    pub fn encode(&self) -> String {
        match *self {
            AnsiColorCode::Ansi4(slot, index) => index.code(slot).to_string(),
            AnsiColorCode::Ansi8(slot, index) => {
                format!("{};{EXTENDED_PALETTE};{index}", slot.extended_code())
            }
            AnsiColorCode::Ansi24(slot, color) => {
                let (r, g, b) = color.channels();
                format!("{};{EXTENDED_RGB};{r};{g};{b}", slot.extended_code())
            }
        }
    }

    /// The full escape sequence for this color alone.
    pub fn escape(&self) -> String {
        format!("{CSI}{}{SGR_END}", self.encode())
    }
}

impl std::fmt::Display for AnsiColorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl std::str::FromStr for AnsiColorCode {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Map onto crossterm's color model for callers that write through crossterm.
impl From<AnsiColorCode> for Color {
    fn from(code: AnsiColorCode) -> Self {
        match code {
            AnsiColorCode::Ansi4(_, index) => match index.index() {
                0 => Color::Black,
                1 => Color::DarkRed,
                2 => Color::DarkGreen,
                3 => Color::DarkYellow,
                4 => Color::DarkBlue,
                5 => Color::DarkMagenta,
                6 => Color::DarkCyan,
                7 => Color::Grey,
                8 => Color::DarkGrey,
                9 => Color::Red,
                10 => Color::Green,
                11 => Color::Yellow,
                12 => Color::Blue,
                13 => Color::Magenta,
                14 => Color::Cyan,
                _ => Color::White,
            },
            AnsiColorCode::Ansi8(_, index) => Color::AnsiValue(index),
            AnsiColorCode::Ansi24(_, color) => {
                let (r, g, b) = color.channels();
                Color::Rgb { r, g, b }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FG: ColorSlot = ColorSlot::Foreground;
    const BG: ColorSlot = ColorSlot::Background;

    #[test]
    fn test_ansi16_validation() {
        assert!(Ansi16::new(15).is_ok());
        assert!(matches!(Ansi16::new(16), Err(ChromaError::Range(_))));
        assert_eq!(Ansi16::RED.brighten(), Ansi16::BRIGHT_RED);
        assert_eq!(Ansi16::BRIGHT_CYAN.dim(), Ansi16::CYAN);
    }

    #[test]
    fn test_ansi4_codes() {
        assert_eq!(AnsiColorCode::Ansi4(FG, Ansi16::RED).encode(), "31");
        assert_eq!(AnsiColorCode::Ansi4(BG, Ansi16::RED).encode(), "41");
        assert_eq!(AnsiColorCode::Ansi4(FG, Ansi16::BRIGHT_RED).encode(), "91");
        assert_eq!(AnsiColorCode::Ansi4(BG, Ansi16::BRIGHT_WHITE).encode(), "107");
    }

    #[test]
    fn test_extended_codes() {
        assert_eq!(AnsiColorCode::Ansi8(FG, 9).encode(), "38;5;9");
        assert_eq!(
            AnsiColorCode::Ansi24(BG, ColorValue::rgb(0, 170, 0)).encode(),
            "48;2;0;170;0"
        );
        assert_eq!(AnsiColorCode::Ansi8(FG, 196).escape(), "\x1b[38;5;196m");
    }

    #[test]
    fn test_parse_shapes() {
        assert_eq!(
            AnsiColorCode::parse("97").unwrap(),
            AnsiColorCode::Ansi4(FG, Ansi16::BRIGHT_WHITE)
        );
        assert_eq!(
            AnsiColorCode::parse("\x1b[48;5;255m").unwrap(),
            AnsiColorCode::Ansi8(BG, 255)
        );
        assert_eq!(
            AnsiColorCode::parse("38;2;10;20;30").unwrap(),
            AnsiColorCode::Ansi24(FG, ColorValue::rgb(10, 20, 30))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "1", "38", "38;5", "38;5;256", "38;2;1;2", "38;9;1", "48;2;1;2;3;4", "31;"] {
            assert!(AnsiColorCode::parse(bad).is_err(), "{bad:?} should fail");
        }
        assert!(matches!(
            AnsiColorCode::parse("38;2;1;2;300"),
            Err(ChromaError::Parse(_))
        ));
    }

    #[test]
    fn test_resolve() {
        assert_eq!(
            AnsiColorCode::Ansi4(FG, Ansi16::RED).resolve(),
            ColorValue::rgb(170, 0, 0)
        );
        assert_eq!(AnsiColorCode::Ansi8(FG, 231).resolve(), ColorValue::WHITE);
    }

    #[test]
    fn test_from_color_white_8bit() {
        let code = AnsiColorCode::from_color(FG, ColorValue::WHITE, ColorFormat::Ansi8);
        assert_eq!(code, AnsiColorCode::Ansi8(FG, 15));
        assert_eq!(code.resolve(), ColorValue::WHITE);
    }

    #[test]
    fn test_convert_is_identity_in_same_format() {
        let code = AnsiColorCode::Ansi24(FG, ColorValue::rgb(1, 2, 3));
        assert_eq!(code.convert(ColorFormat::Ansi24), code);
        assert_eq!(
            code.convert(ColorFormat::Ansi4),
            AnsiColorCode::Ansi4(FG, Ansi16::BLACK)
        );
    }

    #[test]
    fn test_crossterm_interop() {
        assert_eq!(Color::from(AnsiColorCode::Ansi4(FG, Ansi16::BRIGHT_RED)), Color::Red);
        assert_eq!(Color::from(AnsiColorCode::Ansi8(BG, 42)), Color::AnsiValue(42));
        assert_eq!(
            Color::from(AnsiColorCode::Ansi24(FG, ColorValue::rgb(1, 2, 3))),
            Color::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
