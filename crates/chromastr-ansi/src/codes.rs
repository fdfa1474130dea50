//! SGR escape constants and the non-color attribute table.
//!
//! Every SGR parameter that is not a color assignment maps one-to-one to
//! an [`SgrAttribute`] variant. Color parameters (`30-37`, `40-47`,
//! `90-97`, `100-107`, `38;...`, `48;...`) live in
//! [`AnsiColorCode`](crate::color_code::AnsiColorCode).

use chromastr_core::{ChromaError, Result};

/// The escape character.
pub const ESC: char = '\x1b';

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR sequence.
pub const SGR_END: char = 'm';

/// Reset all attributes (colors and formatting).
pub const RESET: &str = "\x1b[0m";

/// Extended foreground color introducer.
pub const EXTENDED_FG: u32 = 38;

/// Extended background color introducer.
pub const EXTENDED_BG: u32 = 48;

/// Sub-parameter selecting the 256-color palette.
pub const EXTENDED_PALETTE: u32 = 5;

/// Sub-parameter selecting direct RGB.
pub const EXTENDED_RGB: u32 = 2;

/// A non-color SGR parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum SgrAttribute {
    Reset = 0,
    Bold = 1,
    Faint = 2,
    Italic = 3,
    Underline = 4,
    SlowBlink = 5,
    RapidBlink = 6,
    Reverse = 7,
    Conceal = 8,
    CrossedOut = 9,
    PrimaryFont = 10,
    AltFont1 = 11,
    AltFont2 = 12,
    AltFont3 = 13,
    AltFont4 = 14,
    AltFont5 = 15,
    AltFont6 = 16,
    AltFont7 = 17,
    AltFont8 = 18,
    AltFont9 = 19,
    Fraktur = 20,
    DoubleUnderline = 21,
    NormalIntensity = 22,
    NotItalic = 23,
    NotUnderlined = 24,
    NotBlinking = 25,
    ProportionalSpacing = 26,
    NotReversed = 27,
    Reveal = 28,
    NotCrossedOut = 29,
    DefaultForeground = 39,
    DefaultBackground = 49,
    NotProportionalSpacing = 50,
    Framed = 51,
    Encircled = 52,
    Overlined = 53,
    NotFramedOrEncircled = 54,
    NotOverlined = 55,
    IdeogramUnderline = 60,
    IdeogramDoubleUnderline = 61,
    IdeogramOverline = 62,
    IdeogramDoubleOverline = 63,
}

impl SgrAttribute {
    /// Every recognized attribute in code order.
    pub const ALL: [SgrAttribute; 42] = [
        SgrAttribute::Reset,
        SgrAttribute::Bold,
        SgrAttribute::Faint,
        SgrAttribute::Italic,
        SgrAttribute::Underline,
        SgrAttribute::SlowBlink,
        SgrAttribute::RapidBlink,
        SgrAttribute::Reverse,
        SgrAttribute::Conceal,
        SgrAttribute::CrossedOut,
        SgrAttribute::PrimaryFont,
        SgrAttribute::AltFont1,
        SgrAttribute::AltFont2,
        SgrAttribute::AltFont3,
        SgrAttribute::AltFont4,
        SgrAttribute::AltFont5,
        SgrAttribute::AltFont6,
        SgrAttribute::AltFont7,
        SgrAttribute::AltFont8,
        SgrAttribute::AltFont9,
        SgrAttribute::Fraktur,
        SgrAttribute::DoubleUnderline,
        SgrAttribute::NormalIntensity,
        SgrAttribute::NotItalic,
        SgrAttribute::NotUnderlined,
        SgrAttribute::NotBlinking,
        SgrAttribute::ProportionalSpacing,
        SgrAttribute::NotReversed,
        SgrAttribute::Reveal,
        SgrAttribute::NotCrossedOut,
        SgrAttribute::DefaultForeground,
        SgrAttribute::DefaultBackground,
        SgrAttribute::NotProportionalSpacing,
        SgrAttribute::Framed,
        SgrAttribute::Encircled,
        SgrAttribute::Overlined,
        SgrAttribute::NotFramedOrEncircled,
        SgrAttribute::NotOverlined,
        SgrAttribute::IdeogramUnderline,
        SgrAttribute::IdeogramDoubleUnderline,
        SgrAttribute::IdeogramOverline,
        SgrAttribute::IdeogramDoubleOverline,
    ];

    /// The numeric SGR parameter.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up the attribute for a numeric parameter.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| u32::from(a.code()) == code)
    }

    /// Whether this is the reset-all code.
    pub fn is_reset(self) -> bool {
        self == SgrAttribute::Reset
    }

    /// The full escape sequence for this attribute alone.
    ///
    /// ```
    /// use chromastr_ansi::codes::SgrAttribute;
    /// assert_eq!(SgrAttribute::Italic.escape(), "\x1b[3m");
    /// ```
    pub fn escape(self) -> String {
        format!("{CSI}{}{SGR_END}", self.code())
    }
}

impl std::fmt::Display for SgrAttribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<u32> for SgrAttribute {
    type Error = ChromaError;

    fn try_from(code: u32) -> Result<Self> {
        Self::from_code(code).ok_or_else(|| {
            ChromaError::InvalidParameter(format!("{code} is not a valid SGR attribute"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique_and_sorted() {
        let codes: Vec<u8> = SgrAttribute::ALL.iter().map(|a| a.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(SgrAttribute::from_code(1), Some(SgrAttribute::Bold));
        assert_eq!(SgrAttribute::from_code(53), Some(SgrAttribute::Overlined));
        assert_eq!(SgrAttribute::from_code(31), None);
        assert_eq!(SgrAttribute::from_code(38), None);
        assert_eq!(SgrAttribute::from_code(56), None);
    }

    #[test]
    fn test_try_from_rejects_colors() {
        assert!(matches!(
            SgrAttribute::try_from(91),
            Err(ChromaError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_escape() {
        assert_eq!(SgrAttribute::Reset.escape(), RESET);
        assert_eq!(SgrAttribute::Bold.escape(), "\x1b[1m");
    }
}
