//! Reusable text painters.
//!
//! A [`Painter`] holds a style and the format its colors are quantized
//! into, and turns plain strings into [`StyledText`]. The free functions
//! [`fore`], [`back`] and [`style`] start a painter from a color name or
//! a single attribute; painters combine with `+`.
//!
//! # Example
//!
//! ```
//! use chromastr_ansi::painter::{back, fore, style};
//! use chromastr_ansi::SgrAttribute;
//!
//! let warn = fore("orange").unwrap() + style(SgrAttribute::Underline);
//! assert_eq!(
//!     warn.paint("careful").serialize(),
//!     "\x1b[38;2;255;165;0;4mcareful\x1b[0m",
//! );
//!
//! let banner = back("navy").unwrap().bold();
//! assert_eq!(banner.paint("hi").text(), "hi");
//! ```

use crate::codes::SgrAttribute;
use crate::color_code::AnsiColorCode;
use crate::sequence::{SgrEntry, StyleBuilder, StyleSequence};
use crate::text::StyledText;
use chromastr_core::{named, ChromaError, ColorFormat, ColorSlot, ColorValue, Result};

/// A style ready to be applied to text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Painter {
    style: StyleSequence,
    format: ColorFormat,
}

/// Painter for a named foreground color, in 24-bit.
pub fn fore(name: &str) -> Result<Painter> {
    Ok(Painter::new(ColorFormat::Ansi24).fg(lookup(name)?))
}

/// Painter for a named background color, in 24-bit.
pub fn back(name: &str) -> Result<Painter> {
    Ok(Painter::new(ColorFormat::Ansi24).bg(lookup(name)?))
}

/// Painter for one attribute.
pub fn style(attr: SgrAttribute) -> Painter {
    Painter::default().attr(attr)
}

fn lookup(name: &str) -> Result<ColorValue> {
    named::lookup(name)
        .ok_or_else(|| ChromaError::InvalidColorSpec(format!("unknown color name {name:?}")))
}

impl Painter {
    /// An empty painter quantizing new colors into `format`.
    pub fn new(format: ColorFormat) -> Self {
        Self {
            style: StyleSequence::new(),
            format,
        }
    }

    fn with_entry(self, entry: impl Into<SgrEntry>) -> Self {
        let mut builder = StyleBuilder::from(self.style);
        builder.push_unique(entry);
        Self {
            style: builder.build(),
            format: self.format,
        }
    }

    pub fn fg(self, color: ColorValue) -> Self {
        let code = AnsiColorCode::from_color(ColorSlot::Foreground, color, self.format);
        self.with_entry(code)
    }

    pub fn bg(self, color: ColorValue) -> Self {
        let code = AnsiColorCode::from_color(ColorSlot::Background, color, self.format);
        self.with_entry(code)
    }

    /// Add an attribute; adding one twice keeps it once.
    pub fn attr(self, attr: SgrAttribute) -> Self {
        self.with_entry(attr)
    }

    pub fn bold(self) -> Self {
        self.attr(SgrAttribute::Bold)
    }

    pub fn italic(self) -> Self {
        self.attr(SgrAttribute::Italic)
    }

    pub fn underline(self) -> Self {
        self.attr(SgrAttribute::Underline)
    }

    /// Restore the terminal's default foreground.
    pub fn fg_default(self) -> Self {
        self.attr(SgrAttribute::DefaultForeground)
    }

    /// Restore the terminal's default background.
    pub fn bg_default(self) -> Self {
        self.attr(SgrAttribute::DefaultBackground)
    }

    /// Re-quantize the painter's colors into `format`.
    pub fn in_format(self, format: ColorFormat) -> Self {
        let style = self.style.convert_format(format).into_owned();
        Self { style, format }
    }

    pub fn style(&self) -> &StyleSequence {
        &self.style
    }

    pub fn format(&self) -> ColorFormat {
        self.format
    }

    /// Style `text` with this painter.
    pub fn paint(&self, text: impl Into<String>) -> StyledText {
        StyledText::styled(text, self.style.clone())
            .as_format(self.format)
            .into_owned()
    }

    /// Re-style already styled text; its own entries win conflicts.
    ///
    /// ```
    /// use chromastr_ansi::painter::fore;
    /// use chromastr_ansi::StyledText;
    ///
    /// let inner = StyledText::parse("\x1b[4mlink\x1b[0m").unwrap();
    /// let painted = fore("red").unwrap().paint_styled(&inner);
    /// assert_eq!(painted.serialize(), "\x1b[38;2;255;0;0;4mlink\x1b[0m");
    /// ```
    pub fn paint_styled(&self, text: &StyledText) -> StyledText {
        StyledText::styled(text.text(), self.style.merge(text.style()))
            .as_format(self.format)
            .into_owned()
    }
}

impl std::ops::Add for Painter {
    type Output = Painter;

    /// Combine two painters; the right side wins slot conflicts and its
    /// format is kept only when the left side has no colors.
    fn add(self, rhs: Painter) -> Painter {
        let format = if self.style.is_color() {
            self.format
        } else {
            rhs.format
        };
        Painter {
            style: self.style.merge(&rhs.style),
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fore_and_back_use_named_colors() {
        let text = fore("red").unwrap().paint("x");
        assert_eq!(text.fg(), Some(ColorValue::rgb(255, 0, 0)));
        assert_eq!(text.format(), ColorFormat::Ansi24);

        let text = back("Dark Slate Gray").unwrap().paint("x");
        assert_eq!(text.bg(), named::lookup("dark_slate_grey"));
        assert_eq!(text.fg(), None);
    }

    #[test]
    fn test_unknown_name_is_color_spec_error() {
        assert!(matches!(
            fore("not a color"),
            Err(ChromaError::InvalidColorSpec(_))
        ));
        assert!(back("").is_err());
    }

    #[test]
    fn test_style_painter() {
        let text = style(SgrAttribute::Italic).paint("x");
        assert_eq!(text.serialize(), "\x1b[3mx\x1b[0m");
        assert_eq!(style(SgrAttribute::Italic).italic(), style(SgrAttribute::Italic));
    }

    #[test]
    fn test_combine_right_wins() {
        let painter = fore("red").unwrap() + fore("blue").unwrap() + style(SgrAttribute::Bold);
        let text = painter.paint("x");
        assert_eq!(text.serialize(), "\x1b[38;2;0;0;255;1mx\x1b[0m");
    }

    #[test]
    fn test_in_format_requantizes() {
        let painter = fore("red").unwrap().in_format(ColorFormat::Ansi4);
        assert_eq!(painter.paint("x").serialize(), "\x1b[31mx\x1b[0m");

        let bold = Painter::new(ColorFormat::Ansi4).bold().fg(ColorValue::rgb(0, 170, 0));
        assert_eq!(bold.paint("x").serialize(), "\x1b[92mx\x1b[0m");
    }

    #[test]
    fn test_default_color_attributes() {
        let painter = Painter::default().fg_default().bg_default();
        assert_eq!(painter.paint("x").serialize(), "\x1b[39;49mx\x1b[0m");
    }

    #[test]
    fn test_plain_painter_leaves_text_bare() {
        assert_eq!(Painter::default().paint("x").serialize(), "x");
    }
}
