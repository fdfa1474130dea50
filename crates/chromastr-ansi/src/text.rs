//! Styled text values.
//!
//! A [`StyledText`] pairs a plain string with the [`StyleSequence`] that
//! prefixes it on the wire, plus the color format new colors are quantized
//! into. Every operation returns a new value.
//!
//! # Example
//!
//! ```
//! use chromastr_ansi::{ColorSpec, StyledText};
//! use chromastr_core::{ColorFormat, ColorValue};
//!
//! let red = ColorValue::rgb(255, 0, 0);
//! let blue = ColorValue::rgb(0, 0, 255);
//! let a = StyledText::from_colors("A", Some(red), None, ColorFormat::Ansi24);
//! let b = StyledText::from_colors("B", None, Some(blue), ColorFormat::Ansi24);
//!
//! assert_eq!(
//!     a.concat(&b).serialize(),
//!     "\x1b[38;2;255;0;0;48;2;0;0;255mAB\x1b[0m",
//! );
//! ```

use crate::codes::RESET;
use crate::color_code::AnsiColorCode;
use crate::color_spec::{ColorSpec, SlotColors};
use crate::sequence::{SgrEntry, StyleBuilder, StyleSequence};
use crate::utils::{split_sgr_prefix, visible_length};
use chromastr_core::{ChromaError, ColorFormat, ColorSlot, ColorValue, Result};
use std::borrow::Cow;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Bound, RangeBounds};

/// Text with an SGR style prefix.
#[derive(Debug, Clone)]
pub struct StyledText {
    text: String,
    style: StyleSequence,
    /// `None` emits a trailing reset only for a non-empty style;
    /// `Some(true)` never emits one; `Some(false)` always does.
    suppress_reset: Option<bool>,
    format: ColorFormat,
}

impl StyledText {
    /// Plain text with no style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: StyleSequence::new(),
            suppress_reset: None,
            format: ColorFormat::default(),
        }
    }

    /// Text with an existing style; the format is the style's dominant one.
    pub fn styled(text: impl Into<String>, style: StyleSequence) -> Self {
        let format = style.dominant_format().unwrap_or_default();
        Self {
            text: text.into(),
            style,
            suppress_reset: None,
            format,
        }
    }

    /// Text colored by a structured spec, quantized into `format`.
    ///
    /// ```
    /// use chromastr_ansi::{ColorSpec, StyledText};
    /// use chromastr_core::{ColorFormat, ColorValue};
    ///
    /// let spec = ColorSpec::Pair(ColorValue::WHITE, ColorValue::BLACK);
    /// let text = StyledText::with_spec("hi", &spec, ColorFormat::Ansi4).unwrap();
    /// assert_eq!(text.serialize(), "\x1b[97;40mhi\x1b[0m");
    /// ```
    pub fn with_spec(text: impl Into<String>, spec: &ColorSpec, format: ColorFormat) -> Result<Self> {
        let style = spec.to_style(format)?;
        Ok(Self {
            text: text.into(),
            style,
            suppress_reset: None,
            format,
        })
    }

    /// Text with an already-resolved color pair.
    pub fn from_colors(
        text: impl Into<String>,
        fg: Option<ColorValue>,
        bg: Option<ColorValue>,
        format: ColorFormat,
    ) -> Self {
        Self {
            text: text.into(),
            style: SlotColors::new(fg, bg).to_style(format),
            suppress_reset: None,
            format,
        }
    }

    /// Parse a literal: the leading escape run is the style, a trailing
    /// `ESC[0m` is consumed, the rest is text.
    ///
    /// Serializing the result reproduces a literal whose style prefix is
    /// already canonical.
    ///
    /// ```
    /// use chromastr_ansi::StyledText;
    ///
    /// let text = StyledText::parse("\x1b[1;31mwarn\x1b[0m").unwrap();
    /// assert_eq!(text.text(), "warn");
    /// assert_eq!(text.serialize(), "\x1b[91mwarn\x1b[0m");
    /// ```
    pub fn parse(literal: &str) -> Result<Self> {
        let (body, had_reset) = match literal.strip_suffix(RESET) {
            Some(body) => (body, true),
            None => (literal, false),
        };
        let (prefix, text) = split_sgr_prefix(body);
        let style = StyleSequence::parse(prefix)?;
        log::trace!(
            "parsed styled text: style {:?}, {} chars, trailing reset {had_reset}",
            style.params(),
            text.chars().count()
        );
        Ok(Self {
            suppress_reset: Some(!had_reset),
            ..Self::styled(text, style)
        })
    }

    /// Force the trailing reset on (`false`) or off (`true`).
    pub fn with_suppress_reset(&self, suppress: bool) -> Self {
        Self {
            suppress_reset: Some(suppress),
            ..self.clone()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &StyleSequence {
        &self.style
    }

    /// The format new colors are quantized into.
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    pub fn suppress_reset(&self) -> Option<bool> {
        self.suppress_reset
    }

    /// Whether serialization ends with a reset.
    pub fn emits_reset(&self) -> bool {
        match self.suppress_reset {
            Some(suppress) => !suppress,
            None => !self.style.is_empty(),
        }
    }

    /// The resolved color of `slot`.
    pub fn color(&self, slot: ColorSlot) -> Option<ColorValue> {
        self.style.color(slot).map(|c| c.resolve())
    }

    pub fn fg(&self) -> Option<ColorValue> {
        self.color(ColorSlot::Foreground)
    }

    pub fn bg(&self) -> Option<ColorValue> {
        self.color(ColorSlot::Background)
    }

    pub fn colors(&self) -> SlotColors {
        SlotColors::new(self.fg(), self.bg())
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Display width of the text in terminal columns.
    pub fn width(&self) -> usize {
        visible_length(&self.text)
    }

    fn with_text(&self, text: String) -> Self {
        Self {
            text,
            style: self.style.clone(),
            suppress_reset: self.suppress_reset,
            format: self.format,
        }
    }

    fn with_style(&self, style: StyleSequence) -> Self {
        Self {
            text: self.text.clone(),
            style,
            suppress_reset: self.suppress_reset,
            format: self.format,
        }
    }

    /// Join texts and merge styles; the reset behaviour comes from `other`.
    pub fn concat(&self, other: &StyledText) -> Self {
        Self {
            text: format!("{}{}", self.text, other.text),
            style: self.style.merge(&other.style),
            suppress_reset: other.suppress_reset,
            format: self.format,
        }
    }

    /// Append plain text under the current style.
    pub fn concat_str(&self, text: &str) -> Self {
        self.with_text(format!("{}{}", self.text, text))
    }

    /// The chars in `range`, under the same style.
    ///
    /// ```
    /// use chromastr_ansi::StyledText;
    /// let text = StyledText::parse("\x1b[4mhello\x1b[0m").unwrap();
    /// assert_eq!(text.slice(1..3).unwrap().serialize(), "\x1b[4mel\x1b[0m");
    /// assert!(text.slice(2..9).is_err());
    /// ```
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Result<Self> {
        let len = self.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };
        if start > end || end > len {
            return Err(ChromaError::Range(format!(
                "slice {start}..{end} out of bounds for length {len}"
            )));
        }
        let text = self.text.chars().skip(start).take(end - start).collect();
        Ok(self.with_text(text))
    }

    /// Each char as its own styled value.
    pub fn chars(&self) -> Chars<'_> {
        Chars {
            source: self,
            inner: self.text.chars(),
        }
    }

    /// Replace the colors named by `spec`.
    ///
    /// Without `absolute`, slots absent from `spec` keep their colors; with
    /// it, every existing color is dropped first. New colors are written as
    /// quantized and never folded with bold.
    pub fn recolor(&self, spec: &ColorSpec, absolute: bool) -> Result<Self> {
        let colors = spec.resolve()?;
        let mut builder = StyleBuilder::from(self.style.clone());
        if absolute {
            builder.clear_colors();
        }
        for (slot, color) in colors.iter() {
            builder.set_color(AnsiColorCode::from_color(slot, color, self.format));
        }
        Ok(self.with_style(builder.build()))
    }

    /// Replace every color with its channel complement.
    ///
    /// ```
    /// use chromastr_ansi::StyledText;
    /// use chromastr_core::ColorValue;
    ///
    /// let text = StyledText::parse("\x1b[1;31mx\x1b[0m").unwrap();
    /// assert_eq!(text.fg(), Some(ColorValue::rgb(255, 85, 85)));
    /// assert_eq!(text.invert().fg(), Some(ColorValue::rgb(0, 170, 170)));
    /// ```
    pub fn invert(&self) -> Self {
        self.map_colors(|_, color| Some(color.invert()))
            .unwrap_or_else(|| self.clone())
    }

    /// Per-channel difference against the colors of `other`, over the slots
    /// both values color. Returns an unchanged copy when they share none.
    pub fn difference(&self, other: &StyledText) -> Self {
        self.map_colors(|slot, color| other.color(slot).map(|o| color.difference(o)))
            .unwrap_or_else(|| self.clone())
    }

    /// Per-channel difference of every present color against `color`.
    pub fn difference_color(&self, color: ColorValue) -> Self {
        self.map_colors(|_, c| Some(c.difference(color)))
            .unwrap_or_else(|| self.clone())
    }

    /// Rewrite colors slot by slot; `None` when nothing was rewritten.
    fn map_colors<F>(&self, f: F) -> Option<Self>
    where
        F: Fn(ColorSlot, ColorValue) -> Option<ColorValue>,
    {
        let updates: Vec<AnsiColorCode> = self
            .style
            .colors()
            .filter_map(|code| {
                f(code.slot(), code.resolve())
                    .map(|color| AnsiColorCode::from_color(code.slot(), color, self.format))
            })
            .collect();
        if updates.is_empty() {
            return None;
        }
        let mut builder = StyleBuilder::from(self.style.clone());
        for code in updates {
            builder.set_color(code);
        }
        Some(self.with_style(builder.build()))
    }

    /// Toggle each entry in turn.
    ///
    /// When the set of colors changes, the format becomes the most frequent
    /// remaining color format.
    ///
    /// ```
    /// use chromastr_ansi::codes::SgrAttribute;
    /// use chromastr_ansi::StyledText;
    ///
    /// let text = StyledText::parse("\x1b[3;4mx\x1b[0m").unwrap();
    /// let text = text.toggle_style(&[SgrAttribute::Italic.into(), SgrAttribute::Bold.into()]);
    /// assert_eq!(text.serialize(), "\x1b[4;1mx\x1b[0m");
    /// ```
    pub fn toggle_style(&self, entries: &[SgrEntry]) -> Self {
        let mut builder = StyleBuilder::from(self.style.clone());
        for entry in entries {
            builder.toggle(*entry);
        }
        let style = builder.build();

        let before: Vec<AnsiColorCode> = self.style.colors().collect();
        let after: Vec<AnsiColorCode> = style.colors().collect();
        let format = if before == after {
            self.format
        } else {
            style.dominant_format().unwrap_or(self.format)
        };
        Self {
            format,
            ..self.with_style(style)
        }
    }

    /// Toggle numeric codes; extended color introducers are rejected.
    pub fn toggle_codes(&self, codes: &[u32]) -> Result<Self> {
        let entries = codes
            .iter()
            .map(|&code| SgrEntry::from_code(code))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.toggle_style(&entries))
    }

    /// Re-quantize every color into `target`.
    ///
    /// Borrows `self` when neither the colors nor the format change.
    pub fn as_format(&self, target: ColorFormat) -> Cow<'_, StyledText> {
        match self.style.convert_format(target) {
            Cow::Borrowed(_) if self.format == target => Cow::Borrowed(self),
            converted => Cow::Owned(Self {
                format: target,
                ..self.with_style(converted.into_owned())
            }),
        }
    }

    /// `(style prefix, text, reset suffix)`.
    pub fn parts(&self) -> (String, &str, &'static str) {
        let suffix = if self.emits_reset() { RESET } else { "" };
        (self.style.encode(), &self.text, suffix)
    }

    /// Wire form: style prefix, text, then the reset unless suppressed.
    pub fn serialize(&self) -> String {
        let (prefix, text, suffix) = self.parts();
        let mut out = String::with_capacity(prefix.len() + text.len() + suffix.len());
        out.push_str(&prefix);
        out.push_str(text);
        out.push_str(suffix);
        out
    }

    /// Replace every occurrence of `from` in the text.
    pub fn replace(&self, from: &str, to: &str) -> Self {
        self.with_text(self.text.replace(from, to))
    }

    /// Split the text on `sep`; each piece keeps the style.
    pub fn split(&self, sep: &str) -> Vec<Self> {
        self.text
            .split(sep)
            .map(|piece| self.with_text(piece.to_string()))
            .collect()
    }

    pub fn repeat(&self, n: usize) -> Self {
        self.with_text(self.text.repeat(n))
    }

    /// Transform the text, keeping the style.
    pub fn map_text<F: FnOnce(&str) -> String>(&self, f: F) -> Self {
        self.with_text(f(&self.text))
    }

    /// This text under the style, reset behaviour and format of `other`.
    pub fn with_style_of(&self, other: &StyledText) -> Self {
        other.with_text(self.text.clone())
    }
}

impl Default for StyledText {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl PartialEq for StyledText {
    fn eq(&self, other: &Self) -> bool {
        self.serialize() == other.serialize()
    }
}

impl Eq for StyledText {}

impl Hash for StyledText {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.serialize().hash(state);
    }
}

impl std::fmt::Display for StyledText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl std::str::FromStr for StyledText {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl std::ops::Add<&StyledText> for &StyledText {
    type Output = StyledText;

    fn add(self, rhs: &StyledText) -> StyledText {
        self.concat(rhs)
    }
}

impl std::ops::Add<&str> for &StyledText {
    type Output = StyledText;

    fn add(self, rhs: &str) -> StyledText {
        self.concat_str(rhs)
    }
}

/// Lazy per-char iterator returned by [`StyledText::chars`].
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    source: &'a StyledText,
    inner: std::str::Chars<'a>,
}

impl Iterator for Chars<'_> {
    type Item = StyledText;

    fn next(&mut self) -> Option<StyledText> {
        self.inner.next().map(|c| self.source.with_text(c.to_string()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Chars<'_> {
    fn next_back(&mut self) -> Option<StyledText> {
        self.inner
            .next_back()
            .map(|c| self.source.with_text(c.to_string()))
    }
}

impl FusedIterator for Chars<'_> {}
