//! SGR style sequences.
//!
//! A [`StyleSequence`] is the ordered set of parameters carried by one
//! styling prefix. It is immutable; every change goes through a
//! [`StyleBuilder`], which enforces the sequence rules on each push:
//!
//! - at most one foreground and one background color; assigning an
//!   occupied slot replaces the old color and moves the new one to the end
//! - reset-all is always the only entry; anything pushed after it starts
//!   a fresh sequence
//! - with bold active, a standard-intensity 4-bit color folds into its
//!   bright variant and the explicit bold entry is dropped
//! - entries are unique and keep insertion order; pushing an attribute
//!   that is already present removes it, while parsing and merging
//!   simply skip the repeat
//!
//! # Example
//!
//! ```
//! use chromastr_ansi::codes::SgrAttribute;
//! use chromastr_ansi::sequence::StyleBuilder;
//!
//! let mut builder = StyleBuilder::new();
//! builder.push(SgrAttribute::Bold).push_code(31).unwrap();
//! let style = builder.build();
//! assert_eq!(style.encode(), "\x1b[91m");
//! assert!(style.has_bright_colors());
//! ```

use crate::codes::{SgrAttribute, CSI, EXTENDED_BG, EXTENDED_FG, EXTENDED_PALETTE, EXTENDED_RGB, SGR_END};
use crate::color_code::{Ansi16, AnsiColorCode};
use crate::utils::{extract_sgr_codes, is_sgr_run, parse_sgr_params};
use chromastr_core::{ChromaError, ColorFormat, ColorSlot, Result};
use std::borrow::Cow;
use std::hash::{Hash, Hasher};

/// One parameter of a style sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SgrEntry {
    Attribute(SgrAttribute),
    Color(AnsiColorCode),
}

impl SgrEntry {
    /// Interpret a single numeric parameter.
    ///
    /// Extended color introducers (`38`, `48`) need sub-parameters and are
    /// rejected here; use [`StyleSequence::parse`] for full escapes.
    pub fn from_code(code: u32) -> Result<Self> {
        if let Some(attr) = SgrAttribute::from_code(code) {
            return Ok(SgrEntry::Attribute(attr));
        }
        if let Some((slot, index)) = Ansi16::from_code(code) {
            return Ok(SgrEntry::Color(AnsiColorCode::Ansi4(slot, index)));
        }
        let reason = if code == EXTENDED_FG || code == EXTENDED_BG {
            " without sub-parameters"
        } else {
            ""
        };
        Err(ChromaError::InvalidParameter(format!(
            "{code}{reason} is not a valid SGR parameter"
        )))
    }

    /// Decode a full parameter list, consuming extended color runs.
    pub fn from_params(params: &[u32]) -> Result<Vec<Self>> {
        let mut entries = Vec::with_capacity(params.len());
        let mut i = 0;
        while i < params.len() {
            match params[i] {
                EXTENDED_FG | EXTENDED_BG => {
                    let width = match params.get(i + 1) {
                        Some(&EXTENDED_PALETTE) => 3,
                        Some(&EXTENDED_RGB) => 5,
                        _ => {
                            return Err(ChromaError::Parse(format!(
                                "extended color at position {i} of {params:?} has no valid mode"
                            )))
                        }
                    };
                    let run = params.get(i..i + width).ok_or_else(|| {
                        ChromaError::Parse(format!("truncated extended color in {params:?}"))
                    })?;
                    entries.push(SgrEntry::Color(AnsiColorCode::from_params(run)?));
                    i += width;
                }
                code => {
                    entries.push(SgrEntry::from_code(code)?);
                    i += 1;
                }
            }
        }
        Ok(entries)
    }

    /// Wire parameters for this entry.
    pub fn encode(&self) -> String {
        match self {
            SgrEntry::Attribute(attr) => attr.code().to_string(),
            SgrEntry::Color(color) => color.encode(),
        }
    }

    pub fn as_color(&self) -> Option<AnsiColorCode> {
        match self {
            SgrEntry::Color(color) => Some(*color),
            SgrEntry::Attribute(_) => None,
        }
    }

    pub fn is_color(&self) -> bool {
        matches!(self, SgrEntry::Color(_))
    }

    pub fn is_reset(&self) -> bool {
        matches!(self, SgrEntry::Attribute(SgrAttribute::Reset))
    }
}

impl From<SgrAttribute> for SgrEntry {
    fn from(attr: SgrAttribute) -> Self {
        SgrEntry::Attribute(attr)
    }
}

impl From<AnsiColorCode> for SgrEntry {
    fn from(color: AnsiColorCode) -> Self {
        SgrEntry::Color(color)
    }
}

impl TryFrom<u32> for SgrEntry {
    type Error = ChromaError;

    fn try_from(code: u32) -> Result<Self> {
        Self::from_code(code)
    }
}

impl std::fmt::Display for SgrEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

/// An immutable, canonical list of SGR parameters.
///
/// Equality and hashing consider the entries only.
#[derive(Debug, Clone, Default)]
pub struct StyleSequence {
    entries: Vec<SgrEntry>,
    /// Per slot: the color there was folded from bold into its bright variant.
    promoted: [bool; 2],
}

impl PartialEq for StyleSequence {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for StyleSequence {}

impl Hash for StyleSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}

impl StyleSequence {
    /// The empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// The reset-all sequence.
    pub fn reset() -> Self {
        Self {
            entries: vec![SgrEntry::Attribute(SgrAttribute::Reset)],
            promoted: [false; 2],
        }
    }

    /// Build a sequence by pushing each numeric code in order.
    ///
    /// A repeated attribute code toggles the attribute off again.
    ///
    /// ```
    /// use chromastr_ansi::sequence::StyleSequence;
    /// let style = StyleSequence::from_codes(&[1, 31, 44]).unwrap();
    /// assert_eq!(style.encode(), "\x1b[91;104m");
    /// assert!(StyleSequence::from_codes(&[38]).is_err());
    /// ```
    pub fn from_codes(codes: &[u32]) -> Result<Self> {
        let mut builder = StyleBuilder::new();
        for &code in codes {
            builder.push_code(code)?;
        }
        Ok(builder.build())
    }

    /// Parse one or more consecutive SGR escapes.
    ///
    /// The input must consist only of SGR escapes; the empty string and
    /// `ESC[m` both give the empty sequence. Repeated attributes are kept
    /// once.
    ///
    /// ```
    /// use chromastr_ansi::sequence::StyleSequence;
    /// let style = StyleSequence::parse("\x1b[1m\x1b[38;5;196;4m").unwrap();
    /// assert_eq!(style.encode(), "\x1b[1;38;5;196;4m");
    /// ```
    pub fn parse(literal: &str) -> Result<Self> {
        if !is_sgr_run(literal) {
            return Err(ChromaError::Parse(format!(
                "{literal:?} is not a run of SGR escapes"
            )));
        }
        let mut builder = StyleBuilder::new();
        for escape in extract_sgr_codes(literal) {
            let params = parse_sgr_params(escape)?;
            for entry in SgrEntry::from_params(&params)? {
                builder.push_unique(entry);
            }
        }
        let style = builder.build();
        log::trace!("parsed {literal:?} into {} entries", style.len());
        Ok(style)
    }

    pub fn entries(&self) -> &[SgrEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SgrEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether this is the reset-all sequence.
    pub fn is_reset(&self) -> bool {
        matches!(self.entries.as_slice(), [entry] if entry.is_reset())
    }

    /// Whether any color entry is present.
    pub fn is_color(&self) -> bool {
        self.entries.iter().any(SgrEntry::is_color)
    }

    /// Whether any 4-bit color is in its bright variant, folded or explicit.
    pub fn has_bright_colors(&self) -> bool {
        self.colors().any(|c| c.is_bright_ansi4())
    }

    /// Whether the color in `slot` was folded from bold.
    pub fn is_promoted(&self, slot: ColorSlot) -> bool {
        self.promoted[slot.index()]
    }

    /// Whether bold is in effect, explicitly or folded into a color.
    pub fn is_bold(&self) -> bool {
        self.has_explicit(SgrAttribute::Bold) || self.promoted.iter().any(|p| *p)
    }

    fn has_explicit(&self, attr: SgrAttribute) -> bool {
        self.entries.contains(&SgrEntry::Attribute(attr))
    }

    pub fn colors(&self) -> impl Iterator<Item = AnsiColorCode> + '_ {
        self.entries.iter().filter_map(SgrEntry::as_color)
    }

    pub fn attributes(&self) -> impl Iterator<Item = SgrAttribute> + '_ {
        self.entries.iter().filter_map(|e| match e {
            SgrEntry::Attribute(attr) => Some(*attr),
            SgrEntry::Color(_) => None,
        })
    }

    /// The color assigned to `slot`.
    pub fn color(&self, slot: ColorSlot) -> Option<AnsiColorCode> {
        self.colors().find(|c| c.slot() == slot)
    }

    pub fn fg(&self) -> Option<AnsiColorCode> {
        self.color(ColorSlot::Foreground)
    }

    pub fn bg(&self) -> Option<AnsiColorCode> {
        self.color(ColorSlot::Background)
    }

    /// Whether `entry` is present.
    ///
    /// Bold counts as present when folded into a color, and a standard
    /// 4-bit color counts as present when its folded bright variant is.
    pub fn contains(&self, entry: &SgrEntry) -> bool {
        self.position_of(entry).is_some()
            || matches!(entry, SgrEntry::Attribute(SgrAttribute::Bold) if self.is_bold())
    }

    fn position_of(&self, entry: &SgrEntry) -> Option<usize> {
        if let Some(i) = self.entries.iter().position(|e| e == entry) {
            return Some(i);
        }
        match entry {
            SgrEntry::Color(color)
                if color.is_standard_ansi4() && self.promoted[color.slot().index()] =>
            {
                let bright = SgrEntry::Color(color.brighten());
                self.entries.iter().position(|e| *e == bright)
            }
            _ => None,
        }
    }

    /// The most frequent color format, ties broken in declaration order.
    ///
    /// ```
    /// use chromastr_ansi::sequence::StyleSequence;
    /// use chromastr_core::ColorFormat;
    /// let style = StyleSequence::parse("\x1b[31;48;2;0;0;0m").unwrap();
    /// assert_eq!(style.dominant_format(), Some(ColorFormat::Ansi4));
    /// assert_eq!(StyleSequence::new().dominant_format(), None);
    /// ```
    pub fn dominant_format(&self) -> Option<ColorFormat> {
        let mut counts = [0usize; 3];
        for color in self.colors() {
            counts[format_rank(color.format())] += 1;
        }
        let mut best: Option<(ColorFormat, usize)> = None;
        for format in ColorFormat::ALL {
            let n = counts[format_rank(format)];
            if n > 0 && best.map_or(true, |(_, m)| n > m) {
                best = Some((format, n));
            }
        }
        best.map(|(format, _)| format)
    }

    /// Append one entry, applying the sequence rules.
    ///
    /// ```
    /// use chromastr_ansi::codes::SgrAttribute;
    /// use chromastr_ansi::sequence::StyleSequence;
    ///
    /// let once = StyleSequence::new().append(SgrAttribute::Underline);
    /// assert_eq!(once.encode(), "\x1b[4m");
    /// assert_eq!(once.append(SgrAttribute::Underline).encode(), "");
    /// ```
    pub fn append(&self, entry: impl Into<SgrEntry>) -> Self {
        let mut builder = StyleBuilder::from(self.clone());
        builder.push(entry);
        builder.build()
    }

    /// Append one numeric code.
    pub fn append_code(&self, code: u32) -> Result<Self> {
        let mut builder = StyleBuilder::from(self.clone());
        builder.push_code(code)?;
        Ok(builder.build())
    }

    /// Remove an entry; fails with [`ChromaError::NotFound`] when absent.
    pub fn remove(&self, entry: impl Into<SgrEntry>) -> Result<Self> {
        let mut builder = StyleBuilder::from(self.clone());
        builder.remove(entry)?;
        Ok(builder.build())
    }

    /// Remove the entry if present, append it otherwise.
    pub fn toggle(&self, entry: impl Into<SgrEntry>) -> Self {
        let mut builder = StyleBuilder::from(self.clone());
        builder.toggle(entry);
        builder.build()
    }

    /// Push every entry of `other` onto a copy of `self`; `other` wins slot conflicts.
    pub fn merge(&self, other: &StyleSequence) -> Self {
        let mut builder = StyleBuilder::from(self.clone());
        builder.merge(other);
        builder.build()
    }

    /// Re-quantize every color into `target`.
    ///
    /// Returns the sequence borrowed when no color changes format. A bold
    /// folded into a 4-bit color becomes an explicit bold entry once the
    /// color leaves the 4-bit format. Converting into 4-bit replays the
    /// entries through the folding rules, so an explicit bold followed by
    /// a color that lands on a standard 4-bit code folds as it would when
    /// parsed.
    ///
    /// ```
    /// use chromastr_ansi::sequence::StyleSequence;
    /// use chromastr_core::ColorFormat;
    ///
    /// let style = StyleSequence::parse("\x1b[1;38;5;1m").unwrap();
    /// assert_eq!(style.convert_format(ColorFormat::Ansi4).encode(), "\x1b[91m");
    /// ```
    pub fn convert_format(&self, target: ColorFormat) -> Cow<'_, StyleSequence> {
        if self.colors().all(|c| c.format() == target) {
            return Cow::Borrowed(self);
        }
        log::debug!("converting {} to {target:?}", self.encode().escape_debug());

        if target == ColorFormat::Ansi4 {
            let mut builder = StyleBuilder::new();
            for entry in &self.entries {
                match entry {
                    SgrEntry::Color(color) if self.promoted[color.slot().index()] => {
                        builder.push_unique(SgrAttribute::Bold);
                        builder.push_unique(color.dim());
                    }
                    SgrEntry::Color(color) => {
                        builder.push_unique(color.convert(target));
                    }
                    attr => {
                        builder.push_unique(*attr);
                    }
                }
            }
            return Cow::Owned(builder.build());
        }

        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        let mut bold_emitted = self.has_explicit(SgrAttribute::Bold);
        for entry in &self.entries {
            match entry {
                SgrEntry::Color(color) => {
                    if self.promoted[color.slot().index()] && !bold_emitted {
                        entries.push(SgrEntry::Attribute(SgrAttribute::Bold));
                        bold_emitted = true;
                    }
                    entries.push(SgrEntry::Color(color.convert(target)));
                }
                attr => entries.push(*attr),
            }
        }
        Cow::Owned(StyleSequence {
            entries,
            promoted: [false; 2],
        })
    }

    /// Parameters joined by `;` without the escape framing.
    pub fn params(&self) -> String {
        self.entries
            .iter()
            .map(SgrEntry::encode)
            .collect::<Vec<_>>()
            .join(";")
    }

    /// Wire form; the empty sequence encodes to the empty string.
    pub fn encode(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        format!("{CSI}{}{SGR_END}", self.params())
    }
}

fn format_rank(format: ColorFormat) -> usize {
    match format {
        ColorFormat::Ansi4 => 0,
        ColorFormat::Ansi8 => 1,
        ColorFormat::Ansi24 => 2,
    }
}

impl std::fmt::Display for StyleSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

impl std::str::FromStr for StyleSequence {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a StyleSequence {
    type Item = &'a SgrEntry;
    type IntoIter = std::slice::Iter<'a, SgrEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<SgrEntry> for StyleSequence {
    fn from_iter<I: IntoIterator<Item = SgrEntry>>(iter: I) -> Self {
        let mut builder = StyleBuilder::new();
        for entry in iter {
            builder.push_unique(entry);
        }
        builder.build()
    }
}

impl std::ops::Add for StyleSequence {
    type Output = StyleSequence;

    fn add(self, rhs: StyleSequence) -> StyleSequence {
        self.merge(&rhs)
    }
}

impl std::ops::Add<&StyleSequence> for &StyleSequence {
    type Output = StyleSequence;

    fn add(self, rhs: &StyleSequence) -> StyleSequence {
        self.merge(rhs)
    }
}

/// Transient accumulator that produces a [`StyleSequence`].
#[derive(Debug, Clone, Default)]
pub struct StyleBuilder {
    seq: StyleSequence,
}

impl From<StyleSequence> for StyleBuilder {
    fn from(seq: StyleSequence) -> Self {
        Self { seq }
    }
}

impl StyleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push one entry through the sequence rules.
    ///
    /// Pushing an attribute that is already in effect removes it; reset-all
    /// is the exception and stays alone however often it is pushed.
    pub fn push(&mut self, entry: impl Into<SgrEntry>) -> &mut Self {
        let entry = entry.into();
        if let SgrEntry::Attribute(attr) = entry {
            if !entry.is_reset() && self.seq.contains(&entry) {
                log::trace!("{attr:?} already present, removing");
                self.remove_present(entry);
                return self;
            }
        }
        self.push_unique(entry)
    }

    /// Push one entry, ignoring attributes already in effect.
    ///
    /// This is how escapes read off the wire and merged sequences are
    /// accumulated: a repeated parameter is a no-op rather than a toggle.
    pub fn push_unique(&mut self, entry: impl Into<SgrEntry>) -> &mut Self {
        let entry = entry.into();
        if entry.is_reset() {
            self.seq = StyleSequence::reset();
            return self;
        }
        if self.seq.is_reset() {
            self.seq = StyleSequence::new();
        }
        match entry {
            SgrEntry::Attribute(attr) => self.push_attribute(attr),
            SgrEntry::Color(color) => self.push_color(color),
        }
        self
    }

    /// Push one numeric code; fails with [`ChromaError::InvalidParameter`]
    /// for codes outside the recognized set.
    pub fn push_code(&mut self, code: u32) -> Result<&mut Self> {
        let entry = SgrEntry::from_code(code)?;
        Ok(self.push(entry))
    }

    fn push_attribute(&mut self, attr: SgrAttribute) {
        if attr == SgrAttribute::Bold && self.seq.is_bold() {
            return;
        }
        if !self.seq.has_explicit(attr) {
            self.seq.entries.push(SgrEntry::Attribute(attr));
        }
    }

    fn push_color(&mut self, color: AnsiColorCode) {
        let slot = color.slot().index();
        let other = 1 - slot;
        let explicit_bold = self.seq.has_explicit(SgrAttribute::Bold);
        let bold_active = explicit_bold || self.seq.promoted[slot] || self.seq.promoted[other];
        let carried_bold = self.seq.promoted[slot] && !explicit_bold && !self.seq.promoted[other];

        self.drop_slot(slot);

        if bold_active && color.is_standard_ansi4() {
            self.seq
                .entries
                .retain(|e| *e != SgrEntry::Attribute(SgrAttribute::Bold));
            self.seq.entries.push(SgrEntry::Color(color.brighten()));
            self.seq.promoted[slot] = true;
            return;
        }

        if carried_bold {
            self.seq.entries.push(SgrEntry::Attribute(SgrAttribute::Bold));
        }
        self.seq.entries.push(SgrEntry::Color(color));
    }

    fn drop_slot(&mut self, slot: usize) {
        self.seq
            .entries
            .retain(|e| !matches!(e, SgrEntry::Color(c) if c.slot().index() == slot));
        self.seq.promoted[slot] = false;
    }

    /// Put `color` in its slot exactly as given, without folding.
    ///
    /// A bold folded into any color becomes an explicit bold entry. When
    /// the new color is a standard 4-bit one under bold, the bold entry is
    /// moved after it so the encoding reads back to the same color.
    ///
    /// ```
    /// use chromastr_ansi::color_code::{Ansi16, AnsiColorCode};
    /// use chromastr_ansi::sequence::{StyleBuilder, StyleSequence};
    /// use chromastr_core::ColorSlot;
    ///
    /// let mut builder = StyleBuilder::from(StyleSequence::from_codes(&[1, 31]).unwrap());
    /// builder.set_color(AnsiColorCode::Ansi4(ColorSlot::Foreground, Ansi16::CYAN));
    /// assert_eq!(builder.build().encode(), "\x1b[36;1m");
    /// ```
    pub fn set_color(&mut self, color: AnsiColorCode) -> &mut Self {
        if self.seq.is_reset() {
            self.seq = StyleSequence::new();
        }
        let was_folded = self.seq.promoted.iter().any(|p| *p);
        let bold = was_folded || self.seq.has_explicit(SgrAttribute::Bold);
        let move_bold = bold && (was_folded || color.is_standard_ansi4());

        self.drop_slot(color.slot().index());
        self.seq.promoted = [false; 2];
        if move_bold {
            self.seq
                .entries
                .retain(|e| *e != SgrEntry::Attribute(SgrAttribute::Bold));
        }
        self.seq.entries.push(SgrEntry::Color(color));
        if move_bold {
            self.seq.entries.push(SgrEntry::Attribute(SgrAttribute::Bold));
        }
        self
    }

    /// Remove an entry.
    ///
    /// Removing bold while it is only folded into colors demotes those
    /// colors back to standard intensity. Removing a folded color drops
    /// the bold it carried.
    pub fn remove(&mut self, entry: impl Into<SgrEntry>) -> Result<&mut Self> {
        let entry = entry.into();
        if !self.seq.contains(&entry) {
            return Err(ChromaError::NotFound(format!(
                "{entry} is not in sequence {:?}",
                self.seq.params()
            )));
        }
        self.remove_present(entry);
        Ok(self)
    }

    fn remove_present(&mut self, entry: SgrEntry) {
        if let Some(i) = self.seq.position_of(&entry) {
            if let SgrEntry::Color(color) = self.seq.entries.remove(i) {
                self.seq.promoted[color.slot().index()] = false;
            }
        } else if entry == SgrEntry::Attribute(SgrAttribute::Bold) {
            self.demote();
        }
    }

    fn demote(&mut self) {
        let promoted = self.seq.promoted;
        for entry in &mut self.seq.entries {
            if let SgrEntry::Color(color) = entry {
                if promoted[color.slot().index()] {
                    *color = color.dim();
                }
            }
        }
        self.seq.promoted = [false; 2];
    }

    /// Remove `entry` if present, push it otherwise.
    pub fn toggle(&mut self, entry: impl Into<SgrEntry>) -> &mut Self {
        let entry = entry.into();
        if self.seq.contains(&entry) {
            self.remove_present(entry);
        } else {
            self.push_unique(entry);
        }
        self
    }

    /// Drop every color, keeping a folded bold as an explicit entry.
    pub fn clear_colors(&mut self) -> &mut Self {
        let had_folded = self.seq.promoted.iter().any(|p| *p);
        self.seq.entries.retain(|e| !e.is_color());
        self.seq.promoted = [false; 2];
        if had_folded && !self.seq.has_explicit(SgrAttribute::Bold) {
            self.seq.entries.push(SgrEntry::Attribute(SgrAttribute::Bold));
        }
        self
    }

    /// Drop the color in `slot`, if any.
    pub fn clear_slot(&mut self, slot: ColorSlot) -> &mut Self {
        if let Some(color) = self.seq.color(slot) {
            self.remove_present(color.into());
        }
        self
    }

    /// Push every entry of `other`, keeping its folded-bold markers.
    pub fn merge(&mut self, other: &StyleSequence) -> &mut Self {
        for entry in &other.entries {
            self.push_unique(*entry);
            if let SgrEntry::Color(color) = entry {
                let slot = color.slot().index();
                if other.promoted[slot] && !self.seq.promoted[slot] {
                    self.seq
                        .entries
                        .retain(|e| *e != SgrEntry::Attribute(SgrAttribute::Bold));
                    self.seq.promoted[slot] = true;
                }
            }
        }
        self
    }

    /// Peek at the sequence built so far.
    pub fn current(&self) -> &StyleSequence {
        &self.seq
    }

    pub fn build(self) -> StyleSequence {
        self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromastr_core::ColorValue;

    const FG: ColorSlot = ColorSlot::Foreground;
    const BG: ColorSlot = ColorSlot::Background;

    fn seq(codes: &[u32]) -> StyleSequence {
        StyleSequence::from_codes(codes).unwrap()
    }

    fn red() -> SgrEntry {
        SgrEntry::Color(AnsiColorCode::Ansi4(FG, Ansi16::RED))
    }

    #[test]
    fn test_empty_encodes_to_nothing() {
        assert_eq!(StyleSequence::new().encode(), "");
        assert_eq!(StyleSequence::parse("\x1b[m").unwrap(), StyleSequence::new());
    }

    #[test]
    fn test_slot_replacement_moves_to_end() {
        let style = seq(&[31, 4, 32]);
        assert_eq!(style.encode(), "\x1b[4;32m");
        let style = seq(&[41, 31, 44]);
        assert_eq!(style.encode(), "\x1b[31;44m");
    }

    #[test]
    fn test_reset_absorbs() {
        assert_eq!(seq(&[1, 31, 0]).encode(), "\x1b[0m");
        assert_eq!(seq(&[0, 0]), seq(&[0]));
        assert_eq!(seq(&[0, 4]).encode(), "\x1b[4m");
    }

    #[test]
    fn test_repeated_attribute_toggles_off() {
        assert_eq!(seq(&[4, 3, 4]).encode(), "\x1b[3m");
        let underlined = StyleSequence::new().append(SgrAttribute::Underline);
        assert_eq!(underlined.append(SgrAttribute::Underline).encode(), "");
        assert_eq!(seq(&[0, 0]).encode(), "\x1b[0m");
    }

    #[test]
    fn test_parse_and_merge_skip_repeats() {
        let style = StyleSequence::parse("\x1b[4;3;4m").unwrap();
        assert_eq!(style.encode(), "\x1b[4;3m");
        assert_eq!(seq(&[4]).merge(&seq(&[4])).encode(), "\x1b[4m");
        let collected: StyleSequence = [SgrAttribute::Italic, SgrAttribute::Italic]
            .into_iter()
            .map(SgrEntry::from)
            .collect();
        assert_eq!(collected.encode(), "\x1b[3m");
    }

    #[test]
    fn test_bold_promotion() {
        let style = seq(&[1, 31]);
        assert_eq!(style.encode(), "\x1b[91m");
        assert!(style.is_promoted(FG));
        assert!(style.is_bold());
        assert!(style.contains(&SgrEntry::Attribute(SgrAttribute::Bold)));

        // bold stays folded when the second slot is filled too
        assert_eq!(seq(&[1, 31, 42]).encode(), "\x1b[91;102m");
        // bold after a color does not retroactively fold
        assert_eq!(seq(&[31, 1]).encode(), "\x1b[31;1m");
        // pushing bold again while folded toggles it off
        assert_eq!(seq(&[1, 31, 1]).encode(), "\x1b[31m");
        // parsing the same codes keeps the fold
        assert_eq!(
            StyleSequence::parse("\x1b[1;31;1m").unwrap().encode(),
            "\x1b[91m"
        );
    }

    #[test]
    fn test_promotion_reproducible_after_removal() {
        let style = seq(&[1, 31]);
        let removed = style.remove(red()).unwrap();
        assert!(removed.is_empty());
        let again = removed
            .append(SgrAttribute::Bold)
            .append(red());
        assert_eq!(again.encode(), style.encode());
    }

    #[test]
    fn test_replacing_folded_color_keeps_bold() {
        let ext = AnsiColorCode::Ansi8(FG, 200);
        let style = seq(&[1, 31]).append(ext);
        assert_eq!(style.encode(), "\x1b[1;38;5;200m");
        assert!(!style.is_promoted(FG));
    }

    #[test]
    fn test_remove_bold_demotes() {
        let style = seq(&[1, 31, 44]);
        assert_eq!(style.encode(), "\x1b[91;104m");
        let plain = style.remove(SgrAttribute::Bold).unwrap();
        assert_eq!(plain.encode(), "\x1b[31;44m");
        assert!(!plain.is_bold());
    }

    #[test]
    fn test_remove_missing_fails() {
        assert!(matches!(
            seq(&[4]).remove(SgrAttribute::Italic),
            Err(ChromaError::NotFound(_))
        ));
    }

    #[test]
    fn test_toggle() {
        let style = seq(&[4]);
        assert_eq!(style.toggle(SgrAttribute::Underline), StyleSequence::new());
        assert_eq!(style.toggle(SgrAttribute::Italic).encode(), "\x1b[4;3m");
        assert_eq!(seq(&[1, 31]).toggle(red()), StyleSequence::new());
    }

    #[test]
    fn test_invalid_codes() {
        for code in [38, 48, 56, 64, 108, 1000] {
            assert!(matches!(
                StyleSequence::new().append_code(code),
                Err(ChromaError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_merge_right_wins() {
        let left = seq(&[31, 4]);
        let right = seq(&[32, 44]);
        assert_eq!(left.merge(&right).encode(), "\x1b[4;32;44m");
        assert_eq!((left + seq(&[0])).encode(), "\x1b[0m");
    }

    #[test]
    fn test_merge_keeps_folded_bold() {
        let merged = seq(&[4]).merge(&seq(&[1, 31]));
        assert_eq!(merged.encode(), "\x1b[4;91m");
        assert!(merged.is_promoted(FG));
        assert_eq!(
            merged.remove(SgrAttribute::Bold).unwrap().encode(),
            "\x1b[4;31m"
        );
    }

    #[test]
    fn test_parse_extended() {
        let style = StyleSequence::parse("\x1b[38;2;1;2;3;48;5;17m").unwrap();
        assert_eq!(
            style.fg(),
            Some(AnsiColorCode::Ansi24(FG, ColorValue::rgb(1, 2, 3)))
        );
        assert_eq!(style.bg(), Some(AnsiColorCode::Ansi8(BG, 17)));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            StyleSequence::parse("\x1b[38;5m"),
            Err(ChromaError::Parse(_))
        ));
        assert!(matches!(
            StyleSequence::parse("\x1b[38;7;1m"),
            Err(ChromaError::Parse(_))
        ));
        assert!(matches!(
            StyleSequence::parse("\x1b[1mtext"),
            Err(ChromaError::Parse(_))
        ));
    }

    #[test]
    fn test_convert_format_borrows_when_unchanged() {
        let style = seq(&[4, 31]);
        assert!(matches!(style.convert_format(ColorFormat::Ansi4), Cow::Borrowed(_)));
        let plain = seq(&[4]);
        assert!(matches!(plain.convert_format(ColorFormat::Ansi24), Cow::Borrowed(_)));
    }

    #[test]
    fn test_convert_format_requantizes() {
        let style = seq(&[4, 31]);
        let converted = style.convert_format(ColorFormat::Ansi24);
        assert_eq!(converted.encode(), "\x1b[4;38;2;170;0;0m");
    }

    #[test]
    fn test_convert_format_unfolds_bold() {
        let converted = seq(&[1, 31]).convert_format(ColorFormat::Ansi8).into_owned();
        assert_eq!(converted.encode(), "\x1b[1;38;5;9m");
        assert!(converted.is_bold());
    }

    #[test]
    fn test_convert_to_ansi4_folds_explicit_bold() {
        let style = StyleSequence::parse("\x1b[4;1;38;5;1m").unwrap();
        assert_eq!(style.encode(), "\x1b[4;1;38;5;1m");
        let converted = style.convert_format(ColorFormat::Ansi4).into_owned();
        assert_eq!(converted.encode(), "\x1b[4;91m");
        assert!(converted.is_promoted(FG));
        assert_eq!(StyleSequence::parse(&converted.encode()).unwrap(), converted);

        // a bright result keeps bold explicit
        let bright = StyleSequence::parse("\x1b[1;38;5;9m").unwrap();
        assert_eq!(bright.convert_format(ColorFormat::Ansi4).encode(), "\x1b[1;91m");
    }

    #[test]
    fn test_set_color_skips_folding() {
        let cyan = AnsiColorCode::Ansi4(FG, Ansi16::CYAN);
        let mut builder = StyleBuilder::from(seq(&[1, 31]));
        builder.set_color(cyan);
        let style = builder.build();
        assert_eq!(style.fg(), Some(cyan));
        assert_eq!(style.encode(), "\x1b[36;1m");
        assert!(style.is_bold());
        assert_eq!(StyleSequence::parse(&style.encode()).unwrap(), style);

        // explicit bold moves behind a standard color
        let mut builder = StyleBuilder::from(seq(&[1, 4]));
        builder.set_color(AnsiColorCode::Ansi4(BG, Ansi16::GREEN));
        assert_eq!(builder.build().encode(), "\x1b[4;42;1m");

        // without bold nothing moves
        let mut builder = StyleBuilder::from(seq(&[4, 44]));
        builder.set_color(cyan);
        assert_eq!(builder.build().encode(), "\x1b[4;44;36m");
    }

    #[test]
    fn test_clear_slot() {
        let mut builder = StyleBuilder::from(seq(&[1, 31, 44]));
        builder.clear_slot(FG).clear_slot(FG);
        let style = builder.build();
        assert_eq!(style.encode(), "\x1b[104m");
        assert!(style.is_promoted(BG));
    }

    #[test]
    fn test_dominant_format_ties() {
        let style = StyleSequence::parse("\x1b[38;5;1;48;2;0;0;0m").unwrap();
        assert_eq!(style.dominant_format(), Some(ColorFormat::Ansi8));
    }
}
