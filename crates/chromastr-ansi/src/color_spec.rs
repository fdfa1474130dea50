//! Structured color specifications.
//!
//! A [`ColorSpec`] names the foreground and/or background colors to apply
//! to a piece of text. Each accepted input shape is its own variant, and
//! [`ColorSpec::resolve`] turns any of them into a [`SlotColors`] pair.

use crate::color_code::AnsiColorCode;
use crate::sequence::{StyleBuilder, StyleSequence};
use chromastr_core::{ChromaError, ColorFormat, ColorSlot, ColorValue, Result};
use std::str::FromStr;

/// A color specification in one of the accepted shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// A single color for whichever slot is unset, foreground first.
    Scalar(ColorValue),
    /// One color for an explicit slot.
    Slot(ColorSlot, ColorValue),
    /// Two colors assigned positionally to foreground, then background.
    Pair(ColorValue, ColorValue),
    /// Colors keyed by slot.
    Slots(Vec<(ColorSlot, ColorValue)>),
    /// Colors keyed by slot name (`fg`, `bg`, `foreground`, `background`).
    Mapping(Vec<(String, ColorValue)>),
}

/// Resolved per-slot colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SlotColors {
    pub fg: Option<ColorValue>,
    pub bg: Option<ColorValue>,
}

impl SlotColors {
    pub fn new(fg: Option<ColorValue>, bg: Option<ColorValue>) -> Self {
        Self { fg, bg }
    }

    pub fn get(&self, slot: ColorSlot) -> Option<ColorValue> {
        match slot {
            ColorSlot::Foreground => self.fg,
            ColorSlot::Background => self.bg,
        }
    }

    fn slot_mut(&mut self, slot: ColorSlot) -> &mut Option<ColorValue> {
        match slot {
            ColorSlot::Foreground => &mut self.fg,
            ColorSlot::Background => &mut self.bg,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none()
    }

    /// Present colors, foreground first.
    pub fn iter(&self) -> impl Iterator<Item = (ColorSlot, ColorValue)> + '_ {
        ColorSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|color| (slot, color)))
    }

    /// Quantize into a style sequence holding only these colors.
    pub fn to_style(&self, format: ColorFormat) -> StyleSequence {
        let mut builder = StyleBuilder::new();
        for (slot, color) in self.iter() {
            builder.push(AnsiColorCode::from_color(slot, color, format));
        }
        builder.build()
    }

    fn assign(&mut self, slot: ColorSlot, color: ColorValue) -> Result<()> {
        let current = self.slot_mut(slot);
        match *current {
            Some(existing) if existing != color => Err(ChromaError::InvalidColorSpec(format!(
                "conflicting values for {slot}: {existing} and {color}"
            ))),
            _ => {
                *current = Some(color);
                Ok(())
            }
        }
    }
}

impl ColorSpec {
    /// Resolve into per-slot colors.
    ///
    /// # Errors
    ///
    /// [`ChromaError::InvalidColorSpec`] when the spec is empty, names an
    /// unknown slot, or assigns two different colors to one slot.
    ///
    /// # Example
    ///
    /// ```
    /// use chromastr_ansi::color_spec::ColorSpec;
    /// use chromastr_core::{ColorSlot, ColorValue};
    ///
    /// let spec = ColorSpec::Mapping(vec![("bg".into(), ColorValue::BLACK)]);
    /// let colors = spec.resolve().unwrap();
    /// assert_eq!(colors.get(ColorSlot::Background), Some(ColorValue::BLACK));
    /// assert_eq!(colors.fg, None);
    /// ```
    pub fn resolve(&self) -> Result<SlotColors> {
        let mut colors = SlotColors::default();
        match self {
            ColorSpec::Scalar(color) => colors.fg = Some(*color),
            ColorSpec::Slot(slot, color) => colors.assign(*slot, *color)?,
            ColorSpec::Pair(fg, bg) => {
                colors.fg = Some(*fg);
                colors.bg = Some(*bg);
            }
            ColorSpec::Slots(items) => {
                if items.is_empty() {
                    return Err(empty_spec());
                }
                for (slot, color) in items {
                    colors.assign(*slot, *color)?;
                }
            }
            ColorSpec::Mapping(items) => {
                if items.is_empty() {
                    return Err(empty_spec());
                }
                for (key, color) in items {
                    colors.assign(key.parse()?, *color)?;
                }
            }
        }
        Ok(colors)
    }

    /// Resolve and quantize into a style sequence.
    pub fn to_style(&self, format: ColorFormat) -> Result<StyleSequence> {
        Ok(self.resolve()?.to_style(format))
    }
}

fn empty_spec() -> ChromaError {
    ChromaError::InvalidColorSpec("color spec names no colors".to_string())
}

/// Parse a comma-separated spec.
///
/// Items are either all positional (`red`, `#ff0000,#000000`) or all
/// keyed (`fg=red`, `bg=navy,fg=white`).
///
/// ```
/// use chromastr_ansi::color_spec::ColorSpec;
/// use chromastr_core::{ColorSlot, ColorValue};
///
/// let spec: ColorSpec = "fg=#ff0000".parse().unwrap();
/// assert_eq!(spec, ColorSpec::Slot(ColorSlot::Foreground, ColorValue::rgb(255, 0, 0)));
/// assert!("red,fg=blue".parse::<ColorSpec>().is_err());
/// ```
impl FromStr for ColorSpec {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self> {
        let items: Vec<&str> = s.split(',').map(str::trim).collect();
        if items.iter().any(|item| item.is_empty()) {
            return Err(ChromaError::InvalidColorSpec(format!(
                "empty item in color spec {s:?}"
            )));
        }

        let keyed = items.iter().filter(|item| item.contains('=')).count();
        if keyed != 0 && keyed != items.len() {
            return Err(ChromaError::InvalidColorSpec(format!(
                "color spec {s:?} mixes keyed and positional colors"
            )));
        }

        let color = |text: &str| {
            text.trim().parse::<ColorValue>().map_err(|_| {
                ChromaError::InvalidColorSpec(format!("{text:?} is not a color"))
            })
        };

        if keyed == 0 {
            return match items.as_slice() {
                [one] => Ok(ColorSpec::Scalar(color(one)?)),
                [fg, bg] => Ok(ColorSpec::Pair(color(fg)?, color(bg)?)),
                _ => Err(ChromaError::InvalidColorSpec(format!(
                    "too many colors in {s:?}; expected at most 2"
                ))),
            };
        }

        let mut slots = Vec::with_capacity(items.len());
        for item in &items {
            let (key, value) = item.split_once('=').unwrap_or((item, ""));
            slots.push((key.trim().parse::<ColorSlot>()?, color(value)?));
        }
        match slots.as_slice() {
            [(slot, value)] => Ok(ColorSpec::Slot(*slot, *value)),
            _ => Ok(ColorSpec::Slots(slots)),
        }
    }
}

impl From<ColorValue> for ColorSpec {
    fn from(color: ColorValue) -> Self {
        ColorSpec::Scalar(color)
    }
}

impl From<(ColorSlot, ColorValue)> for ColorSpec {
    fn from((slot, color): (ColorSlot, ColorValue)) -> Self {
        ColorSpec::Slot(slot, color)
    }
}

impl From<(ColorValue, ColorValue)> for ColorSpec {
    fn from((fg, bg): (ColorValue, ColorValue)) -> Self {
        ColorSpec::Pair(fg, bg)
    }
}

impl From<SlotColors> for ColorSpec {
    fn from(colors: SlotColors) -> Self {
        ColorSpec::Slots(colors.iter().collect())
    }
}
