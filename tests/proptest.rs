//! Property-based tests for chromastr.
//!
//! These tests use proptest to generate random colors, codes and
//! literals and verify the codec's algebraic guarantees.

use proptest::prelude::*;

use chromastr::ansi::palette;
use chromastr::prelude::*;
use chromastr::Ansi16;

/// Generate an arbitrary RGB color.
fn color_value() -> impl Strategy<Value = ColorValue> {
    any::<(u8, u8, u8)>().prop_map(ColorValue::from)
}

/// Generate a color slot.
fn slot() -> impl Strategy<Value = ColorSlot> {
    prop_oneof![Just(ColorSlot::Foreground), Just(ColorSlot::Background)]
}

/// Generate a color format.
fn format() -> impl Strategy<Value = ColorFormat> {
    prop::sample::select(ColorFormat::ALL.to_vec())
}

/// Generate any color code in any format.
fn color_code() -> impl Strategy<Value = AnsiColorCode> {
    prop_oneof![
        (slot(), 0u8..16).prop_map(|(s, i)| {
            AnsiColorCode::Ansi4(s, Ansi16::new(i).unwrap_or(Ansi16::BLACK))
        }),
        (slot(), any::<u8>()).prop_map(|(s, i)| AnsiColorCode::Ansi8(s, i)),
        (slot(), color_value()).prop_map(|(s, c)| AnsiColorCode::Ansi24(s, c)),
    ]
}

/// Generate a valid single-parameter SGR code.
fn simple_code() -> impl Strategy<Value = u32> {
    prop_oneof![
        prop::sample::select(
            SgrAttribute::ALL
                .iter()
                .map(|a| u32::from(a.code()))
                .collect::<Vec<_>>()
        ),
        30u32..38,
        40u32..48,
        90u32..98,
        100u32..108,
    ]
}

/// Generate a style entry: attribute, 4-bit color, or extended color.
fn entry() -> impl Strategy<Value = SgrEntry> {
    prop_oneof![
        3 => simple_code().prop_map(|c| SgrEntry::from_code(c).unwrap_or(SgrAttribute::Reset.into())),
        1 => color_code().prop_map(SgrEntry::from),
    ]
}

// =============================================================================
// Color Code Properties
// =============================================================================

proptest! {
    /// Every color code survives an encode/parse cycle with its exact variant.
    #[test]
    fn color_code_round_trips(code in color_code()) {
        prop_assert_eq!(AnsiColorCode::parse(&code.encode()).unwrap(), code);
        prop_assert_eq!(AnsiColorCode::parse(&code.escape()).unwrap(), code);
    }

    /// Quantizing never fails and 24-bit keeps the exact color.
    #[test]
    fn from_color_is_total(s in slot(), c in color_value(), f in format()) {
        let code = AnsiColorCode::from_color(s, c, f);
        prop_assert_eq!(code.slot(), s);
        prop_assert_eq!(code.format(), f);
        if f == ColorFormat::Ansi24 {
            prop_assert_eq!(code.resolve(), c);
        }
    }

    /// The 8-bit choice is never worse than the best 4-bit choice.
    #[test]
    fn ansi8_error_bounded_by_ansi4(c in color_value()) {
        let (_, err4) = palette::nearest_ansi4(c);
        let code = AnsiColorCode::from_color(ColorSlot::Foreground, c, ColorFormat::Ansi8);
        prop_assert!(c.distance_sq(code.resolve()) <= err4);
    }

    /// Palette colors quantize to themselves.
    #[test]
    fn palette_entries_are_fixed_points(i in any::<u8>()) {
        let c = palette::ansi8_to_rgb(i);
        let code = AnsiColorCode::from_color(ColorSlot::Foreground, c, ColorFormat::Ansi8);
        prop_assert_eq!(code.resolve(), c);
    }
}

// =============================================================================
// Style Sequence Properties
// =============================================================================

proptest! {
    /// At most one color per slot after every prefix of pushes.
    #[test]
    fn slot_exclusivity(entries in prop::collection::vec(entry(), 0..40)) {
        let mut builder = StyleBuilder::new();
        for e in entries {
            builder.push(e);
            let current = builder.current();
            for s in ColorSlot::ALL {
                prop_assert!(current.colors().filter(|c| c.slot() == s).count() <= 1);
            }
        }
    }

    /// Reset twice equals reset once, whatever came before.
    #[test]
    fn reset_is_idempotent(entries in prop::collection::vec(entry(), 0..20)) {
        let base: StyleSequence = entries.into_iter().collect();
        let once = base.append(SgrAttribute::Reset);
        let twice = once.append(SgrAttribute::Reset);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.encode(), "\x1b[0m");
    }

    /// Reset is only ever present alone.
    #[test]
    fn reset_is_alone(entries in prop::collection::vec(entry(), 0..40)) {
        let style: StyleSequence = entries.into_iter().collect();
        let resets = style.iter().filter(|e| e.is_reset()).count();
        prop_assert!(resets == 0 || style.len() == 1);
    }

    /// Entries never repeat.
    #[test]
    fn entries_are_unique(entries in prop::collection::vec(entry(), 0..40)) {
        let style: StyleSequence = entries.into_iter().collect();
        let all = style.entries();
        for (i, e) in all.iter().enumerate() {
            prop_assert!(!all[i + 1..].contains(e));
        }
    }

    /// Encoding a sequence and parsing it back is a fixed point.
    #[test]
    fn sequence_encoding_is_stable(entries in prop::collection::vec(entry(), 0..20)) {
        let style: StyleSequence = entries.into_iter().collect();
        let reparsed = StyleSequence::parse(&style.encode()).unwrap();
        prop_assert_eq!(reparsed.encode(), style.encode());
    }

    /// Converting twice is the same as converting once.
    #[test]
    fn convert_format_is_idempotent(
        entries in prop::collection::vec(entry(), 0..20),
        f in format(),
    ) {
        let style: StyleSequence = entries.into_iter().collect();
        let once = style.convert_format(f).into_owned();
        prop_assert!(once.colors().all(|c| c.format() == f));
        let twice = once.convert_format(f);
        prop_assert_eq!(twice.as_ref(), &once);
    }

    /// Appending an attribute that is already present removes it.
    #[test]
    fn append_present_attribute_removes_it(
        entries in prop::collection::vec(entry(), 0..20),
        attr in prop::sample::select(vec![
            SgrAttribute::Bold,
            SgrAttribute::Italic,
            SgrAttribute::Underline,
            SgrAttribute::Reverse,
        ]),
    ) {
        let style: StyleSequence = entries.into_iter().collect();
        prop_assume!(!style.is_reset());
        let with = if style.contains(&attr.into()) { style } else { style.append(attr) };
        prop_assert!(with.contains(&attr.into()));
        prop_assert!(!with.append(attr).contains(&attr.into()));
    }

    /// Toggling an attribute twice restores the encoding when it was absent.
    #[test]
    fn toggle_twice_restores(
        entries in prop::collection::vec(entry(), 0..20),
        attr in prop::sample::select(vec![
            SgrAttribute::Italic,
            SgrAttribute::Underline,
            SgrAttribute::Reverse,
            SgrAttribute::CrossedOut,
        ]),
    ) {
        let style: StyleSequence = entries.into_iter().collect();
        prop_assume!(!style.is_reset() && !style.contains(&attr.into()));
        let back = style.toggle(attr).toggle(attr);
        prop_assert_eq!(back.encode(), style.encode());
    }
}

// =============================================================================
// Styled Text Properties
// =============================================================================

proptest! {
    /// Parsing a serialized value reproduces it exactly.
    #[test]
    fn styled_text_round_trips(
        text in "[a-zA-Z0-9 ]{0,30}",
        entries in prop::collection::vec(entry(), 0..10),
        suppress in any::<Option<bool>>(),
    ) {
        let style: StyleSequence = entries.into_iter().collect();
        let mut value = StyledText::styled(text, style);
        if let Some(s) = suppress {
            value = value.with_suppress_reset(s);
        }
        let wire = value.serialize();
        let parsed = StyledText::parse(&wire).unwrap();
        prop_assert_eq!(parsed.serialize(), wire);
    }

    /// Every char of the text appears once under the same style.
    #[test]
    fn chars_cover_text(text in "\\PC{0,20}", c in color_value()) {
        let value = StyledText::from_colors(text.clone(), Some(c), None, ColorFormat::Ansi24);
        let joined: String = value.chars().map(|ch| ch.text().to_string()).collect();
        prop_assert_eq!(joined, text);
        prop_assert!(value.chars().all(|ch| ch.fg() == Some(c)));
    }

    /// Inverting a 24-bit colored text twice gives back the original.
    #[test]
    fn invert_is_involution(fg in color_value(), bg in color_value()) {
        let value = StyledText::from_colors("x", Some(fg), Some(bg), ColorFormat::Ansi24);
        prop_assert_eq!(value.invert().invert(), value);
    }

    /// Inverting a 4-bit color yields exactly the quantized complement, bold or not.
    #[test]
    fn invert_ansi4_is_exact(index in 0u8..16, bold in any::<bool>()) {
        let color = AnsiColorCode::Ansi4(
            ColorSlot::Foreground,
            Ansi16::new(index).unwrap_or(Ansi16::BLACK),
        );
        let mut builder = StyleBuilder::new();
        if bold {
            builder.push(SgrAttribute::Bold);
        }
        builder.push(color);
        let value = StyledText::styled("x", builder.build());
        let before = value.fg().unwrap_or_default();
        let expected = AnsiColorCode::from_color(ColorSlot::Foreground, before.invert(), ColorFormat::Ansi4);
        let inverted = value.invert();
        prop_assert_eq!(inverted.fg(), Some(expected.resolve()));
        prop_assert_eq!(inverted.style().is_bold(), value.style().is_bold());
    }

    /// HSL conversion round-trips within one step per channel.
    #[test]
    fn hsl_round_trip(c in color_value()) {
        let (h, s, l) = c.to_hsl();
        let back = ColorValue::from_hsl(h, s, l);
        prop_assert!(c.r().abs_diff(back.r()) <= 1);
        prop_assert!(c.g().abs_diff(back.g()) <= 1);
        prop_assert!(c.b().abs_diff(back.b()) <= 1);
    }
}
