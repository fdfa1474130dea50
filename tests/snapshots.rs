//! Snapshot tests for chromastr wire output.
//!
//! Escape bytes are rendered as `ESC` to keep snapshots readable.
//! Run with `cargo insta review` to update snapshots.

use chromastr::prelude::*;
use chromastr::ansi::palette;

/// Make escapes visible.
fn show(wire: &str) -> String {
    wire.replace('\x1b', "ESC")
}

/// Quantize one color into every format and show the three encodings.
fn ladder(color: ColorValue) -> String {
    ColorFormat::ALL
        .iter()
        .map(|f| {
            let code = AnsiColorCode::from_color(ColorSlot::Foreground, color, *f);
            format!("{f}={}", code.encode())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Quantization Snapshots
// =============================================================================

#[test]
fn test_snapshot_quantize_primaries() {
    let lines = [
        ColorValue::rgb(255, 0, 0),
        ColorValue::rgb(0, 255, 0),
        ColorValue::rgb(0, 0, 255),
        ColorValue::WHITE,
        ColorValue::BLACK,
    ]
    .iter()
    .map(|c| format!("{c}: {}", ladder(*c)))
    .collect::<Vec<_>>()
    .join("\n");
    insta::assert_snapshot!(lines, @r"
    #ff0000: 4b=31 8b=38;5;196 24b=38;2;255;0;0
    #00ff00: 4b=32 8b=38;5;46 24b=38;2;0;255;0
    #0000ff: 4b=34 8b=38;5;21 24b=38;2;0;0;255
    #ffffff: 4b=97 8b=38;5;15 24b=38;2;255;255;255
    #000000: 4b=30 8b=38;5;0 24b=38;2;0;0;0
    ");
}

#[test]
fn test_snapshot_quantize_greys() {
    let lines = [8u8, 100, 128, 200, 238]
        .iter()
        .map(|v| {
            let c = ColorValue::rgb(*v, *v, *v);
            format!("{c}: {}", palette::nearest_ansi8(c))
        })
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(lines, @r"
    #080808: 232
    #646464: 241
    #808080: 244
    #c8c8c8: 251
    #eeeeee: 255
    ");
}

// =============================================================================
// Sequence Snapshots
// =============================================================================

#[test]
fn test_snapshot_sequence_rules() {
    let cases: &[&[u32]] = &[
        &[1, 31],
        &[1, 31, 42],
        &[31, 1],
        &[31, 32, 4],
        &[4, 0],
        &[0, 3],
        &[3, 3, 23],
    ];
    let lines = cases
        .iter()
        .map(|codes| {
            let style = StyleSequence::from_codes(codes).unwrap();
            format!("{codes:?} -> {}", show(&style.encode()))
        })
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(lines, @r"
    [1, 31] -> ESC[91m
    [1, 31, 42] -> ESC[91;102m
    [31, 1] -> ESC[31;1m
    [31, 32, 4] -> ESC[32;4m
    [4, 0] -> ESC[0m
    [0, 3] -> ESC[3m
    [3, 3, 23] -> ESC[23m
    ");
}

#[test]
fn test_snapshot_convert_bold_folded() {
    let style = StyleSequence::from_codes(&[1, 34, 4]).unwrap();
    let lines = ColorFormat::ALL
        .iter()
        .map(|f| format!("{f}: {}", show(&style.convert_format(*f).encode())))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!(lines, @r"
    4b: ESC[94;4m
    8b: ESC[1;38;5;12;4m
    24b: ESC[1;38;2;85;85;255;4m
    ");
}

// =============================================================================
// Styled Text Snapshots
// =============================================================================

#[test]
fn test_snapshot_styled_text_ops() {
    let base = StyledText::from_colors(
        "text",
        Some(ColorValue::rgb(200, 100, 50)),
        Some(ColorValue::rgb(10, 20, 30)),
        ColorFormat::Ansi24,
    );
    let lines = [
        ("base", base.clone()),
        ("invert", base.invert()),
        ("diff", base.difference_color(ColorValue::rgb(50, 100, 200))),
        ("slice", base.slice(1..3).unwrap()),
        ("no-reset", base.with_suppress_reset(true)),
        ("8b", base.as_format(ColorFormat::Ansi8).into_owned()),
    ]
    .iter()
    .map(|(name, t)| format!("{name}: {}", show(&t.serialize())))
    .collect::<Vec<_>>()
    .join("\n");
    insta::assert_snapshot!(lines, @r"
    base: ESC[38;2;200;100;50;48;2;10;20;30mtextESC[0m
    invert: ESC[38;2;55;155;205;48;2;245;235;225mtextESC[0m
    diff: ESC[38;2;150;0;150;48;2;40;80;170mtextESC[0m
    slice: ESC[38;2;200;100;50;48;2;10;20;30mexESC[0m
    no-reset: ESC[38;2;200;100;50;48;2;10;20;30mtext
    8b: ESC[38;5;167;48;5;233mtextESC[0m
    ");
}
