//! Fixed 16-color and 256-color palettes and nearest-color search.
//!
//! The 16 base colors use the VGA reference values. The 256-color table
//! is `0-15` base colors, `16-231` a 6x6x6 cube, `232-255` a grey ramp.

use chromastr_core::ColorValue;
use std::sync::LazyLock;

/// Reference RGB values for 4-bit indices `0..16` (8 standard, then 8 bright).
pub const ANSI4_RGB: [ColorValue; 16] = [
    ColorValue::rgb(0, 0, 0),
    ColorValue::rgb(170, 0, 0),
    ColorValue::rgb(0, 170, 0),
    ColorValue::rgb(170, 85, 0),
    ColorValue::rgb(0, 0, 170),
    ColorValue::rgb(170, 0, 170),
    ColorValue::rgb(0, 170, 170),
    ColorValue::rgb(170, 170, 170),
    ColorValue::rgb(85, 85, 85),
    ColorValue::rgb(255, 85, 85),
    ColorValue::rgb(85, 255, 85),
    ColorValue::rgb(255, 255, 85),
    ColorValue::rgb(85, 85, 255),
    ColorValue::rgb(255, 85, 255),
    ColorValue::rgb(85, 255, 255),
    ColorValue::rgb(255, 255, 255),
];

/// Channel levels of the 6x6x6 color cube.
pub const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// First 8-bit index of the color cube.
pub const CUBE_START: u8 = 16;

/// First 8-bit index of the grey ramp.
pub const GREY_START: u8 = 232;

/// Number of grey ramp steps.
pub const GREY_STEPS: u8 = 24;

/// Full 256-entry palette, built once on first use.
pub static ANSI8_RGB: LazyLock<[ColorValue; 256]> = LazyLock::new(|| {
    let mut table = [ColorValue::BLACK; 256];
    table[..16].copy_from_slice(&ANSI4_RGB);
    for r in 0..6u8 {
        for g in 0..6u8 {
            for b in 0..6u8 {
                table[usize::from(cube_index(r, g, b))] = ColorValue::rgb(
                    CUBE_LEVELS[usize::from(r)],
                    CUBE_LEVELS[usize::from(g)],
                    CUBE_LEVELS[usize::from(b)],
                );
            }
        }
    }
    for step in 0..GREY_STEPS {
        let v = grey_level(step);
        table[usize::from(GREY_START + step)] = ColorValue::rgb(v, v, v);
    }
    table
});

fn cube_index(r: u8, g: u8, b: u8) -> u8 {
    CUBE_START + 36 * r + 6 * g + b
}

fn grey_level(step: u8) -> u8 {
    8 + 10 * step
}

/// RGB value of a 4-bit index. Indices above 15 wrap into range.
pub fn ansi4_to_rgb(index: u8) -> ColorValue {
    ANSI4_RGB[usize::from(index & 0x0F)]
}

/// RGB value of an 8-bit index.
pub fn ansi8_to_rgb(index: u8) -> ColorValue {
    ANSI8_RGB[usize::from(index)]
}

/// Nearest of the 16 base colors as `(index, squared error)`, ties to the lowest index.
///
/// ```
/// use chromastr_ansi::palette::nearest_ansi4;
/// use chromastr_core::ColorValue;
/// assert_eq!(nearest_ansi4(ColorValue::rgb(250, 90, 80)), (9, 75));
/// ```
pub fn nearest_ansi4(color: ColorValue) -> (u8, u32) {
    let mut best = (0u8, u32::MAX);
    for (i, reference) in ANSI4_RGB.iter().enumerate() {
        let err = color.distance_sq(*reference);
        if err < best.1 {
            best = (i as u8, err);
        }
    }
    best
}

fn nearest_level(channel: u8) -> u8 {
    let mut best = (0u8, u8::MAX);
    for (i, level) in CUBE_LEVELS.iter().enumerate() {
        let d = channel.abs_diff(*level);
        if d < best.1 {
            best = (i as u8, d);
        }
    }
    best.0
}

/// Nearest point of the color cube as `(8-bit index, squared error)`.
///
/// Squared error is separable per channel, so the per-channel nearest
/// level is the overall nearest cube point.
pub fn nearest_cube(color: ColorValue) -> (u8, u32) {
    let (r, g, b) = color.channels();
    let index = cube_index(nearest_level(r), nearest_level(g), nearest_level(b));
    (index, color.distance_sq(ansi8_to_rgb(index)))
}

/// Nearest step of the grey ramp as `(8-bit index, squared error)`, ties to the darker step.
pub fn nearest_grey(color: ColorValue) -> (u8, u32) {
    let mut best = (GREY_START, u32::MAX);
    for step in 0..GREY_STEPS {
        let v = grey_level(step);
        let err = color.distance_sq(ColorValue::rgb(v, v, v));
        if err < best.1 {
            best = (GREY_START + step, err);
        }
    }
    best
}

/// Nearest 8-bit index.
///
/// Three candidates compete: the nearest base color, the nearest cube
/// point and the nearest grey step. The smallest squared error wins and
/// ties keep the earlier candidate in that order.
///
/// ```
/// use chromastr_ansi::palette::nearest_ansi8;
/// use chromastr_core::ColorValue;
/// assert_eq!(nearest_ansi8(ColorValue::WHITE), 15);
/// assert_eq!(nearest_ansi8(ColorValue::rgb(95, 135, 175)), 67);
/// assert_eq!(nearest_ansi8(ColorValue::rgb(130, 128, 129)), 244);
/// ```
pub fn nearest_ansi8(color: ColorValue) -> u8 {
    let candidates = [nearest_ansi4(color), nearest_cube(color), nearest_grey(color)];
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.1 < best.1 {
            best = *candidate;
        }
    }
    log::trace!("quantized {color} to 8-bit index {} (error {})", best.0, best.1);
    best.0
}
