//! Named web colors.
//!
//! The standard CSS/X11 color names as [`ColorValue`] constants, plus a
//! case-insensitive lookup that ignores spaces, hyphens and underscores
//! and accepts both "grey" and "gray".

use crate::color::ColorValue;

pub const BLACK: ColorValue = ColorValue::rgb(0x00, 0x00, 0x00);
pub const DIM_GREY: ColorValue = ColorValue::rgb(0x69, 0x69, 0x69);
pub const GREY: ColorValue = ColorValue::rgb(0x80, 0x80, 0x80);
pub const DARK_GREY: ColorValue = ColorValue::rgb(0xA9, 0xA9, 0xA9);
pub const SILVER: ColorValue = ColorValue::rgb(0xC0, 0xC0, 0xC0);
pub const LIGHT_GREY: ColorValue = ColorValue::rgb(0xD3, 0xD3, 0xD3);
pub const WHITE_SMOKE: ColorValue = ColorValue::rgb(0xF5, 0xF5, 0xF5);
pub const WHITE: ColorValue = ColorValue::rgb(0xFF, 0xFF, 0xFF);
pub const MAROON: ColorValue = ColorValue::rgb(0x80, 0x00, 0x00);
pub const DARK_RED: ColorValue = ColorValue::rgb(0x8B, 0x00, 0x00);
pub const RED: ColorValue = ColorValue::rgb(0xFF, 0x00, 0x00);
pub const FIREBRICK: ColorValue = ColorValue::rgb(0xB2, 0x22, 0x22);
pub const BROWN: ColorValue = ColorValue::rgb(0xA5, 0x2A, 0x2A);
pub const INDIAN_RED: ColorValue = ColorValue::rgb(0xCD, 0x5C, 0x5C);
pub const LIGHT_CORAL: ColorValue = ColorValue::rgb(0xF0, 0x80, 0x80);
pub const ROSY_BROWN: ColorValue = ColorValue::rgb(0xBC, 0x8F, 0x8F);
pub const MISTY_ROSE: ColorValue = ColorValue::rgb(0xFF, 0xE4, 0xE1);
pub const SNOW: ColorValue = ColorValue::rgb(0xFF, 0xFA, 0xFA);
pub const SIENNA: ColorValue = ColorValue::rgb(0xA0, 0x52, 0x2D);
pub const ORANGE_RED: ColorValue = ColorValue::rgb(0xFF, 0x45, 0x00);
pub const TOMATO: ColorValue = ColorValue::rgb(0xFF, 0x63, 0x47);
pub const BURNT_SIENNA: ColorValue = ColorValue::rgb(0xEA, 0x7E, 0x5D);
pub const CORAL: ColorValue = ColorValue::rgb(0xFF, 0x7F, 0x50);
pub const SALMON: ColorValue = ColorValue::rgb(0xFA, 0x80, 0x72);
pub const DARK_SALMON: ColorValue = ColorValue::rgb(0xE9, 0x96, 0x7A);
pub const LIGHT_SALMON: ColorValue = ColorValue::rgb(0xFF, 0xA0, 0x7A);
pub const SEASHELL: ColorValue = ColorValue::rgb(0xFF, 0xF5, 0xEE);
pub const SADDLE_BROWN: ColorValue = ColorValue::rgb(0x8B, 0x45, 0x13);
pub const CHOCOLATE: ColorValue = ColorValue::rgb(0xD2, 0x69, 0x1E);
pub const PERU: ColorValue = ColorValue::rgb(0xCD, 0x85, 0x3F);
pub const SANDY_BROWN: ColorValue = ColorValue::rgb(0xF4, 0xA4, 0x60);
pub const PEACH_PUFF: ColorValue = ColorValue::rgb(0xFF, 0xDA, 0xB9);
pub const LINEN: ColorValue = ColorValue::rgb(0xFA, 0xF0, 0xE6);
pub const DARK_ORANGE: ColorValue = ColorValue::rgb(0xFF, 0x8C, 0x00);
pub const BURLY_WOOD: ColorValue = ColorValue::rgb(0xDE, 0xB8, 0x87);
pub const BISQUE: ColorValue = ColorValue::rgb(0xFF, 0xE4, 0xC4);
pub const ANTIQUE_WHITE: ColorValue = ColorValue::rgb(0xFA, 0xEB, 0xD7);
pub const ORANGE: ColorValue = ColorValue::rgb(0xFF, 0xA5, 0x00);
pub const TAN: ColorValue = ColorValue::rgb(0xD2, 0xB4, 0x8C);
pub const WHEAT: ColorValue = ColorValue::rgb(0xF5, 0xDE, 0xB3);
pub const NAVAJO_WHITE: ColorValue = ColorValue::rgb(0xFF, 0xDE, 0xAD);
pub const MOCCASIN: ColorValue = ColorValue::rgb(0xFF, 0xE4, 0xB5);
pub const BLANCHED_ALMOND: ColorValue = ColorValue::rgb(0xFF, 0xEB, 0xCD);
pub const PAPAYA_WHIP: ColorValue = ColorValue::rgb(0xFF, 0xEF, 0xD5);
pub const OLD_LACE: ColorValue = ColorValue::rgb(0xFD, 0xF5, 0xE6);
pub const FLORAL_WHITE: ColorValue = ColorValue::rgb(0xFF, 0xFA, 0xF0);
pub const DARK_GOLDENROD: ColorValue = ColorValue::rgb(0xB8, 0x86, 0x0B);
pub const GOLDENROD: ColorValue = ColorValue::rgb(0xDA, 0xA5, 0x20);
pub const CORNSILK: ColorValue = ColorValue::rgb(0xFF, 0xF8, 0xDC);
pub const DARK_KHAKI: ColorValue = ColorValue::rgb(0xBD, 0xB7, 0x6B);
pub const GOLD: ColorValue = ColorValue::rgb(0xFF, 0xD7, 0x00);
pub const KHAKI: ColorValue = ColorValue::rgb(0xF0, 0xE6, 0x8C);
pub const PALE_GOLDENROD: ColorValue = ColorValue::rgb(0xEE, 0xE8, 0xAA);
pub const BEIGE: ColorValue = ColorValue::rgb(0xF5, 0xF5, 0xDC);
pub const LIGHT_GOLDENROD_YELLOW: ColorValue = ColorValue::rgb(0xFA, 0xFA, 0xD2);
pub const LEMON_CHIFFON: ColorValue = ColorValue::rgb(0xFF, 0xFA, 0xCD);
pub const OLIVE: ColorValue = ColorValue::rgb(0x80, 0x80, 0x00);
pub const YELLOW: ColorValue = ColorValue::rgb(0xFF, 0xFF, 0x00);
pub const LIGHT_YELLOW: ColorValue = ColorValue::rgb(0xFF, 0xFF, 0xE0);
pub const IVORY: ColorValue = ColorValue::rgb(0xFF, 0xFF, 0xF0);
pub const DARK_GREEN: ColorValue = ColorValue::rgb(0x00, 0x64, 0x00);
pub const GREEN: ColorValue = ColorValue::rgb(0x00, 0x80, 0x00);
pub const DARK_OLIVE_GREEN: ColorValue = ColorValue::rgb(0x55, 0x6B, 0x2F);
pub const FOREST_GREEN: ColorValue = ColorValue::rgb(0x22, 0x8B, 0x22);
pub const OLIVE_DRAB: ColorValue = ColorValue::rgb(0x6B, 0x8E, 0x23);
pub const LIME_GREEN: ColorValue = ColorValue::rgb(0x32, 0xCD, 0x32);
pub const DARK_SEA_GREEN: ColorValue = ColorValue::rgb(0x8F, 0xBC, 0x8F);
pub const LIME: ColorValue = ColorValue::rgb(0x00, 0xFF, 0x00);
pub const YELLOW_GREEN: ColorValue = ColorValue::rgb(0x9A, 0xCD, 0x32);
pub const LAWN_GREEN: ColorValue = ColorValue::rgb(0x7C, 0xFC, 0x00);
pub const CHARTREUSE: ColorValue = ColorValue::rgb(0x7F, 0xFF, 0x00);
pub const LIGHT_GREEN: ColorValue = ColorValue::rgb(0x90, 0xEE, 0x90);
pub const GREEN_YELLOW: ColorValue = ColorValue::rgb(0xAD, 0xFF, 0x2F);
pub const PALE_GREEN: ColorValue = ColorValue::rgb(0x98, 0xFB, 0x98);
pub const HONEYDEW: ColorValue = ColorValue::rgb(0xF0, 0xFF, 0xF0);
pub const SEA_GREEN: ColorValue = ColorValue::rgb(0x2E, 0x8B, 0x57);
pub const MEDIUM_SEA_GREEN: ColorValue = ColorValue::rgb(0x3C, 0xB3, 0x71);
pub const SPRING_GREEN: ColorValue = ColorValue::rgb(0x00, 0xFF, 0x7F);
pub const MINT_CREAM: ColorValue = ColorValue::rgb(0xF5, 0xFF, 0xFA);
pub const DARK_SLATE_GREY: ColorValue = ColorValue::rgb(0x2F, 0x4F, 0x4F);
pub const TEAL: ColorValue = ColorValue::rgb(0x00, 0x80, 0x80);
pub const DARK_CYAN: ColorValue = ColorValue::rgb(0x00, 0x8B, 0x8B);
pub const LIGHT_SEA_GREEN: ColorValue = ColorValue::rgb(0x20, 0xB2, 0xAA);
pub const MEDIUM_TURQUOISE: ColorValue = ColorValue::rgb(0x48, 0xD1, 0xCC);
pub const MEDIUM_AQUAMARINE: ColorValue = ColorValue::rgb(0x66, 0xCD, 0xAA);
pub const TURQUOISE: ColorValue = ColorValue::rgb(0x40, 0xE0, 0xD0);
pub const MEDIUM_SPRING_GREEN: ColorValue = ColorValue::rgb(0x00, 0xFA, 0x9A);
pub const CYAN: ColorValue = ColorValue::rgb(0x00, 0xFF, 0xFF);
pub const PALE_TURQUOISE: ColorValue = ColorValue::rgb(0xAF, 0xEE, 0xEE);
pub const AQUAMARINE: ColorValue = ColorValue::rgb(0x7F, 0xFF, 0xD4);
pub const LIGHT_CYAN: ColorValue = ColorValue::rgb(0xE0, 0xFF, 0xFF);
pub const AZURE: ColorValue = ColorValue::rgb(0xF0, 0xFF, 0xFF);
pub const STEEL_BLUE: ColorValue = ColorValue::rgb(0x46, 0x82, 0xB4);
pub const CADET_BLUE: ColorValue = ColorValue::rgb(0x5F, 0x9E, 0xA0);
pub const DEEP_SKY_BLUE: ColorValue = ColorValue::rgb(0x00, 0xBF, 0xFF);
pub const DARK_TURQUOISE: ColorValue = ColorValue::rgb(0x00, 0xCE, 0xD1);
pub const SKY_BLUE: ColorValue = ColorValue::rgb(0x87, 0xCE, 0xEB);
pub const LIGHT_SKY_BLUE: ColorValue = ColorValue::rgb(0x87, 0xCE, 0xFA);
pub const LIGHT_BLUE: ColorValue = ColorValue::rgb(0xAD, 0xD8, 0xE6);
pub const POWDER_BLUE: ColorValue = ColorValue::rgb(0xB0, 0xE0, 0xE6);
pub const ALICE_BLUE: ColorValue = ColorValue::rgb(0xF0, 0xF8, 0xFF);
pub const MIDNIGHT_BLUE: ColorValue = ColorValue::rgb(0x19, 0x19, 0x70);
pub const ROYAL_BLUE: ColorValue = ColorValue::rgb(0x41, 0x69, 0xE1);
pub const SLATE_GREY: ColorValue = ColorValue::rgb(0x70, 0x80, 0x90);
pub const DODGER_BLUE: ColorValue = ColorValue::rgb(0x1E, 0x90, 0xFF);
pub const LIGHT_SLATE_GREY: ColorValue = ColorValue::rgb(0x77, 0x88, 0x99);
pub const CORNFLOWER_BLUE: ColorValue = ColorValue::rgb(0x64, 0x95, 0xED);
pub const LIGHT_STEEL_BLUE: ColorValue = ColorValue::rgb(0xB0, 0xC4, 0xDE);
pub const LAVENDER: ColorValue = ColorValue::rgb(0xE6, 0xE6, 0xFA);
pub const NAVY: ColorValue = ColorValue::rgb(0x00, 0x00, 0x80);
pub const DARK_BLUE: ColorValue = ColorValue::rgb(0x00, 0x00, 0x8B);
pub const MEDIUM_BLUE: ColorValue = ColorValue::rgb(0x00, 0x00, 0xCD);
pub const BLUE: ColorValue = ColorValue::rgb(0x00, 0x00, 0xFF);
pub const GHOST_WHITE: ColorValue = ColorValue::rgb(0xF8, 0xF8, 0xFF);
pub const INDIGO: ColorValue = ColorValue::rgb(0x4B, 0x00, 0x82);
pub const DARK_VIOLET: ColorValue = ColorValue::rgb(0x94, 0x00, 0xD3);
pub const DARK_SLATE_BLUE: ColorValue = ColorValue::rgb(0x48, 0x3D, 0x8B);
pub const REBECCA_PURPLE: ColorValue = ColorValue::rgb(0x66, 0x33, 0x99);
pub const BLUE_VIOLET: ColorValue = ColorValue::rgb(0x8A, 0x2B, 0xE2);
pub const DARK_ORCHID: ColorValue = ColorValue::rgb(0x99, 0x32, 0xCC);
pub const SLATE_BLUE: ColorValue = ColorValue::rgb(0x6A, 0x5A, 0xCD);
pub const MEDIUM_ORCHID: ColorValue = ColorValue::rgb(0xBA, 0x55, 0xD3);
pub const MEDIUM_SLATE_BLUE: ColorValue = ColorValue::rgb(0x7B, 0x68, 0xEE);
pub const MEDIUM_PURPLE: ColorValue = ColorValue::rgb(0x93, 0x70, 0xDB);
pub const THISTLE: ColorValue = ColorValue::rgb(0xD8, 0xBF, 0xD8);
pub const PURPLE: ColorValue = ColorValue::rgb(0x80, 0x00, 0x80);
pub const DARK_MAGENTA: ColorValue = ColorValue::rgb(0x8B, 0x00, 0x8B);
pub const MEDIUM_VIOLET_RED: ColorValue = ColorValue::rgb(0xC7, 0x15, 0x85);
pub const FUCHSIA: ColorValue = ColorValue::rgb(0xFF, 0x00, 0xFF);
pub const DEEP_PINK: ColorValue = ColorValue::rgb(0xFF, 0x14, 0x93);
pub const ORCHID: ColorValue = ColorValue::rgb(0xDA, 0x70, 0xD6);
pub const HOT_PINK: ColorValue = ColorValue::rgb(0xFF, 0x69, 0xB4);
pub const VIOLET: ColorValue = ColorValue::rgb(0xEE, 0x82, 0xEE);
pub const PLUM: ColorValue = ColorValue::rgb(0xDD, 0xA0, 0xDD);
pub const LAVENDER_BLUSH: ColorValue = ColorValue::rgb(0xFF, 0xF0, 0xF5);
pub const CRIMSON: ColorValue = ColorValue::rgb(0xDC, 0x14, 0x3C);
pub const PALE_VIOLET_RED: ColorValue = ColorValue::rgb(0xDB, 0x70, 0x93);
pub const LIGHT_PINK: ColorValue = ColorValue::rgb(0xFF, 0xB6, 0xC1);
pub const PINK: ColorValue = ColorValue::rgb(0xFF, 0xC0, 0xCB);

/// Every named color, keyed by its snake_case name.
pub static NAMED_COLORS: &[(&str, ColorValue)] = &[
    ("black", BLACK),
    ("dim_grey", DIM_GREY),
    ("grey", GREY),
    ("dark_grey", DARK_GREY),
    ("silver", SILVER),
    ("light_grey", LIGHT_GREY),
    ("white_smoke", WHITE_SMOKE),
    ("white", WHITE),
    ("maroon", MAROON),
    ("dark_red", DARK_RED),
    ("red", RED),
    ("firebrick", FIREBRICK),
    ("brown", BROWN),
    ("indian_red", INDIAN_RED),
    ("light_coral", LIGHT_CORAL),
    ("rosy_brown", ROSY_BROWN),
    ("misty_rose", MISTY_ROSE),
    ("snow", SNOW),
    ("sienna", SIENNA),
    ("orange_red", ORANGE_RED),
    ("tomato", TOMATO),
    ("burnt_sienna", BURNT_SIENNA),
    ("coral", CORAL),
    ("salmon", SALMON),
    ("dark_salmon", DARK_SALMON),
    ("light_salmon", LIGHT_SALMON),
    ("seashell", SEASHELL),
    ("saddle_brown", SADDLE_BROWN),
    ("chocolate", CHOCOLATE),
    ("peru", PERU),
    ("sandy_brown", SANDY_BROWN),
    ("peach_puff", PEACH_PUFF),
    ("linen", LINEN),
    ("dark_orange", DARK_ORANGE),
    ("burly_wood", BURLY_WOOD),
    ("bisque", BISQUE),
    ("antique_white", ANTIQUE_WHITE),
    ("orange", ORANGE),
    ("tan", TAN),
    ("wheat", WHEAT),
    ("navajo_white", NAVAJO_WHITE),
    ("moccasin", MOCCASIN),
    ("blanched_almond", BLANCHED_ALMOND),
    ("papaya_whip", PAPAYA_WHIP),
    ("old_lace", OLD_LACE),
    ("floral_white", FLORAL_WHITE),
    ("dark_goldenrod", DARK_GOLDENROD),
    ("goldenrod", GOLDENROD),
    ("cornsilk", CORNSILK),
    ("dark_khaki", DARK_KHAKI),
    ("gold", GOLD),
    ("khaki", KHAKI),
    ("pale_goldenrod", PALE_GOLDENROD),
    ("beige", BEIGE),
    ("light_goldenrod_yellow", LIGHT_GOLDENROD_YELLOW),
    ("lemon_chiffon", LEMON_CHIFFON),
    ("olive", OLIVE),
    ("yellow", YELLOW),
    ("light_yellow", LIGHT_YELLOW),
    ("ivory", IVORY),
    ("dark_green", DARK_GREEN),
    ("green", GREEN),
    ("dark_olive_green", DARK_OLIVE_GREEN),
    ("forest_green", FOREST_GREEN),
    ("olive_drab", OLIVE_DRAB),
    ("lime_green", LIME_GREEN),
    ("dark_sea_green", DARK_SEA_GREEN),
    ("lime", LIME),
    ("yellow_green", YELLOW_GREEN),
    ("lawn_green", LAWN_GREEN),
    ("chartreuse", CHARTREUSE),
    ("light_green", LIGHT_GREEN),
    ("green_yellow", GREEN_YELLOW),
    ("pale_green", PALE_GREEN),
    ("honeydew", HONEYDEW),
    ("sea_green", SEA_GREEN),
    ("medium_sea_green", MEDIUM_SEA_GREEN),
    ("spring_green", SPRING_GREEN),
    ("mint_cream", MINT_CREAM),
    ("dark_slate_grey", DARK_SLATE_GREY),
    ("teal", TEAL),
    ("dark_cyan", DARK_CYAN),
    ("light_sea_green", LIGHT_SEA_GREEN),
    ("medium_turquoise", MEDIUM_TURQUOISE),
    ("medium_aquamarine", MEDIUM_AQUAMARINE),
    ("turquoise", TURQUOISE),
    ("medium_spring_green", MEDIUM_SPRING_GREEN),
    ("cyan", CYAN),
    ("pale_turquoise", PALE_TURQUOISE),
    ("aquamarine", AQUAMARINE),
    ("light_cyan", LIGHT_CYAN),
    ("azure", AZURE),
    ("steel_blue", STEEL_BLUE),
    ("cadet_blue", CADET_BLUE),
    ("deep_sky_blue", DEEP_SKY_BLUE),
    ("dark_turquoise", DARK_TURQUOISE),
    ("sky_blue", SKY_BLUE),
    ("light_sky_blue", LIGHT_SKY_BLUE),
    ("light_blue", LIGHT_BLUE),
    ("powder_blue", POWDER_BLUE),
    ("alice_blue", ALICE_BLUE),
    ("midnight_blue", MIDNIGHT_BLUE),
    ("royal_blue", ROYAL_BLUE),
    ("slate_grey", SLATE_GREY),
    ("dodger_blue", DODGER_BLUE),
    ("light_slate_grey", LIGHT_SLATE_GREY),
    ("cornflower_blue", CORNFLOWER_BLUE),
    ("light_steel_blue", LIGHT_STEEL_BLUE),
    ("lavender", LAVENDER),
    ("navy", NAVY),
    ("dark_blue", DARK_BLUE),
    ("medium_blue", MEDIUM_BLUE),
    ("blue", BLUE),
    ("ghost_white", GHOST_WHITE),
    ("indigo", INDIGO),
    ("dark_violet", DARK_VIOLET),
    ("dark_slate_blue", DARK_SLATE_BLUE),
    ("rebecca_purple", REBECCA_PURPLE),
    ("blue_violet", BLUE_VIOLET),
    ("dark_orchid", DARK_ORCHID),
    ("slate_blue", SLATE_BLUE),
    ("medium_orchid", MEDIUM_ORCHID),
    ("medium_slate_blue", MEDIUM_SLATE_BLUE),
    ("medium_purple", MEDIUM_PURPLE),
    ("thistle", THISTLE),
    ("purple", PURPLE),
    ("dark_magenta", DARK_MAGENTA),
    ("medium_violet_red", MEDIUM_VIOLET_RED),
    ("fuchsia", FUCHSIA),
    ("deep_pink", DEEP_PINK),
    ("orchid", ORCHID),
    ("hot_pink", HOT_PINK),
    ("violet", VIOLET),
    ("plum", PLUM),
    ("lavender_blush", LAVENDER_BLUSH),
    ("crimson", CRIMSON),
    ("pale_violet_red", PALE_VIOLET_RED),
    ("light_pink", LIGHT_PINK),
    ("pink", PINK),
];

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .replace("gray", "grey")
}

/// Find a named color.
pub fn lookup(name: &str) -> Option<ColorValue> {
    let wanted = normalize(name);
    NAMED_COLORS
        .iter()
        .find(|(key, _)| normalize(key) == wanted)
        .map(|&(_, color)| color)
}

/// Reverse lookup: the first name whose value is exactly `color`.
pub fn name_of(color: ColorValue) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|&&(_, value)| value == color)
        .map(|&(key, _)| key)
}
