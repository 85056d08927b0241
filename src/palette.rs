//! The fixed 16-color mIRC palette.
//!
//! Entries are declared in wire order: the position of a color in [`COLORS`]
//! equals its index, which is the number IRC clients read after the color
//! control code.

use crate::color::Color;
use crate::error::Error;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const WHITE: Color = Color::new("white", 0, 255, 255, 255);
pub const BLACK: Color = Color::new("black", 1, 0, 0, 0);
pub const BLUE: Color = Color::new("blue", 2, 0, 0, 127);
pub const GREEN: Color = Color::new("green", 3, 0, 147, 0);
pub const LIGHT_RED: Color = Color::new("light_red", 4, 255, 0, 0);
pub const BROWN: Color = Color::new("brown", 5, 127, 0, 0);
pub const PURPLE: Color = Color::new("purple", 6, 156, 0, 156);
pub const ORANGE: Color = Color::new("orange", 7, 252, 127, 0);
pub const YELLOW: Color = Color::new("yellow", 8, 255, 255, 0);
pub const LIGHT_GREEN: Color = Color::new("light_green", 9, 0, 252, 0);
pub const CYAN: Color = Color::new("cyan", 10, 0, 147, 147);
pub const LIGHT_CYAN: Color = Color::new("light_cyan", 11, 0, 255, 255);
pub const LIGHT_BLUE: Color = Color::new("light_blue", 12, 0, 0, 255);
pub const PINK: Color = Color::new("pink", 13, 255, 0, 255);
pub const GREY: Color = Color::new("grey", 14, 127, 127, 127);
pub const LIGHT_GREY: Color = Color::new("light grey", 15, 210, 210, 210);

pub const COLORS: [Color; 16] = [
    WHITE,
    BLACK,
    BLUE,
    GREEN,
    LIGHT_RED,
    BROWN,
    PURPLE,
    ORANGE,
    YELLOW,
    LIGHT_GREEN,
    CYAN,
    LIGHT_CYAN,
    LIGHT_BLUE,
    PINK,
    GREY,
    LIGHT_GREY,
];

static BY_NAME: OnceLock<HashMap<&'static str, Color>> = OnceLock::new();

fn by_name() -> &'static HashMap<&'static str, Color> {
    BY_NAME.get_or_init(|| COLORS.iter().map(|c| (c.name, *c)).collect())
}

/// Finds a color by its exact name, e.g. `"light_red"` or `"light grey"`.
pub fn lookup(name: &str) -> Result<Color, Error> {
    match by_name().get(name) {
        Some(color) => Ok(*color),

        None => {
            log::debug!("no palette entry named {name:?}");

            Err(Error::UnknownColor(name.to_owned()))
        }
    }
}

pub fn by_index(index: u8) -> Option<Color> {
    COLORS.get(index as usize).copied()
}

/// All 16 colors in declaration order.
pub fn all() -> impl Iterator<Item = Color> + Clone {
    COLORS.iter().copied()
}

pub fn random_color<R: Rng>(rng: &mut R) -> Color {
    // never None, the table is not empty
    COLORS.choose(rng).copied().unwrap_or(WHITE)
}
