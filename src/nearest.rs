//! Mapping arbitrary RGB values onto the palette.

use crate::color::Color;
use crate::palette::COLORS;
use rgb::RGB;

const R_WEIGHT: f64 = 0.3;
const G_WEIGHT: f64 = 0.59;
const B_WEIGHT: f64 = 0.11;

/// Weighted euclidean distance between a palette color and `rgb`.
///
/// Each channel difference is scaled by its weight before squaring. Components
/// of `rgb` are not range checked.
pub fn distance(color: &Color, rgb: RGB<i32>) -> f64 {
    let c = color.rgb();
    let dr = (f64::from(c.r) - f64::from(rgb.r)) * R_WEIGHT;
    let dg = (f64::from(c.g) - f64::from(rgb.g)) * G_WEIGHT;
    let db = (f64::from(c.b) - f64::from(rgb.b)) * B_WEIGHT;

    (dr * dr + dg * dg + db * db).sqrt()
}

/// Palette color closest to `rgb`.
///
/// On ties the color declared first wins.
pub fn find_nearest(rgb: RGB<i32>) -> Color {
    let color = closest(&COLORS[0], &COLORS[1..], rgb);
    log::trace!("nearest to {rgb:?} is {color}");

    color
}

/// Like [`find_nearest`], over an arbitrary list of colors.
pub fn nearest_in(colors: &[Color], rgb: RGB<i32>) -> Option<Color> {
    let (first, rest) = colors.split_first()?;

    Some(closest(first, rest, rgb))
}

fn closest(first: &Color, rest: &[Color], rgb: RGB<i32>) -> Color {
    let mut best = first;
    let mut best_distance = distance(first, rgb);

    for color in rest {
        let d = distance(color, rgb);

        if d < best_distance {
            best = color;
            best_distance = d;
        }
    }

    *best
}
