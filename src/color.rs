use crate::error::Error;
use crate::palette;
use rgb::RGB8;
use std::fmt;
use std::str::FromStr;

/// One entry of the 16-color mIRC palette.
///
/// The index doubles as the color code sent over the wire, so it never changes
/// for a given name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub(crate) name: &'static str,
    pub(crate) index: u8,
    pub(crate) rgb: RGB8,
}

impl Color {
    pub(crate) const fn new(name: &'static str, index: u8, r: u8, g: u8, b: u8) -> Self {
        Color {
            name,
            index,
            rgb: RGB8 { r, g, b },
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn rgb(&self) -> RGB8 {
        self.rgb
    }

    /// Human readable name, e.g. `"Light Red"` for `light_red`.
    pub fn title(&self) -> String {
        self.name
            .split(['_', ' '])
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Two digit, zero padded color code, e.g. `"03"`.
    pub fn color_code(&self) -> String {
        format!("{:02}", self.index)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),

        None => String::new(),
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.index, self.name)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        palette::lookup(s)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use crate::palette::{self, BLUE, LIGHT_GREY, LIGHT_RED};
    use pretty_assertions::assert_eq;

    #[test]
    fn title() {
        assert_eq!(BLUE.title(), "Blue");
        assert_eq!(LIGHT_RED.title(), "Light Red");
        assert_eq!(LIGHT_GREY.title(), "Light Grey");
    }

    #[test]
    fn color_code() {
        assert_eq!(BLUE.color_code(), "02");
        assert_eq!(LIGHT_GREY.color_code(), "15");

        for color in palette::all() {
            assert_eq!(color.color_code().len(), 2, "{color}");
        }
    }

    #[test]
    fn from_str() {
        assert_eq!("blue".parse::<Color>(), Ok(BLUE));
        assert!("navy".parse::<Color>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(LIGHT_GREY.to_string(), "15:light grey");
    }
}
