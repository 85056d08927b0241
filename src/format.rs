//! mIRC control codes and the color formatter.
//!
//! A colored run is `COLOR fg[,bg] text COLOR`, where `fg` and `bg` are the
//! two digit palette codes. The style toggles are left to the caller to pair
//! up.

use crate::color::Color;
use crate::error::Error;
use crate::template::{self, Args};

pub const BOLD: &str = "\x02";
pub const COLOR: &str = "\x03";
pub const ITALIC: &str = "\x1d";
pub const UNDERLINE: &str = "\x1f";
pub const REVERSE: &str = "\x16";
pub const RESET: &str = "\x0f";

/// Substitutes `args` into `template` and wraps the result in color codes.
pub fn colored(
    fg: Color,
    bg: Option<Color>,
    template: &str,
    args: &Args,
) -> Result<String, Error> {
    let text = template::substitute(template, args)?;

    Ok(colorize(fg, bg, &text))
}

/// Wraps `text` verbatim in color codes.
pub fn colorize(fg: Color, bg: Option<Color>, text: &str) -> String {
    let mut s = String::with_capacity(text.len() + 8);
    s.push_str(COLOR);
    s.push_str(&fg.color_code());

    if let Some(bg) = bg {
        s.push(',');
        s.push_str(&bg.color_code());
    }

    s.push_str(text);
    s.push_str(COLOR);

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use crate::palette::{self, BLACK, BLUE, GREEN, LIGHT_GREY, WHITE};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn foreground_only() {
        assert_eq!(
            colored(BLUE, None, "hi", &Args::new()).unwrap(),
            "\x0302hi\x03"
        );
    }

    #[test]
    fn foreground_and_background() {
        assert_eq!(
            colored(BLUE, Some(GREEN), "{0}", &Args::new().arg("x")).unwrap(),
            "\x0302,03x\x03"
        );

        assert_eq!(
            colored(LIGHT_GREY, Some(WHITE), "{n}", &Args::new().named("n", 1)).unwrap(),
            "\x0315,001\x03"
        );
    }

    #[test]
    fn template_errors_propagate() {
        assert_eq!(
            colored(BLACK, None, "{0}", &Args::new()),
            Err(Error::Format(FormatError::MissingPositional(0)))
        );

        assert_eq!(
            colored(BLACK, Some(WHITE), "oops {", &Args::new()),
            Err(Error::Format(FormatError::UnmatchedOpen(5)))
        );
    }

    #[test]
    fn colorize_keeps_braces() {
        assert_eq!(colorize(BLACK, Some(WHITE), "{}"), "\x0301,00{}\x03");
    }

    #[test]
    fn control_codes_are_single_bytes() {
        for code in [BOLD, COLOR, ITALIC, UNDERLINE, REVERSE, RESET] {
            assert_eq!(code.len(), 1);
        }
    }

    proptest! {
        #[test]
        fn colorized_shape(fg in 0u8..16, bg in proptest::option::of(0u8..16), text in "[^\x03]*") {
            let fg = palette::by_index(fg).unwrap();
            let bg = bg.and_then(palette::by_index);
            let s = colorize(fg, bg, &text);

            let header = match bg {
                Some(bg) => format!("\x03{:02},{:02}", fg.index(), bg.index()),
                None => format!("\x03{:02}", fg.index()),
            };

            prop_assert!(s.starts_with(&header));
            prop_assert!(s.ends_with(COLOR));
            prop_assert_eq!(&s[header.len()..s.len() - 1], text.as_str());
        }
    }
}
