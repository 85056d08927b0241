//! Ready-made outputs for eyeballing the palette in a client.

use crate::error::Error;
use crate::format::{colored, colorize};
use crate::palette::{self, random_color};
use crate::template::Args;
use rand::Rng;

/// Colors every word with a random foreground and background.
pub fn words<S: AsRef<str>, R: Rng>(words: &[S], rng: &mut R) -> String {
    words
        .iter()
        .map(|word| {
            let fg = random_color(rng);
            let bg = random_color(rng);

            colorize(fg, Some(bg), word.as_ref())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One 80 column line per foreground/background pair.
pub fn swatch() -> Result<Vec<String>, Error> {
    let mut lines = Vec::with_capacity(256);

    for fg in palette::all() {
        for bg in palette::all() {
            let label = format!(
                "{},{} - {} on {}",
                fg.color_code(),
                bg.color_code(),
                fg.title(),
                bg.title()
            );

            lines.push(colored(fg, Some(bg), "{:^80}", &Args::new().arg(label))?);
        }
    }

    Ok(lines)
}

/// A 16x16 grid of `fg,bg` cells, one line per foreground.
pub fn dump() -> Result<Vec<String>, Error> {
    palette::all()
        .map(|fg| {
            palette::all()
                .map(|bg| {
                    let label = format!("{},{}", fg.color_code(), bg.color_code());

                    colored(fg, Some(bg), "{:^8}", &Args::new().arg(label))
                })
                .collect::<Result<String, Error>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BLUE, GREEN};
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn words_are_colored_and_joined() {
        let mut rng = StdRng::seed_from_u64(1);
        let line = words(&["hello", "{world}"], &mut rng);

        let parts: Vec<&str> = line.split(' ').collect();
        assert_eq!(parts.len(), 2);

        for (part, word) in parts.iter().zip(["hello", "{world}"]) {
            assert!(part.starts_with('\x03'));
            assert!(part.ends_with('\x03'));
            assert_eq!(&part[6..part.len() - 1], word);
        }
    }

    #[test]
    fn words_empty() {
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(words::<&str, _>(&[], &mut rng), "");
    }

    #[test]
    fn swatch_lines() {
        let lines = swatch().unwrap();

        assert_eq!(lines.len(), 256);

        let label = "02,03 - Blue on Green";
        let expected = format!("\x0302,03{}{}{}\x03", " ".repeat(29), label, " ".repeat(30));
        assert_eq!(lines[(BLUE.index() * 16 + GREEN.index()) as usize], expected);
    }

    #[test]
    fn dump_grid() {
        let lines = dump().unwrap();

        assert_eq!(lines.len(), 16);
        assert!(lines[0].starts_with("\x0300,00 00,00  \x03\x0300,01 00,01  \x03"));

        for line in &lines {
            assert_eq!(line.matches('\x03').count(), 32);
        }
    }
}
