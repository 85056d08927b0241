use crate::error::FormatError;
use std::borrow::Cow;
use std::iter;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

/// Largest width or precision a spec may ask for.
const MAX_NUMBER: usize = u16::MAX as usize;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Right,
    Center,
}

/// Parsed `[[fill]align][width][.precision]` part of a replacement field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Spec {
    fill: char,
    align: Align,
    width: usize,
    precision: Option<usize>,
}

impl Align {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            _ => None,
        }
    }
}

impl Spec {
    pub(crate) fn apply(&self, value: &str) -> String {
        let value: Cow<str> = match self.precision {
            Some(precision) => value.chars().take(precision).collect::<String>().into(),
            None => value.into(),
        };

        let pad = self.width.saturating_sub(value.width());

        let (left, right) = match self.align {
            Align::Left => (0, pad),
            Align::Right => (pad, 0),
            Align::Center => (pad / 2, pad - pad / 2),
        };

        let mut s = String::with_capacity(value.len() + pad);
        s.extend(iter::repeat(self.fill).take(left));
        s.push_str(&value);
        s.extend(iter::repeat(self.fill).take(right));

        s
    }
}

impl Default for Spec {
    fn default() -> Self {
        Spec {
            fill: ' ',
            align: Align::Left,
            width: 0,
            precision: None,
        }
    }
}

impl FromStr for Spec {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::InvalidSpec(s.to_owned());
        let chars: Vec<char> = s.chars().collect();
        let mut spec = Spec::default();
        let mut pos = 0;

        if let Some(align) = chars.get(1).copied().and_then(Align::from_char) {
            spec.fill = chars[0];
            spec.align = align;
            pos = 2;
        } else if let Some(align) = chars.first().copied().and_then(Align::from_char) {
            spec.align = align;
            pos = 1;
        }

        if let Some(width) = number(&chars, &mut pos) {
            spec.width = bounded(&width).ok_or_else(invalid)?;
        }

        if chars.get(pos) == Some(&'.') {
            pos += 1;
            let precision = number(&chars, &mut pos).ok_or_else(invalid)?;
            spec.precision = Some(bounded(&precision).ok_or_else(invalid)?);
        }

        if chars.get(pos) == Some(&'s') {
            pos += 1;
        }

        if pos != chars.len() {
            return Err(invalid());
        }

        Ok(spec)
    }
}

fn bounded(digits: &str) -> Option<usize> {
    digits.parse().ok().filter(|n| *n <= MAX_NUMBER)
}

fn number(chars: &[char], pos: &mut usize) -> Option<String> {
    let digits: String = chars[*pos..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        None
    } else {
        *pos += digits.len();

        Some(digits)
    }
}
