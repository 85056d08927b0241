//! Brace-style template substitution.
//!
//! `{}` consumes the next positional argument, `{N}` picks positional `N`,
//! `{name}` picks a named argument. A field may carry a spec after `:` with
//! fill, alignment, width and precision (`{:^80}`, `{name:*>5.2}`). `{{` and
//! `}}` produce literal braces.
//!
//! Width and precision are capped at 65535. The only presentation type is `s`;
//! numeric types such as `d` or `x` are rejected, so format numbers before
//! passing them in. Padding counts terminal display columns, so a wide
//! character like `日` takes two columns of the width rather than one.

mod spec;

use crate::error::FormatError;
use spec::Spec;
use std::collections::HashMap;
use std::fmt::Display;

/// Values substituted into a template.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Args {
    positional: Vec<String>,
    named: HashMap<String, String>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, value: impl Display) -> Self {
        self.positional.push(value.to_string());

        self
    }

    pub fn named(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.named.insert(name.into(), value.to_string());

        self
    }

    fn positional(&self, index: usize) -> Result<&str, FormatError> {
        self.positional
            .get(index)
            .map(String::as_str)
            .ok_or(FormatError::MissingPositional(index))
    }

    fn named_value(&self, name: &str) -> Result<&str, FormatError> {
        self.named
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| FormatError::MissingNamed(name.to_owned()))
    }
}

impl<T: Display> FromIterator<T> for Args {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Args::new(), |args, value| args.arg(value))
    }
}

#[derive(Debug, Copy, Clone)]
enum State {
    Text,
    Open(usize),
    Field(usize),
    Close(usize),
}

#[derive(Debug, Copy, Clone)]
enum Numbering {
    Unset,
    Auto(usize),
    Manual,
}

impl Numbering {
    fn next_auto(&mut self) -> Result<usize, FormatError> {
        match *self {
            Numbering::Unset => {
                *self = Numbering::Auto(1);

                Ok(0)
            }

            Numbering::Auto(n) => {
                *self = Numbering::Auto(n + 1);

                Ok(n)
            }

            Numbering::Manual => Err(FormatError::MixedNumbering),
        }
    }

    fn manual(&mut self) -> Result<(), FormatError> {
        match self {
            Numbering::Auto(_) => Err(FormatError::MixedNumbering),

            _ => {
                *self = Numbering::Manual;

                Ok(())
            }
        }
    }
}

pub fn substitute(template: &str, args: &Args) -> Result<String, FormatError> {
    let mut output = String::with_capacity(template.len());
    let mut field = String::new();
    let mut numbering = Numbering::Unset;
    let mut state = State::Text;

    for (pos, ch) in template.char_indices() {
        state = match (state, ch) {
            (State::Text, '{') => State::Open(pos),

            (State::Text, '}') => State::Close(pos),

            (State::Text, ch) => {
                output.push(ch);

                State::Text
            }

            (State::Open(_), '{') => {
                output.push('{');

                State::Text
            }

            (State::Open(_) | State::Field(_), '}') => {
                output.push_str(&resolve(&field, args, &mut numbering)?);
                field.clear();

                State::Text
            }

            (State::Open(start) | State::Field(start), '{') => {
                return Err(FormatError::UnmatchedOpen(start));
            }

            (State::Open(start) | State::Field(start), ch) => {
                field.push(ch);

                State::Field(start)
            }

            (State::Close(_), '}') => {
                output.push('}');

                State::Text
            }

            (State::Close(start), _) => {
                return Err(FormatError::UnmatchedClose(start));
            }
        };
    }

    match state {
        State::Text => Ok(output),
        State::Open(start) | State::Field(start) => Err(FormatError::UnmatchedOpen(start)),
        State::Close(start) => Err(FormatError::UnmatchedClose(start)),
    }
}

fn resolve(field: &str, args: &Args, numbering: &mut Numbering) -> Result<String, FormatError> {
    let (name, spec) = match field.split_once(':') {
        Some((name, spec)) => (name, Some(spec)),
        None => (field, None),
    };

    let value = if name.is_empty() {
        args.positional(numbering.next_auto()?)?
    } else if name.bytes().all(|b| b.is_ascii_digit()) {
        numbering.manual()?;

        let index = name
            .parse()
            .map_err(|_| FormatError::UnsupportedField(name.to_owned()))?;

        args.positional(index)?
    } else if name.contains(['.', '[', ']', '!']) {
        return Err(FormatError::UnsupportedField(name.to_owned()));
    } else {
        args.named_value(name)?
    };

    match spec {
        Some(spec) => Ok(spec.parse::<Spec>()?.apply(value)),
        None => Ok(value.to_owned()),
    }
}
