use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown color: {0:?}")]
    UnknownColor(String),

    #[error("invalid template: {0}")]
    Format(#[from] FormatError),
}

/// Failure while substituting arguments into a template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("single '{{' at position {0}")]
    UnmatchedOpen(usize),

    #[error("single '}}' at position {0}")]
    UnmatchedClose(usize),

    #[error("positional argument {0} out of range")]
    MissingPositional(usize),

    #[error("missing named argument {0:?}")]
    MissingNamed(String),

    #[error("cannot switch between automatic and manual field numbering")]
    MixedNumbering,

    #[error("unsupported field {0:?}")]
    UnsupportedField(String),

    #[error("invalid format spec {0:?}")]
    InvalidSpec(String),
}
