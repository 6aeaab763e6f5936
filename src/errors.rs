use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::str::Utf8Error;

#[derive(Debug)]
pub enum AlignError {
    /// The number of characters to align must be at least one
    InvalidAlignLength(usize),

    /// Traceback reached a cell without a valid back-pointer (row, column)
    CorruptTraceback { row: usize, col: usize },

    /// A sequence is not valid UTF-8 text (which input, 1 or 2)
    InvalidSequence { which: usize, source: Utf8Error },

    /// A requested sequence was not present in the input
    MissingSequence(String),

    /// Error variant when we couldn't read from a file
    FileReadError { source: io::Error },

    /// Other IO errors
    IOError(io::Error),
}

impl Error for AlignError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::InvalidSequence { ref source, .. } => Some(source),
            Self::FileReadError { ref source } => Some(source),
            Self::IOError(ref source) => Some(source),
            _ => None
        }
    }
}

impl From<io::Error> for AlignError {
    fn from(value: io::Error) -> Self {
        Self::IOError(value)
    }
}

impl Display for AlignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::InvalidAlignLength(length) =>
                write!(f, "Invalid align length ({length}), must be at least 1!"),
            Self::CorruptTraceback { row, col } =>
                write!(f, "Traceback reached an unreachable cell at row {row}, column {col}!"),
            Self::InvalidSequence { which, ref source } =>
                write!(f, "Sequence {which} is not valid UTF-8: {source}"),
            Self::MissingSequence(ref name) =>
                write!(f, "Sequence '{name}' not found in the input!"),
            Self::FileReadError { source: _ } =>
                write!(f, "Could not read from file!"),
            Self::IOError(ref err) =>
                err.fmt(f),
        }
    }
}
