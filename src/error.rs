use std::fmt::{Debug, Display};

#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    /// An element index is outside the universe. Holds the offending index
    /// and the number of elements.
    IndexOutOfBounds(usize, usize),
    /// The size mapping passed to a size based merge does not cover the
    /// universe. Holds the actual and the expected lengths.
    SizeMismatch(usize, usize),
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            IndexOutOfBounds(index, len) => f
                .debug_tuple("IndexOutOfBounds")
                .field(index)
                .field(len)
                .finish(),
            SizeMismatch(actual, expected) => f
                .debug_tuple("SizeMismatch")
                .field(actual)
                .field(expected)
                .finish(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            IndexOutOfBounds(index, len) => {
                write!(f, "element {index} is out of bounds for {len} elements")
            }
            SizeMismatch(actual, expected) => {
                write!(f, "size mapping has {actual} entries, expected {expected}")
            }
        }
    }
}

impl std::error::Error for Error {}
