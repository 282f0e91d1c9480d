use std::fmt;

use crate::internal::consts;

/// The reason a tree could not be built from the given elements.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// No elements were given, so the tree would have no leaves.
    Empty,
    /// More than [`MAX_LEN`](crate::MAX_LEN) elements were given.
    TooLong { len: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Empty => f.write_str("cannot build a segment tree from an empty sequence"),
            BuildError::TooLong { len } => write!(
                f,
                "cannot build a segment tree of {len} elements (at most {} are supported)",
                consts::MAX_LEN
            ),
        }
    }
}

impl std::error::Error for BuildError {}
