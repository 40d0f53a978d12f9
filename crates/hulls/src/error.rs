use core::fmt;

/// Malformed flat coordinate input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatError {
    /// `[x0, y0, x1, y1, ...]` must have even length.
    OddLength { len: usize },
    /// Coordinate at flat position `index` is NaN or infinite.
    NonFinite { index: usize },
}

impl fmt::Display for FlatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddLength { len } => {
                write!(f, "odd coordinate count: {len} values do not form (x, y) pairs")
            }
            Self::NonFinite { index } => write!(f, "non-finite coordinate at position {index}"),
        }
    }
}

impl std::error::Error for FlatError {}
