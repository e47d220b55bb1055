use std::fmt::Display;

pub type Result<T> = std::result::Result<T, Error>;

/// Library level errors.
/// All are local and synchronous, library never recovers from them on it's own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Positional access outside of `[0, size)`.
    IndexOutOfRange { index: usize, size: usize },
    /// Window `[index, index + count)` isn't inside of `[0, size]`.
    RangeOutOfBounds {
        index: usize,
        count: usize,
        size: usize,
    },
    /// Requested capacity can't be allocated for the element type.
    InvalidCapacity { requested: usize, max: usize },
    /// Sequence length doesn't match the arity of the target tuple.
    ArityMismatch { expected: usize, found: usize },
    /// Value was forced out of an empty container.
    AbsentValue,
    /// Erased element isn't of requested type.
    TypeMismatch {
        index: usize,
        expected: &'static str,
    },
}

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IndexOutOfRange,
    InvalidArgument,
    AbsentValue,
    TypeMismatch,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Error::RangeOutOfBounds { .. } => ErrorKind::IndexOutOfRange,
            Error::InvalidCapacity { .. } => ErrorKind::InvalidArgument,
            Error::ArityMismatch { .. } => ErrorKind::InvalidArgument,
            Error::AbsentValue => ErrorKind::AbsentValue,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    pub fn is_index_out_of_range(&self) -> bool {
        self.kind() == ErrorKind::IndexOutOfRange
    }

    /// Ok if index is in `[0, size)`.
    pub fn check_index(index: usize, size: usize) -> Result<()> {
        if index < size {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, size })
        }
    }

    /// Ok if window `[index, index + count)` is in `[0, size]`.
    pub fn check_range(index: usize, count: usize, size: usize) -> Result<()> {
        if count <= size && index <= size - count {
            Ok(())
        } else {
            Err(Error::RangeOutOfBounds { index, count, size })
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, size } => {
                write!(f, "Index out of range: {} for size {}.", index, size)
            }
            Self::RangeOutOfBounds { index, count, size } => write!(
                f,
                "Range out of bounds, index: {}, count: {}, size: {}.",
                index, count, size
            ),
            Self::InvalidCapacity { requested, max } => write!(
                f,
                "Illegal capacity {}, can't be larger than {}.",
                requested, max
            ),
            Self::ArityMismatch { expected, found } => write!(
                f,
                "Expected {} elements for tuple but found {}.",
                expected, found
            ),
            Self::AbsentValue => write!(f, "No value present."),
            Self::TypeMismatch { index, expected } => {
                write!(f, "Element at {} isn't of type {}.", index, expected)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_range() {
        assert!(Error::check_range(0, 0, 0).is_ok());
        assert!(Error::check_range(2, 2, 4).is_ok());
        assert!(Error::check_range(4, 0, 4).is_ok());
        assert_eq!(
            Error::check_range(3, 2, 4),
            Err(Error::RangeOutOfBounds {
                index: 3,
                count: 2,
                size: 4
            })
        );
        assert!(Error::check_range(0, 5, 4).is_err());
    }

    #[test]
    fn kinds() {
        assert!(Error::IndexOutOfRange { index: 1, size: 0 }.is_index_out_of_range());
        assert!(Error::RangeOutOfBounds {
            index: 1,
            count: 1,
            size: 0
        }
        .is_index_out_of_range());
        assert_eq!(
            Error::InvalidCapacity {
                requested: 1,
                max: 0
            }
            .kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(Error::AbsentValue.kind(), ErrorKind::AbsentValue);
    }

    #[test]
    fn display() {
        assert_eq!(
            Error::IndexOutOfRange { index: 4, size: 4 }.to_string(),
            "Index out of range: 4 for size 4."
        );
    }
}
