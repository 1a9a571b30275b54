use core::fmt;

/// The error type for the checked [`ZString`](crate::ZString) operations.
///
/// Only two conditions are ever signaled: an index past the end of the
/// contents, and a requested size the buffer cannot represent while keeping
/// room for its terminator byte. Everything else either succeeds, is a
/// documented no-op, or panics (indexing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index was beyond the end of the string.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the string at the time of the call.
        len: usize,
    },
    /// A resize or append asked for more than [`ZString::MAX_LENGTH`] bytes.
    ///
    /// [`ZString::MAX_LENGTH`]: crate::ZString::MAX_LENGTH
    TooLong {
        /// The requested number of content bytes.
        requested: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::OutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            Error::TooLong { requested } => {
                write!(f, "requested length {} exceeds the maximum", requested)
            }
        }
    }
}

impl std::error::Error for Error {}
