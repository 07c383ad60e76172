use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors that can occur during encoding and decoding operations.
///
/// Every failure is surfaced to the caller; nothing in this crate attempts to
/// repair a malformed buffer.
#[derive(Error, Debug)]
pub enum EncodingError {
    /// Failed to decode a LEB128-encoded integer from the buffer.
    ///
    /// LEB128 integers are used for byte string lengths and sequence counts.
    /// This error occurs when the buffer holds an incomplete or overlong
    /// sequence.
    #[error("Failed to decode an integer: {0}")]
    IntegerDecode(leb128::read::Error),

    /// Failed to read from or write to the underlying byte stream.
    ///
    /// Truncated input surfaces here as [`std::io::ErrorKind::UnexpectedEof`].
    #[error("Failed to decode a buffer: {0}")]
    BufferDecode(std::io::Error),

    /// A byte string did not have the length its target type requires.
    #[error("Expected {expected} bytes, found {found}")]
    LengthMismatch {
        /// Length required by the target type
        expected: usize,
        /// Length read from the buffer
        found: usize,
    },

    /// A string field did not contain valid UTF-8.
    #[error("Invalid UTF-8 in string field: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),

    /// Bytes were left over after the value was fully decoded.
    #[error("{0} trailing bytes after decoded value")]
    TrailingBytes(usize),

    /// A decoded length or count does not fit in memory on this platform.
    #[error("Length {0} does not fit in usize")]
    LengthOverflow(u64),
}

impl From<leb128::read::Error> for EncodingError {
    fn from(value: leb128::read::Error) -> Self {
        EncodingError::IntegerDecode(value)
    }
}

impl From<std::io::Error> for EncodingError {
    fn from(value: std::io::Error) -> Self {
        EncodingError::BufferDecode(value)
    }
}
