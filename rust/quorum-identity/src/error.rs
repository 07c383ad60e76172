//! Error types for identity parsing and decoding.

use quorum_encoding::EncodingError;
use thiserror::Error;

/// Errors produced when an identity value rejects its input.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// The text form was not valid hexadecimal.
    #[error("invalid {kind} hex: {source}")]
    InvalidHex {
        /// The identity kind being parsed (e.g. `"public key"`)
        kind: &'static str,
        /// The underlying hex decoding failure
        #[source]
        source: hex::FromHexError,
    },

    /// The decoded bytes do not have the fixed length of the identity kind.
    #[error("invalid {kind} length: expected {expected} bytes, got {found}")]
    InvalidLength {
        /// The identity kind being decoded
        kind: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Length actually supplied
        found: usize,
    },

    /// The binary form could not be read.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
