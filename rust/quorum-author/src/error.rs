//! Error types for author encoding and decoding.

use quorum_encoding::EncodingError;
use quorum_identity::IdentityError;
use thiserror::Error;

/// Errors that can occur while building, encoding or decoding authors.
#[derive(Debug, Error)]
pub enum AuthorError {
    /// A decoded author type tag is not one of the known tags.
    #[error("unknown author type tag: {0}")]
    UnknownTypeTag(u8),

    /// An author type name is not one of the known names.
    #[error("unknown author type name: {0:?}")]
    UnknownTypeName(String),

    /// A decoded author action tag is not one of the known tags.
    #[error("unknown author action type: {0}")]
    UnknownActionType(u8),

    /// The identity codec rejected the owner payload.
    ///
    /// The identity error is carried unchanged.
    #[error("malformed owner payload: {0}")]
    MalformedPayload(#[from] IdentityError),

    /// The binary envelope could not be read or written.
    #[error("author stream failure: {0}")]
    Stream(#[from] EncodingError),

    /// The JSON document could not be read or written.
    #[cfg(feature = "json")]
    #[error("author JSON failure: {0}")]
    Json(#[from] serde_json::Error),
}
