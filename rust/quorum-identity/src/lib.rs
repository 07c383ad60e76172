//! Identity values that may own authority over an account.
//!
//! An owner is identified by one of three interchangeable schemes:
//!
//! - [`Name`]: a human-readable account name
//! - [`PubKey`]: a raw public key
//! - [`Address`]: an address derived from a public key
//!
//! Each type has exactly one canonical string form and one canonical binary
//! form, exposed uniformly through the [`Canonical`] trait. Binary forms use
//! the `quorum-encoding` byte string layout and reject payloads of the wrong
//! length or with trailing bytes.

mod error;
mod fixed;

pub mod address;
pub mod name;
pub mod pub_key;

pub use address::{ADDRESS_LENGTH, Address};
pub use error::IdentityError;
pub use fixed::HEX_PREFIX;
pub use name::Name;
pub use pub_key::{PUB_KEY_LENGTH, PubKey};

use std::{fmt::Display, str::FromStr};

use quorum_encoding::{Decode, Encode};

/// The canonical text and binary forms of an identity value.
///
/// All methods have default implementations in terms of the type's
/// [`Display`], [`FromStr`], [`Encode`] and [`Decode`] implementations, so
/// implementors only name their kind.
pub trait Canonical:
    Sized
    + Display
    + FromStr<Err = IdentityError>
    + Encode<Error = IdentityError>
    + Decode<Error = IdentityError>
{
    /// Human-readable kind, used in error messages.
    const KIND: &'static str;

    /// Renders the canonical string form.
    fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Parses the canonical string form.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] if the text is not a valid value of this
    /// kind.
    fn from_canonical_str(text: &str) -> Result<Self, IdentityError> {
        text.parse()
    }

    /// Encodes the canonical binary form.
    ///
    /// # Errors
    ///
    /// Only fails if the underlying writer does, which cannot happen for the
    /// in-memory buffer used here.
    fn to_canonical_bytes(&self) -> Result<Vec<u8>, IdentityError> {
        quorum_encoding::to_vec(self)
    }

    /// Decodes the canonical binary form, which must span all of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns an [`IdentityError`] on a wrong length, trailing bytes or a
    /// malformed encoding.
    fn from_canonical_bytes(bytes: &[u8]) -> Result<Self, IdentityError> {
        quorum_encoding::from_slice(bytes)
    }
}
