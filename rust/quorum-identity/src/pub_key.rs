//! Raw public keys.

use std::{
    fmt,
    io::{Read, Write},
    str::FromStr,
};

use quorum_encoding::{Decode, Encode, read_bytes, write_bytes};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    Canonical, IdentityError,
    fixed::{exact, pad_left, parse_hex, write_hex},
};

/// Length of a public key in bytes (an uncompressed secp256k1 point).
pub const PUB_KEY_LENGTH: usize = 65;

/// A raw public key.
///
/// The canonical string is `0x` followed by the 130 lowercase hex digits of
/// the key; the canonical bytes are a byte string of exactly
/// [`PUB_KEY_LENGTH`] bytes. Curve validity is not checked here.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PubKey([u8; PUB_KEY_LENGTH]);

impl PubKey {
    /// Wraps an exact-length key.
    #[must_use]
    pub const fn new(bytes: [u8; PUB_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Builds a key from bytes of any length.
    ///
    /// Longer input keeps its last [`PUB_KEY_LENGTH`] bytes and shorter input
    /// is left-padded with zeros, so this never fails. Use
    /// [`PubKey::try_from`] when the length must be exact.
    #[must_use]
    pub fn from_bytes_padded(bytes: &[u8]) -> Self {
        Self(pad_left(bytes))
    }

    /// Get the raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; PUB_KEY_LENGTH] {
        &self.0
    }

    /// Returns `true` if every byte of the key is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|byte| *byte == 0)
    }
}

impl Default for PubKey {
    fn default() -> Self {
        Self([0; PUB_KEY_LENGTH])
    }
}

impl From<[u8; PUB_KEY_LENGTH]> for PubKey {
    fn from(bytes: [u8; PUB_KEY_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for PubKey {
    type Error = IdentityError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(exact(Self::KIND, bytes)?))
    }
}

impl AsRef<[u8]> for PubKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

impl fmt::Debug for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PubKey")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl FromStr for PubKey {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(parse_hex(Self::KIND, s)?))
    }
}

impl Encode for PubKey {
    type Error = IdentityError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        Ok(write_bytes(writer, &self.0)?)
    }
}

impl Decode for PubKey {
    type Error = IdentityError;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        Self::try_from(read_bytes(reader)?.as_slice())
    }
}

impl Canonical for PubKey {
    const KIND: &'static str = "public key";
}

impl Serialize for PubKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PubKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
