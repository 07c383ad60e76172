//! Derived account addresses.

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

/// Length of an address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// An address derived from a public key.
///
/// Derivation happens elsewhere; this type only carries the resulting bytes.
/// The canonical string is `0x` followed by 40 lowercase hex digits and the
/// canonical bytes are a byte string of exactly [`ADDRESS_LENGTH`] bytes.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// Wraps an exact-length address.
    #[must_use]
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Builds an address from bytes of any length, keeping the last
    /// [`ADDRESS_LENGTH`] bytes or left-padding with zeros.
    #[must_use]
    pub fn from_bytes_padded(bytes: &[u8]) -> Self {
        Self(pad_left(bytes))
    }

    /// Get the raw address bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Returns `true` for the all-zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|byte| *byte == 0)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Address {
    type Error = IdentityError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(exact(Self::KIND, bytes)?))
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, &self.0)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Address")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl FromStr for Address {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(parse_hex(Self::KIND, s)?))
    }
}

impl Encode for Address {
    type Error = IdentityError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        Ok(write_bytes(writer, &self.0)?)
    }
}

impl Decode for Address {
    type Error = IdentityError;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        Self::try_from(read_bytes(reader)?.as_slice())
    }
}

impl Canonical for Address {
    const KIND: &'static str = "address";
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
