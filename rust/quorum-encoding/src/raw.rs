use std::io::{Read, Write};

use crate::{Decode, Encode, EncodingError, from_slice, read_bytes, to_vec, write_bytes};

/// Bytes that already hold an encoded value, carried opaquely.
///
/// A [`RawValue`] is written as a byte string, so the nested encoding is
/// preserved exactly and can be decoded later by whoever knows its type.
/// This is how a record embeds a value whose type is only known from a tag
/// stored next to it.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct RawValue(Vec<u8>);

impl RawValue {
    /// Encodes `value` and wraps the result.
    pub fn encode_from<T>(value: &T) -> Result<Self, T::Error>
    where
        T: Encode + ?Sized,
    {
        Ok(Self(to_vec(value)?))
    }

    /// Decodes the wrapped bytes as a `T`, which must consume all of them.
    pub fn decode_into<T>(&self) -> Result<T, T::Error>
    where
        T: Decode,
    {
        from_slice(&self.0)
    }

    /// The encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Unwraps the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for RawValue {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RawValue(")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

impl Encode for RawValue {
    type Error = EncodingError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        write_bytes(writer, &self.0)
    }
}

impl Decode for RawValue {
    type Error = EncodingError;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        Ok(Self(read_bytes(reader)?))
    }
}
