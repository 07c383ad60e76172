use std::io::{Read, Write};

use crate::{EncodingError, read_bytes, read_length, write_bytes, write_length};

/// Upper bound on elements reserved up front when decoding a sequence.
///
/// Counts are read from untrusted input, so decoding grows the vector as
/// elements actually arrive instead of trusting the declared count.
const MAX_PREALLOCATED_ELEMENTS: usize = 64;

/// Trait for values that can be written as an ordered binary record.
///
/// Fields are written one after another in declaration order. The layout of
/// each primitive is fixed by this crate (see the crate documentation), so a
/// type's encoding is fully determined by the order in which it writes its
/// fields.
///
/// # Example
///
/// ```rust
/// use quorum_encoding::{Encode, Decode, EncodingError, to_vec, from_slice};
/// use std::io::{Read, Write};
///
/// #[derive(Debug, PartialEq)]
/// struct Entry {
///     label: String,
///     weight: u64,
/// }
///
/// impl Encode for Entry {
///     type Error = EncodingError;
///
///     fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
///         self.label.encode(writer)?;
///         self.weight.encode(writer)
///     }
/// }
///
/// impl Decode for Entry {
///     type Error = EncodingError;
///
///     fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
///         Ok(Entry {
///             label: String::decode(reader)?,
///             weight: u64::decode(reader)?,
///         })
///     }
/// }
///
/// let entry = Entry { label: "ops".into(), weight: 3 };
/// let bytes = to_vec(&entry).unwrap();
/// assert_eq!(from_slice::<Entry>(&bytes).unwrap(), entry);
/// ```
pub trait Encode {
    /// Error produced when encoding fails.
    ///
    /// Types that only ever fail on stream errors use [`EncodingError`];
    /// types layered on top of this crate may widen it with their own
    /// failure modes.
    type Error: From<EncodingError>;

    /// Writes this value to `writer`.
    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error>;
}

/// Trait for values that can be read back from an ordered binary record.
///
/// # Contract
///
/// Implementations must read exactly the bytes that the matching [`Encode`]
/// implementation wrote, in the same order, so that for any value `x`:
///
/// ```text
/// let bytes = to_vec(&x)?;
/// assert_eq!(from_slice::<T>(&bytes)?, x);
/// ```
pub trait Decode: Sized {
    /// Error produced when decoding fails.
    type Error: From<EncodingError>;

    /// Reads a value of this type from `reader`.
    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error>;
}

impl Encode for u8 {
    type Error = EncodingError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        writer.write_all(&[*self])?;
        Ok(())
    }
}

impl Decode for u8 {
    type Error = EncodingError;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        let mut byte = [0u8; 1];
        reader.read_exact(&mut byte)?;
        Ok(byte[0])
    }
}

impl Encode for u64 {
    type Error = EncodingError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        writer.write_all(&self.to_be_bytes())?;
        Ok(())
    }
}

impl Decode for u64 {
    type Error = EncodingError;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        let mut bytes = [0u8; 8];
        reader.read_exact(&mut bytes)?;
        Ok(u64::from_be_bytes(bytes))
    }
}

impl Encode for str {
    type Error = EncodingError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        write_bytes(writer, self.as_bytes())
    }
}

impl Encode for String {
    type Error = EncodingError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        self.as_str().encode(writer)
    }
}

impl Decode for String {
    type Error = EncodingError;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        Ok(String::from_utf8(read_bytes(reader)?)?)
    }
}

impl<const N: usize> Encode for [u8; N] {
    type Error = EncodingError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        write_bytes(writer, self)
    }
}

impl<const N: usize> Decode for [u8; N] {
    type Error = EncodingError;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        let bytes = read_bytes(reader)?;
        let found = bytes.len();
        bytes
            .try_into()
            .map_err(|_| EncodingError::LengthMismatch { expected: N, found })
    }
}

impl<T> Encode for [T]
where
    T: Encode,
{
    type Error = T::Error;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        write_length(writer, self.len())?;
        for element in self {
            element.encode(writer)?;
        }
        Ok(())
    }
}

impl<T> Encode for Vec<T>
where
    T: Encode,
{
    type Error = T::Error;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        self.as_slice().encode(writer)
    }
}

impl<T> Decode for Vec<T>
where
    T: Decode,
{
    type Error = T::Error;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        let count = read_length(reader)?;
        let mut elements = Vec::with_capacity(count.min(MAX_PREALLOCATED_ELEMENTS));

        for _ in 0..count {
            elements.push(T::decode(reader)?);
        }

        Ok(elements)
    }
}

impl<T> Encode for &T
where
    T: Encode + ?Sized,
{
    type Error = T::Error;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        (**self).encode(writer)
    }
}
