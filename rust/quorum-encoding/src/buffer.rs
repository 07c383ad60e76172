//! Buffer-level entry points and byte string primitives.
//!
//! Values are written field by field with no framing of their own; the only
//! self-describing parts of the format are the LEB128 lengths in front of
//! byte strings and the LEB128 counts in front of sequences. Decoding from a
//! slice with [`from_slice`] additionally requires that the value accounts
//! for every byte of input.

use std::io::{Cursor, Read, Write};

use crate::{Decode, Encode, EncodingError};

/// Writes `value` to `buffer`.
pub fn encode<T, Buffer>(value: &T, mut buffer: Buffer) -> Result<(), T::Error>
where
    T: Encode + ?Sized,
    Buffer: Write,
{
    value.encode(&mut buffer)
}

/// Reads a `T` from `buffer`, leaving any bytes that follow it unread.
pub fn decode<T, Buffer>(mut buffer: Buffer) -> Result<T, T::Error>
where
    T: Decode,
    Buffer: Read,
{
    T::decode(&mut buffer)
}

/// Encodes `value` into a freshly allocated buffer.
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>, T::Error>
where
    T: Encode + ?Sized,
{
    let mut buffer = Vec::new();
    value.encode(&mut buffer)?;
    Ok(buffer)
}

/// Decodes a `T` that must span the whole of `bytes`.
///
/// Fails with [`EncodingError::TrailingBytes`] when input remains after the
/// value has been read.
pub fn from_slice<T>(bytes: &[u8]) -> Result<T, T::Error>
where
    T: Decode,
{
    let mut cursor = Cursor::new(bytes);
    let value = T::decode(&mut cursor)?;

    let remaining = bytes.len() - cursor.position() as usize;
    if remaining > 0 {
        return Err(EncodingError::TrailingBytes(remaining).into());
    }

    Ok(value)
}

/// Writes a byte string: `[ length (LEB128) ][ bytes ]`.
pub fn write_bytes<W>(writer: &mut W, bytes: &[u8]) -> Result<(), EncodingError>
where
    W: Write,
{
    write_length(writer, bytes.len())?;
    writer.write_all(bytes)?;
    Ok(())
}

/// Reads a byte string written by [`write_bytes`].
///
/// The declared length is not trusted for allocation; a length larger than
/// the remaining input fails with [`std::io::ErrorKind::UnexpectedEof`].
pub fn read_bytes<R>(reader: &mut R) -> Result<Vec<u8>, EncodingError>
where
    R: Read,
{
    let length = read_length(reader)?;
    let mut bytes = Vec::new();
    reader
        .by_ref()
        .take(length as u64)
        .read_to_end(&mut bytes)?;

    if bytes.len() != length {
        return Err(std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into());
    }

    Ok(bytes)
}

/// Writes a length or element count as an unsigned LEB128 integer.
pub fn write_length<W>(writer: &mut W, length: usize) -> Result<(), EncodingError>
where
    W: Write,
{
    leb128::write::unsigned(writer, length as u64)?;
    Ok(())
}

/// Reads a length or element count written by [`write_length`].
pub fn read_length<R>(reader: &mut R) -> Result<usize, EncodingError>
where
    R: Read,
{
    let length = leb128::read::unsigned(reader)?;
    usize::try_from(length).map_err(|_| EncodingError::LengthOverflow(length))
}
