//! Shared helpers for fixed-length, hex-rendered identities.

use std::fmt;

use crate::IdentityError;

/// Prefix written in front of every hex-rendered identity.
pub const HEX_PREFIX: &str = "0x";

/// Copies `bytes` into an `N` byte array, aligned to the right.
///
/// Input longer than `N` keeps its last `N` bytes; shorter input is padded
/// with leading zeros. Empty input yields all zeros.
pub(crate) fn pad_left<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let bytes = if bytes.len() > N {
        &bytes[bytes.len() - N..]
    } else {
        bytes
    };

    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(bytes);
    out
}

/// Copies `bytes` into an `N` byte array, failing unless the length is exact.
pub(crate) fn exact<const N: usize>(
    kind: &'static str,
    bytes: &[u8],
) -> Result<[u8; N], IdentityError> {
    bytes.try_into().map_err(|_| IdentityError::InvalidLength {
        kind,
        expected: N,
        found: bytes.len(),
    })
}

/// Parses `0x`-prefixed (or bare) hex of exactly `N` bytes.
pub(crate) fn parse_hex<const N: usize>(
    kind: &'static str,
    text: &str,
) -> Result<[u8; N], IdentityError> {
    let digits = text
        .strip_prefix(HEX_PREFIX)
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    let bytes = hex::decode(digits).map_err(|source| IdentityError::InvalidHex { kind, source })?;
    exact(kind, &bytes)
}

/// Writes `bytes` as `0x` followed by lowercase hex.
pub(crate) fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_str(HEX_PREFIX)?;
    f.write_str(&hex::encode(bytes))
}
