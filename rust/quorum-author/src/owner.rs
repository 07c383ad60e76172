//! Owners and the owner factory.

use std::fmt;

use quorum_encoding::RawValue;
use quorum_identity::{Address, Canonical, HEX_PREFIX, IdentityError, Name, PubKey};
use tracing::warn;

use crate::{AuthorError, AuthorType};

/// The identity of a party that may act on an account.
///
/// An owner is exactly one of the three identity schemes, and its variant
/// always agrees with the [`AuthorType`] it is tagged with on the wire.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Owner {
    /// An account name.
    Name(Name),
    /// A raw public key.
    PubKey(PubKey),
    /// A derived address.
    Address(Address),
}

impl Owner {
    /// The author type tag matching this owner's variant.
    #[must_use]
    pub fn author_type(&self) -> AuthorType {
        match self {
            Owner::Name(_) => AuthorType::AccountName,
            Owner::PubKey(_) => AuthorType::PubKey,
            Owner::Address(_) => AuthorType::Address,
        }
    }

    /// Encodes the concrete identity value alone, in its canonical binary form.
    ///
    /// # Errors
    ///
    /// Propagates the identity codec's error as
    /// [`AuthorError::MalformedPayload`].
    pub fn to_raw(&self) -> Result<RawValue, AuthorError> {
        let raw = match self {
            Owner::Name(name) => RawValue::encode_from(name)?,
            Owner::PubKey(key) => RawValue::encode_from(key)?,
            Owner::Address(address) => RawValue::encode_from(address)?,
        };
        Ok(raw)
    }

    /// Decodes an owner of the given type from its canonical binary form.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorError::MalformedPayload`] with the identity codec's
    /// error if the payload has the wrong length, trailing bytes or is
    /// otherwise malformed.
    pub fn from_raw(author_type: AuthorType, raw: &RawValue) -> Result<Self, AuthorError> {
        let owner = match author_type {
            AuthorType::AccountName => Owner::Name(raw.decode_into()?),
            AuthorType::PubKey => Owner::PubKey(raw.decode_into()?),
            AuthorType::Address => Owner::Address(raw.decode_into()?),
        };
        Ok(owner)
    }

    /// Parses an owner of the given type from its canonical string form.
    ///
    /// Names are taken verbatim; keys and addresses must be exact-length hex.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorError::MalformedPayload`] if the identity type rejects
    /// the text.
    pub fn parse(author_type: AuthorType, text: &str) -> Result<Self, AuthorError> {
        let owner = match author_type {
            AuthorType::AccountName => Owner::Name(Name::from_canonical_str(text)?),
            AuthorType::PubKey => Owner::PubKey(PubKey::from_canonical_str(text)?),
            AuthorType::Address => Owner::Address(Address::from_canonical_str(text)?),
        };
        Ok(owner)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Name(name) => name.fmt(f),
            Owner::PubKey(key) => key.fmt(f),
            Owner::Address(address) => address.fmt(f),
        }
    }
}

impl From<Name> for Owner {
    fn from(name: Name) -> Self {
        Owner::Name(name)
    }
}

impl From<PubKey> for Owner {
    fn from(key: PubKey) -> Self {
        Owner::PubKey(key)
    }
}

impl From<Address> for Owner {
    fn from(address: Address) -> Self {
        Owner::Address(address)
    }
}

/// Builds an owner from user-supplied text and an explicit author type.
///
/// - [`AuthorType::AccountName`]: the input is wrapped verbatim.
/// - [`AuthorType::PubKey`] / [`AuthorType::Address`]: the input is hex,
///   optionally prefixed with a literal `"0x"`. The decoded bytes are fitted
///   to the identity's length (see [`PubKey::from_bytes_padded`]), so short
///   input is left-padded with zeros.
///
/// # Errors
///
/// Returns [`AuthorError::MalformedPayload`] wrapping
/// [`IdentityError::InvalidHex`] when the text is not valid hex.
pub fn generate_owner(input: &str, author_type: AuthorType) -> Result<Owner, AuthorError> {
    let owner = match author_type {
        AuthorType::AccountName => Owner::Name(Name::from(input)),
        AuthorType::PubKey => {
            Owner::PubKey(PubKey::from_bytes_padded(&decode_hex(input, PubKey::KIND)?))
        }
        AuthorType::Address => {
            Owner::Address(Address::from_bytes_padded(&decode_hex(input, Address::KIND)?))
        }
    };
    Ok(owner)
}

/// Builds an owner like [`generate_owner`], but never fails.
///
/// Malformed hex input is decoded the way owners were historically
/// generated, so that data created that way can be regenerated identically:
///
/// - after a leading `"0x"`, only the text up to the next `"0x"` is read;
/// - decoding stops at the first pair of digits that is not valid hex, or at
///   a dangling odd digit, keeping the bytes decoded before it.
///
/// Input with no valid leading pair yields the all-zero key or address. New
/// callers should use [`generate_owner`].
#[must_use]
pub fn generate_owner_lenient(input: &str, author_type: AuthorType) -> Owner {
    match generate_owner(input, author_type) {
        Ok(owner) => owner,
        Err(error) => {
            let bytes = decode_hex_prefix(input);
            warn!(
                %author_type,
                %error,
                recovered = bytes.len(),
                "Keeping the valid hex prefix of malformed owner input"
            );
            match author_type {
                AuthorType::AccountName => Owner::Name(Name::from(input)),
                AuthorType::PubKey => Owner::PubKey(PubKey::from_bytes_padded(&bytes)),
                AuthorType::Address => Owner::Address(Address::from_bytes_padded(&bytes)),
            }
        }
    }
}

fn decode_hex(input: &str, kind: &'static str) -> Result<Vec<u8>, IdentityError> {
    let digits = input.strip_prefix(HEX_PREFIX).unwrap_or(input);
    hex::decode(digits).map_err(|source| IdentityError::InvalidHex { kind, source })
}

fn decode_hex_prefix(input: &str) -> Vec<u8> {
    let digits = match input.strip_prefix(HEX_PREFIX) {
        Some(rest) => rest.split(HEX_PREFIX).next().unwrap_or(rest),
        None => input,
    };

    digits
        .as_bytes()
        .chunks_exact(2)
        .map_while(|pair| {
            let mut byte = [0u8; 1];
            hex::decode_to_slice(pair, &mut byte).ok().map(|()| byte[0])
        })
        .collect()
}
