//! Weighted authors and their binary envelope.

use std::io::{Read, Write};

use quorum_encoding::{Decode, Encode, EncodingError, RawValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{AuthorError, AuthorJson, AuthorType, Owner};

/// An owner together with the weight its approval carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "AuthorJson", try_from = "AuthorJson")]
pub struct Author {
    /// Who the author is.
    pub owner: Owner,
    /// How much the author's approval counts towards a threshold.
    pub weight: u64,
}

impl Author {
    /// Creates an author from anything convertible to an [`Owner`].
    pub fn new(owner: impl Into<Owner>, weight: u64) -> Self {
        Self {
            owner: owner.into(),
            weight,
        }
    }

    /// Get the owner.
    #[must_use]
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Get the weight.
    #[must_use]
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// The type tag of the owner.
    #[must_use]
    pub fn author_type(&self) -> AuthorType {
        self.owner.author_type()
    }
}

/// The binary envelope an [`Author`] is stored as.
///
/// The owner travels as its own canonical encoding inside `data_raw`, so
/// this layer never interprets it. Decoding an envelope therefore succeeds
/// for any tag; the tag is only checked when converting back to an
/// [`Author`].
///
/// ```text
/// ┌─────┬────────────────────────┬──────────────┐
/// │ tag │ LEB128 len │ data_raw  │ weight (BE)  │
/// │ u8  │            │           │ u64          │
/// └─────┴────────────────────────┴──────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageAuthor {
    /// The numeric [`AuthorType`] tag.
    pub tag: u8,
    /// The owner's canonical binary form.
    pub data_raw: RawValue,
    /// The author's weight.
    pub weight: u64,
}

impl StorageAuthor {
    /// Interprets the tag.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorError::UnknownTypeTag`] for a tag outside the known
    /// author types.
    pub fn author_type(&self) -> Result<AuthorType, AuthorError> {
        AuthorType::try_from(self.tag)
    }
}

impl TryFrom<&Author> for StorageAuthor {
    type Error = AuthorError;

    fn try_from(author: &Author) -> Result<Self, Self::Error> {
        Ok(Self {
            tag: author.author_type().tag(),
            data_raw: author.owner.to_raw()?,
            weight: author.weight,
        })
    }
}

impl TryFrom<StorageAuthor> for Author {
    type Error = AuthorError;

    fn try_from(storage: StorageAuthor) -> Result<Self, Self::Error> {
        let author_type = storage.author_type().inspect_err(|error| {
            debug!(tag = storage.tag, %error, "Rejecting author envelope");
        })?;
        let owner = Owner::from_raw(author_type, &storage.data_raw).inspect_err(|error| {
            debug!(%author_type, %error, "Rejecting author payload");
        })?;

        Ok(Self {
            owner,
            weight: storage.weight,
        })
    }
}

impl Encode for StorageAuthor {
    type Error = EncodingError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        self.tag.encode(writer)?;
        self.data_raw.encode(writer)?;
        self.weight.encode(writer)
    }
}

impl Decode for StorageAuthor {
    type Error = EncodingError;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        Ok(Self {
            tag: u8::decode(reader)?,
            data_raw: RawValue::decode(reader)?,
            weight: u64::decode(reader)?,
        })
    }
}

impl Encode for Author {
    type Error = AuthorError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        let storage = StorageAuthor::try_from(self)?;
        trace!(
            tag = storage.tag,
            payload = storage.data_raw.as_bytes().len(),
            weight = storage.weight,
            "Encoding author"
        );
        Ok(storage.encode(writer)?)
    }
}

impl Decode for Author {
    type Error = AuthorError;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        let storage = StorageAuthor::decode(reader)?;
        trace!(
            tag = storage.tag,
            payload = storage.data_raw.as_bytes().len(),
            weight = storage.weight,
            "Decoded author envelope"
        );
        Self::try_from(storage)
    }
}
