//! Author type tags and their display names.

use std::{collections::BTreeMap, fmt, str::FromStr, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::AuthorError;

/// The identity scheme an owner is expressed in.
///
/// The numeric tags are part of the binary and JSON formats and must never
/// be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum AuthorType {
    /// A human-readable account name
    AccountName = 0,
    /// A raw public key
    PubKey = 1,
    /// An address derived from a public key
    Address = 2,
}

/// Display names for every [`AuthorType`], for diagnostics and UIs.
pub static AUTHOR_TYPE_NAMES: LazyLock<BTreeMap<AuthorType, &'static str>> = LazyLock::new(|| {
    AuthorType::ALL
        .into_iter()
        .map(|author_type| (author_type, author_type.name()))
        .collect()
});

impl AuthorType {
    /// Every author type, in tag order.
    pub const ALL: [AuthorType; 3] = [
        AuthorType::AccountName,
        AuthorType::PubKey,
        AuthorType::Address,
    ];

    /// The numeric wire tag.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// The display name (`"account"`, `"pubKey"` or `"address"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            AuthorType::AccountName => "account",
            AuthorType::PubKey => "pubKey",
            AuthorType::Address => "address",
        }
    }
}

impl From<AuthorType> for u8 {
    fn from(author_type: AuthorType) -> Self {
        author_type.tag()
    }
}

impl TryFrom<u8> for AuthorType {
    type Error = AuthorError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(AuthorType::AccountName),
            1 => Ok(AuthorType::PubKey),
            2 => Ok(AuthorType::Address),
            unknown => Err(AuthorError::UnknownTypeTag(unknown)),
        }
    }
}

impl fmt::Display for AuthorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AuthorType {
    type Err = AuthorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AuthorType::ALL
            .into_iter()
            .find(|author_type| author_type.name() == s)
            .ok_or_else(|| AuthorError::UnknownTypeName(s.to_owned()))
    }
}
