//! Human-readable account names.

use std::{
    fmt,
    io::{Read, Write},
    str::FromStr,
};

use quorum_encoding::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::{Canonical, IdentityError};

/// An account name.
///
/// Names are carried verbatim: the canonical string is exactly the text the
/// name was created from, and the canonical bytes are that text as a UTF-8
/// byte string. Naming rules are enforced by the account system that issues
/// names, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Wraps `name` without transformation.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the raw name string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwraps the name string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl Encode for Name {
    type Error = IdentityError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        Ok(self.0.encode(writer)?)
    }
}

impl Decode for Name {
    type Error = IdentityError;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        Ok(Self(String::decode(reader)?))
    }
}

impl Canonical for Name {
    const KIND: &'static str = "account name";
}
