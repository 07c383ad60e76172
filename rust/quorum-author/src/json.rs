//! The JSON shape of an [`Author`].
//!
//! Authors are written as `{"type": <tag>, "owner": <string>, "weight": <n>}`
//! where `owner` is always the canonical string form of the owner, whatever
//! its kind. These field names are an external contract.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Author, AuthorError, AuthorType, Owner};

/// The wire form of an [`Author`] in JSON documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorJson {
    /// The numeric [`AuthorType`] tag.
    #[serde(rename = "type")]
    pub author_type: u8,
    /// The owner's canonical string form.
    pub owner: String,
    /// The author's weight.
    pub weight: u64,
}

impl From<Author> for AuthorJson {
    fn from(author: Author) -> Self {
        Self {
            author_type: author.author_type().tag(),
            owner: author.owner.to_string(),
            weight: author.weight,
        }
    }
}

impl TryFrom<AuthorJson> for Author {
    type Error = AuthorError;

    fn try_from(json: AuthorJson) -> Result<Self, Self::Error> {
        let owner = AuthorType::try_from(json.author_type)
            .and_then(|author_type| Owner::parse(author_type, &json.owner))
            .inspect_err(|error| {
                debug!(tag = json.author_type, %error, "Rejecting author document");
            })?;

        Ok(Self {
            owner,
            weight: json.weight,
        })
    }
}

#[cfg(feature = "json")]
mod document {
    use crate::{AccountAuthorAction, Author, AuthorError, AuthorJson};

    impl Author {
        /// Renders the author as a JSON document.
        ///
        /// # Errors
        ///
        /// Returns [`AuthorError::Json`] if serialization fails.
        pub fn to_json(&self) -> Result<String, AuthorError> {
            Ok(serde_json::to_string(&AuthorJson::from(self.clone()))?)
        }

        /// Parses an author from a JSON document.
        ///
        /// Going through [`AuthorJson`] first keeps a bad tag or owner
        /// string distinguishable from a malformed document.
        ///
        /// # Errors
        ///
        /// Returns [`AuthorError::Json`] for a malformed document,
        /// [`AuthorError::UnknownTypeTag`] for an unknown `type` and
        /// [`AuthorError::MalformedPayload`] for an owner string the
        /// identity type rejects.
        pub fn from_json(json: &str) -> Result<Self, AuthorError> {
            Author::try_from(serde_json::from_str::<AuthorJson>(json)?)
        }
    }

    impl AccountAuthorAction {
        /// Renders the action list as a JSON document.
        ///
        /// # Errors
        ///
        /// Returns [`AuthorError::Json`] if serialization fails.
        pub fn to_json(&self) -> Result<String, AuthorError> {
            Ok(serde_json::to_string(self)?)
        }

        /// Parses an action list from a JSON document.
        ///
        /// # Errors
        ///
        /// Returns [`AuthorError::Json`] if the document is malformed or any
        /// nested author is rejected.
        pub fn from_json(json: &str) -> Result<Self, AuthorError> {
            Ok(serde_json::from_str(json)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quorum_identity::{Address, IdentityError, Name, PubKey};
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn it_writes_the_owner_as_its_canonical_string() -> TestResult {
        let author = Author::new(Address::from_bytes_padded(&[0xff]), 3);

        assert_eq!(
            serde_json::to_value(&author)?,
            json!({
                "type": 2,
                "owner": "0x00000000000000000000000000000000000000ff",
                "weight": 3
            })
        );
        Ok(())
    }

    #[test]
    fn it_reads_each_owner_kind() -> TestResult {
        let key = PubKey::from_bytes_padded(&[1, 2, 3]);
        let document = json!({ "type": 1, "owner": key.to_string(), "weight": 8 });

        assert_eq!(
            serde_json::from_value::<Author>(document)?,
            Author::new(key, 8)
        );

        let document = json!({ "type": 0, "owner": "0xnot-a-key", "weight": 0 });
        assert_eq!(
            serde_json::from_value::<Author>(document)?,
            Author::new(Name::new("0xnot-a-key"), 0)
        );
        Ok(())
    }

    #[test]
    fn it_rejects_an_unknown_type_tag() {
        let document = json!({ "type": 3, "owner": "alice", "weight": 1 });
        let author = AuthorJson {
            author_type: 3,
            owner: "alice".into(),
            weight: 1,
        };

        assert!(serde_json::from_value::<Author>(document).is_err());
        assert!(matches!(
            Author::try_from(author),
            Err(AuthorError::UnknownTypeTag(3))
        ));
    }

    #[test]
    fn it_rejects_owner_strings_of_the_wrong_length() {
        let author = AuthorJson {
            author_type: AuthorType::PubKey.tag(),
            owner: "0xaabb".into(),
            weight: 1,
        };

        assert!(matches!(
            Author::try_from(author),
            Err(AuthorError::MalformedPayload(IdentityError::InvalidLength {
                kind: "public key",
                ..
            }))
        ));
    }

    #[cfg(feature = "json")]
    #[test]
    fn it_keeps_error_kinds_through_the_document_helpers() -> TestResult {
        let author = Author::new(Name::new("ops"), 2);
        assert_eq!(Author::from_json(&author.to_json()?)?, author);

        assert!(matches!(
            Author::from_json(r#"{"type":7,"owner":"ops","weight":2}"#),
            Err(AuthorError::UnknownTypeTag(7))
        ));
        assert!(matches!(
            Author::from_json(r#"{"type":0,"owner":"ops"}"#),
            Err(AuthorError::Json(_))
        ));
        Ok(())
    }
}
