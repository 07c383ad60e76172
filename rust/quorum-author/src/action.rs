//! Changes to an account's author list.

use std::{
    fmt,
    io::{Read, Write},
};

use quorum_encoding::{Decode, Encode};
use serde::{
    Deserialize, Deserializer, Serialize,
    de::{MapAccess, Visitor, value::MapAccessDeserializer},
};
use tracing::{debug, trace};

use crate::{Author, AuthorError};

/// What an [`AuthorAction`] does to the author it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum AuthorActionType {
    /// Add a new author
    Add = 0,
    /// Change the weight of an existing author
    Update = 1,
    /// Remove an author
    Delete = 2,
}

impl AuthorActionType {
    /// The numeric wire tag.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

impl From<AuthorActionType> for u8 {
    fn from(action_type: AuthorActionType) -> Self {
        action_type.tag()
    }
}

impl TryFrom<u8> for AuthorActionType {
    type Error = AuthorError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(AuthorActionType::Add),
            1 => Ok(AuthorActionType::Update),
            2 => Ok(AuthorActionType::Delete),
            unknown => Err(AuthorError::UnknownActionType(unknown)),
        }
    }
}

impl Encode for AuthorActionType {
    type Error = AuthorError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        Ok(self.tag().encode(writer)?)
    }
}

impl Decode for AuthorActionType {
    type Error = AuthorError;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        let tag = u8::decode(reader)?;
        Self::try_from(tag).inspect_err(|error| {
            debug!(tag, %error, "Rejecting author action");
        })
    }
}

/// A single change to an account's author list.
///
/// Binary layout: the action tag byte followed by the author envelope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorAction {
    /// What to do with `author`.
    #[serde(rename = "ActionType")]
    pub action_type: AuthorActionType,
    /// The author being added, updated or removed.
    #[serde(rename = "Author")]
    pub author: Author,
}

impl AuthorAction {
    /// Pairs an action type with the author it applies to.
    #[must_use]
    pub fn new(action_type: AuthorActionType, author: Author) -> Self {
        Self {
            action_type,
            author,
        }
    }
}

impl Encode for AuthorAction {
    type Error = AuthorError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        self.action_type.encode(writer)?;
        self.author.encode(writer)
    }
}

impl Decode for AuthorAction {
    type Error = AuthorError;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        Ok(Self {
            action_type: AuthorActionType::decode(reader)?,
            author: Author::decode(reader)?,
        })
    }
}

/// A batch of author changes together with the account's new thresholds.
///
/// The actions are applied in order by whoever consumes the batch, so their
/// order is preserved exactly by both codecs. Zero thresholds and an empty
/// action list are valid; in JSON they are left out on output and assumed
/// when absent on input. Only a JSON object is accepted as a batch.
///
/// Binary layout:
///
/// ```text
/// ┌──────────────┬──────────────────────────┬───────────────────────────┐
/// │ threshold    │ update_author_threshold  │ LEB128 count │ actions... │
/// │ u64 (BE)     │ u64 (BE)                 │              │            │
/// └──────────────┴──────────────────────────┴───────────────────────────┘
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAuthorAction {
    /// Total author weight required to act on the account.
    #[serde(skip_serializing_if = "is_zero")]
    pub threshold: u64,
    /// Total author weight required to change the author list itself.
    #[serde(skip_serializing_if = "is_zero")]
    pub update_author_threshold: u64,
    /// The changes, in application order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub author_actions: Vec<AuthorAction>,
}

fn is_zero(value: &u64) -> bool {
    *value == 0
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountAuthorActionFields {
    #[serde(default)]
    threshold: u64,
    #[serde(default)]
    update_author_threshold: u64,
    #[serde(default)]
    author_actions: Vec<AuthorAction>,
}

struct AccountAuthorActionVisitor;

impl<'de> Visitor<'de> for AccountAuthorActionVisitor {
    type Value = AccountAuthorAction;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an account author action object")
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let fields = AccountAuthorActionFields::deserialize(MapAccessDeserializer::new(map))?;
        Ok(AccountAuthorAction {
            threshold: fields.threshold,
            update_author_threshold: fields.update_author_threshold,
            author_actions: fields.author_actions,
        })
    }
}

impl<'de> Deserialize<'de> for AccountAuthorAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AccountAuthorActionVisitor)
    }
}

impl AccountAuthorAction {
    /// Starts an empty batch with the given thresholds.
    #[must_use]
    pub fn new(threshold: u64, update_author_threshold: u64) -> Self {
        Self {
            threshold,
            update_author_threshold,
            author_actions: Vec::new(),
        }
    }

    /// Appends `action`.
    #[must_use]
    pub fn push(mut self, action: AuthorAction) -> Self {
        self.author_actions.push(action);
        self
    }

    /// Appends an [`AuthorActionType::Add`] of `author`.
    #[must_use]
    pub fn add(self, author: Author) -> Self {
        self.push(AuthorAction::new(AuthorActionType::Add, author))
    }

    /// Appends an [`AuthorActionType::Update`] of `author`.
    #[must_use]
    pub fn update(self, author: Author) -> Self {
        self.push(AuthorAction::new(AuthorActionType::Update, author))
    }

    /// Appends an [`AuthorActionType::Delete`] of `author`.
    #[must_use]
    pub fn delete(self, author: Author) -> Self {
        self.push(AuthorAction::new(AuthorActionType::Delete, author))
    }
}

impl Encode for AccountAuthorAction {
    type Error = AuthorError;

    fn encode<W: Write>(&self, writer: &mut W) -> Result<(), Self::Error> {
        trace!(
            threshold = self.threshold,
            update_author_threshold = self.update_author_threshold,
            actions = self.author_actions.len(),
            "Encoding account author action"
        );
        self.threshold.encode(writer)?;
        self.update_author_threshold.encode(writer)?;
        self.author_actions.encode(writer)
    }
}

impl Decode for AccountAuthorAction {
    type Error = AuthorError;

    fn decode<R: Read>(reader: &mut R) -> Result<Self, Self::Error> {
        let threshold = u64::decode(reader)?;
        let update_author_threshold = u64::decode(reader)?;
        let author_actions = Vec::<AuthorAction>::decode(reader)?;

        trace!(
            threshold,
            update_author_threshold,
            actions = author_actions.len(),
            "Decoded account author action"
        );

        Ok(Self {
            threshold,
            update_author_threshold,
            author_actions,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quorum_identity::{Address, Name};
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn it_encodes_an_empty_batch_as_thresholds_and_a_zero_count() -> TestResult {
        let bytes = quorum_encoding::to_vec(&AccountAuthorAction::default())?;

        assert_eq!(bytes, [0u8; 17]);
        assert_eq!(
            quorum_encoding::from_slice::<AccountAuthorAction>(&bytes)?,
            AccountAuthorAction::default()
        );
        Ok(())
    }

    #[test]
    fn it_prefixes_each_action_with_its_tag() -> TestResult {
        let action = AuthorAction::new(AuthorActionType::Delete, Author::new(Name::new("a"), 1));
        let bytes = quorum_encoding::to_vec(&action)?;

        assert_eq!(bytes[0], 2);
        assert_eq!(&bytes[1..], quorum_encoding::to_vec(&action.author)?.as_slice());
        Ok(())
    }

    #[test]
    fn it_rejects_an_unknown_action_type() -> TestResult {
        let mut bytes = quorum_encoding::to_vec(&AuthorAction::new(
            AuthorActionType::Add,
            Author::new(Name::new("a"), 1),
        ))?;
        bytes[0] = 5;

        assert!(matches!(
            quorum_encoding::from_slice::<AuthorAction>(&bytes),
            Err(AuthorError::UnknownActionType(5))
        ));
        Ok(())
    }

    #[test]
    fn it_chains_actions_in_order() {
        let first = Author::new(Name::new("first"), 1);
        let second = Author::new(Address::default(), 2);

        let batch = AccountAuthorAction::new(3, 4)
            .add(first.clone())
            .delete(second.clone())
            .update(first.clone());

        let kinds: Vec<_> = batch
            .author_actions
            .iter()
            .map(|action| action.action_type)
            .collect();
        assert_eq!(
            kinds,
            [
                AuthorActionType::Add,
                AuthorActionType::Delete,
                AuthorActionType::Update
            ]
        );
        assert_eq!(batch.author_actions[1].author, second);
    }

    #[test]
    fn it_omits_empty_fields_in_json() -> TestResult {
        assert_eq!(
            serde_json::to_value(AccountAuthorAction::default())?,
            json!({})
        );
        assert_eq!(
            serde_json::from_value::<AccountAuthorAction>(json!({}))?,
            AccountAuthorAction::default()
        );
        Ok(())
    }

    #[test]
    fn it_only_reads_batches_from_json_objects() -> TestResult {
        let batch = AccountAuthorAction::new(1, 2).add(Author::new(Name::new("ops"), 1));
        let positional = json!([1, 2, [{
            "ActionType": 0,
            "Author": { "type": 0, "owner": "ops", "weight": 1 }
        }]]);

        assert!(serde_json::from_value::<AccountAuthorAction>(json!([])).is_err());
        assert!(serde_json::from_value::<AccountAuthorAction>(positional).is_err());
        assert!(serde_json::from_str::<AccountAuthorAction>("[]").is_err());
        assert_eq!(
            serde_json::from_value::<AccountAuthorAction>(serde_json::to_value(&batch)?)?,
            batch
        );
        Ok(())
    }

    #[test]
    fn it_names_json_fields_like_the_account_api() -> TestResult {
        let batch = AccountAuthorAction::new(1, 2).add(Author::new(Name::new("ops"), 1));

        assert_eq!(
            serde_json::to_value(&batch)?,
            json!({
                "threshold": 1,
                "updateAuthorThreshold": 2,
                "authorActions": [{
                    "ActionType": 0,
                    "Author": { "type": 0, "owner": "ops", "weight": 1 }
                }]
            })
        );
        Ok(())
    }
}
