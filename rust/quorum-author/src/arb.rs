//! [`proptest`] strategies for authors and author actions.

use proptest::{collection::vec, prelude::*};
use quorum_identity::{ADDRESS_LENGTH, Address, Name, PUB_KEY_LENGTH, PubKey};

use crate::{AccountAuthorAction, Author, AuthorAction, AuthorActionType, Owner};

/// Any owner, of any kind.
pub fn owner() -> impl Strategy<Value = Owner> {
    prop_oneof![
        "\\PC{0,32}".prop_map(|name| Owner::Name(Name::new(name))),
        vec(any::<u8>(), PUB_KEY_LENGTH)
            .prop_map(|bytes| Owner::PubKey(PubKey::from_bytes_padded(&bytes))),
        any::<[u8; ADDRESS_LENGTH]>().prop_map(|bytes| Owner::Address(Address::new(bytes))),
    ]
}

/// Any author with any weight.
pub fn author() -> impl Strategy<Value = Author> {
    (owner(), any::<u64>()).prop_map(|(owner, weight)| Author { owner, weight })
}

/// Any of the three action types.
pub fn action_type() -> impl Strategy<Value = AuthorActionType> {
    prop_oneof![
        Just(AuthorActionType::Add),
        Just(AuthorActionType::Update),
        Just(AuthorActionType::Delete),
    ]
}

/// Any action applied to any author.
pub fn author_action() -> impl Strategy<Value = AuthorAction> {
    (action_type(), author()).prop_map(|(action_type, author)| AuthorAction::new(action_type, author))
}

/// Any batch of up to `max_actions` actions, with zero thresholds and empty
/// batches well represented.
pub fn account_author_action(max_actions: usize) -> impl Strategy<Value = AccountAuthorAction> {
    let threshold = prop_oneof![Just(0u64), any::<u64>()];
    let update_author_threshold = prop_oneof![Just(0u64), any::<u64>()];

    (
        threshold,
        update_author_threshold,
        vec(author_action(), 0..=max_actions),
    )
        .prop_map(
            |(threshold, update_author_threshold, author_actions)| AccountAuthorAction {
                threshold,
                update_author_threshold,
                author_actions,
            },
        )
}
