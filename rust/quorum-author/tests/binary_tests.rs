//! Integration tests for the binary author envelope.
//!
//! These exercise encode and decode through the public API only, the way a
//! consumer storing author lists would.

use pretty_assertions::assert_eq;
use quorum_author::{
    AccountAuthorAction, Author, AuthorActionType, AuthorError, AuthorType, StorageAuthor,
};
use quorum_encoding::{EncodingError, RawValue};
use quorum_identity::{Address, IdentityError, Name, PUB_KEY_LENGTH, PubKey};
use testresult::TestResult;

fn test_key(seed: u8) -> PubKey {
    let mut bytes = [seed; PUB_KEY_LENGTH];
    bytes[0] = 0x04;
    PubKey::new(bytes)
}

fn test_address(seed: u8) -> Address {
    Address::new([seed; 20])
}

#[test]
fn it_round_trips_authors_of_every_kind() -> TestResult {
    let authors = [
        Author::new(Name::new("treasury.ops"), 0),
        Author::new(Name::new(""), 1),
        Author::new(test_key(0x11), 500),
        Author::new(test_address(0x22), u64::MAX),
    ];

    for author in authors {
        let bytes = quorum_encoding::to_vec(&author)?;
        let decoded: Author = quorum_encoding::from_slice(&bytes)?;

        assert_eq!(decoded.author_type(), author.author_type());
        assert_eq!(decoded, author);
        assert_eq!(quorum_encoding::to_vec(&decoded)?, bytes);
    }
    Ok(())
}

#[test]
fn it_rejects_tags_outside_the_known_types() -> TestResult {
    for tag in [3u8, 4, 0x7f, u8::MAX] {
        let envelope = StorageAuthor {
            tag,
            data_raw: RawValue::encode_from(&test_address(1))?,
            weight: 10,
        };
        let bytes = quorum_encoding::to_vec(&envelope)?;

        let result = quorum_encoding::from_slice::<Author>(&bytes);
        assert!(
            matches!(result, Err(AuthorError::UnknownTypeTag(found)) if found == tag),
            "tag {tag} was not rejected: {result:?}"
        );
    }
    Ok(())
}

#[test]
fn it_decodes_an_envelope_without_interpreting_its_tag() -> TestResult {
    let envelope = StorageAuthor {
        tag: 200,
        data_raw: RawValue::from(vec![1, 2, 3]),
        weight: 4,
    };
    let bytes = quorum_encoding::to_vec(&envelope)?;
    let decoded: StorageAuthor = quorum_encoding::from_slice(&bytes)?;

    assert_eq!(decoded, envelope);
    assert!(matches!(
        decoded.author_type(),
        Err(AuthorError::UnknownTypeTag(200))
    ));
    Ok(())
}

#[test]
fn it_propagates_owner_decoding_failures() -> TestResult {
    // A valid name payload tagged as a public key.
    let envelope = StorageAuthor {
        tag: AuthorType::PubKey.tag(),
        data_raw: RawValue::encode_from(&Name::new("alice"))?,
        weight: 1,
    };
    let bytes = quorum_encoding::to_vec(&envelope)?;

    assert!(matches!(
        quorum_encoding::from_slice::<Author>(&bytes),
        Err(AuthorError::MalformedPayload(IdentityError::InvalidLength {
            expected: PUB_KEY_LENGTH,
            found: 5,
            ..
        }))
    ));

    // An address payload followed by junk inside the raw value.
    let mut raw = RawValue::encode_from(&test_address(9))?.into_bytes();
    raw.push(0);
    let envelope = StorageAuthor {
        tag: AuthorType::Address.tag(),
        data_raw: RawValue::from(raw),
        weight: 1,
    };
    let bytes = quorum_encoding::to_vec(&envelope)?;

    assert!(matches!(
        quorum_encoding::from_slice::<Author>(&bytes),
        Err(AuthorError::MalformedPayload(IdentityError::Encoding(
            EncodingError::TrailingBytes(1)
        )))
    ));
    Ok(())
}

#[test]
fn it_preserves_the_order_of_author_actions() -> TestResult {
    let a1 = Author::new(Name::new("a1"), 1);
    let a2 = Author::new(test_key(2), 2);
    let a3 = Author::new(test_address(3), 3);

    let batch = AccountAuthorAction::new(2, 3)
        .add(a1.clone())
        .delete(a2.clone())
        .update(a3.clone());

    let bytes = quorum_encoding::to_vec(&batch)?;
    let decoded: AccountAuthorAction = quorum_encoding::from_slice(&bytes)?;

    let actions: Vec<_> = decoded
        .author_actions
        .iter()
        .map(|action| (action.action_type, &action.author))
        .collect();
    assert_eq!(
        actions,
        vec![
            (AuthorActionType::Add, &a1),
            (AuthorActionType::Delete, &a2),
            (AuthorActionType::Update, &a3),
        ]
    );
    assert_eq!(decoded, batch);
    Ok(())
}

#[test]
fn it_round_trips_an_empty_batch() -> TestResult {
    let batch = AccountAuthorAction::new(0, 0);
    let bytes = quorum_encoding::to_vec(&batch)?;
    let decoded: AccountAuthorAction = quorum_encoding::from_slice(&bytes)?;

    assert_eq!(decoded, AccountAuthorAction::default());
    assert_eq!(decoded.threshold, 0);
    assert_eq!(decoded.update_author_threshold, 0);
    assert!(decoded.author_actions.is_empty());
    Ok(())
}

#[test]
fn it_fails_on_a_truncated_batch() -> TestResult {
    let batch = AccountAuthorAction::new(1, 1).add(Author::new(test_address(5), 1));
    let bytes = quorum_encoding::to_vec(&batch)?;

    for end in 0..bytes.len() {
        let result = quorum_encoding::from_slice::<AccountAuthorAction>(&bytes[..end]);
        assert!(
            matches!(
                result,
                Err(AuthorError::Stream(_)) | Err(AuthorError::MalformedPayload(_))
            ),
            "prefix of {end} bytes: {result:?}"
        );
    }
    Ok(())
}
