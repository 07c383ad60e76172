//! Integration tests for the JSON forms of authors and author actions.

use pretty_assertions::assert_eq;
use quorum_author::{AccountAuthorAction, Author, AuthorError, AuthorJson};
use quorum_identity::{Address, Name, PubKey};
use serde_json::{Value, json};
use testresult::TestResult;

fn test_key() -> PubKey {
    let mut bytes = [0x5a; 65];
    bytes[0] = 0x04;
    PubKey::new(bytes)
}

#[test]
fn it_round_trips_authors_by_canonical_string() -> TestResult {
    let authors = [
        Author::new(Name::new("ops"), 1),
        Author::new(test_key(), 2),
        Author::new(Address::from_bytes_padded(&[0xab; 20]), 3),
    ];

    for author in authors {
        let document = serde_json::to_value(&author)?;
        assert_eq!(document["owner"], Value::from(author.owner().to_string()));

        let decoded: Author = serde_json::from_value(document)?;
        assert_eq!(decoded.owner().to_string(), author.owner().to_string());
        assert_eq!(decoded, author);
    }
    Ok(())
}

#[test]
fn it_uses_the_documented_field_names() -> TestResult {
    let document = serde_json::to_value(Author::new(Name::new("ops"), 9))?;
    let Some(fields) = document.as_object() else {
        panic!("expected an object, got {document}");
    };

    let mut names: Vec<_> = fields.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(names, ["owner", "type", "weight"]);
    Ok(())
}

#[test]
fn it_accepts_uppercase_hex_owners() -> TestResult {
    let key = test_key();
    let document = json!({
        "type": 1,
        "owner": format!("0x{}", key.to_string()[2..].to_uppercase()),
        "weight": 7
    });

    assert_eq!(serde_json::from_value::<Author>(document)?, Author::new(key, 7));
    Ok(())
}

#[test]
fn it_fails_loudly_on_an_unknown_type() -> TestResult {
    let json = AuthorJson {
        author_type: 42,
        owner: "ops".into(),
        weight: 1,
    };

    assert!(matches!(
        Author::try_from(json),
        Err(AuthorError::UnknownTypeTag(42))
    ));
    assert!(
        serde_json::from_str::<Author>(r#"{"type":42,"owner":"ops","weight":1}"#).is_err()
    );
    Ok(())
}

#[test]
fn it_reads_batches_with_omitted_fields() -> TestResult {
    let batch: AccountAuthorAction = serde_json::from_value(json!({
        "updateAuthorThreshold": 5,
        "authorActions": [
            { "ActionType": 2, "Author": { "type": 0, "owner": "gone", "weight": 0 } }
        ]
    }))?;

    assert_eq!(
        batch,
        AccountAuthorAction::new(0, 5).delete(Author::new(Name::new("gone"), 0))
    );
    Ok(())
}

#[test]
fn it_rejects_an_unknown_action_type_in_json() {
    let result = serde_json::from_value::<AccountAuthorAction>(json!({
        "authorActions": [
            { "ActionType": 9, "Author": { "type": 0, "owner": "x", "weight": 1 } }
        ]
    }));

    assert!(result.is_err());
}

#[cfg(feature = "json")]
#[test]
fn it_round_trips_batches_through_the_document_helpers() -> TestResult {
    let batch = AccountAuthorAction::new(3, 4)
        .add(Author::new(Name::new("a"), 1))
        .update(Author::new(test_key(), 2))
        .delete(Author::new(Address::default(), 3));

    let document = batch.to_json()?;
    assert_eq!(AccountAuthorAction::from_json(&document)?, batch);
    assert_eq!(AccountAuthorAction::new(0, 0).to_json()?, "{}");
    assert!(matches!(
        AccountAuthorAction::from_json("[]"),
        Err(AuthorError::Json(_))
    ));
    Ok(())
}
