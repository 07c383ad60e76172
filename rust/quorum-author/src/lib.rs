//! Weighted authors and author-list changes for multi-owner accounts.
//!
//! An account is controlled by a list of [`Author`]s, each an [`Owner`] with a
//! weight. An owner is identified by an account [`Name`], a [`PubKey`] or an
//! [`Address`], and is tagged with the matching [`AuthorType`] wherever it is
//! stored.
//!
//! # Overview
//!
//! 1. Build owners with [`generate_owner`] from user text and an explicit
//!    author type, or directly from an identity value
//! 2. Wrap them in [`Author`]s with a weight
//! 3. Batch [`AuthorAction`]s into an [`AccountAuthorAction`] together with
//!    the account's thresholds
//! 4. Encode the batch with [`quorum_encoding::to_vec`] or as JSON with serde
//!
//! Authors have two independent wire forms:
//!
//! - binary: a [`StorageAuthor`] envelope carrying the type tag, the owner's
//!   own canonical encoding and the weight
//! - JSON: an [`AuthorJson`] object carrying the type tag, the owner's
//!   canonical string and the weight
//!
//! # Example
//!
//! ```
//! use quorum_author::{AccountAuthorAction, Author, AuthorType, generate_owner};
//!
//! # fn main() -> Result<(), quorum_author::AuthorError> {
//! let owner = generate_owner("0x1f2e3d4c5b6a79880011223344556677889900aa", AuthorType::Address)?;
//! let batch = AccountAuthorAction::new(2, 3).add(Author::new(owner, 2));
//!
//! let bytes = quorum_encoding::to_vec(&batch)?;
//! assert_eq!(quorum_encoding::from_slice::<AccountAuthorAction>(&bytes)?, batch);
//! # Ok(())
//! # }
//! ```
//!
//! [`Name`]: quorum_identity::Name
//! [`PubKey`]: quorum_identity::PubKey
//! [`Address`]: quorum_identity::Address

mod action;
mod author;
mod author_type;
mod error;
mod json;
mod owner;

#[cfg(any(test, feature = "property_test"))]
pub mod arb;

pub use action::{AccountAuthorAction, AuthorAction, AuthorActionType};
pub use author::{Author, StorageAuthor};
pub use author_type::{AUTHOR_TYPE_NAMES, AuthorType};
pub use error::AuthorError;
pub use json::AuthorJson;
pub use owner::{Owner, generate_owner, generate_owner_lenient};
