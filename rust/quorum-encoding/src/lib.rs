//! Quorum Encoding - Ordered Binary Records
//!
//! This crate provides the compact binary encoding used to store and exchange
//! authorization records. A record is a sequence of fields written in
//! declaration order with no field names and no padding. The format is
//! stable: encoded records are persisted and compared byte for byte, so the
//! layout of each primitive must never change.
//!
//! # Primitive Layouts
//!
//! ```text
//! u8            ┌──────┐
//!               │ byte │
//!               └──────┘
//! u64           ┌───────────────────────────────┐
//!               │  8 bytes, big-endian          │
//!               └───────────────────────────────┘
//! byte string   ┌─────────────────┬─────────────────┐
//!               │     Length      │      Bytes      │
//!               │    (LEB128)     │   (Raw Bytes)   │
//!               └─────────────────┴─────────────────┘
//! sequence      ┌─────────────────┬─────────┬─────────┬───────┐
//!               │      Count      │ Item 0  │ Item 1  │  ...  │
//!               │    (LEB128)     │         │         │       │
//!               └─────────────────┴─────────┴─────────┴───────┘
//! ```
//!
//! `String` and `[u8; N]` are byte strings; a [`RawValue`] is a byte string
//! whose contents are themselves an encoded value.
//!
//! # Basic Usage
//!
//! ```rust
//! use quorum_encoding::{to_vec, from_slice};
//!
//! let bytes = to_vec(&vec![String::from("a"), String::from("bc")]).unwrap();
//! assert_eq!(bytes, vec![2, 1, b'a', 2, b'b', b'c']);
//!
//! let decoded: Vec<String> = from_slice(&bytes).unwrap();
//! assert_eq!(decoded, ["a", "bc"]);
//! ```

mod error;
pub use error::*;

mod codec;
pub use codec::*;

mod buffer;
pub use buffer::*;

mod raw;
pub use raw::*;
