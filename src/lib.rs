//! Keycmp - pluggable key comparators for ordered indexes
//!
//! An ordered index (a B+tree, a skip list, a sorted run) never interprets its
//! keys itself. It is created with the name of a comparator and hands every
//! ordering decision and every textual rendering of a key to that comparator.
//!
//! # Layout
//!
//! - **Common** (`common`): the caller-owned key buffer, error type and constants
//!   - `KeyValue`: fixed-capacity key buffer with an authoritative length
//!   - `KeyError`/`Result`: crate-wide error handling
//!
//! - **Index** (`index`): comparator implementations and their registry
//!   - `KeyComparator`: ordering plus text codec for one key type
//!   - `MemcmpComparator`: unsigned byte-wise order, length tie-break, uppercase hex text
//!   - `ComparatorRegistry`: name to comparator mapping
//!
//! # Example
//!
//! ```rust
//! use keycmp::common::KeyValue;
//! use keycmp::index::{self, KeyComparator};
//!
//! let cmp = index::global().get("MEMCMP").unwrap();
//!
//! // A strict prefix sorts first, by the difference in length
//! assert_eq!(cmp.compare(&[0x01, 0x02], &[0x01, 0x02, 0x03]), -1);
//!
//! // Render into a buffer sized by encoded_size
//! let key = [0xAB, 0x01];
//! let mut buf = vec![0u8; cmp.encoded_size(&key)];
//! cmp.render(&key, &mut buf).unwrap();
//! assert_eq!(buf, b"AB01");
//!
//! // Parse keeps the longest run of valid hex pairs
//! let mut parsed = KeyValue::with_capacity(16);
//! cmp.parse(&mut parsed, "ABZZ01");
//! assert_eq!(parsed.as_bytes(), &[0xAB]);
//! ```

pub mod common;
pub mod index;

// Re-export commonly used types at the crate root
pub use common::{KeyError, KeyValue, Result};
pub use index::{ComparatorRegistry, KeyComparator, MemcmpComparator};
