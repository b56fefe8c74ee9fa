use std::cmp::Ordering;

use crate::common::{KeyError, KeyValue, Result, HEX_CHARS_PER_BYTE, MEMCMP_KEY_TYPE};

/// Ordering and text codec for one key type.
///
/// An index engine selects an implementation by `type_name` and delegates
/// every key comparison and every textual rendering of a key to it.
/// Implementations hold no per-call state and never allocate key storage.
pub trait KeyComparator: Send + Sync {
    /// Stable name the registry stores this comparator under.
    fn type_name(&self) -> &'static str;

    /// Human-readable description of the ordering.
    fn doc(&self) -> &'static str;

    /// Orders two keys. Negative, zero or positive as `a` sorts before,
    /// equal to, or after `b`.
    fn compare(&self, a: &[u8], b: &[u8]) -> i64;

    /// Writes the text form of `key` into `dst` and returns the number of
    /// characters written. `dst` must hold at least `encoded_size(key)`.
    fn render(&self, key: &[u8], dst: &mut [u8]) -> Result<usize>;

    /// Decodes `text` into `key` in place and returns the decoded length.
    fn parse(&self, key: &mut KeyValue, text: &str) -> usize;

    /// Width in bytes of every key of this type, or None if keys vary in length.
    fn fixed_size(&self) -> Option<usize>;

    /// Number of characters `render` produces for `key`.
    fn encoded_size(&self, key: &[u8]) -> usize;

    fn ordering(&self, a: &[u8], b: &[u8]) -> Ordering {
        self.compare(a, b).cmp(&0)
    }

    fn to_text(&self, key: &[u8]) -> Result<String> {
        let mut buf = vec![0u8; self.encoded_size(key)];
        let written = self.render(key, &mut buf)?;
        buf.truncate(written);
        String::from_utf8(buf).map_err(|e| KeyError::InvalidText(e.to_string()))
    }

    fn from_text(&self, text: &str, capacity: usize) -> KeyValue {
        let mut key = KeyValue::with_capacity(capacity);
        self.parse(&mut key, text);
        key
    }
}

const MEMCMP_DOC: &str = "MEMCMP: The key is a byte array compared byte by byte as unsigned values.\n\
                          If one key is a prefix of the other, the shorter key sorts first and\n\
                          the result is the difference in length between the two keys.\n";

/// Byte-array comparator registered as `MEMCMP`.
///
/// Keys are compared as unsigned byte strings up to the shorter length; a
/// shared prefix is broken by length. The text form is uppercase hex with two
/// digits per byte and no separators.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemcmpComparator;

impl MemcmpComparator {
    pub fn new() -> Self {
        Self
    }
}

impl KeyComparator for MemcmpComparator {
    fn type_name(&self) -> &'static str {
        MEMCMP_KEY_TYPE
    }

    fn doc(&self) -> &'static str {
        MEMCMP_DOC
    }

    fn compare(&self, a: &[u8], b: &[u8]) -> i64 {
        // zip stops at the shorter key
        match a.iter().zip(b).find(|(x, y)| x != y) {
            Some((&x, &y)) => i64::from(x) - i64::from(y),
            None => a.len() as i64 - b.len() as i64,
        }
    }

    fn render(&self, key: &[u8], dst: &mut [u8]) -> Result<usize> {
        let required = self.encoded_size(key);
        if dst.len() < required {
            return Err(KeyError::BufferTooSmall {
                required,
                available: dst.len(),
            });
        }

        let out = &mut dst[..required];
        hex::encode_to_slice(key, out).map_err(|e| KeyError::InvalidText(e.to_string()))?;
        out.make_ascii_uppercase();
        Ok(required)
    }

    fn parse(&self, key: &mut KeyValue, text: &str) -> usize {
        key.clear();

        for pair in text.as_bytes().chunks_exact(HEX_CHARS_PER_BYTE) {
            let mut byte = [0u8; 1];
            if hex::decode_to_slice(pair, &mut byte).is_err() {
                tracing::trace!(
                    decoded = key.len(),
                    input_len = text.len(),
                    "Stopped key decode at invalid hex pair"
                );
                break;
            }
            if !key.push(byte[0]) {
                tracing::trace!(
                    capacity = key.capacity(),
                    input_len = text.len(),
                    "Stopped key decode at buffer capacity"
                );
                break;
            }
        }

        key.len()
    }

    fn fixed_size(&self) -> Option<usize> {
        None
    }

    fn encoded_size(&self, key: &[u8]) -> usize {
        key.len() * HEX_CHARS_PER_BYTE
    }
}
