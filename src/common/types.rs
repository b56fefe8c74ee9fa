use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::{KeyError, Result};

/// Caller-owned key buffer.
///
/// The buffer is allocated once with a fixed capacity; `len` is authoritative
/// and bytes past it are never read. Comparators borrow a `KeyValue` for the
/// duration of a single call and never resize it.
#[derive(Clone)]
pub struct KeyValue {
    buf: Box<[u8]>,
    len: usize,
}

impl KeyValue {
    /// Creates an empty key able to hold up to `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Creates a key holding a copy of `bytes`, sized exactly to fit.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self {
            buf: bytes.to_vec().into_boxed_slice(),
            len: bytes.len(),
        }
    }

    /// Overwrites the key value. Fails if `bytes` does not fit the buffer.
    pub fn set_value(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() > self.buf.len() {
            return Err(KeyError::KeyTooLarge {
                len: bytes.len(),
                capacity: self.buf.len(),
            });
        }
        self.buf[..bytes.len()].copy_from_slice(bytes);
        self.len = bytes.len();
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Appends one byte, returning false when the buffer is full.
    pub(crate) fn push(&mut self, byte: u8) -> bool {
        if self.len == self.buf.len() {
            return false;
        }
        self.buf[self.len] = byte;
        self.len += 1;
        true
    }
}

impl fmt::Debug for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyValue")
            .field("len", &self.len)
            .field("capacity", &self.buf.len())
            .field("value", &hex::encode_upper(self.as_bytes()))
            .finish()
    }
}

// Bytes past `len` are stale and do not take part in equality.
impl PartialEq for KeyValue {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for KeyValue {}

impl Hash for KeyValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

impl AsRef<[u8]> for KeyValue {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<&[u8]> for KeyValue {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<Vec<u8>> for KeyValue {
    fn from(bytes: Vec<u8>) -> Self {
        let len = bytes.len();
        Self {
            buf: bytes.into_boxed_slice(),
            len,
        }
    }
}
