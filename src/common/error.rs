use thiserror::Error;

/// Key comparator error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Buffer too small: need {required} characters, have {available}")]
    BufferTooSmall { required: usize, available: usize },

    #[error("Key too large: {len} bytes exceeds capacity {capacity}")]
    KeyTooLarge { len: usize, capacity: usize },

    #[error("Comparator {0} not found")]
    UnknownComparator(String),

    #[error("Comparator {0} already registered")]
    ComparatorAlreadyRegistered(String),

    #[error("Invalid key text: {0}")]
    InvalidText(String),
}

pub type Result<T> = std::result::Result<T, KeyError>;
