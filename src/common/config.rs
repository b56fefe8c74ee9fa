/// Registration name of the byte-array comparator
pub const MEMCMP_KEY_TYPE: &str = "MEMCMP";

/// Number of text characters emitted per key byte (two hex digits)
pub const HEX_CHARS_PER_BYTE: usize = 2;
