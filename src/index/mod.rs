pub mod key_comparator;
pub mod registry;

pub use key_comparator::{KeyComparator, MemcmpComparator};
pub use registry::{global, ComparatorRegistry};
