use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::common::{KeyError, Result};

use super::key_comparator::{KeyComparator, MemcmpComparator};

/// Name-indexed set of key comparators.
///
/// An index records the comparator name it was created with and resolves it
/// here when opened. Registration is explicit; nothing is discovered at
/// runtime.
pub struct ComparatorRegistry {
    comparators: RwLock<HashMap<&'static str, Arc<dyn KeyComparator>>>,
}

impl ComparatorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            comparators: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a registry holding every comparator this crate ships.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        let mut comparators = registry.comparators.write();
        let memcmp: Arc<dyn KeyComparator> = Arc::new(MemcmpComparator::new());
        comparators.insert(memcmp.type_name(), memcmp);
        drop(comparators);
        registry
    }

    /// Registers `comparator` under its `type_name`.
    pub fn register(&self, comparator: Arc<dyn KeyComparator>) -> Result<()> {
        let name = comparator.type_name();
        let mut comparators = self.comparators.write();

        if comparators.contains_key(name) {
            return Err(KeyError::ComparatorAlreadyRegistered(name.to_string()));
        }

        tracing::debug!(comparator = name, "Registered key comparator");
        comparators.insert(name, comparator);
        Ok(())
    }

    /// Looks up the comparator registered under `name`.
    pub fn get(&self, name: &str) -> Result<Arc<dyn KeyComparator>> {
        match self.comparators.read().get(name) {
            Some(comparator) => Ok(Arc::clone(comparator)),
            None => {
                tracing::debug!(comparator = name, "Key comparator not found");
                Err(KeyError::UnknownComparator(name.to_string()))
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.comparators.read().contains_key(name)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.comparators.read().keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.comparators.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparators.read().is_empty()
    }
}

impl Default for ComparatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide registry, populated with the built-in comparators on first use.
pub fn global() -> &'static ComparatorRegistry {
    static GLOBAL: OnceLock<ComparatorRegistry> = OnceLock::new();
    GLOBAL.get_or_init(ComparatorRegistry::with_builtins)
}
