//! Operation registry
//!
//! Operations are plain functions registered under the string names the
//! host invokes. There is no dispatch hierarchy: a name either maps to a
//! handler or the invocation is rejected.

use std::collections::HashMap;

use super::context::TransactionContext;
use super::errors::ContractResult;
use super::ops;

/// Signature every registered operation implements
pub type OperationFn = fn(&mut TransactionContext<'_>, &[String]) -> ContractResult<Vec<u8>>;

/// Registry of invokable operations, keyed by wire name
#[derive(Default)]
pub struct OperationRegistry {
    handlers: HashMap<&'static str, OperationFn>,
}

impl OperationRegistry {
    /// The registry with every standard operation registered
    pub fn standard() -> Self {
        let mut registry = Self::default();
        registry.register("addRecord", ops::add_record);
        registry.register("updateRecord", ops::update_record);
        registry.register("getRecord", ops::get_record);
        registry.register("getAllRecords", ops::get_all_records);
        registry.register("recordExists", ops::record_exists);
        registry
    }

    fn register(&mut self, name: &'static str, handler: OperationFn) {
        let previous = self.handlers.insert(name, handler);
        debug_assert!(previous.is_none(), "operation '{name}' registered twice");
    }

    /// Handler registered under `name`, if any
    pub fn get(&self, name: &str) -> Option<OperationFn> {
        self.handlers.get(name).copied()
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.handlers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_names() {
        let registry = OperationRegistry::standard();
        assert_eq!(
            registry.names(),
            [
                "addRecord",
                "getAllRecords",
                "getRecord",
                "recordExists",
                "updateRecord",
            ]
        );
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = OperationRegistry::standard();
        assert!(registry.get("addRecord").is_some());
        assert!(registry.get("addrecord").is_none());
        assert!(registry.get("AddRecord").is_none());
        assert!(registry.get("").is_none());
    }
}
