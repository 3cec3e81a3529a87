//! In-memory state store for embedding and testing.

use crate::store::{StateStore, StoreError};
use luach_types::state::{CycleState, StatePatch};
use std::collections::HashMap;
use std::sync::Mutex;

/// Keeps records in a mutex-guarded map. Contents die with the process.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    records: Mutex<HashMap<String, CycleState>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a record, mainly for assertions in tests.
    pub fn snapshot(&self, key: &str) -> Option<CycleState> {
        self.records.lock().expect("lock records").get(key).cloned()
    }
}

impl StateStore for MemoryStateStore {
    fn read(&self, key: &str) -> Result<Option<CycleState>, StoreError> {
        Ok(self.records.lock().expect("lock records").get(key).cloned())
    }

    fn write(&self, key: &str, patch: &StatePatch) -> Result<(), StoreError> {
        let mut records = self.records.lock().expect("lock records");
        let state = records.entry(key.to_string()).or_default();
        patch.apply_to(state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_types::state::OverrideFields;
    use pretty_assertions::assert_eq;

    #[test]
    fn read_missing_key_is_none() {
        let store = MemoryStateStore::new();
        assert_eq!(store.read("cycle.gates.v1").unwrap(), None);
    }

    #[test]
    fn write_creates_record_lazily() {
        let store = MemoryStateStore::new();
        store
            .write("cycle.gates.v1", &StatePatch::set_offset(14))
            .unwrap();
        let state = store.read("cycle.gates.v1").unwrap().expect("record");
        assert_eq!(state.offset, 14);
        assert!(!state.has_override());
    }

    #[test]
    fn writes_merge_rather_than_replace() {
        let store = MemoryStateStore::new();
        store
            .write("cycle.gates.v1", &StatePatch::set_offset(2))
            .unwrap();
        store
            .write(
                "cycle.gates.v1",
                &StatePatch {
                    offset: None,
                    override_fields: Some(OverrideFields {
                        title: "X - 1 Elul".to_string(),
                        body: "Y".to_string(),
                        ..OverrideFields::default()
                    }),
                },
            )
            .unwrap();
        let state = store.read("cycle.gates.v1").unwrap().expect("record");
        assert_eq!(state.offset, 2);
        assert_eq!(state.override_title, "X - 1 Elul");
    }

    #[test]
    fn keys_are_independent() {
        let store = MemoryStateStore::new();
        store
            .write("cycle.gates.v1", &StatePatch::set_offset(5))
            .unwrap();
        assert_eq!(store.read("cycle.psalms.v1").unwrap(), None);
    }
}
