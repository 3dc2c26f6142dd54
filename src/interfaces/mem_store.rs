//! In-memory store, shared between handles opened on the same path
//!
//! Useful for embedding the configuration core without a database file, and
//! for tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde_json::Value;

use super::store::{ConfigStore, StoreError, StoreOpener};

#[derive(Debug, Default)]
struct Groups {
    // Group names in order of first insertion
    order: Vec<String>,
    entries: BTreeMap<(String, String), Value>,
}

impl Groups {
    fn group_is_empty(&self, group: &str) -> bool {
        !self.entries.keys().any(|(g, _)| g == group)
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemStore(Rc<RefCell<Groups>>);

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All keys held by `group`, sorted
    pub fn keys(&self, group: &str) -> Vec<String> {
        self.0
            .borrow()
            .entries
            .keys()
            .filter(|(g, _)| g == group)
            .map(|(_, k)| k.clone())
            .collect()
    }
}

impl ConfigStore for MemStore {
    fn get_value(&self, group: &str, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .0
            .borrow()
            .entries
            .get(&(group.to_string(), key.to_string()))
            .cloned())
    }

    fn set_value(&self, group: &str, key: &str, value: Value) -> Result<(), StoreError> {
        let mut groups = self.0.borrow_mut();
        if groups.group_is_empty(group) {
            groups.order.retain(|g| g != group);
            groups.order.push(group.to_string());
        }
        groups
            .entries
            .insert((group.to_string(), key.to_string()), value);
        Ok(())
    }

    fn remove_key(&self, group: &str, key: &str) -> Result<(), StoreError> {
        let mut groups = self.0.borrow_mut();
        groups
            .entries
            .remove(&(group.to_string(), key.to_string()));
        if groups.group_is_empty(group) {
            groups.order.retain(|g| g != group);
        }
        Ok(())
    }

    fn has_key(&self, group: &str, key: &str) -> Result<bool, StoreError> {
        Ok(self
            .0
            .borrow()
            .entries
            .contains_key(&(group.to_string(), key.to_string())))
    }

    fn groups_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .0
            .borrow()
            .order
            .iter()
            .filter(|g| g.starts_with(prefix))
            .cloned()
            .collect())
    }

    fn close(self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Hands out one shared [`MemStore`] per path
#[derive(Debug, Default)]
pub struct MemOpener {
    stores: RefCell<HashMap<PathBuf, MemStore>>,
}

impl MemOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store behind `path`, created empty on first use
    pub fn store(&self, path: impl AsRef<Path>) -> MemStore {
        self.stores
            .borrow_mut()
            .entry(path.as_ref().to_path_buf())
            .or_default()
            .clone()
    }
}

impl StoreOpener for MemOpener {
    type Store = MemStore;

    fn open(&self, path: &Path) -> Result<MemStore, StoreError> {
        Ok(self.store(path))
    }
}
