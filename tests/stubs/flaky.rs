use std::cell::RefCell;
use std::collections::HashSet;
use std::path::Path;
use std::rc::Rc;

use serde_json::Value;
use thingd::interfaces::{ConfigStore, MemOpener, MemStore, StoreError, StoreOpener};

/// Keys whose writes fail, shared between all handles of a [`FlakyOpener`]
#[derive(Clone, Debug, Default)]
pub struct FailingKeys(Rc<RefCell<HashSet<String>>>);

impl FailingKeys {
    pub fn fail(&self, key: &str) {
        self.0.borrow_mut().insert(key.to_string());
    }

    pub fn heal(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }

    /// Make `key` fail from its next successful write on
    pub fn fail_after_next(&self, key: &str) {
        self.fail(&format!("{key}!after-next"));
    }

    fn check(&self, group: &str, key: &str) -> Result<(), StoreError> {
        let armed = format!("{key}!after-next");
        let mut keys = self.0.borrow_mut();
        if keys.remove(&armed) {
            keys.insert(key.to_string());
            return Ok(());
        }
        if keys.contains(key) {
            return Err(StoreError::Unavailable(format!(
                "injected write failure for {group}/{key}"
            )));
        }
        Ok(())
    }
}

pub struct FlakyStore {
    inner: MemStore,
    failing: FailingKeys,
}

impl ConfigStore for FlakyStore {
    fn get_value(&self, group: &str, key: &str) -> Result<Option<Value>, StoreError> {
        self.inner.get_value(group, key)
    }

    fn set_value(&self, group: &str, key: &str, value: Value) -> Result<(), StoreError> {
        self.failing.check(group, key)?;
        self.inner.set_value(group, key, value)
    }

    fn remove_key(&self, group: &str, key: &str) -> Result<(), StoreError> {
        self.failing.check(group, key)?;
        self.inner.remove_key(group, key)
    }

    fn has_key(&self, group: &str, key: &str) -> Result<bool, StoreError> {
        self.inner.has_key(group, key)
    }

    fn groups_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        self.inner.groups_with_prefix(prefix)
    }

    fn close(self) -> Result<(), StoreError> {
        self.inner.close()
    }
}

#[derive(Default)]
pub struct FlakyOpener {
    pub stores: MemOpener,
    pub failing: FailingKeys,
}

impl StoreOpener for FlakyOpener {
    type Store = FlakyStore;

    fn open(&self, path: &Path) -> Result<FlakyStore, StoreError> {
        Ok(FlakyStore {
            inner: self.stores.open(path)?,
            failing: self.failing.clone(),
        })
    }
}
