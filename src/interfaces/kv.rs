use std::path::Path;

use kvstore::KVDb;
use serde_json::Value;

use super::store::{ConfigStore, StoreError, StoreOpener};

impl ConfigStore for KVDb {
    fn get_value(&self, group: &str, key: &str) -> Result<Option<Value>, StoreError> {
        self.get::<Value>(group, key).map_err(Into::into)
    }

    fn set_value(&self, group: &str, key: &str, value: Value) -> Result<(), StoreError> {
        self.set(group, key, &value).map_err(Into::into)
    }

    fn remove_key(&self, group: &str, key: &str) -> Result<(), StoreError> {
        if !self.remove(group, key)? {
            log::debug!("Key {group}/{key} was already absent");
        }
        Ok(())
    }

    fn has_key(&self, group: &str, key: &str) -> Result<bool, StoreError> {
        self.contains(group, key).map_err(Into::into)
    }

    fn groups_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        KVDb::groups_with_prefix(self, prefix).map_err(Into::into)
    }

    fn close(self) -> Result<(), StoreError> {
        KVDb::close(self).map_err(Into::into)
    }
}

/// Opens SQLite-backed stores at the given paths
#[derive(Clone, Copy, Debug, Default)]
pub struct SqliteOpener;

impl StoreOpener for SqliteOpener {
    type Store = KVDb;

    fn open(&self, path: &Path) -> Result<KVDb, StoreError> {
        KVDb::new(path).map_err(Into::into)
    }
}
