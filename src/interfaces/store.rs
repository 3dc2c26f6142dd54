//! Grouped key/value store contract consumed by the thing configuration code
//!
//! Reads return `Ok(None)` for an absent key and `Err(StoreError::Decode)` for
//! a key that is present but holds a value of the wrong type, so callers can
//! tell "not configured" apart from "misconfigured".

use std::path::Path;

use kvstore::KVStoreError;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Backend(#[from] KVStoreError),
    #[error("value of {group}/{key} has unexpected type: {source}")]
    Decode {
        group: String,
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode value for {group}/{key}: {source}")]
    Encode {
        group: String,
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub trait ConfigStore {
    fn get_value(&self, group: &str, key: &str) -> Result<Option<Value>, StoreError>;

    fn set_value(&self, group: &str, key: &str, value: Value) -> Result<(), StoreError>;

    fn remove_key(&self, group: &str, key: &str) -> Result<(), StoreError>;

    fn has_key(&self, group: &str, key: &str) -> Result<bool, StoreError>;

    /// Group names starting with `prefix`, in stored order
    fn groups_with_prefix(&self, prefix: &str) -> Result<Vec<String>, StoreError>;

    fn close(self) -> Result<(), StoreError>
    where
        Self: Sized;

    fn read<T: DeserializeOwned>(&self, group: &str, key: &str) -> Result<Option<T>, StoreError> {
        self.get_value(group, key)?
            .map(|v| {
                serde_json::from_value::<T>(v).map_err(|source| StoreError::Decode {
                    group: group.to_string(),
                    key: key.to_string(),
                    source,
                })
            })
            .transpose()
    }

    fn write<V: Serialize>(&self, group: &str, key: &str, value: V) -> Result<(), StoreError> {
        let value = serde_json::to_value(value).map_err(|source| StoreError::Encode {
            group: group.to_string(),
            key: key.to_string(),
            source,
        })?;
        self.set_value(group, key, value)
    }

    fn read_int(&self, group: &str, key: &str) -> Result<Option<i32>, StoreError> {
        self.read(group, key)
    }

    fn read_uint(&self, group: &str, key: &str) -> Result<Option<u32>, StoreError> {
        self.read(group, key)
    }

    fn read_int64(&self, group: &str, key: &str) -> Result<Option<i64>, StoreError> {
        self.read(group, key)
    }

    fn read_uint64(&self, group: &str, key: &str) -> Result<Option<u64>, StoreError> {
        self.read(group, key)
    }

    fn read_float(&self, group: &str, key: &str) -> Result<Option<f64>, StoreError> {
        self.read(group, key)
    }

    fn read_bool(&self, group: &str, key: &str) -> Result<Option<bool>, StoreError> {
        self.read(group, key)
    }

    fn read_string(&self, group: &str, key: &str) -> Result<Option<String>, StoreError> {
        self.read(group, key)
    }

    fn write_int(&self, group: &str, key: &str, value: i32) -> Result<(), StoreError> {
        self.write(group, key, value)
    }

    fn write_uint(&self, group: &str, key: &str, value: u32) -> Result<(), StoreError> {
        self.write(group, key, value)
    }

    fn write_int64(&self, group: &str, key: &str, value: i64) -> Result<(), StoreError> {
        self.write(group, key, value)
    }

    fn write_uint64(&self, group: &str, key: &str, value: u64) -> Result<(), StoreError> {
        self.write(group, key, value)
    }

    fn write_float(&self, group: &str, key: &str, value: f64) -> Result<(), StoreError> {
        self.write(group, key, value)
    }

    fn write_bool(&self, group: &str, key: &str, value: bool) -> Result<(), StoreError> {
        self.write(group, key, value)
    }

    fn write_string(&self, group: &str, key: &str, value: &str) -> Result<(), StoreError> {
        self.write(group, key, value)
    }
}

/// Opens store handles by path
pub trait StoreOpener {
    type Store: ConfigStore;

    fn open(&self, path: &Path) -> Result<Self::Store, StoreError>;
}
