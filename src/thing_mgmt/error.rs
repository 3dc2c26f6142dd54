use std::path::PathBuf;

use thiserror::Error;

use crate::interfaces::StoreError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("store {path} unavailable: {source}")]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: StoreError,
    },
    #[error("invalid configuration in group {group}: {reason}")]
    InvalidConfig { group: String, reason: String },
    #[error("store access failed: {0}")]
    Store(#[source] StoreError),
    #[error("failed to write {group}/{key}: {source}")]
    WriteFailed {
        group: String,
        key: String,
        #[source]
        source: StoreError,
    },
    #[error("data item {sensor_id} partially updated in group {group}; failed keys: {failed:?}")]
    PartialUpdate {
        sensor_id: u32,
        group: String,
        failed: Vec<&'static str>,
    },
    #[error("failed to write thing id ({id_error}) and to roll back thing token ({rollback_error}); credentials are inconsistent")]
    CompensationFailed {
        #[source]
        id_error: StoreError,
        rollback_error: StoreError,
    },
}

impl ConfigError {
    pub fn invalid(group: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidConfig {
            group: group.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ConfigError::InvalidConfig { .. })
    }
}

/// A value of the wrong type is a configuration problem; anything else is the
/// store failing underneath us
impl From<StoreError> for ConfigError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Decode { ref group, .. } => ConfigError::InvalidConfig {
                group: group.clone(),
                reason: err.to_string(),
            },
            other => ConfigError::Store(other),
        }
    }
}
