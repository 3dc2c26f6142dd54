use std::path::PathBuf;

use crate::interfaces::kvpath;

/// Locations of the three stores a thing is assembled from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThingSettings {
    pub device_path: PathBuf,
    pub cloud_path: PathBuf,
    pub credentials_path: PathBuf,
}

impl ThingSettings {
    pub fn from_env() -> Self {
        ThingSettings {
            device_path: kvpath::DEVICE_STORE.clone(),
            cloud_path: kvpath::CLOUD_STORE.clone(),
            credentials_path: kvpath::CREDENTIALS_STORE.clone(),
        }
    }
}
