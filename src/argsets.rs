use std::path::PathBuf;
use std::str::FromStr;

use anyhow::anyhow;

use thingd::interfaces::kvpath;

/// One of the three configuration stores
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreName {
    Device,
    Cloud,
    Credentials,
}

impl StoreName {
    pub fn path(self) -> PathBuf {
        match self {
            StoreName::Device => kvpath::DEVICE_STORE.clone(),
            StoreName::Cloud => kvpath::CLOUD_STORE.clone(),
            StoreName::Credentials => kvpath::CREDENTIALS_STORE.clone(),
        }
    }
}

impl FromStr for StoreName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "device" => Ok(StoreName::Device),
            "cloud" => Ok(StoreName::Cloud),
            "credentials" => Ok(StoreName::Credentials),
            _ => Err(anyhow!(
                "Store must be one of 'device', 'cloud', 'credentials'"
            )),
        }
    }
}

pub struct KvsGetArgs {
    pub store: StoreName,
    pub group: String,
    pub key: String,
}

pub struct KvsSetArgs {
    pub store: StoreName,
    pub group: String,
    pub key: String,
    pub value: String,
}

pub struct StoreCredentialsArgs {
    pub id: String,
    pub token: String,
}
