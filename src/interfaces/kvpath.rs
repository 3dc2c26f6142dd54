use std::path::PathBuf;

use once_cell::sync::Lazy;

use crate::constants::{defaults, envvars};
use crate::helpers::base_path;

pub static DEVICE_STORE: Lazy<PathBuf> =
    Lazy::new(|| base_path::store_file(envvars::DEVICE_DB, defaults::DEVICE_DB_FILE));

pub static CLOUD_STORE: Lazy<PathBuf> =
    Lazy::new(|| base_path::store_file(envvars::CLOUD_DB, defaults::CLOUD_DB_FILE));

pub static CREDENTIALS_STORE: Lazy<PathBuf> = Lazy::new(|| {
    base_path::store_file(envvars::CREDENTIALS_DB, defaults::CREDENTIALS_DB_FILE)
});
