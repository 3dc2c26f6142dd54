use std::{env, path::PathBuf};

use crate::constants::{defaults, envvars};

pub fn config_dir() -> PathBuf {
    if let Ok(config_dir) = env::var(envvars::CONFIG_DIR) {
        return config_dir.into();
    }
    PathBuf::from(defaults::CONFIG_DIR)
}

/// Path of one store file: the per-file env var wins, otherwise the file sits
/// in the config directory
pub(crate) fn store_file(override_var: &str, file_name: &str) -> PathBuf {
    if let Ok(path) = env::var(override_var) {
        return path.into();
    }
    config_dir().join(file_name)
}
