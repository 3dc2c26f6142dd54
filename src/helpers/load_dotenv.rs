use std::env;
use std::path::PathBuf;

use crate::constants::envvars;

/// Load a local `.env`, then `$THINGD_CONFIG_DIR/.env` if it exists.
///
/// Runs before the logger is set up, since the log level may come from one
/// of these files; the caller logs the returned paths.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();
    if let Ok(path) = dotenv::dotenv() {
        loaded.push(path);
    }
    if let Ok(config_dir) = env::var(envvars::CONFIG_DIR) {
        let config_dir_dotenv = PathBuf::from(config_dir).join(".env");
        if dotenv::from_path(&config_dir_dotenv).is_ok() {
            loaded.push(config_dir_dotenv);
        }
    }
    loaded
}
