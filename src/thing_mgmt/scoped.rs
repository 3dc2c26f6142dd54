use std::path::Path;

use super::error::ConfigError;
use crate::interfaces::{ConfigStore, StoreOpener};

/// Open the store at `path`, run `f` against it and close it again, whatever
/// `f` returned. An error from `f` takes precedence over a failed close.
pub(crate) fn with_store<O, T, F>(opener: &O, path: &Path, f: F) -> Result<T, ConfigError>
where
    O: StoreOpener + ?Sized,
    F: FnOnce(&O::Store) -> Result<T, ConfigError>,
{
    let store = opener
        .open(path)
        .map_err(|source| ConfigError::StoreUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
    let res = f(&store);
    let closed = store.close();
    match (res, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(source)) => Err(ConfigError::StoreUnavailable {
            path: path.to_path_buf(),
            source,
        }),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_err)) => {
            log::warn!("Failed to close store {}: {close_err}", path.display());
            Err(e)
        }
    }
}
