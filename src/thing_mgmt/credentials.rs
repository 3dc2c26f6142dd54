//! Storing and erasing the thing id/token pair
//!
//! The store has no multi-key transactions. Writing the pair is approximated
//! by writing the token first and erasing it again if the id write fails; if
//! that rollback fails too, the caller gets [`ConfigError::CompensationFailed`]
//! and the stored credentials must be treated as inconsistent.

use std::path::Path;

use super::error::ConfigError;
use super::fields::check_len;
use super::model::Thing;
use super::scoped::with_store;
use crate::constants::{keys, limits};
use crate::interfaces::{ConfigStore, StoreOpener};

const EMPTY: &str = "";

/// Which halves of the credentials [`clear_credentials`] managed to erase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CredentialsCleared {
    pub token_erased: bool,
    pub id_erased: bool,
}

impl CredentialsCleared {
    pub fn is_complete(&self) -> bool {
        self.token_erased && self.id_erased
    }
}

fn check_credentials(id: &str, token: &str) -> Result<(), ConfigError> {
    let group = keys::CREDENTIALS_GROUP;
    if id.is_empty() || token.is_empty() {
        return Err(ConfigError::invalid(group, "thing id and token must not be empty"));
    }
    check_len(group, keys::THING_ID, id, limits::THING_ID_LEN)?;
    check_len(group, keys::THING_TOKEN, token, limits::THING_TOKEN_LEN)
}

/// Write token then id to an open store, rolling the token back if the id
/// cannot be written
pub fn write_credentials<S: ConfigStore>(
    store: &S,
    id: &str,
    token: &str,
) -> Result<(), ConfigError> {
    let group = keys::CREDENTIALS_GROUP;
    check_credentials(id, token)?;

    store
        .write_string(group, keys::THING_TOKEN, token)
        .map_err(|source| ConfigError::WriteFailed {
            group: group.to_string(),
            key: keys::THING_TOKEN.to_string(),
            source,
        })?;

    if let Err(id_error) = store.write_string(group, keys::THING_ID, id) {
        log::error!("Failed to store thing id: {id_error}; erasing thing token");
        return match store.write_string(group, keys::THING_TOKEN, EMPTY) {
            Ok(()) => Err(ConfigError::WriteFailed {
                group: group.to_string(),
                key: keys::THING_ID.to_string(),
                source: id_error,
            }),
            Err(rollback_error) => {
                log::error!("Failed to erase thing token after failed id write: {rollback_error}");
                Err(ConfigError::CompensationFailed {
                    id_error,
                    rollback_error,
                })
            }
        };
    }
    Ok(())
}

/// Store the credentials handed out by the cloud, and adopt them in `thing`
/// once both are written
pub fn store_credentials<O: StoreOpener + ?Sized>(
    opener: &O,
    path: &Path,
    thing: &mut Thing,
    id: &str,
    token: &str,
) -> Result<(), ConfigError> {
    check_credentials(id, token)?;
    let res = with_store(opener, path, |store| write_credentials(store, id, token));
    if let Err(e) = &res {
        log::error!("Failed to store device credentials: {e}");
        // the token was rolled back to empty in the store
        if matches!(e, ConfigError::WriteFailed { key, .. } if key == keys::THING_ID) {
            thing.credentials.thing_token = None;
        }
    }
    res?;
    thing.credentials.thing_id = Some(id.to_string());
    thing.credentials.thing_token = Some(token.to_string());
    log::info!("Stored credentials for thing {id}");
    Ok(())
}

/// Erase token then id in an open store. Each half is attempted on its own; a
/// failed erase is logged and leaves the in-memory value in place.
pub fn erase_credentials<S: ConfigStore>(store: &S, thing: &mut Thing) -> CredentialsCleared {
    let group = keys::CREDENTIALS_GROUP;

    let token_erased = match store.write_string(group, keys::THING_TOKEN, EMPTY) {
        Ok(()) => {
            thing.credentials.thing_token = None;
            true
        }
        Err(e) => {
            log::error!("Failed to erase thing token: {e}");
            false
        }
    };

    let id_erased = match store.write_string(group, keys::THING_ID, EMPTY) {
        Ok(()) => {
            thing.credentials.thing_id = None;
            true
        }
        Err(e) => {
            log::error!("Failed to erase thing id: {e}");
            false
        }
    };

    CredentialsCleared {
        token_erased,
        id_erased,
    }
}

pub fn clear_credentials<O: StoreOpener + ?Sized>(
    opener: &O,
    path: &Path,
    thing: &mut Thing,
) -> Result<CredentialsCleared, ConfigError> {
    let cleared = with_store(opener, path, |store| Ok(erase_credentials(store, thing)))?;
    if !cleared.is_complete() {
        log::error!("Failed to clear device credentials: {cleared:?}");
    }
    Ok(cleared)
}
