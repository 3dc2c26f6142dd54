//! Typed field reads shared by the section readers

use serde::de::DeserializeOwned;

use super::error::ConfigError;
use crate::interfaces::ConfigStore;

pub(crate) fn optional<S, T>(store: &S, group: &str, key: &str) -> Result<Option<T>, ConfigError>
where
    S: ConfigStore,
    T: DeserializeOwned,
{
    store.read::<T>(group, key).map_err(Into::into)
}

pub(crate) fn required<S, T>(store: &S, group: &str, key: &str) -> Result<T, ConfigError>
where
    S: ConfigStore,
    T: DeserializeOwned,
{
    optional(store, group, key)?
        .ok_or_else(|| ConfigError::invalid(group, format!("missing required key {key}")))
}

/// Optional text; when present it must fit in `max_len` bytes
pub(crate) fn optional_text<S: ConfigStore>(
    store: &S,
    group: &str,
    key: &str,
    max_len: usize,
) -> Result<Option<String>, ConfigError> {
    let value: Option<String> = optional(store, group, key)?;
    if let Some(text) = &value {
        check_len(group, key, text, max_len)?;
    }
    Ok(value)
}

/// Required, non-empty text of at most `max_len` bytes
pub(crate) fn required_text<S: ConfigStore>(
    store: &S,
    group: &str,
    key: &str,
    max_len: usize,
) -> Result<String, ConfigError> {
    let text: String = required(store, group, key)?;
    if text.is_empty() {
        return Err(ConfigError::invalid(group, format!("{key} must not be empty")));
    }
    check_len(group, key, &text, max_len)?;
    Ok(text)
}

pub(crate) fn check_len(
    group: &str,
    key: &str,
    text: &str,
    max_len: usize,
) -> Result<(), ConfigError> {
    if text.len() > max_len {
        return Err(ConfigError::invalid(
            group,
            format!("{key} is {} bytes long, at most {max_len} allowed", text.len()),
        ));
    }
    Ok(())
}
