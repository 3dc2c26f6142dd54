use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

const TABLENAME: &str = "kvstore";
const GROUP_FIELD: &str = "grp";
const KEY_FIELD: &str = "key";
const VALUE_FIELD: &str = "value";

#[derive(Error, Debug)]
pub enum KVStoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("could not (de)serialize value: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

/// Grouped key/value store backed by a single SQLite table.
///
/// Each entry is addressed by a `(group, key)` pair and holds a JSON-encoded
/// value. Groups exist implicitly for as long as they hold at least one key.
pub struct KVDb(Connection);

impl KVDb {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, KVStoreError> {
        log::debug!("Opening KV store at {}", path.as_ref().display());
        // Create directory for DB if it doesn't already exist
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let connection = Connection::open(path)?;
        connection.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS '{TABLENAME}' (
                {GROUP_FIELD} TEXT NOT NULL,
                {KEY_FIELD} TEXT NOT NULL,
                {VALUE_FIELD} BLOB NOT NULL,
                PRIMARY KEY ({GROUP_FIELD}, {KEY_FIELD})
                )"
            ),
            [],
        )?;
        Ok(KVDb(connection))
    }

    pub fn get_raw(&self, group: &str, key: &str) -> Result<Option<Vec<u8>>, KVStoreError> {
        self.0
            .query_row(
                &format!(
                    "SELECT {VALUE_FIELD} FROM '{TABLENAME}' WHERE {GROUP_FIELD} = ?1 AND {KEY_FIELD} = ?2"
                ),
                params![group, key],
                |r| r.get::<_, Vec<u8>>(0),
            )
            .optional()
            .map_err(Into::into)
    }

    pub fn get<T: DeserializeOwned>(
        &self,
        group: &str,
        key: &str,
    ) -> Result<Option<T>, KVStoreError> {
        self.get_raw(group, key)?
            .map(|v| serde_json::from_slice::<T>(&v))
            .transpose()
            .map_err(Into::into)
    }

    pub fn set_raw(&self, group: &str, key: &str, value: &str) -> Result<(), KVStoreError> {
        let mut stmt = self.0.prepare_cached(&format!(
            "INSERT INTO '{TABLENAME}' ({GROUP_FIELD}, {KEY_FIELD}, {VALUE_FIELD}) values (?1, ?2, ?3)
            ON CONFLICT({GROUP_FIELD}, {KEY_FIELD}) DO UPDATE SET {VALUE_FIELD}=?3",
        ))?;
        let res = stmt.execute(params![group, key, value.as_bytes()])?;
        log::trace!("Upserted {group}/{key}: {res} row(s)");
        Ok(())
    }

    pub fn set<V: Serialize + ?Sized>(
        &self,
        group: &str,
        key: &str,
        value: &V,
    ) -> Result<(), KVStoreError> {
        self.set_raw(group, key, &serde_json::to_string(value)?)
    }

    /// Remove a key; returns whether anything was deleted
    pub fn remove(&self, group: &str, key: &str) -> Result<bool, KVStoreError> {
        let res = self.0.execute(
            &format!("DELETE FROM '{TABLENAME}' WHERE {GROUP_FIELD} = ?1 AND {KEY_FIELD} = ?2"),
            params![group, key],
        )?;
        Ok(res > 0)
    }

    pub fn contains(&self, group: &str, key: &str) -> Result<bool, KVStoreError> {
        Ok(self.get_raw(group, key)?.is_some())
    }

    /// Names of all groups starting with `prefix`, in order of first insertion
    pub fn groups_with_prefix(&self, prefix: &str) -> Result<Vec<String>, KVStoreError> {
        let mut stmt = self.0.prepare(&format!(
            "SELECT {GROUP_FIELD} FROM '{TABLENAME}'
            WHERE substr({GROUP_FIELD}, 1, length(?1)) = ?1
            GROUP BY {GROUP_FIELD} ORDER BY MIN(rowid)"
        ))?;
        let groups = stmt
            .query_map([prefix], |r| r.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(groups)
    }

    pub fn close(self) -> Result<(), KVStoreError> {
        self.0.close().map_err(|(_, e)| e.into())
    }
}
