//! Differential write-back of one data item's schema and event configuration

use std::path::Path;

use super::error::ConfigError;
use super::event::{EventConfig, LimitValue};
use super::model::Thing;
use super::scoped::with_store;
use super::schema::{Schema, ValueType};
use crate::constants::keys;
use crate::interfaces::{ConfigStore, StoreError, StoreOpener};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The data item was found in `group` and every field was written
    Updated { group: String },
    /// No stored data item has the requested sensor id; nothing was written
    NotFound,
}

fn write_limit<S: ConfigStore>(
    store: &S,
    group: &str,
    key: &str,
    limit: LimitValue,
) -> Result<(), StoreError> {
    match limit {
        LimitValue::Int(v) => store.write_int(group, key, v),
        LimitValue::Float(v) => store.write_float(group, key, v),
        LimitValue::Bool(v) => store.write_bool(group, key, v),
        LimitValue::Int64(v) => store.write_int64(group, key, v),
        LimitValue::Uint(v) => store.write_uint(group, key, v),
        LimitValue::Uint64(v) => store.write_uint64(group, key, v),
    }
}

/// Keeps going after a failed write, remembering which keys failed
struct FieldWriter<'a, S> {
    store: &'a S,
    group: &'a str,
    failed: Vec<&'static str>,
}

impl<S: ConfigStore> FieldWriter<'_, S> {
    fn record(&mut self, key: &'static str, res: Result<(), StoreError>) {
        if let Err(e) = res {
            log::error!("Failed to set new {key} in {}: {e}", self.group);
            self.failed.push(key);
        }
    }

    fn reject(&mut self, key: &'static str, reason: &str) {
        log::error!("Not setting {key} in {}: {reason}", self.group);
        self.failed.push(key);
    }

    /// Write the value if there is one; otherwise make sure the key is gone
    fn write_or_remove<T>(
        &mut self,
        key: &'static str,
        value: Option<T>,
        write: impl FnOnce(&S, &str, &str, T) -> Result<(), StoreError>,
    ) {
        let res = match value {
            Some(value) => write(self.store, self.group, key, value),
            None => match self.store.has_key(self.group, key) {
                Ok(true) => self.store.remove_key(self.group, key),
                Ok(false) => Ok(()),
                Err(e) => Err(e),
            },
        };
        self.record(key, res);
    }
}

fn write_schema<S: ConfigStore>(writer: &mut FieldWriter<'_, S>, schema: &Schema) {
    let (store, group) = (writer.store, writer.group);
    writer.record(
        keys::SCHEMA_TYPE_ID,
        store.write_int(group, keys::SCHEMA_TYPE_ID, schema.type_id.0.into()),
    );
    writer.record(
        keys::SCHEMA_UNIT,
        store.write_int(group, keys::SCHEMA_UNIT, schema.unit.0.into()),
    );
    writer.record(
        keys::SCHEMA_VALUE_TYPE,
        store.write_int(group, keys::SCHEMA_VALUE_TYPE, schema.value_type.code()),
    );
    writer.record(
        keys::SCHEMA_NAME,
        store.write_string(group, keys::SCHEMA_NAME, &schema.name),
    );
}

fn write_event<S: ConfigStore>(
    writer: &mut FieldWriter<'_, S>,
    value_type: ValueType,
    event: &EventConfig,
) {
    writer.write_or_remove(keys::EVENT_TIME_SEC, event.time_sec(), |s, g, k, v| {
        s.write_uint(g, k, v)
    });
    writer.write_or_remove(
        keys::EVENT_CHANGE,
        event.on_change().then_some(true),
        |s, g, k, v| s.write_bool(g, k, v),
    );
    for (key, limit) in [
        (keys::EVENT_LOWER_THRESHOLD, event.lower_limit()),
        (keys::EVENT_UPPER_THRESHOLD, event.upper_limit()),
    ] {
        match limit {
            Some(limit) if limit.value_type() != value_type => writer.reject(
                key,
                &format!("{:?} limit for a {value_type:?} data item", limit.value_type()),
            ),
            _ => writer.write_or_remove(key, limit, write_limit),
        }
    }
}

fn find_group<S: ConfigStore>(store: &S, sensor_id: u32) -> Result<Option<String>, ConfigError> {
    for group in store.groups_with_prefix(keys::DATA_ITEM_GROUP_PFX)? {
        match store.read_uint(&group, keys::SENSOR_ID) {
            Ok(Some(id)) if id == sensor_id => return Ok(Some(group)),
            Ok(_) | Err(StoreError::Decode { .. }) => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(None)
}

/// Rewrite the stored data item with `sensor_id` in an open store.
///
/// Schema fields are always written. Event fields are written for the
/// triggers `event` enables and removed for the others, unless `event` is
/// marked unregistered, in which case the stored event is left alone. A failed
/// write does not stop the remaining ones, so [`ConfigError::PartialUpdate`]
/// means some fields may already hold the new values.
pub fn write_data_item<S: ConfigStore>(
    store: &S,
    sensor_id: u32,
    schema: &Schema,
    event: &EventConfig,
) -> Result<UpdateOutcome, ConfigError> {
    let Some(group) = find_group(store, sensor_id)? else {
        log::warn!("No stored data item with sensor id {sensor_id}; nothing updated");
        return Ok(UpdateOutcome::NotFound);
    };

    let mut writer = FieldWriter {
        store,
        group: &group,
        failed: Vec::new(),
    };
    write_schema(&mut writer, schema);
    if !event.is_unregistered() {
        write_event(&mut writer, schema.value_type, event);
    }

    if !writer.failed.is_empty() {
        return Err(ConfigError::PartialUpdate {
            sensor_id,
            failed: writer.failed,
            group,
        });
    }
    Ok(UpdateOutcome::Updated { group })
}

/// Update a data item in the device store at `path` and, once the store holds
/// the new configuration, in `thing` as well
pub fn update_data_item<O: StoreOpener + ?Sized>(
    opener: &O,
    path: &Path,
    thing: &mut Thing,
    sensor_id: u32,
    schema: &Schema,
    event: &EventConfig,
) -> Result<UpdateOutcome, ConfigError> {
    let outcome = with_store(opener, path, |store| {
        write_data_item(store, sensor_id, schema, event)
    })?;

    if let UpdateOutcome::Updated { group } = &outcome {
        log::info!("Data item {sensor_id} updated in {group}");
        if let Some(item) = thing.data_items.get_mut(sensor_id) {
            item.schema = schema.clone();
            if !event.is_unregistered() {
                item.event = event.clone();
            }
        }
    }
    Ok(outcome)
}
