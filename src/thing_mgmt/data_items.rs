//! Assembly of data items from their configuration groups

use super::bit_width::validate_bit_size;
use super::catalog::Catalog;
use super::error::ConfigError;
use super::event::read_event;
use super::fields;
use super::model::{Addressing, DataItem, DataItems};
use super::schema::{read_schema, Schema};
use crate::constants::{keys, limits};
use crate::interfaces::ConfigStore;

/// Optional non-negative integer, defaulting to zero when absent
fn non_negative_or_zero<S: ConfigStore>(
    store: &S,
    group: &str,
    key: &str,
) -> Result<u32, ConfigError> {
    let value: Option<i64> = fields::optional(store, group, key)?;
    let value = value.unwrap_or(0);
    u32::try_from(value)
        .map_err(|_| ConfigError::invalid(group, format!("{key} must be non-negative, got {value}")))
}

fn read_addressing<S: ConfigStore>(
    store: &S,
    group: &str,
    schema: &Schema,
) -> Result<Addressing, ConfigError> {
    let namespace = non_negative_or_zero(store, group, keys::DATA_NAMESPACE)?;
    let identifier_type = fields::optional_text(
        store,
        group,
        keys::DATA_IDENTIFIER_TYPE,
        limits::IDENTIFIER_TYPE_LEN,
    )?;
    let identifier =
        fields::optional_text(store, group, keys::DATA_IDENTIFIER, limits::IDENTIFIER_LEN)?;
    let tag_name = fields::optional_text(store, group, keys::DATA_TAG_NAME, limits::TAG_NAME_LEN)?;
    let path = fields::optional_text(store, group, keys::DATA_PATH, limits::PATH_LEN)?;
    let element_size = non_negative_or_zero(store, group, keys::DATA_ELEMENT_SIZE)?;

    let reg_addr: i64 = fields::required(store, group, keys::DATA_REG_ADDRESS)?;
    let reg_addr = u32::try_from(reg_addr).map_err(|_| {
        ConfigError::invalid(group, format!("register address {reg_addr} out of range"))
    })?;

    let bit_size: i32 = fields::required(store, group, keys::DATA_BIT_SIZE)?;
    let bit_size = validate_bit_size(group, bit_size, schema.value_type)?;

    Ok(Addressing {
        reg_addr,
        bit_size,
        namespace,
        element_size,
        identifier_type,
        identifier,
        tag_name,
        path,
    })
}

/// Read one data item group. `taken` holds the items assembled so far, whose
/// sensor ids may not be reused.
pub fn read_data_item<S, C>(
    store: &S,
    group: &str,
    taken: &DataItems,
    catalog: &C,
) -> Result<DataItem, ConfigError>
where
    S: ConfigStore,
    C: Catalog + ?Sized,
{
    let sensor_id: i64 = fields::required(store, group, keys::SENSOR_ID)?;
    let sensor_id = u32::try_from(sensor_id)
        .map_err(|_| ConfigError::invalid(group, format!("sensor id {sensor_id} out of range")))?;
    if taken.contains(sensor_id) {
        return Err(ConfigError::invalid(
            group,
            format!("sensor id {sensor_id} is already in use"),
        ));
    }

    let schema = read_schema(store, group, catalog)?;
    let event = read_event(store, group, schema.value_type, catalog)?;
    let addressing = read_addressing(store, group, &schema)?;

    Ok(DataItem {
        sensor_id,
        schema,
        event,
        addressing,
    })
}

/// Assemble every data item group of the device store. Any bad group fails the
/// whole collection.
pub fn read_data_items<S, C>(store: &S, catalog: &C) -> Result<DataItems, ConfigError>
where
    S: ConfigStore,
    C: Catalog + ?Sized,
{
    let mut items = DataItems::new();
    for group in store.groups_with_prefix(keys::DATA_ITEM_GROUP_PFX)? {
        let item = read_data_item(store, &group, &items, catalog).inspect_err(|e| {
            log::error!("Failed to set data item from {group}: {e}");
        })?;
        log::debug!(
            "Data item {} ({}) read from {group}",
            item.sensor_id,
            item.schema.name
        );
        items.insert(item).map_err(|item| {
            ConfigError::invalid(
                &group,
                format!("sensor id {} is already in use", item.sensor_id),
            )
        })?;
    }
    Ok(items)
}
