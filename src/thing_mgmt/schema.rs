use serde::Serialize;

use super::catalog::{Catalog, TypeId, Unit};
use super::error::ConfigError;
use super::fields;
use crate::constants::{keys, limits};
use crate::interfaces::ConfigStore;

/// Representation of a data item's value, using the protocol's numeric codes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "i32")]
pub enum ValueType {
    Int = 1,
    Float = 2,
    Bool = 3,
    Raw = 4,
    Int64 = 5,
    Uint = 6,
    Uint64 = 7,
}

impl ValueType {
    pub const ALL: [ValueType; 7] = [
        ValueType::Int,
        ValueType::Float,
        ValueType::Bool,
        ValueType::Raw,
        ValueType::Int64,
        ValueType::Uint,
        ValueType::Uint64,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ValueType {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, i32> {
        ValueType::ALL
            .into_iter()
            .find(|v| v.code() == value)
            .ok_or(value)
    }
}

impl From<ValueType> for i32 {
    fn from(value: ValueType) -> Self {
        value.code()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub name: String,
    pub value_type: ValueType,
    pub unit: Unit,
    pub type_id: TypeId,
}

/// Read and validate the schema of one data item group
pub fn read_schema<S, C>(store: &S, group: &str, catalog: &C) -> Result<Schema, ConfigError>
where
    S: ConfigStore,
    C: Catalog + ?Sized,
{
    let name = fields::required_text(store, group, keys::SCHEMA_NAME, limits::DATA_NAME_LEN)?;

    let value_type: i32 = fields::required(store, group, keys::SCHEMA_VALUE_TYPE)?;
    let value_type = ValueType::try_from(value_type)
        .map_err(|code| ConfigError::invalid(group, format!("unknown value type {code}")))?;

    let unit: i32 = fields::required(store, group, keys::SCHEMA_UNIT)?;
    let unit = u16::try_from(unit)
        .map(Unit)
        .map_err(|_| ConfigError::invalid(group, format!("unit {unit} out of range")))?;

    let type_id: i32 = fields::required(store, group, keys::SCHEMA_TYPE_ID)?;
    let type_id = u16::try_from(type_id)
        .map(TypeId)
        .map_err(|_| ConfigError::invalid(group, format!("type id {type_id} out of range")))?;

    if !catalog.schema_is_valid(type_id, value_type, unit) {
        return Err(ConfigError::invalid(
            group,
            format!("type id {type_id:?} does not accept value type {value_type:?} with unit {unit:?}"),
        ));
    }

    Ok(Schema {
        name,
        value_type,
        unit,
        type_id,
    })
}
