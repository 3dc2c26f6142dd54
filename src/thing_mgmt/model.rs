use std::collections::BTreeMap;

use serde::Serialize;

use super::bit_width::BitSize;
use super::event::EventConfig;
use super::schema::Schema;

/// Physical/protocol location and encoding of a data item's value
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Addressing {
    pub reg_addr: u32,
    pub bit_size: BitSize,
    pub namespace: u32,
    pub element_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DataItem {
    pub sensor_id: u32,
    pub schema: Schema,
    pub event: EventConfig,
    pub addressing: Addressing,
}

/// Data items of a thing, keyed by sensor id
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DataItems(BTreeMap<u32, DataItem>);

impl DataItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `item` unless its sensor id is taken, in which case it is handed back
    pub fn insert(&mut self, item: DataItem) -> Result<(), DataItem> {
        if self.0.contains_key(&item.sensor_id) {
            return Err(item);
        }
        self.0.insert(item.sensor_id, item);
        Ok(())
    }

    pub fn contains(&self, sensor_id: u32) -> bool {
        self.0.contains_key(&sensor_id)
    }

    pub fn get(&self, sensor_id: u32) -> Option<&DataItem> {
        self.0.get(&sensor_id)
    }

    pub fn get_mut(&mut self, sensor_id: u32) -> Option<&mut DataItem> {
        self.0.get_mut(&sensor_id)
    }

    /// Items in ascending sensor id order
    pub fn iter(&self) -> impl Iterator<Item = &DataItem> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DriverProperties {
    pub url: String,
    pub protocol_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip)]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<String>,
    pub driver_id: u8,
    pub endianness: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CloudEndpoint {
    pub broker_url: String,
    #[serde(skip)]
    pub user_token: String,
}

/// Thing id and token handed out by the cloud on registration
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub thing_id: Option<String>,
    #[serde(skip)]
    pub thing_token: Option<String>,
}

impl Credentials {
    pub fn is_registered(&self) -> bool {
        self.thing_id.is_some() && self.thing_token.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Thing {
    pub name: String,
    pub credentials: Credentials,
    pub cloud: CloudEndpoint,
    pub driver: DriverProperties,
    pub data_items: DataItems,
}

impl Thing {
    pub fn id(&self) -> Option<&str> {
        self.credentials.thing_id.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.credentials.thing_token.as_deref()
    }

    pub fn data_item(&self, sensor_id: u32) -> Option<&DataItem> {
        self.data_items.get(sensor_id)
    }
}
