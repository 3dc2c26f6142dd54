pub mod bit_width;
pub mod catalog;
pub mod credentials;
pub mod data_items;
pub mod error;
pub mod event;
mod fields;
pub mod model;
pub mod properties;
pub mod schema;
mod scoped;
pub mod settings;
pub mod update;

pub use catalog::{Catalog, StandardCatalog, TypeId, Unit};
pub use credentials::{clear_credentials, store_credentials, CredentialsCleared};
pub use error::ConfigError;
pub use event::{EventConfig, EventFlag, EventFlags, LimitValue};
pub use model::{Addressing, CloudEndpoint, Credentials, DataItem, DataItems, DriverProperties, Thing};
pub use properties::create_thing;
pub use schema::{Schema, ValueType};
pub use settings::ThingSettings;
pub use update::{update_data_item, UpdateOutcome};
