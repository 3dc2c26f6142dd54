// Groups
pub const THING_GROUP: &str = "Thing";
pub const CLOUD_GROUP: &str = "Cloud";
pub const CREDENTIALS_GROUP: &str = "Credentials";
pub const DATA_ITEM_GROUP_PFX: &str = "DataItem";

// Thing group
pub const THING_NAME: &str = "Name";
pub const DRIVER_URL: &str = "DriverUrl";
pub const DRIVER_PROTOCOL_TYPE: &str = "ProtocolType";
pub const DRIVER_NAME_TYPE: &str = "NameType";
pub const DRIVER_LOGIN: &str = "Login";
pub const DRIVER_PASSWORD: &str = "Password";
pub const DRIVER_SECURITY: &str = "Security";
pub const DRIVER_ID: &str = "DriverId";
pub const DATA_TYPE_ENDIANNESS: &str = "Endianness";

// Cloud group
pub const BROKER_URL: &str = "BrokerUrl";
pub const USER_TOKEN: &str = "UserToken";

// Credentials group
pub const THING_ID: &str = "ThingId";
pub const THING_TOKEN: &str = "ThingToken";

// Data item groups: schema
pub const SENSOR_ID: &str = "SensorId";
pub const SCHEMA_NAME: &str = "Name";
pub const SCHEMA_VALUE_TYPE: &str = "ValueType";
pub const SCHEMA_UNIT: &str = "Unit";
pub const SCHEMA_TYPE_ID: &str = "TypeId";

// Data item groups: event
pub const EVENT_LOWER_THRESHOLD: &str = "LowerThreshold";
pub const EVENT_UPPER_THRESHOLD: &str = "UpperThreshold";
pub const EVENT_TIME_SEC: &str = "TimeSec";
pub const EVENT_CHANGE: &str = "Change";

// Data item groups: addressing
pub const DATA_NAMESPACE: &str = "Namespace";
pub const DATA_IDENTIFIER_TYPE: &str = "IdentifierType";
pub const DATA_IDENTIFIER: &str = "Identifier";
pub const DATA_TAG_NAME: &str = "TagName";
pub const DATA_PATH: &str = "Path";
pub const DATA_ELEMENT_SIZE: &str = "ElementSize";
pub const DATA_REG_ADDRESS: &str = "RegisterAddress";
pub const DATA_BIT_SIZE: &str = "BitSize";
