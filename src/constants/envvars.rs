pub const CONFIG_DIR: &str = "THINGD_CONFIG_DIR";
pub const DEVICE_DB: &str = "THINGD_DEVICE_DB";
pub const CLOUD_DB: &str = "THINGD_CLOUD_DB";
pub const CREDENTIALS_DB: &str = "THINGD_CREDENTIALS_DB";

pub const LOG_LEVEL: &str = "LOGGING_LEVEL";
