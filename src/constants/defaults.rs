pub const LOG_LEVEL: &str = "INFO";
pub const CONFIG_DIR: &str = "./conf";

pub const DEVICE_DB_FILE: &str = "device.db";
pub const CLOUD_DB_FILE: &str = "cloud.db";
pub const CREDENTIALS_DB_FILE: &str = "credentials.db";
