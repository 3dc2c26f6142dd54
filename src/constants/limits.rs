//! Maximum lengths (in bytes) and admissible ranges for configuration values

pub const THING_NAME_LEN: usize = 63;
pub const THING_ID_LEN: usize = 36;
pub const THING_TOKEN_LEN: usize = 40;
pub const DATA_NAME_LEN: usize = 63;

pub const PROTOCOL_TYPE_LEN: usize = 29;
pub const NAME_TYPE_LEN: usize = 29;
pub const LOGIN_LEN: usize = 63;
pub const PASSWORD_LEN: usize = 63;
pub const SECURITY_LEN: usize = 63;

pub const IDENTIFIER_TYPE_LEN: usize = 29;
pub const IDENTIFIER_LEN: usize = 127;
pub const TAG_NAME_LEN: usize = 127;
pub const PATH_LEN: usize = 255;

pub const DRIVER_MIN_ID: i32 = 1;
pub const DRIVER_MAX_ID: i32 = 247;

pub const EVENT_MIN_TIME_SEC: u32 = 1;
pub const EVENT_MAX_TIME_SEC: u32 = u16::MAX as u32;
