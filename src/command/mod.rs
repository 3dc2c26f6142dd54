mod check;
mod credentials;
mod kvs;

pub use check::check;
pub use credentials::{clear_credentials, store_credentials};
pub use kvs::{kvs_get, kvs_set};
