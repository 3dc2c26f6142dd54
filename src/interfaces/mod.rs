mod kv;
mod mem_store;
mod store;

pub mod kvpath;

pub use kv::SqliteOpener;
pub use mem_store::{MemOpener, MemStore};
pub use store::{ConfigStore, StoreError, StoreOpener};
