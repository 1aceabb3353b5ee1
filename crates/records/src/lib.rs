//! Domain records for the BlazorCrud demo database and the stores that persist them.

pub mod database;
pub mod errors;
pub mod models;
pub mod store;

pub use database::{PgRecord, PgStore, migrate};
pub use errors::StoreError;
pub use store::{MemoryStore, Record, RecordStore};
