//! Database module: row records, schema and the SQLite storage client.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL applied at startup (SQLite-first)
//! - `sqlite.rs`: pooled storage client with the create/read operations

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DbImage, DbUser, NewImage, NewUser};
pub use schema::SQLITE_INIT;
pub use sqlite::{InsertUserOutcome, SqlitePool, Storage};
