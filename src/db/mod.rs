//! Database module: models, schema and the SQLite-backed roster store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL and seed rows for bootstrapping
//! - `sqlite.rs`: `RosterStore`, the only code that issues SQL

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{DbStudent, DbTeacher, Role};
pub use schema::SQLITE_INIT;
pub use sqlite::{RosterStore, SqlitePool};
