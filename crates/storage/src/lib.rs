//! Storage layer for pulse
//!
//! PostgreSQL-backed engagement counters via sqlx. The per-session like cap
//! is enforced inside a single transaction so concurrent submissions cannot
//! exceed it.

mod error;
mod pg_migrations;
mod pg_storage;
mod traits;

pub use error::StorageError;
pub use pg_migrations::run_migrations;
pub use pg_storage::PgStorage;
pub use traits::EngagementStore;
