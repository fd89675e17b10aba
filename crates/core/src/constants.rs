//! Shared constants for pulse.
//!
//! Centralizes magic numbers so storage and HTTP layers agree on limits.

/// Maximum likes a single session may record for one content slug.
pub const MAX_LIKES_PER_SESSION: i64 = 5;

/// Maximum slug length in bytes.
pub const MAX_SLUG_LEN: usize = 255;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Cookie name carrying the visitor session identifier.
pub const SESSION_COOKIE_NAME: &str = "sid";
