//! Typed error enum for the storage layer.
//!
//! Enables callers to match on specific failure modes (cap reached,
//! transient DB errors) instead of downcasting opaque boxes.

use thiserror::Error;

use pulse_core::MAX_LIKES_PER_SESSION;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Session already holds the maximum number of likes for this slug.
    /// The enclosing transaction is rolled back; no row is written.
    #[error("max like count is {} for slug '{slug}'", MAX_LIKES_PER_SESSION)]
    LikeCapReached { slug: String, session_id: String },

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)))
    }

    /// Whether this error is the per-session like cap.
    pub fn is_cap_reached(&self) -> bool {
        matches!(self, Self::LikeCapReached { .. })
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}
