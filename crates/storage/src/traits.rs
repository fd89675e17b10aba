//! Storage backend trait abstraction
//!
//! Handlers receive the store as an explicit `Arc<dyn EngagementStore>`
//! dependency, so tests can substitute an in-memory double.

use async_trait::async_trait;

use crate::error::StorageError;
use pulse_core::{ContentCounts, LikeReceipt};

/// Engagement counter operations.
#[async_trait]
pub trait EngagementStore: Send + Sync {
    /// All tracked content with aggregate view/like counts, ordered
    /// ascending by slug (database collation). One aggregate query, no
    /// per-item lookups.
    async fn list_content(&self) -> Result<Vec<ContentCounts>, StorageError>;

    /// Record one like for `slug` from `session_id`.
    ///
    /// Upserts the content row if absent, then appends a like — unless the
    /// session already holds [`pulse_core::MAX_LIKES_PER_SESSION`] likes for
    /// the slug, in which case `LikeCapReached` is returned and nothing is
    /// written. Check and insert run in one transaction.
    async fn record_like(
        &self,
        slug: &str,
        session_id: &str,
    ) -> Result<LikeReceipt, StorageError>;

    /// How many likes `session_id` currently holds for `slug`.
    async fn session_like_count(
        &self,
        slug: &str,
        session_id: &str,
    ) -> Result<u64, StorageError>;
}
