//! Wire-facing engagement shapes shared by storage and HTTP layers.

use serde::{Deserialize, Serialize};

/// Aggregate engagement counts for one content item, as returned by the
/// listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCounts {
    /// Unique human-readable content identifier.
    pub slug: String,
    /// Number of recorded views.
    pub views: u64,
    /// Number of recorded likes across all sessions.
    pub likes: u64,
}

/// Result of recording one like: updated aggregates plus the caller's own
/// like count for the slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeReceipt {
    pub content_views: u64,
    pub content_likes: u64,
    /// Likes the requesting session now holds for this slug, including the
    /// one just recorded.
    pub likes_by_user: u64,
}
