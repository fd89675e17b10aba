//! PostgreSQL storage backend using sqlx.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;
use crate::pg_migrations::run_migrations;
use crate::traits::EngagementStore;
use pulse_core::{
    ContentCounts, LikeReceipt, MAX_LIKES_PER_SESSION, PG_POOL_ACQUIRE_TIMEOUT_SECS,
    PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }

    /// Access the underlying pool (integration tests seed fixture rows).
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Convert a COUNT(*) result to the wire type. Counts are non-negative by
/// construction; saturate rather than panic on a corrupt value.
fn count_to_u64(val: i64) -> u64 {
    u64::try_from(val).unwrap_or(0)
}

#[async_trait]
impl EngagementStore for PgStorage {
    async fn list_content(&self) -> Result<Vec<ContentCounts>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT c.slug,
                   (SELECT COUNT(*) FROM views v WHERE v.slug = c.slug) AS views,
                   (SELECT COUNT(*) FROM likes l WHERE l.slug = c.slug) AS likes
            FROM content_meta c
            ORDER BY c.slug
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(ContentCounts {
                    slug: row.try_get("slug")?,
                    views: count_to_u64(row.try_get("views")?),
                    likes: count_to_u64(row.try_get("likes")?),
                })
            })
            .collect()
    }

    async fn record_like(
        &self,
        slug: &str,
        session_id: &str,
    ) -> Result<LikeReceipt, StorageError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO content_meta (slug) VALUES ($1) ON CONFLICT (slug) DO NOTHING")
            .bind(slug)
            .execute(&mut *tx)
            .await?;

        // Row lock serializes same-slug likes so two in-flight requests from
        // one session cannot both pass the cap check.
        sqlx::query("SELECT slug FROM content_meta WHERE slug = $1 FOR UPDATE")
            .bind(slug)
            .fetch_one(&mut *tx)
            .await?;

        let prior: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM likes WHERE slug = $1 AND session_id = $2",
        )
        .bind(slug)
        .bind(session_id)
        .fetch_one(&mut *tx)
        .await?;

        if prior >= MAX_LIKES_PER_SESSION {
            // Dropping tx rolls back the upsert.
            tracing::debug!(slug, session_id, "like cap reached");
            return Err(StorageError::LikeCapReached {
                slug: slug.to_owned(),
                session_id: session_id.to_owned(),
            });
        }

        sqlx::query("INSERT INTO likes (slug, session_id) VALUES ($1, $2)")
            .bind(slug)
            .bind(session_id)
            .execute(&mut *tx)
            .await?;

        let row = sqlx::query(
            r#"
            SELECT (SELECT COUNT(*) FROM views v WHERE v.slug = $1) AS views,
                   (SELECT COUNT(*) FROM likes l WHERE l.slug = $1) AS likes
            "#,
        )
        .bind(slug)
        .fetch_one(&mut *tx)
        .await?;
        let views: i64 = row.try_get("views")?;
        let likes: i64 = row.try_get("likes")?;

        tx.commit().await?;

        Ok(LikeReceipt {
            content_views: count_to_u64(views),
            content_likes: count_to_u64(likes),
            likes_by_user: count_to_u64(prior) + 1,
        })
    }

    async fn session_like_count(
        &self,
        slug: &str,
        session_id: &str,
    ) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM likes WHERE slug = $1 AND session_id = $2",
        )
        .bind(slug)
        .bind(session_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count_to_u64(count))
    }
}
