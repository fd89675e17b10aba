//! PostgreSQL schema migrations for pulse storage.

use anyhow::Result;
use sqlx::PgPool;

/// Run all PostgreSQL migrations. Idempotent.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS content_meta (
            slug TEXT PRIMARY KEY,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS likes (
            id BIGSERIAL PRIMARY KEY,
            slug TEXT NOT NULL REFERENCES content_meta(slug),
            session_id TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // The cap check counts rows per (slug, session); keep that lookup indexed.
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_likes_slug_session ON likes (slug, session_id)",
    )
    .execute(pool)
    .await?;

    // Views are written by an external tracker; this service only reads them.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS views (
            id BIGSERIAL PRIMARY KEY,
            slug TEXT NOT NULL REFERENCES content_meta(slug),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_views_slug ON views (slug)")
        .execute(pool)
        .await?;

    Ok(())
}
