//! Schema setup for the record store. Run at startup to guarantee the table
//! exists before serving.

use anyhow::Result;
use sqlx::{Executor, SqlitePool};

const CREATE_CLASSIFICATION_RECORDS: &str = r#"
CREATE TABLE IF NOT EXISTS classification_records (
    id TEXT PRIMARY KEY NOT NULL,
    kind TEXT NOT NULL,
    input TEXT NOT NULL,
    verdict TEXT NOT NULL,
    created_at INTEGER NOT NULL
);
"#;

const CREATE_RECENCY_INDEX: &str = r#"
CREATE INDEX IF NOT EXISTS idx_classification_records_recency
ON classification_records (kind, created_at DESC);
"#;

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    pool.execute(CREATE_CLASSIFICATION_RECORDS).await?;
    pool.execute(CREATE_RECENCY_INDEX).await?;
    Ok(())
}
