//! Durable store of completed classifications.
//!
//! Records are append-only: insert once, list newest-first, delete by id.
//! There is no update path. Recency ordering comes from each record's
//! creation timestamp, stored as epoch milliseconds.

mod migration;

pub use migration::run_migrations;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::classifier::PipelineKind;

#[derive(Debug, Clone, Serialize)]
pub struct ClassificationRecord {
    pub id: String,
    pub input: String,
    pub verdict: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct RecordStore {
    pool: SqlitePool,
}

impl RecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist one completed classification. Immutable once written.
    pub async fn insert(
        &self,
        kind: PipelineKind,
        input: &str,
        verdict: &str,
    ) -> Result<ClassificationRecord> {
        let id = uuid::Uuid::new_v4().to_string();
        let created_at = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO classification_records (id, kind, input, verdict, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&id)
        .bind(kind.as_str())
        .bind(input)
        .bind(verdict)
        .bind(created_at.timestamp_millis())
        .execute(&self.pool)
        .await
        .context("Failed to insert classification record")?;

        Ok(ClassificationRecord {
            id,
            input: input.to_string(),
            verdict: verdict.to_string(),
            created_at,
        })
    }

    /// Most recent records for one pipeline, newest first, capped at `limit`.
    pub async fn list_recent(
        &self,
        kind: PipelineKind,
        limit: i64,
    ) -> Result<Vec<ClassificationRecord>> {
        let rows: Vec<(String, String, String, i64)> = sqlx::query_as(
            r#"
            SELECT id, input, verdict, created_at
            FROM classification_records
            WHERE kind = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(kind.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch classification records")?;

        Ok(rows
            .into_iter()
            .map(|(id, input, verdict, ts)| ClassificationRecord {
                id,
                input,
                verdict,
                created_at: DateTime::from_timestamp_millis(ts).unwrap_or_default(),
            })
            .collect())
    }

    /// Delete one record. Deleting an id that does not exist is a no-op.
    pub async fn delete(&self, kind: PipelineKind, id: &str) -> Result<()> {
        sqlx::query("DELETE FROM classification_records WHERE kind = $1 AND id = $2")
            .bind(kind.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete classification record")?;

        Ok(())
    }
}
