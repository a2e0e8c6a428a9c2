//! End-to-end orchestration of one classification request.
//!
//! Validate, invoke, normalize, persist, strictly in that order, no retries.
//! The record is committed before success is reported; a caller never sees a
//! verdict that was not stored.

use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::classifier::{self, InvokeError, PipelineKind};
use crate::state::AppState;
use crate::store::ClassificationRecord;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("input text is required")]
    EmptyInput,
    #[error("classification failed: {0}")]
    Classification(#[from] InvokeError),
    #[error("storage failed: {0}")]
    Storage(#[source] anyhow::Error),
}

pub async fn classify_and_store(
    state: &AppState,
    kind: PipelineKind,
    input: &str,
) -> Result<ClassificationRecord, GatewayError> {
    // Rejected before anything is spawned or stored
    if input.trim().is_empty() {
        return Err(GatewayError::EmptyInput);
    }

    let command = state.classifier.command_for(kind);
    let timeout = Duration::from_secs(state.classifier.timeout_secs);

    let lines = classifier::run_classifier(command, input, timeout).await?;

    // Everything before the last line is classifier log noise
    let last = lines.last().map(String::as_str).unwrap_or("");
    let verdict = classifier::normalize(kind, last);

    let record = state
        .store
        .insert(kind, input, verdict)
        .await
        .map_err(GatewayError::Storage)?;

    info!(kind = %kind, verdict = %verdict, id = %record.id, "Classification stored");
    Ok(record)
}
