// src/api/http/history.rs
// Read and delete access to stored classifications.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::error;

use crate::api::error::ApiError;
use crate::classifier::PipelineKind;
use crate::state::AppState;

pub async fn stored_urls_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    list(state, PipelineKind::Url).await
}

pub async fn stored_sms_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    list(state, PipelineKind::Sms).await
}

pub async fn delete_url_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    remove(state, PipelineKind::Url, id).await
}

pub async fn delete_sms_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    remove(state, PipelineKind::Sms, id).await
}

async fn list(state: Arc<AppState>, kind: PipelineKind) -> Result<Json<Value>, ApiError> {
    let records = state
        .store
        .list_recent(kind, state.history_limit)
        .await
        .map_err(|e| {
            error!(kind = %kind, error = %e, "Failed to fetch stored records");
            ApiError::internal("Error retrieving data")
        })?;

    let body: Vec<Value> = records
        .into_iter()
        .map(|r| {
            let mut obj = serde_json::Map::new();
            obj.insert("id".to_string(), Value::String(r.id));
            obj.insert(kind.input_field().to_string(), Value::String(r.input));
            obj.insert("prediction".to_string(), Value::String(r.verdict));
            obj.insert("timestamp".to_string(), json!(r.created_at));
            Value::Object(obj)
        })
        .collect();

    Ok(Json(Value::Array(body)))
}

async fn remove(
    state: Arc<AppState>,
    kind: PipelineKind,
    id: String,
) -> Result<Json<Value>, ApiError> {
    // Missing ids are a no-op; only a store failure is an error
    state.store.delete(kind, &id).await.map_err(|e| {
        error!(kind = %kind, id = %id, error = %e, "Failed to delete record");
        ApiError::internal("Error deleting record")
    })?;

    Ok(Json(json!({ "message": "Deleted successfully" })))
}
