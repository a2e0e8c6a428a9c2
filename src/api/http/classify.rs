// src/api/http/classify.rs
// POST handlers for the two classification pipelines.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

use crate::api::error::ApiError;
use crate::classifier::PipelineKind;
use crate::gateway::{self, GatewayError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckUrlRequest {
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckSmsRequest {
    #[serde(default)]
    pub sms: Option<String>,
}

pub async fn check_url_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckUrlRequest>,
) -> Result<Json<Value>, ApiError> {
    check(state, PipelineKind::Url, req.url).await
}

pub async fn check_sms_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CheckSmsRequest>,
) -> Result<Json<Value>, ApiError> {
    check(state, PipelineKind::Sms, req.sms).await
}

async fn check(
    state: Arc<AppState>,
    kind: PipelineKind,
    input: Option<String>,
) -> Result<Json<Value>, ApiError> {
    let input = input.unwrap_or_default();
    info!(kind = %kind, input = %input, "Checking input");

    match gateway::classify_and_store(&state, kind, &input).await {
        Ok(record) => {
            let mut body = serde_json::Map::new();
            body.insert(kind.input_field().to_string(), Value::String(record.input));
            body.insert("prediction".to_string(), Value::String(record.verdict));
            Ok(Json(Value::Object(body)))
        }
        Err(GatewayError::EmptyInput) => Err(ApiError::bad_request(kind.missing_input_message())),
        Err(GatewayError::Classification(e)) => {
            error!(kind = %kind, error = %e, "Classifier invocation failed");
            Err(ApiError::internal("Error processing request"))
        }
        Err(GatewayError::Storage(e)) => {
            error!(kind = %kind, error = %e, "Failed to persist classification");
            Err(ApiError::internal("Database error"))
        }
    }
}
