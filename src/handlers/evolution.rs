//! Evolution endpoints: dated progress notes, append-only.

use crate::auth::AuthUser;
use crate::error::AppError;
use crate::model::{Evolution, EvolutionForm};
use crate::service::RecordService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

/// Newest first.
pub async fn list(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(patient_id): Path<i64>,
) -> Result<Json<Vec<Evolution>>, AppError> {
    let rows = RecordService::list_evolutions(&state.pool, caller.id, patient_id).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(patient_id): Path<i64>,
    Json(form): Json<EvolutionForm>,
) -> Result<Json<Value>, AppError> {
    RecordService::add_evolution(&state.pool, caller.id, patient_id, &form).await?;
    Ok(Json(json!({ "success": true })))
}
