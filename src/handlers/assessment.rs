//! Assessment endpoints: one evaluation per patient, read or upserted.

use crate::auth::AuthUser;
use crate::error::AppError;
use crate::model::{Assessment, AssessmentForm};
use crate::service::RecordService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

/// Returns the row, or JSON null when the patient has no assessment yet.
pub async fn get(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(patient_id): Path<i64>,
) -> Result<Json<Option<Assessment>>, AppError> {
    let row = RecordService::get_assessment(&state.pool, caller.id, patient_id).await?;
    Ok(Json(row))
}

pub async fn upsert(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(patient_id): Path<i64>,
    Json(form): Json<AssessmentForm>,
) -> Result<Json<Value>, AppError> {
    RecordService::upsert_assessment(&state.pool, caller.id, patient_id, &form).await?;
    Ok(Json(json!({ "success": true })))
}
