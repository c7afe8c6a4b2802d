//! Patient collection: list and create, scoped to the caller.

use crate::auth::AuthUser;
use crate::error::AppError;
use crate::model::{NewPatient, Patient};
use crate::service::RecordService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list(
    State(state): State<AppState>,
    caller: AuthUser,
) -> Result<Json<Vec<Patient>>, AppError> {
    let rows = RecordService::list_patients(&state.pool, caller.id).await?;
    Ok(Json(rows))
}

pub async fn create(
    State(state): State<AppState>,
    caller: AuthUser,
    Json(body): Json<NewPatient>,
) -> Result<Json<Patient>, AppError> {
    let row = RecordService::create_patient(&state.pool, caller.id, &body).await?;
    Ok(Json(row))
}
