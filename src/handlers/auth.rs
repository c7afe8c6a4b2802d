//! Login endpoint.

use crate::error::AppError;
use crate::model::UserPublic;
use crate::service::AuthService;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserPublic,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    tracing::info!(email = %body.email, "login attempt");
    match AuthService::login(&state.pool, &state.auth, &body.email, &body.password).await {
        Ok((token, user)) => {
            tracing::info!(user = %user.name, "login succeeded");
            Ok(Json(LoginResponse {
                token,
                user: user.into(),
            }))
        }
        Err(e) => {
            tracing::warn!(email = %body.email, error = %e, "login failed");
            Err(e)
        }
    }
}
