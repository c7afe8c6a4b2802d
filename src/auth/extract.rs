//! Bearer-token extractor: hands the verified caller identity to handlers.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

/// Authenticated caller, extracted from the `Authorization: Bearer` header.
///
/// Missing or non-bearer header rejects with 401; a present but unverifiable
/// token rejects with 403.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::MissingToken)?;
        let token = value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(AppError::MissingToken)?;
        let state = AppState::from_ref(state);
        let claims = state.auth.verify(token)?;
        Ok(AuthUser {
            id: claims.id,
            name: claims.name,
        })
    }
}
