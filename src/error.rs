//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: '{value}'")]
    InvalidVar { var: &'static str, value: String },
}

/// All failure modes surfaced by the API. The login messages are part of the
/// wire contract consumed by the web client and stay in Portuguese.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Usuário não encontrado")]
    UserNotFound,
    #[error("Senha incorreta")]
    WrongPassword,
    #[error("Erro de integridade de dados (Senha inválida)")]
    CorruptPasswordHash,
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid bearer token")]
    InvalidToken,
    #[error("patient {0} is not owned by the caller")]
    NotOwner(i64),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("password hash: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("token: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::UserNotFound | AppError::WrongPassword => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            AppError::CorruptPasswordHash => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            AppError::MissingToken => StatusCode::UNAUTHORIZED.into_response(),
            AppError::InvalidToken | AppError::NotOwner(_) => StatusCode::FORBIDDEN.into_response(),
            AppError::Config(_) | AppError::Db(_) | AppError::Hash(_) | AppError::Token(_) => {
                tracing::error!(error = %self, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Erro interno no servidor".into(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_failures_are_bad_request() {
        assert_eq!(
            AppError::UserNotFound.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::WrongPassword.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn token_failures_split_into_401_and_403() {
        assert_eq!(
            AppError::MissingToken.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::InvalidToken.into_response().status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn ownership_violation_is_forbidden() {
        assert_eq!(
            AppError::NotOwner(7).into_response().status(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn storage_failures_are_internal() {
        let status = AppError::Db(sqlx::Error::RowNotFound)
            .into_response()
            .status();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unknown_user_body_matches_client_contract() {
        let response = AppError::UserNotFound.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Usuário não encontrado" }));
    }

    #[tokio::test]
    async fn internal_errors_do_not_leak_details() {
        let response = AppError::Db(sqlx::Error::PoolClosed).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Erro interno no servidor" }));
    }
}
