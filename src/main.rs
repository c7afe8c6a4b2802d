//! Server binary: configuration from env, schema bootstrap, axum serve.

use fisio_server::{app, connect_hint, ensure_tables, AppConfig, AppState, AuthKeys};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("fisio_server=info".parse()?),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(database = %config.database_target(), "starting fisio server");

    let pool = match PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            if let Some(hint) = connect_hint(&e) {
                tracing::error!(hint);
            }
            return Err(e.into());
        }
    };
    ensure_tables(&pool).await?;
    tracing::info!("database connection and schema verified");

    let state = AppState {
        pool,
        auth: Arc::new(AuthKeys::from_secret(config.jwt_secret.as_bytes())),
    };

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
