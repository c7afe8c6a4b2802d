//! Route tables: public auth, authenticated API, and service routes.

mod api;
mod common;

pub use api::{api_routes, auth_routes};
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Full application router as served by the binary: permissive CORS for the
/// browser client, per-request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/auth", auth_routes(state.clone()))
        .nest("/api", api_routes(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
