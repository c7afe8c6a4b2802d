//! Login and patient-scoped routes. Everything under the API table
//! authenticates through the bearer extractor; ownership of the patient in
//! the path is checked by the record service.

use crate::handlers::{assessment, auth, evolution, patient};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn auth_routes(state: AppState) -> Router {
    Router::new()
        .route("/login", post(auth::login))
        .with_state(state)
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/patients", get(patient::list).post(patient::create))
        .route(
            "/patients/:id/assessment",
            get(assessment::get).post(assessment::upsert),
        )
        .route(
            "/patients/:id/evolutions",
            get(evolution::list).post(evolution::create),
        )
        .with_state(state)
}
