//! Fisio server: clinical records backend for physiotherapy practices.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use auth::{AuthKeys, AuthUser, Claims};
pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use routes::app;
pub use service::{AuthService, RecordService};
pub use state::AppState;
pub use store::{connect_hint, ensure_tables};
