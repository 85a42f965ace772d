//! OctoFit backend: fitness tracking REST API over PostgreSQL document collections.

pub mod api_root;
pub mod collection;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

pub use api_root::resolve_api_root;
pub use collection::Collection;
pub use config::AppConfig;
pub use error::AppError;
pub use routes::app_router;
pub use seed::{reset_demo_data, SeedSummary};
pub use state::AppState;
pub use store::{ensure_collections, ensure_database_exists};
