//! Router assembly.

mod common;
mod entity;

pub use common::common_routes_with_ready;
pub use entity::entity_routes;

use crate::handlers::root::api_root;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Full application router: API root, health, and collection CRUD under /api.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api_root).with_state(state.clone()))
        .merge(common_routes_with_ready(state.clone()))
        .nest("/api", entity_routes(state))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
}
