//! Collection CRUD routes mounted under /api.
//! Parameterized paths so handlers resolve the collection from the segment.
//! Trailing-slash twins are registered because the discovery document
//! advertises `/api/users/`-style URLs and axum does not normalize slashes.

use crate::handlers::entity::{create, delete as delete_handler, list, merge, read, replace};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/:collection", get(list).post(create))
        .route("/:collection/", get(list).post(create))
        .route(
            "/:collection/:id",
            get(read).put(replace).patch(merge).delete(delete_handler),
        )
        .route(
            "/:collection/:id/",
            get(read).put(replace).patch(merge).delete(delete_handler),
        )
        .with_state(state)
}
