//! API root handler: GET / returns the resource discovery document.

use crate::api_root::resolve_api_root;
use crate::state::AppState;
use axum::{
    extract::{Host, Query, State},
    http::HeaderMap,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub struct RootParams {
    /// Response-format hint carried through to the local-branch URLs.
    format: Option<String>,
}

/// Scheme as seen by the client: forwarded proto when behind a proxy, else http.
fn request_scheme(headers: &HeaderMap) -> &str {
    headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http")
}

pub async fn api_root(
    State(state): State<AppState>,
    Host(host): Host,
    Query(params): Query<RootParams>,
    headers: HeaderMap,
) -> Json<Value> {
    let doc = resolve_api_root(
        state.config.codespace_name.as_deref(),
        request_scheme(&headers),
        &host,
        params.format.as_deref(),
    );
    Json(doc)
}
