//! Collection CRUD handlers: list, create, read, replace, merge, delete.
//! Handlers resolve the collection from the path segment and delegate to the
//! document store; unknown segments are 404.

use crate::collection::Collection;
use crate::error::AppError;
use crate::response::{SuccessMany, SuccessOne};
use crate::state::AppState;
use crate::store;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

fn resolve_collection(segment: &str) -> Result<Collection, AppError> {
    Collection::from_path(segment).ok_or_else(|| AppError::NotFound(segment.to_string()))
}

fn parse_id(id_str: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id_str).map_err(|_| AppError::BadRequest("invalid id".into()))
}

fn require_object(body: Value) -> Result<Value, AppError> {
    match body {
        Value::Object(_) => Ok(body),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

pub async fn list(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<(StatusCode, Json<SuccessMany<Value>>), AppError> {
    let collection = resolve_collection(&segment)?;
    // Every query param except the response-format hint is an exact-match filter.
    let filters: Vec<(String, String)> = params
        .into_iter()
        .filter(|(k, _)| k != "format")
        .collect();
    let rows = store::list(&state.pool, collection, &filters).await?;
    Ok((StatusCode::OK, Json(SuccessMany::new(rows))))
}

pub async fn create(
    State(state): State<AppState>,
    Path(segment): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<SuccessOne<Value>>), AppError> {
    let collection = resolve_collection(&segment)?;
    let doc = require_object(body)?;
    let row = store::insert(&state.pool, collection, &doc).await?;
    Ok((StatusCode::CREATED, Json(SuccessOne { data: row })))
}

pub async fn read(
    State(state): State<AppState>,
    Path((segment, id_str)): Path<(String, String)>,
) -> Result<(StatusCode, Json<SuccessOne<Value>>), AppError> {
    let collection = resolve_collection(&segment)?;
    let id = parse_id(&id_str)?;
    let row = store::get(&state.pool, collection, id)
        .await?
        .ok_or(AppError::NotFound(id_str))?;
    Ok((StatusCode::OK, Json(SuccessOne { data: row })))
}

pub async fn replace(
    State(state): State<AppState>,
    Path((segment, id_str)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<SuccessOne<Value>>), AppError> {
    let collection = resolve_collection(&segment)?;
    let id = parse_id(&id_str)?;
    let doc = require_object(body)?;
    let row = store::replace(&state.pool, collection, id, &doc)
        .await?
        .ok_or(AppError::NotFound(id_str))?;
    Ok((StatusCode::OK, Json(SuccessOne { data: row })))
}

pub async fn merge(
    State(state): State<AppState>,
    Path((segment, id_str)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<SuccessOne<Value>>), AppError> {
    let collection = resolve_collection(&segment)?;
    let id = parse_id(&id_str)?;
    let doc = require_object(body)?;
    let row = store::merge(&state.pool, collection, id, &doc)
        .await?
        .ok_or(AppError::NotFound(id_str))?;
    Ok((StatusCode::OK, Json(SuccessOne { data: row })))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((segment, id_str)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let collection = resolve_collection(&segment)?;
    let id = parse_id(&id_str)?;
    if !store::delete(&state.pool, collection, id).await? {
        return Err(AppError::NotFound(id_str));
    }
    Ok(StatusCode::NO_CONTENT)
}
