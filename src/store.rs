//! Document store over PostgreSQL. Each collection is a table of JSONB
//! documents inside a schema named from `OCTOFIT_SCHEMA` env (default `octofit`).
//! Every operation is a single statement; atomicity is per document only.

use crate::collection::Collection;
use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;
use uuid::Uuid;

/// Schema name for collection tables. Must be a valid PostgreSQL identifier.
pub fn octofit_schema() -> String {
    std::env::var("OCTOFIT_SCHEMA").unwrap_or_else(|_| "octofit".into())
}

/// Schema-qualified table name for a collection (e.g. "octofit.users").
pub fn qualified_collection(collection: Collection) -> String {
    format!("{}.{}", octofit_schema(), collection.table())
}

/// Create the schema and one JSONB table per collection, plus the unique
/// email index on users. All DDL is IF NOT EXISTS; safe to run at every start.
pub async fn ensure_collections(pool: &PgPool) -> Result<(), AppError> {
    let schema = octofit_schema();
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", schema))
        .execute(pool)
        .await?;

    for collection in Collection::ALL {
        let table = qualified_collection(collection);
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                doc JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            table
        );
        sqlx::query(&ddl).execute(pool).await?;
    }

    let email_index = format!(
        "CREATE UNIQUE INDEX IF NOT EXISTS users_email_key ON {} ((doc->>'email'))",
        qualified_collection(Collection::Users)
    );
    sqlx::query(&email_index).execute(pool).await?;

    Ok(())
}

/// List documents with optional exact-match filters on top-level fields.
/// Filter keys are bound as parameters (`doc->>$n = $m`), so arbitrary query
/// keys are safe. Ordered by insertion time for stable output.
pub async fn list(
    pool: &PgPool,
    collection: Collection,
    filters: &[(String, String)],
) -> Result<Vec<Value>, AppError> {
    let table = qualified_collection(collection);
    let mut where_parts = Vec::new();
    let mut param = 0;
    for _ in filters {
        where_parts.push(format!("doc->>${}::text = ${}", param + 1, param + 2));
        param += 2;
    }
    let where_clause = if where_parts.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", where_parts.join(" AND "))
    };
    let sql = format!(
        "SELECT id, doc, created_at FROM {}{} ORDER BY created_at, id",
        table, where_clause
    );
    tracing::debug!(sql = %sql, "list");
    let mut query = sqlx::query_as::<_, DocRow>(&sql);
    for (k, v) in filters {
        query = query.bind(k).bind(v);
    }
    let rows = query.fetch_all(pool).await?;
    Ok(rows.into_iter().map(into_document).collect())
}

/// Fetch one document by id.
pub async fn get(
    pool: &PgPool,
    collection: Collection,
    id: Uuid,
) -> Result<Option<Value>, AppError> {
    let sql = format!(
        "SELECT id, doc, created_at FROM {} WHERE id = $1",
        qualified_collection(collection)
    );
    let row: Option<DocRow> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
    Ok(row.map(into_document))
}

/// Insert one document; the store assigns the id. Returns the stored document.
pub async fn insert(
    pool: &PgPool,
    collection: Collection,
    doc: &Value,
) -> Result<Value, AppError> {
    let sql = format!(
        "INSERT INTO {} (doc) VALUES ($1) RETURNING id, doc, created_at",
        qualified_collection(collection)
    );
    tracing::debug!(collection = collection.table(), "insert");
    let row: DocRow = sqlx::query_as(&sql).bind(doc).fetch_one(pool).await?;
    Ok(into_document(row))
}

/// Replace the whole document (PUT). Returns the new document or None if absent.
pub async fn replace(
    pool: &PgPool,
    collection: Collection,
    id: Uuid,
    doc: &Value,
) -> Result<Option<Value>, AppError> {
    let sql = format!(
        "UPDATE {} SET doc = $2, updated_at = NOW() WHERE id = $1 RETURNING id, doc, created_at",
        qualified_collection(collection)
    );
    let row: Option<DocRow> = sqlx::query_as(&sql)
        .bind(id)
        .bind(doc)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(into_document))
}

/// Shallow-merge fields into the document (PATCH). Returns the new document
/// or None if absent.
pub async fn merge(
    pool: &PgPool,
    collection: Collection,
    id: Uuid,
    doc: &Value,
) -> Result<Option<Value>, AppError> {
    let sql = format!(
        "UPDATE {} SET doc = doc || $2, updated_at = NOW() WHERE id = $1 RETURNING id, doc, created_at",
        qualified_collection(collection)
    );
    let row: Option<DocRow> = sqlx::query_as(&sql)
        .bind(id)
        .bind(doc)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(into_document))
}

/// Delete one document by id. Returns true if a document was removed.
pub async fn delete(pool: &PgPool, collection: Collection, id: Uuid) -> Result<bool, AppError> {
    let sql = format!(
        "DELETE FROM {} WHERE id = $1",
        qualified_collection(collection)
    );
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

/// Delete every document in a collection. Returns the number removed.
pub async fn clear(pool: &PgPool, collection: Collection) -> Result<u64, AppError> {
    let sql = format!("DELETE FROM {}", qualified_collection(collection));
    let result = sqlx::query(&sql).execute(pool).await?;
    Ok(result.rows_affected())
}

/// Count documents in a collection.
pub async fn count(pool: &PgPool, collection: Collection) -> Result<i64, AppError> {
    let sql = format!("SELECT COUNT(*) FROM {}", qualified_collection(collection));
    let (n,): (i64,) = sqlx::query_as(&sql).fetch_one(pool).await?;
    Ok(n)
}

/// One stored document row: id, payload, insertion time.
type DocRow = (Uuid, Value, DateTime<Utc>);

/// Merge the row id and insertion time into the document for API output.
fn into_document((id, doc, created_at): DocRow) -> Value {
    match doc {
        Value::Object(mut map) => {
            map.insert("id".into(), Value::String(id.to_string()));
            map.insert(
                "created_at".into(),
                Value::String(created_at.to_rfc3339()),
            );
            Value::Object(map)
        }
        other => serde_json::json!({
            "id": id.to_string(),
            "created_at": created_at.to_rfc3339(),
            "doc": other,
        }),
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to
/// the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        let quoted = quote_ident(&db_name);
        sqlx::query(&format!("CREATE DATABASE {}", quoted))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}
