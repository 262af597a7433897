use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use contracts::domain::a001_resource::{ResourceDetails, ResourceQuery, ResourceVersion};

use crate::domain::a001_resource;

/// GET /api/resources/:id
pub async fn get_by_id(
    Path(id): Path<String>,
    Query(query): Query<ResourceQuery>,
) -> Result<Json<ResourceDetails>, StatusCode> {
    match a001_resource::service::get_details(&id, &query).await {
        Ok(Some(details)) => Ok(Json(details)),
        Ok(None) => {
            tracing::debug!("resource '{}' not found ({:?})", id, query);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => {
            tracing::error!("Failed to load resource '{}': {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/resources/:id/versions
pub async fn list_versions(
    Path(id): Path<String>,
    Query(query): Query<ResourceQuery>,
) -> Result<Json<Vec<ResourceVersion>>, StatusCode> {
    match a001_resource::service::list_versions(&id, query.database.as_deref()).await {
        Ok(versions) => Ok(Json(versions)),
        Err(e) => {
            tracing::error!("Failed to list versions of '{}': {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
