//! Generic REST handlers, mounted once per resource type by
//! `routes::resource_routes`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::common::{Record, RecordId, Resource};
use serde_json::Value;

use crate::domain::resource::service;
use crate::shared::error::AppError;
use crate::shared::state::AppState;

/// GET /api/{collection}
pub async fn list_all<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record<R>>>, AppError> {
    Ok(Json(service::list_all::<R>(&state.db).await?))
}

/// GET /api/{collection}/:id
pub async fn get_by_id<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Record<R>>, AppError> {
    Ok(Json(service::get_by_id::<R>(&state.db, id).await?))
}

/// POST /api/{collection}
pub async fn create<R: Resource>(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Record<R>>), AppError> {
    let record = service::create::<R>(&state.db, body).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PATCH /api/{collection}/:id
pub async fn update<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    Json(patch): Json<Value>,
) -> Result<Json<Record<R>>, AppError> {
    Ok(Json(service::update::<R>(&state.db, id, patch).await?))
}

/// DELETE /api/{collection}/:id
pub async fn delete<R: Resource>(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<StatusCode, AppError> {
    service::delete::<R>(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/{collection}/testdata
pub async fn insert_test_data<R: Resource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<Record<R>>>, AppError> {
    Ok(Json(service::insert_test_data::<R>(&state.db).await?))
}
