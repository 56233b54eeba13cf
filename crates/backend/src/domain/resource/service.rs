use contracts::domain::common::payload::{merge_patch, payload_from_value, strip_server_fields};
use contracts::domain::common::{Record, RecordId, Resource};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use super::repository::{self, Model};
use crate::shared::error::AppError;

fn to_record<R: Resource>(model: Model) -> Result<Record<R>, AppError> {
    let data: R = serde_json::from_str(&model.payload)?;
    Ok(Record::new(model.id, data, model.created_at, model.updated_at))
}

fn not_found<R: Resource>(id: RecordId) -> AppError {
    AppError::NotFound(format!("{} {}", R::element_name(), id))
}

/// Валидация, хук перед записью и сериализация payload
fn prepare<R: Resource>(body: Value) -> Result<String, AppError> {
    if !body.is_object() {
        return Err(AppError::BadRequest("Request body must be a JSON object".into()));
    }
    let mut dto: R = payload_from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))?;
    dto.validate().map_err(AppError::Validation)?;
    dto.before_write();
    Ok(serde_json::to_string(&dto)?)
}

/// Получение списка всех записей ресурса
pub async fn list_all<R: Resource>(db: &DatabaseConnection) -> Result<Vec<Record<R>>, AppError> {
    repository::list_all(db, R::collection_name())
        .await?
        .into_iter()
        .map(to_record)
        .collect()
}

/// Получение записи по ID
pub async fn get_by_id<R: Resource>(
    db: &DatabaseConnection,
    id: RecordId,
) -> Result<Record<R>, AppError> {
    let model = repository::get_by_id(db, R::collection_name(), id)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;
    to_record(model)
}

/// Создание новой записи
pub async fn create<R: Resource>(
    db: &DatabaseConnection,
    body: Value,
) -> Result<Record<R>, AppError> {
    let payload = prepare::<R>(body)?;
    let model = repository::insert(db, R::collection_name(), payload).await?;
    tracing::info!("{} {} created", R::element_name(), model.id);
    to_record(model)
}

/// Частичное обновление: ключи тела заменяют сохранённые поля
pub async fn update<R: Resource>(
    db: &DatabaseConnection,
    id: RecordId,
    mut patch: Value,
) -> Result<Record<R>, AppError> {
    if !patch.is_object() {
        return Err(AppError::BadRequest("Request body must be a JSON object".into()));
    }
    let model = repository::get_by_id(db, R::collection_name(), id)
        .await?
        .ok_or_else(|| not_found::<R>(id))?;

    strip_server_fields(&mut patch, R::server_fields());
    let mut merged: Value = serde_json::from_str(&model.payload)?;
    merge_patch(&mut merged, &patch);

    let payload = prepare::<R>(merged)?;
    let model = repository::update_payload(db, model, payload).await?;
    tracing::info!("{} {} updated (version {})", R::element_name(), id, model.version);
    to_record(model)
}

/// Мягкое удаление записи
pub async fn delete<R: Resource>(db: &DatabaseConnection, id: RecordId) -> Result<(), AppError> {
    if repository::soft_delete(db, R::collection_name(), id).await? {
        tracing::info!("{} {} deleted", R::element_name(), id);
        Ok(())
    } else {
        Err(not_found::<R>(id))
    }
}

/// Вставка тестовых данных
pub async fn insert_test_data<R: Resource>(
    db: &DatabaseConnection,
) -> Result<Vec<Record<R>>, AppError> {
    let mut inserted = Vec::new();
    for mut dto in R::sample() {
        dto.before_write();
        let model = repository::insert(db, R::collection_name(), serde_json::to_string(&dto)?).await?;
        inserted.push(to_record(model)?);
    }
    tracing::info!("{}: {} test records inserted", R::full_name(), inserted.len());
    Ok(inserted)
}
