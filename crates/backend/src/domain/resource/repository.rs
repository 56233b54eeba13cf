use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue::NotSet, QueryOrder, Set};

/// One stored resource row. The payload is the JSON of the resource type,
/// `collection` tells which one.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "resource_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub collection: String,
    #[sea_orm(column_type = "Text")]
    pub payload: String,
    pub is_deleted: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn list_all(db: &DatabaseConnection, collection: &str) -> Result<Vec<Model>, DbErr> {
    Entity::find()
        .filter(Column::Collection.eq(collection))
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::Id)
        .all(db)
        .await
}

pub async fn get_by_id(
    db: &DatabaseConnection,
    collection: &str,
    id: i64,
) -> Result<Option<Model>, DbErr> {
    Entity::find_by_id(id)
        .filter(Column::Collection.eq(collection))
        .filter(Column::IsDeleted.eq(false))
        .one(db)
        .await
}

pub async fn insert(
    db: &DatabaseConnection,
    collection: &str,
    payload: String,
) -> Result<Model, DbErr> {
    let now = Utc::now();
    let active = ActiveModel {
        id: NotSet,
        collection: Set(collection.to_string()),
        payload: Set(payload),
        is_deleted: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        version: Set(0),
    };
    active.insert(db).await
}

pub async fn update_payload(
    db: &DatabaseConnection,
    model: Model,
    payload: String,
) -> Result<Model, DbErr> {
    let version = model.version + 1;
    let mut active: ActiveModel = model.into();
    active.payload = Set(payload);
    active.updated_at = Set(Utc::now());
    active.version = Set(version);
    active.update(db).await
}

pub async fn soft_delete(db: &DatabaseConnection, collection: &str, id: i64) -> Result<bool, DbErr> {
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id))
        .filter(Column::Collection.eq(collection))
        .filter(Column::IsDeleted.eq(false))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}
