use axum::http::{header, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use contracts::domain::a001_business::aggregate::BusinessDto;
use contracts::domain::a002_claim::aggregate::ClaimDto;
use contracts::domain::a003_inventory_transaction::aggregate::InventoryTransactionDto;
use contracts::domain::a004_inventory_status::aggregate::InventoryStatusDto;
use contracts::domain::a005_production_order::aggregate::ProductionOrderDto;
use contracts::domain::a006_production_status::aggregate::ProductionStatusDto;
use contracts::domain::a007_quality_inspection::aggregate::QualityInspectionDto;
use contracts::domain::a008_shipment::aggregate::ShipmentDto;
use contracts::domain::a009_warehouse_receipt::aggregate::WarehouseReceiptDto;
use contracts::domain::common::Resource;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers::resource;
use crate::shared::state::AppState;
use crate::system::middleware::request_logger::request_logger;

/// Пять маршрутов CRUD и testdata для одного ресурса
pub fn resource_routes<R: Resource>() -> Router<AppState> {
    let base = format!("/api/{}", R::collection_name());
    Router::new()
        .route(
            &base,
            get(resource::list_all::<R>).post(resource::create::<R>),
        )
        .route(
            &format!("{}/testdata", base),
            post(resource::insert_test_data::<R>),
        )
        .route(
            &format!("{}/:id", base),
            get(resource::get_by_id::<R>)
                .patch(resource::update::<R>)
                .delete(resource::delete::<R>),
        )
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let mut app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(resource_routes::<BusinessDto>())
        .merge(resource_routes::<ClaimDto>())
        .merge(resource_routes::<InventoryTransactionDto>())
        .merge(resource_routes::<InventoryStatusDto>())
        .merge(resource_routes::<ProductionOrderDto>())
        .merge(resource_routes::<ProductionStatusDto>())
        .merge(resource_routes::<QualityInspectionDto>())
        .merge(resource_routes::<ShipmentDto>())
        .merge(resource_routes::<WarehouseReceiptDto>());

    if let Some(dir) = &state.config.server.static_dir {
        // Client-side routes (`/claims`) get index.html
        let index = std::path::Path::new(dir).join("index.html");
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}
