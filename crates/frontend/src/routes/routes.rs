use crate::domain::a001_business::BusinessList;
use crate::domain::a002_claim::ClaimList;
use crate::domain::a003_inventory_transaction::InventoryTransactionList;
use crate::domain::a004_inventory_status::InventoryStatusList;
use crate::domain::a005_production_order::ProductionOrderList;
use crate::domain::a006_production_status::ProductionStatusList;
use crate::domain::a007_quality_inspection::QualityInspectionList;
use crate::domain::a008_shipment::ShipmentList;
use crate::domain::a009_warehouse_receipt::WarehouseReceiptList;
use crate::layout::center::Home;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
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
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

#[component]
fn PageRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <div class="page">"Page not found"</div> }>
            <Route path=StaticSegment("") view=Home />
            <Route path=StaticSegment(BusinessDto::collection_name()) view=BusinessList />
            <Route path=StaticSegment(ClaimDto::collection_name()) view=ClaimList />
            <Route
                path=StaticSegment(InventoryTransactionDto::collection_name())
                view=InventoryTransactionList
            />
            <Route path=StaticSegment(InventoryStatusDto::collection_name()) view=InventoryStatusList />
            <Route path=StaticSegment(ProductionOrderDto::collection_name()) view=ProductionOrderList />
            <Route
                path=StaticSegment(ProductionStatusDto::collection_name())
                view=ProductionStatusList
            />
            <Route
                path=StaticSegment(QualityInspectionDto::collection_name())
                view=QualityInspectionList
            />
            <Route path=StaticSegment(ShipmentDto::collection_name()) view=ShipmentList />
            <Route
                path=StaticSegment(WarehouseReceiptDto::collection_name())
                view=WarehouseReceiptList
            />
        </Routes>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell
                left=|| view! { <Sidebar /> }.into_any()
                center=|| view! { <PageRoutes /> }.into_any()
            />
        </Router>
    }
}
