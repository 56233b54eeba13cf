use contracts::domain::a009_warehouse_receipt::aggregate::WarehouseReceiptDto;
use leptos::prelude::*;

use crate::shared::api_utils::use_resource_client;
use crate::shared::resource_page::ResourceListPage;

#[component]
#[allow(non_snake_case)]
pub fn WarehouseReceiptList() -> impl IntoView {
    view! { <ResourceListPage client={use_resource_client::<WarehouseReceiptDto>()} /> }
}
