use contracts::domain::a004_inventory_status::aggregate::InventoryStatusDto;
use leptos::prelude::*;

use crate::shared::api_utils::use_resource_client;
use crate::shared::resource_page::ResourceListPage;

#[component]
#[allow(non_snake_case)]
pub fn InventoryStatusList() -> impl IntoView {
    view! { <ResourceListPage client={use_resource_client::<InventoryStatusDto>()} /> }
}
