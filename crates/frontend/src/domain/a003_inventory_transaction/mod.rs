use contracts::domain::a003_inventory_transaction::aggregate::InventoryTransactionDto;
use leptos::prelude::*;

use crate::shared::api_utils::use_resource_client;
use crate::shared::resource_page::ResourceListPage;

#[component]
#[allow(non_snake_case)]
pub fn InventoryTransactionList() -> impl IntoView {
    view! { <ResourceListPage client={use_resource_client::<InventoryTransactionDto>()} /> }
}
