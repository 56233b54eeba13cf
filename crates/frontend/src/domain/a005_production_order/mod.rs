use contracts::domain::a005_production_order::aggregate::ProductionOrderDto;
use leptos::prelude::*;

use crate::shared::api_utils::use_resource_client;
use crate::shared::resource_page::ResourceListPage;

#[component]
#[allow(non_snake_case)]
pub fn ProductionOrderList() -> impl IntoView {
    view! { <ResourceListPage client={use_resource_client::<ProductionOrderDto>()} /> }
}
