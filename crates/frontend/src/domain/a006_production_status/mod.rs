use contracts::domain::a006_production_status::aggregate::ProductionStatusDto;
use leptos::prelude::*;

use crate::shared::api_utils::use_resource_client;
use crate::shared::resource_page::ResourceListPage;

#[component]
#[allow(non_snake_case)]
pub fn ProductionStatusList() -> impl IntoView {
    view! { <ResourceListPage client={use_resource_client::<ProductionStatusDto>()} /> }
}
