use contracts::domain::a008_shipment::aggregate::ShipmentDto;
use leptos::prelude::*;

use crate::shared::api_utils::use_resource_client;
use crate::shared::resource_page::ResourceListPage;

#[component]
#[allow(non_snake_case)]
pub fn ShipmentList() -> impl IntoView {
    view! { <ResourceListPage client={use_resource_client::<ShipmentDto>()} /> }
}
