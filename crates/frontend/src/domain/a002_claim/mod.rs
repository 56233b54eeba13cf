use contracts::domain::a002_claim::aggregate::ClaimDto;
use leptos::prelude::*;

use crate::shared::api_utils::use_resource_client;
use crate::shared::resource_page::ResourceListPage;

#[component]
#[allow(non_snake_case)]
pub fn ClaimList() -> impl IntoView {
    view! { <ResourceListPage client={use_resource_client::<ClaimDto>()} /> }
}
