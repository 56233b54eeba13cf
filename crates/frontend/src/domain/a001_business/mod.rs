use contracts::domain::a001_business::aggregate::BusinessDto;
use leptos::prelude::*;

use crate::shared::api_utils::use_resource_client;
use crate::shared::resource_page::ResourceListPage;

#[component]
#[allow(non_snake_case)]
pub fn BusinessList() -> impl IntoView {
    view! { <ResourceListPage client={use_resource_client::<BusinessDto>()} /> }
}
