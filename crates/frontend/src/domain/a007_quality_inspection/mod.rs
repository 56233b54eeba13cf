use contracts::domain::a007_quality_inspection::aggregate::QualityInspectionDto;
use leptos::prelude::*;

use crate::shared::api_utils::use_resource_client;
use crate::shared::resource_page::ResourceListPage;

#[component]
#[allow(non_snake_case)]
pub fn QualityInspectionList() -> impl IntoView {
    view! { <ResourceListPage client={use_resource_client::<QualityInspectionDto>()} /> }
}
