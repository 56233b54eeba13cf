use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::AppConfig;
use crate::shared::modal::ModalStackService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_environment();
    log::info!("API base: {}{}", config.api_base, config.api_prefix);
    provide_context(config);
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());

    view! {
        <AppRoutes />
    }
}
