pub mod api_utils;
pub mod components;
pub mod dialog;
pub mod icons;
pub mod modal;
pub mod picker_aggregate;
pub mod resource_client;
pub mod resource_page;
