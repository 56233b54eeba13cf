//! API utilities for frontend-backend communication
//!
//! `AppConfig` is built once at startup and provided through Leptos context;
//! every resource client derives its URLs from it.

use contracts::domain::common::RecordId;
use leptos::prelude::*;

use crate::shared::resource_client::ResourceClient;

/// Base URL of the backend, compiled in when set (`MES_API_BASE=http://host:3000`)
const API_BASE_OVERRIDE: Option<&str> = option_env!("MES_API_BASE");

/// Where the backend lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Scheme, host and port, without a trailing slash
    pub api_base: String,
    /// Path prefix of every resource collection
    pub api_prefix: String,
}

impl AppConfig {
    pub fn new(api_base: impl Into<String>, api_prefix: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_prefix: api_prefix.into().trim_end_matches('/').to_string(),
        }
    }

    /// Compile-time override or the current window location
    pub fn from_environment() -> Self {
        let base = match API_BASE_OVERRIDE {
            Some(base) => base.to_string(),
            None => api_base(),
        };
        Self::new(base, "/api")
    }

    /// `{base}{prefix}/{collection}`
    pub fn resource_url(&self, collection: &str) -> String {
        format!("{}{}/{}", self.api_base, self.api_prefix, collection)
    }

    /// `{base}{prefix}/{collection}/{id}`
    pub fn record_url(&self, collection: &str, id: RecordId) -> String {
        format!("{}/{}", self.resource_url(collection), id)
    }
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Browser client for `R`, configured from context
pub fn use_resource_client<R: contracts::domain::common::Resource>() -> ResourceClient<R> {
    let config = use_context::<AppConfig>().unwrap_or_else(AppConfig::from_environment);
    ResourceClient::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let config = AppConfig::new("http://localhost:3000/", "/api");
        assert_eq!(config.resource_url("claims"), "http://localhost:3000/api/claims");
        assert_eq!(
            config.record_url("production-orders", 7),
            "http://localhost:3000/api/production-orders/7"
        );
    }

    #[test]
    fn test_empty_prefix() {
        let config = AppConfig::new("", "");
        assert_eq!(config.resource_url("shipments"), "/shipments");
    }
}
