use std::marker::PhantomData;

use contracts::domain::common::payload::mutation_body;
use contracts::domain::common::{ApiEnvelope, Record, RecordId, Resource, SearchLink};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::transport::{GlooTransport, HttpMethod, HttpTransport};
use super::ClientError;
use crate::shared::api_utils::AppConfig;

/// Клиент REST-коллекции ресурса `R`
pub struct ResourceClient<R, T = GlooTransport> {
    config: AppConfig,
    transport: T,
    _resource: PhantomData<fn() -> R>,
}

impl<R, T: Clone> Clone for ResourceClient<R, T> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            transport: self.transport.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceClient<R, GlooTransport> {
    pub fn new(config: AppConfig) -> Self {
        Self::with_transport(config, GlooTransport)
    }
}

fn decode<D: DeserializeOwned>(text: &str) -> Result<D, ClientError> {
    serde_json::from_str(text).map_err(|e| ClientError::Decode(e.to_string()))
}

fn into_envelope<D>(result: Result<D, ClientError>, message: Option<String>) -> ApiEnvelope<D> {
    match result {
        Ok(data) => match message {
            Some(message) => ApiEnvelope::ok_with_message(data, message),
            None => ApiEnvelope::ok(data),
        },
        Err(e) => {
            log::warn!("{}", e);
            ApiEnvelope::fail(e.to_string())
        }
    }
}

impl<R: Resource, T: HttpTransport> ResourceClient<R, T> {
    pub fn with_transport(config: AppConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            _resource: PhantomData,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Sends the request; any non-2xx reply becomes `ClientError::Status`
    async fn exchange(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&Value>,
    ) -> Result<String, ClientError> {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ClientError::Encode(e.to_string()))?;
        let reply = self.transport.send(method, url, body).await?;
        if reply.is_success() {
            Ok(reply.body)
        } else {
            Err(ClientError::Status {
                status: reply.status,
                body: reply.body,
            })
        }
    }

    fn collection_url(&self) -> String {
        self.config.resource_url(R::collection_name())
    }

    fn record_url(&self, id: RecordId) -> String {
        self.config.record_url(R::collection_name(), id)
    }

    /// GET all records of the collection
    pub async fn list_all(&self) -> ApiEnvelope<Vec<Record<R>>> {
        let result = match self.exchange(HttpMethod::Get, &self.collection_url(), None).await {
            Ok(text) => decode(&text),
            Err(e) => Err(e),
        };
        into_envelope(result, None)
    }

    pub async fn get_by_id(&self, id: RecordId) -> ApiEnvelope<Record<R>> {
        let result = match self.exchange(HttpMethod::Get, &self.record_url(id), None).await {
            Ok(text) => decode(&text),
            Err(e) => Err(e),
        };
        into_envelope(result, None)
    }

    pub async fn create(&self, draft: &R) -> ApiEnvelope<Record<R>> {
        let result = self.send_draft(HttpMethod::Post, &self.collection_url(), draft).await;
        into_envelope(result, Some(format!("{} created", R::element_name())))
    }

    pub async fn update(&self, id: RecordId, draft: &R) -> ApiEnvelope<Record<R>> {
        let result = self.send_draft(HttpMethod::Patch, &self.record_url(id), draft).await;
        into_envelope(result, Some(format!("{} updated", R::element_name())))
    }

    async fn send_draft(
        &self,
        method: HttpMethod,
        url: &str,
        draft: &R,
    ) -> Result<Record<R>, ClientError> {
        let body = mutation_body(draft).map_err(|e| ClientError::Encode(e.to_string()))?;
        let text = self.exchange(method, url, Some(&body)).await?;
        decode(&text)
    }

    pub async fn delete(&self, id: RecordId) -> ApiEnvelope<()> {
        match self.exchange(HttpMethod::Delete, &self.record_url(id), None).await {
            Ok(_) => ApiEnvelope::done(format!("{} deleted", R::element_name())),
            Err(e) => {
                log::warn!("{}", e);
                ApiEnvelope::fail(e.to_string())
            }
        }
    }

    /// Rows of the linked collection for the search modal, each checked
    /// against the linked resource schema
    pub async fn list_linked(&self, link: &SearchLink) -> ApiEnvelope<Vec<Value>> {
        let url = self.config.resource_url(link.collection);
        let result = match self.exchange(HttpMethod::Get, &url, None).await {
            Ok(text) => decode::<Vec<Value>>(&text).and_then(|rows| {
                for row in &rows {
                    (link.validate)(row).map_err(ClientError::Decode)?;
                }
                Ok(rows)
            }),
            Err(e) => Err(e),
        };
        into_envelope(result, None)
    }
}
