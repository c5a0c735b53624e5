//! Content store transport
//!
//! Profile and transfer records go to the remote content store's mutate endpoint when a
//! project is configured. Without one the widget keeps them in memory for the session.

use async_trait::async_trait;
use gloo_net::http::Request;
use lib_core::store::{MutateRequest, MutateResponse, Mutation, MutationResult};
use lib_core::{AppError, Config, ContentStore, MemoryStore, Result, SanityEndpoint};

/// [`ContentStore`] over HTTP.
pub struct SanityStore {
    endpoint: SanityEndpoint,
}

impl SanityStore {
    pub fn new(endpoint: SanityEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait(?Send)]
impl ContentStore for SanityStore {
    async fn mutate(&self, mutations: Vec<Mutation>) -> Result<Vec<MutationResult>> {
        let url = self.endpoint.mutate_url();
        let body = MutateRequest { mutations };

        let mut builder = Request::post(&url);
        if let Some(authorization) = self.endpoint.authorization() {
            builder = builder.header("Authorization", &authorization);
        }

        let response = builder
            .json(&body)
            .map_err(|e| AppError::Encoding(format!("mutate request: {:?}", e)))?
            .send()
            .await
            .map_err(|e| AppError::Store(format!("mutate request failed: {:?}", e)))?;

        if !response.ok() {
            let status = response.status();
            let text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            log::error!("Content store rejected mutation ({}): {}", status, text);
            return Err(AppError::Store(format!("status {status}: {text}")));
        }

        let data: MutateResponse = response
            .json()
            .await
            .map_err(|e| AppError::Decoding(format!("mutate response: {:?}", e)))?;

        log::debug!("Content store transaction {}", data.transaction_id);
        Ok(data.results)
    }
}

/// The store the widget runs against.
pub enum BrowserStore {
    Sanity(SanityStore),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn from_config(config: &Config) -> Self {
        match SanityEndpoint::from_config(config) {
            Some(endpoint) => {
                log::info!("Recording transfers to content store project {}", endpoint.project_id);
                BrowserStore::Sanity(SanityStore::new(endpoint))
            }
            None => {
                log::warn!("SANITY_PROJECT_ID not set, transfer records stay in memory");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

#[async_trait(?Send)]
impl ContentStore for BrowserStore {
    async fn mutate(&self, mutations: Vec<Mutation>) -> Result<Vec<MutationResult>> {
        match self {
            BrowserStore::Sanity(store) => store.mutate(mutations).await,
            BrowserStore::Memory(store) => store.mutate(mutations).await,
        }
    }
}
