//! Document provider trait and HTTP implementation
//!
//! A provider resolves a URL to an opened document. The concrete provider
//! fetches the bytes with reqwest and decodes them with the hayro backend.

use crate::document::{DocumentBackend, ViewerError};
use crate::hayro_backend::HayroBackend;
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

/// Resolves a URL to an opened document.
#[async_trait]
pub trait DocumentProvider: Send + Sync {
    /// Fetch and decode the document at `url`
    ///
    /// Fails with `ViewerError::Fetch` when the bytes could not be
    /// retrieved (including non-2xx responses) and `ViewerError::Decode`
    /// when they are not a renderable document.
    async fn open(&self, url: &str) -> Result<Arc<dyn DocumentBackend>, ViewerError>;
}

/// Fetches documents over HTTP and decodes them with hayro
#[derive(Debug, Clone, Default)]
pub struct HttpHayroProvider {
    client: reqwest::Client,
}

impl HttpHayroProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DocumentProvider for HttpHayroProvider {
    async fn open(&self, url: &str) -> Result<Arc<dyn DocumentBackend>, ViewerError> {
        debug!("Fetching document from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ViewerError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ViewerError::Fetch(format!(
                "HTTP status {}",
                status.as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ViewerError::Fetch(e.to_string()))?;
        debug!("Fetched {} bytes from {}", bytes.len(), url);

        // Decoding is CPU-bound; keep it off the async executor
        let backend = tokio::task::spawn_blocking(move || HayroBackend::open(bytes.to_vec()))
            .await
            .map_err(|e| ViewerError::Decode(e.to_string()))??;

        Ok(Arc::new(backend))
    }
}
