//! HTTP adapter for the batch catalog service.
//!
//! The contract is fail-soft: both calls are single-attempt, and any
//! transport, status, or decode failure is logged and collapses into an
//! empty/absent result. Callers treat those as ordinary outcomes, not errors.

use std::time::Duration;

use serde::de::DeserializeOwned;

use bex_core::{
    catalog::{Batch, BatchDetail},
    errors::Error,
    Result,
};

#[derive(Clone, Debug)]
pub struct BatchApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl BatchApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build");
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// All available batches; empty on any failure.
    pub async fn list_batches(&self) -> Vec<Batch> {
        let url = format!("{}/batches", self.base_url);
        match self.fetch_json::<Vec<Batch>>(&url).await {
            Ok(batches) => batches,
            Err(e) => {
                tracing::error!("error fetching batches: {e}");
                Vec::new()
            }
        }
    }

    /// Detailed document for one batch; `None` on any failure.
    pub async fn batch_detail(&self, batch_id: &str) -> Option<BatchDetail> {
        let url = format!("{}/extract/batch_id={batch_id}", self.base_url);
        match self.fetch_json::<BatchDetail>(&url).await {
            Ok(detail) => Some(detail),
            Err(e) => {
                tracing::error!("error fetching batch details for {batch_id}: {e}");
                None
            }
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Error::External(format!("batch api request error: {e}")))?
            .error_for_status()
            .map_err(|e| Error::External(format!("batch api status error: {e}")))?;

        resp.json::<T>()
            .await
            .map_err(|e| Error::External(format!("batch api decode error: {e}")))
    }
}
