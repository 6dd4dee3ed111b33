//! Orchestration operations. Intra- and inter-cloud requests share one
//! endpoint; the inter-cloud variant just carries a richer body.

use crate::core::registry::RegistryClient;
use crate::domain::{InterOrchestrate, OrchResponse, Orchestrate};
use crate::utils::error::{RegistryError, Result};
use serde::Serialize;
use tracing::debug;

pub(crate) const ORCHESTRATION_PATH: &str = "/orchestrator/orchestration";

impl RegistryClient {
    /// Asks the orchestrator for providers matching the requested service
    /// within the local cloud.
    pub async fn orchestrate(&self, request: &Orchestrate) -> Result<OrchResponse> {
        self.orchestration_request(request).await
    }

    /// Cross-domain variant: same endpoint, body additionally carries the
    /// requester cloud and relay identifiers.
    pub async fn inter_orchestrate(&self, request: &InterOrchestrate) -> Result<OrchResponse> {
        self.orchestration_request(request).await
    }

    async fn orchestration_request<T: Serialize>(&self, body: &T) -> Result<OrchResponse> {
        let response = self.post_json(ORCHESTRATION_PATH, body).await?;
        if !response.is_success() {
            return Err(RegistryError::StatusError {
                status: response.status,
                body: response.text(),
            });
        }

        let parsed: OrchResponse = serde_json::from_slice(&response.body)?;
        debug!(matches = parsed.response.len(), "orchestration response");
        Ok(parsed)
    }
}
