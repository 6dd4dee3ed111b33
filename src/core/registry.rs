//! Service-registry operations: echo, service publish/remove, system
//! register/remove, plus the non-atomic batch helpers.

use crate::config::{Endpoint, TlsConfig};
use crate::core::client::build_http_client;
use crate::domain::{Service, System};
use crate::utils::error::{RegistryError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

pub(crate) const ECHO_PATH: &str = "/serviceregistry/echo";
pub(crate) const REGISTER_SERVICE_PATH: &str = "/serviceregistry/register";
pub(crate) const UNREGISTER_SERVICE_PATH: &str = "/serviceregistry/unregister";
pub(crate) const REGISTER_SYSTEM_PATH: &str = "/serviceregistry/register-system";
pub(crate) const UNREGISTER_SYSTEM_PATH: &str = "/serviceregistry/unregister-system";

/// Raw outcome of one registry exchange. Non-2xx statuses are data, not
/// errors: the registry defines its own error payload and interpreting it is
/// the caller's concern.
#[derive(Debug, Clone)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ServiceResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Client bound to one registry/orchestrator endpoint.
///
/// Holds a mutual-TLS HTTP client and the base URL; it is `Clone` and safe to
/// share across tasks. Every operation is a single request/response exchange
/// with no retry and no state kept between calls.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    http: Client,
    base: Url,
}

impl RegistryClient {
    /// Builds a client for `https://{address}:{port}` presenting the
    /// configured certificate. Credential problems fail here, not at the
    /// first request.
    pub fn new(endpoint: &Endpoint, tls: &TlsConfig) -> Result<Self> {
        Ok(Self {
            http: build_http_client(tls)?,
            base: endpoint.base_url()?,
        })
    }

    /// Wraps an already-configured HTTP client and base URL. Intended for
    /// tests and for callers managing their own client construction.
    pub fn from_parts(base: Url, http: Client) -> Self {
        Self { http, base }
    }

    /// Health probe against the registry.
    pub async fn echo(&self) -> Result<ServiceResponse> {
        let url = self.url(ECHO_PATH)?;
        debug!(%url, "GET echo");
        self.exec(self.http.get(url)).await
    }

    /// Publishes one service entry for its provider system.
    pub async fn publish_service(&self, service: &Service) -> Result<ServiceResponse> {
        self.post_json(REGISTER_SERVICE_PATH, service).await
    }

    /// Removes one service entry. The service URI is percent-encoded in the
    /// query string; address, port and system name pass through verbatim.
    pub async fn remove_service(&self, service: &Service) -> Result<ServiceResponse> {
        let query = unregister_service_query(service);
        let url = self.url(&format!("{UNREGISTER_SERVICE_PATH}?{query}"))?;
        debug!(%url, "DELETE service");
        self.exec(self.http.delete(url)).await
    }

    /// Registers a system with the registry.
    pub async fn register_system(&self, system: &System) -> Result<ServiceResponse> {
        self.post_json(REGISTER_SYSTEM_PATH, system).await
    }

    /// Removes a system registration.
    pub async fn remove_system(&self, system: &System) -> Result<ServiceResponse> {
        let query = unregister_system_query(system);
        let url = self.url(&format!("{UNREGISTER_SYSTEM_PATH}?{query}"))?;
        debug!(%url, "DELETE system");
        self.exec(self.http.delete(url)).await
    }

    /// Publishes each service independently; an element failure is logged and
    /// the rest of the batch still runs. One result per input, in order.
    pub async fn publish_services(&self, services: &[Service]) -> Vec<Result<ServiceResponse>> {
        let mut results = Vec::with_capacity(services.len());
        for service in services {
            let result = self.publish_service(service).await;
            if let Err(e) = &result {
                warn!(
                    service = %service.service_definition,
                    error = %e,
                    "publish failed, continuing batch"
                );
            }
            results.push(result);
        }
        results
    }

    /// Removes each service independently, same non-atomic semantics as
    /// [`publish_services`](Self::publish_services).
    pub async fn remove_services(&self, services: &[Service]) -> Vec<Result<ServiceResponse>> {
        let mut results = Vec::with_capacity(services.len());
        for service in services {
            let result = self.remove_service(service).await;
            if let Err(e) = &result {
                warn!(
                    service = %service.service_definition,
                    error = %e,
                    "unregister failed, continuing batch"
                );
            }
            results.push(result);
        }
        results
    }

    pub(crate) fn url(&self, path_and_query: &str) -> Result<Url> {
        self.base
            .join(path_and_query)
            .map_err(|e| RegistryError::InvalidEndpoint {
                message: format!("{path_and_query}: {e}"),
            })
    }

    pub(crate) async fn post_json<T: Serialize>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<ServiceResponse> {
        let url = self.url(path)?;
        let payload = serde_json::to_vec(body)?;
        debug!(%url, bytes = payload.len(), "POST json");
        self.exec(
            self.http
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .body(payload),
        )
        .await
    }

    pub(crate) async fn exec(&self, request: reqwest::RequestBuilder) -> Result<ServiceResponse> {
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(status, bytes = body.len(), "response received");
        Ok(ServiceResponse { status, body })
    }
}

/// Escapes a query value as application/x-www-form-urlencoded: space becomes
/// `+`, reserved characters such as `/` are `%XX`-escaped.
fn query_escape(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn unregister_service_query(service: &Service) -> String {
    format!(
        "address={}&port={}&service_definition={}&service_uri={}&system_name={}",
        service.provider_system.address,
        service.provider_system.port,
        service.service_definition,
        query_escape(&service.service_uri),
        service.provider_system.system_name,
    )
}

fn unregister_system_query(system: &System) -> String {
    format!(
        "address={}&port={}&system_name={}",
        system.address, system.port, system.system_name,
    )
}
