//! Data-transfer records mirrored to the registry/orchestrator JSON wire format.
//!
//! Field names follow the remote API exactly (`systemName`, `providerSystem`,
//! `gatekeeperRelayIds`, ...), so every struct uses `rename_all = "camelCase"`.
//! These are plain values with no behavior: build one, send it, drop it.

use serde::{Deserialize, Serialize};

/// Identity of a network endpoint known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct System {
    pub address: String,
    pub port: u16,
    pub system_name: String,
    pub authentication_info: String,
}

/// Method metadata attached to a service entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetadata {
    pub method: String,
}

/// A published capability owned by a provider [`System`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub interfaces: Vec<String>,
    pub metadata: ServiceMetadata,
    pub provider_system: System,
    pub secure: String,
    pub service_definition: String,
    pub service_uri: String,
}

/// Identity of a federated domain for inter-cloud orchestration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cloud {
    pub authentication_info: String,
    pub gatekeeper_relay_ids: Vec<i64>,
    pub gateway_relay_ids: Vec<i64>,
    pub name: String,
    pub neighbor: bool,
    pub operator: String,
}

/// Criteria a consumer asks the orchestrator to match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestedService {
    pub interface_requirements: Vec<String>,
    pub service_definition_requirement: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestrationFlags {
    pub override_store: bool,
    pub enable_inter_cloud: bool,
}

/// Intra-domain orchestration request envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Orchestrate {
    pub orchestration_flags: OrchestrationFlags,
    pub requested_service: RequestedService,
    pub requester_system: System,
}

/// Cross-domain orchestration request envelope; same endpoint as
/// [`Orchestrate`] but carries the requester's cloud identity as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterOrchestrate {
    pub orchestration_flags: OrchestrationFlags,
    pub requested_service: RequestedService,
    pub requester_cloud: Cloud,
    pub requester_system: System,
}

/// Provider endpoint in an orchestration match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub address: String,
    pub port: u16,
    pub system_name: String,
}

/// One orchestration match: where the provider lives and how to reach the
/// service on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestrateResponse {
    pub provider: Provider,
    pub service_uri: String,
    #[serde(default)]
    pub metadata: ServiceMetadata,
}

/// Orchestrator response envelope: matches in the orchestrator's preference
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchResponse {
    pub response: Vec<OrchestrateResponse>,
}
