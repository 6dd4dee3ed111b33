pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{Endpoint, TlsConfig};
pub use core::{build_http_client, RegistryClient, ServiceResponse};
pub use domain::{
    Cloud, InterOrchestrate, OrchResponse, Orchestrate, OrchestrateResponse, OrchestrationFlags,
    Provider, RequestedService, Service, ServiceMetadata, System,
};
pub use utils::error::{RegistryError, Result};
