pub mod model;

pub use model::{
    Cloud, InterOrchestrate, OrchResponse, Orchestrate, OrchestrateResponse, OrchestrationFlags,
    Provider, RequestedService, Service, ServiceMetadata, System,
};
