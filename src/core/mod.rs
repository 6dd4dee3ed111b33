pub mod client;
pub mod orchestration;
pub mod registry;

pub use client::build_http_client;
pub use registry::{RegistryClient, ServiceResponse};
