use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("credential error in {}: {message}", path.display())]
    Credentials { path: PathBuf, message: String },

    #[error("invalid endpoint: {message}")]
    InvalidEndpoint { message: String },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("registry returned status {status}: {body}")]
    StatusError { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
