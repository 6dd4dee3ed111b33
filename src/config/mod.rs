//! Caller-supplied configuration: where the registry/orchestrator lives and
//! which credentials to present. The crate defines no environment-variable or
//! config-file convention of its own.

use crate::utils::error::{RegistryError, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Network location of a registry or orchestrator core system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub address: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }

    /// Base URL all operation paths are joined onto. Scheme is always https;
    /// the client presents its certificate on every call.
    pub fn base_url(&self) -> Result<Url> {
        let raw = format!("https://{}:{}", self.address, self.port);
        Url::parse(&raw).map_err(|e| RegistryError::InvalidEndpoint {
            message: format!("{raw}: {e}"),
        })
    }
}

/// Mutual-TLS material for the client factory.
///
/// `trust_store_path` selects between a caller-supplied PEM bundle of root
/// certificates (platform roots disabled) and the platform default pool.
/// `timeout` defaults to 5 seconds; `None` means unbounded, which callers
/// should avoid outside of debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    pub cert_path: PathBuf,
    pub key_path: PathBuf,
    pub trust_store_path: Option<PathBuf>,
    pub timeout: Option<Duration>,
}

impl TlsConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Client certificate plus a dedicated trust store, bounded timeout.
    pub fn with_trust_store(
        cert_path: impl Into<PathBuf>,
        key_path: impl Into<PathBuf>,
        trust_store_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cert_path: cert_path.into(),
            key_path: key_path.into(),
            trust_store_path: Some(trust_store_path.into()),
            timeout: Some(Self::DEFAULT_TIMEOUT),
        }
    }

    /// Client certificate only; server chains validate against the platform
    /// default pool.
    pub fn with_platform_roots(
        cert_path: impl Into<PathBuf>,
        key_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            cert_path: cert_path.into(),
            key_path: key_path.into(),
            trust_store_path: None,
            timeout: Some(Self::DEFAULT_TIMEOUT),
        }
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_composes_https_host_port() {
        let endpoint = Endpoint::new("127.0.0.1", 8443);
        let url = endpoint.base_url().unwrap();
        assert_eq!(url.as_str(), "https://127.0.0.1:8443/");
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn base_url_rejects_garbage_address() {
        let endpoint = Endpoint::new("not a host", 8443);
        let err = endpoint.base_url().unwrap_err();
        assert!(matches!(err, RegistryError::InvalidEndpoint { .. }));
    }

    #[test]
    fn default_timeout_is_bounded() {
        let tls = TlsConfig::with_platform_roots("cert.pem", "key.pem");
        assert_eq!(tls.timeout, Some(Duration::from_secs(5)));
        assert!(tls.trust_store_path.is_none());

        let unbounded = tls.timeout(None);
        assert_eq!(unbounded.timeout, None);
    }
}
