//! Mutual-TLS HTTP client factory.
//!
//! Reads the client certificate/key pair (and optionally a PEM trust store)
//! from disk on every call and produces a configured [`reqwest::Client`].
//! Server-certificate validation is always on; there is deliberately no knob
//! to disable it. The produced client is cheaply cloneable and safe for
//! concurrent reuse, so callers wanting to avoid repeated file reads should
//! hold on to one client rather than rebuild per request.

use crate::config::TlsConfig;
use crate::utils::error::{RegistryError, Result};
use reqwest::{Certificate, Client, Identity};
use std::fs;
use std::path::Path;
use tracing::debug;

fn read_pem(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| RegistryError::Credentials {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Loads the client identity from separate certificate and key PEM files.
fn load_identity(cert_path: &Path, key_path: &Path) -> Result<Identity> {
    let mut pem = read_pem(key_path)?;
    pem.extend_from_slice(&read_pem(cert_path)?);

    Identity::from_pem(&pem).map_err(|e| RegistryError::Credentials {
        path: cert_path.to_path_buf(),
        message: format!("unusable certificate/key pair: {e}"),
    })
}

/// Parses a trust-store file as a bundle of PEM certificates. Fails when the
/// file is unreadable or contains no certificate at all.
pub fn load_trust_store(path: &Path) -> Result<Vec<Certificate>> {
    let pem = read_pem(path)?;
    let roots = Certificate::from_pem_bundle(&pem).map_err(|e| RegistryError::Credentials {
        path: path.to_path_buf(),
        message: format!("malformed trust store: {e}"),
    })?;

    if roots.is_empty() {
        return Err(RegistryError::Credentials {
            path: path.to_path_buf(),
            message: "trust store contains no PEM certificates".to_string(),
        });
    }
    Ok(roots)
}

/// Builds an HTTPS client presenting the configured certificate.
///
/// With a trust store the platform roots are replaced by the bundle's
/// certificates; without one the platform default pool stays in effect.
pub fn build_http_client(tls: &TlsConfig) -> Result<Client> {
    let identity = load_identity(&tls.cert_path, &tls.key_path)?;

    let mut builder = Client::builder().use_rustls_tls().identity(identity);

    if let Some(trust_store_path) = &tls.trust_store_path {
        let roots = load_trust_store(trust_store_path)?;
        debug!(
            roots = roots.len(),
            trust_store = %trust_store_path.display(),
            "loaded trust store"
        );
        builder = builder.tls_built_in_root_certs(false);
        for root in roots {
            builder = builder.add_root_certificate(root);
        }
    }

    if let Some(timeout) = tls.timeout {
        builder = builder.timeout(timeout);
    }

    // Build failures here can only come from the TLS material we just fed in
    // (e.g. a key that does not match the certificate), so they are credential
    // errors, not transport errors.
    builder.build().map_err(|e| RegistryError::Credentials {
        path: tls.cert_path.clone(),
        message: root_cause(&e),
    })
}

/// Deepest message in the error chain; `reqwest::Error` alone displays only
/// "builder error" for a rejected certificate/key pair.
fn root_cause(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(inner) = source {
        message = inner.to_string();
        source = inner.source();
    }
    message
}
