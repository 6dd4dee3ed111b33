//! Handshake-level checks of the trust-store path: a server chain signed by a
//! bundle root must validate, a chain signed by an outside root must not.

use arrowhead_client::{build_http_client, RegistryClient, RegistryError, TlsConfig};
use std::fs::File;
use std::io::BufReader;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_rustls::rustls::pki_types::{CertificateDer, PrivateKeyDer};
use tokio_rustls::rustls::ServerConfig;
use tokio_rustls::TlsAcceptor;
use url::Url;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn load_certs(path: &Path) -> Vec<CertificateDer<'static>> {
    let mut reader = BufReader::new(File::open(path).unwrap());
    rustls_pemfile::certs(&mut reader)
        .collect::<Result<_, _>>()
        .unwrap()
}

fn load_key(path: &Path) -> PrivateKeyDer<'static> {
    let mut reader = BufReader::new(File::open(path).unwrap());
    rustls_pemfile::private_key(&mut reader).unwrap().unwrap()
}

/// Serves one minimal HTTP response over TLS with the ca1-signed localhost
/// certificate, then keeps accepting so a failed handshake from the reject
/// case cannot wedge the listener.
async fn spawn_tls_server() -> SocketAddr {
    let _ = tokio_rustls::rustls::crypto::ring::default_provider().install_default();

    let mut chain = load_certs(&fixture("server.crt.pem"));
    chain.extend(load_certs(&fixture("ca1.crt.pem")));
    let key = load_key(&fixture("server.key.pem"));

    let config = ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(chain, key)
        .unwrap();
    let acceptor = TlsAcceptor::from(Arc::new(config));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let acceptor = acceptor.clone();
            tokio::spawn(async move {
                if let Ok(mut tls) = acceptor.accept(stream).await {
                    let mut buf = [0u8; 2048];
                    let _ = tls.read(&mut buf).await;
                    let _ = tls
                        .write_all(
                            b"HTTP/1.1 200 OK\r\n\
                              content-length: 7\r\n\
                              connection: close\r\n\
                              \r\n\
                              Got it!",
                        )
                        .await;
                    let _ = tls.shutdown().await;
                }
            });
        }
    });

    addr
}

fn client_against(addr: SocketAddr, tls: &TlsConfig) -> RegistryClient {
    let http = build_http_client(tls).unwrap();
    // The server certificate names localhost, so connect by name.
    let base = Url::parse(&format!("https://localhost:{}", addr.port())).unwrap();
    RegistryClient::from_parts(base, http)
}

#[tokio::test]
async fn trust_store_accepts_a_chain_signed_by_a_bundle_root() {
    let addr = spawn_tls_server().await;

    // truststore.pem bundles ca1 and ca2; the server chain is signed by ca1.
    let tls = TlsConfig::with_trust_store(
        fixture("client.crt.pem"),
        fixture("client.key.pem"),
        fixture("truststore.pem"),
    );
    let response = client_against(addr, &tls).echo().await.unwrap();

    assert!(response.is_success());
    assert_eq!(response.text(), "Got it!");
}

#[tokio::test]
async fn trust_store_rejects_a_chain_signed_by_no_bundle_root() {
    let addr = spawn_tls_server().await;

    // Only ca2 trusted; the server chain is signed by ca1.
    let tls = TlsConfig::with_trust_store(
        fixture("client.crt.pem"),
        fixture("client.key.pem"),
        fixture("ca2.crt.pem"),
    );
    let err = client_against(addr, &tls).echo().await.unwrap_err();

    match err {
        RegistryError::TransportError(e) => assert!(e.is_connect(), "not a handshake failure: {e}"),
        other => panic!("expected TransportError, got {other:?}"),
    }
}
