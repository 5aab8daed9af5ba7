use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Certificate, Client};
use tracing::debug;

use crate::config::types::ClientConfig;

/// Build the HTTP client the cluster transport runs on, applying the
/// config's trust material and TLS version bounds.
///
/// Config building never validates trust material; this is where a bad
/// certificate or an unreadable file surfaces.
pub fn build_http_client(config: &ClientConfig) -> Result<Client> {
    let mut builder = Client::builder().use_rustls_tls();

    if config.insecure_skip_tls_verify() {
        debug!("TLS verification disabled");
        builder = builder.danger_accept_invalid_certs(true);
    }

    if let Some(data) = config.ca_cert_data() {
        let der = STANDARD
            .decode(data)
            .map_err(|e| anyhow!("invalid CA cert data: {}", e))?;
        // rustls defers DER validation: a bad certificate surfaces at
        // builder.build(), not here
        let cert =
            Certificate::from_der(&der).context("CA cert data is not a valid certificate")?;
        builder = builder.add_root_certificate(cert);
    }

    if let Some(path) = config.ca_cert_file() {
        let pem = std::fs::read(path)
            .with_context(|| format!("reading CA cert file {}", path.display()))?;
        let cert =
            Certificate::from_pem(&pem).context("CA cert file is not a valid certificate")?;
        builder = builder.add_root_certificate(cert);
    }

    if let Some(versions) = config.tls_versions() {
        if let Some(min) = versions.iter().min() {
            builder = builder.min_tls_version(min.to_reqwest());
        }
        if let Some(max) = versions.iter().max() {
            builder = builder.max_tls_version(max.to_reqwest());
        }
    }

    builder.build().context("failed to build HTTP client")
}
