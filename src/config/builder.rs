use std::path::PathBuf;

use crate::auth::credentials::AuthCredentials;
use crate::config::types::{ClientConfig, TlsVersion};
use crate::utils::constants::{DEFAULT_MARATHON_PATH, DEFAULT_METRONOME_PATH};

/// Accumulates optional fields and produces an immutable [`ClientConfig`].
///
/// No validation happens here: mutually exclusive trust material
/// (cert data vs cert file) is not checked, misconfiguration surfaces
/// later when the transport is built.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    credentials: Option<AuthCredentials>,
    insecure_skip_tls_verify: bool,
    ca_cert_data: Option<String>,
    ca_cert_file: Option<PathBuf>,
    marathon_path: Option<String>,
    metronome_path: Option<String>,
    tls_versions: Option<Vec<TlsVersion>>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_config(config: &ClientConfig) -> Self {
        Self {
            credentials: config.credentials.clone(),
            insecure_skip_tls_verify: config.insecure_skip_tls_verify,
            ca_cert_data: config.ca_cert_data.clone(),
            ca_cert_file: config.ca_cert_file.clone(),
            marathon_path: Some(config.marathon_path.clone()),
            metronome_path: Some(config.metronome_path.clone()),
            tls_versions: config.tls_versions.clone(),
        }
    }

    pub fn with_credentials(mut self, credentials: AuthCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Skip TLS verification on the transport.
    pub fn insecure_skip_tls_verify(mut self) -> Self {
        self.insecure_skip_tls_verify = true;
        self
    }

    pub fn with_insecure_skip_tls_verify(mut self, skip: bool) -> Self {
        self.insecure_skip_tls_verify = skip;
        self
    }

    /// CA certificate to trust, as base64-encoded DER. This should NOT
    /// include the -----BEGIN CERTIFICATE----- / -----END CERTIFICATE-----
    /// markers.
    pub fn with_ca_cert_data(mut self, ca_cert_data: impl Into<String>) -> Self {
        self.ca_cert_data = Some(ca_cert_data.into());
        self
    }

    /// Path to a PEM file with the CA certificate to trust.
    pub fn with_ca_cert_file(mut self, ca_cert_file: impl Into<PathBuf>) -> Self {
        self.ca_cert_file = Some(ca_cert_file.into());
        self
    }

    pub fn with_marathon_path(mut self, marathon_path: impl Into<String>) -> Self {
        self.marathon_path = Some(marathon_path.into());
        self
    }

    pub fn with_metronome_path(mut self, metronome_path: impl Into<String>) -> Self {
        self.metronome_path = Some(metronome_path.into());
        self
    }

    pub fn with_tls_versions(mut self, tls_versions: impl Into<Vec<TlsVersion>>) -> Self {
        self.tls_versions = Some(tls_versions.into());
        self
    }

    /// Unset service paths resolve to their defaults here, at build
    /// time, not at use time.
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            credentials: self.credentials,
            insecure_skip_tls_verify: self.insecure_skip_tls_verify,
            ca_cert_data: self.ca_cert_data,
            ca_cert_file: self.ca_cert_file,
            marathon_path: self
                .marathon_path
                .unwrap_or_else(|| DEFAULT_MARATHON_PATH.to_owned()),
            metronome_path: self
                .metronome_path
                .unwrap_or_else(|| DEFAULT_METRONOME_PATH.to_owned()),
            tls_versions: self.tls_versions,
        }
    }
}
