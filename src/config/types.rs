use std::path::{Path, PathBuf};

use crate::auth::credentials::AuthCredentials;
use crate::config::builder::ConfigBuilder;

/// TLS protocol versions allowed on the cluster transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TlsVersion {
    Tls1_0,
    Tls1_1,
    Tls1_2,
    Tls1_3,
}

impl TlsVersion {
    pub fn to_reqwest(self) -> reqwest::tls::Version {
        match self {
            TlsVersion::Tls1_0 => reqwest::tls::Version::TLS_1_0,
            TlsVersion::Tls1_1 => reqwest::tls::Version::TLS_1_1,
            TlsVersion::Tls1_2 => reqwest::tls::Version::TLS_1_2,
            TlsVersion::Tls1_3 => reqwest::tls::Version::TLS_1_3,
        }
    }
}

/// ================================
/// Client configuration
/// ================================
///
/// Immutable snapshot of everything needed to talk to a cluster:
/// credentials, trust material, TLS version allow-list, and the two
/// service path prefixes. Built once via [`ConfigBuilder`], never
/// mutated; freely shareable across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub(crate) credentials: Option<AuthCredentials>,
    pub(crate) insecure_skip_tls_verify: bool,
    /// base64-encoded DER, without PEM markers
    pub(crate) ca_cert_data: Option<String>,
    pub(crate) ca_cert_file: Option<PathBuf>,
    pub(crate) marathon_path: String,
    pub(crate) metronome_path: String,
    pub(crate) tls_versions: Option<Vec<TlsVersion>>,
}

impl ClientConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Builder seeded from an existing config ("with-x" copies). The
    /// seed config is left untouched.
    pub fn builder_from(config: &ClientConfig) -> ConfigBuilder {
        ConfigBuilder::from_config(config)
    }

    pub fn credentials(&self) -> Option<&AuthCredentials> {
        self.credentials.as_ref()
    }

    pub fn insecure_skip_tls_verify(&self) -> bool {
        self.insecure_skip_tls_verify
    }

    pub fn ca_cert_data(&self) -> Option<&str> {
        self.ca_cert_data.as_deref()
    }

    pub fn ca_cert_file(&self) -> Option<&Path> {
        self.ca_cert_file.as_deref()
    }

    /// Relative path to the Marathon service on the gateway.
    pub fn marathon_path(&self) -> &str {
        &self.marathon_path
    }

    /// Relative path to the Metronome service on the gateway.
    pub fn metronome_path(&self) -> &str {
        &self.metronome_path
    }

    pub fn tls_versions(&self) -> Option<&[TlsVersion]> {
        self.tls_versions.as_deref()
    }
}
