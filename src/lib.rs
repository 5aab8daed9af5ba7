//! # DC/OS Client Library
//!
//! Client-side plumbing for addressing the Marathon and Metronome APIs
//! on a DC/OS cluster through a single HTTP client: signed auth token
//! parsing and login caching, TLS transport configuration, and
//! source-tag path rewriting.
//!
//! Modules:
//! - `auth` — token model, credentials, IAM login session
//! - `config` — immutable client configuration and its builder
//! - `routing` — source-tag path interceptor
//! - `transport` — reqwest client construction from a config
//! - `resilience` — retry policy for the login exchange

pub mod auth;
pub mod config;
pub mod resilience;
pub mod routing;
pub mod tests;
pub mod transport;
pub mod utils;

pub use crate::auth::credentials::AuthCredentials;
pub use crate::auth::session::AuthSession;
pub use crate::auth::token::AuthToken;
pub use crate::config::builder::ConfigBuilder;
pub use crate::config::types::{ClientConfig, TlsVersion};
pub use crate::routing::interceptor::{ApiSource, PathInterceptor};
