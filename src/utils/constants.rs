//! Shared constants and invariants

/// Header carrying the source tag. Read and stripped locally, never
/// transmitted to the cluster.
pub const API_SOURCE_HEADER: &str = "x-dcos-api-source";

// Recognized source tag values
pub const MARATHON_API_SOURCE: &str = "marathon";
pub const METRONOME_API_SOURCE: &str = "metronome";

// Service path prefixes on the cluster gateway
pub const DEFAULT_MARATHON_PATH: &str = "/service/marathon";
pub const DEFAULT_METRONOME_PATH: &str = "/service/metronome";

/// IAM login endpoint, relative to the cluster base URL.
pub const AUTH_LOGIN_PATH: &str = "/acs/api/v1/auth/login";

/// Tokens are renewed a full day before actual expiry.
pub const TOKEN_REFRESH_MARGIN_SECS: i64 = 86_400;
