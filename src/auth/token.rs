use std::fmt;

use anyhow::{anyhow, Result};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use crate::utils::constants::TOKEN_REFRESH_MARGIN_SECS;

/// Claim set embedded in a compact signed token. Signature verification
/// is the transport's concern; only the claims are read here.
#[derive(Debug, Deserialize, Clone)]
pub struct Claims {
    pub exp: i64, // UNIX TIMESTAMP
    #[serde(default)]
    pub iss: Option<String>,
    #[serde(default)]
    pub sub: Option<String>,
}

/// Auth token holding the raw JWT and its parsed claim set.
///
/// Immutable after construction; construction fails unless the token is
/// structurally valid and carries a numeric `exp` claim.
#[derive(Debug, Clone)]
pub struct AuthToken {
    token: String,
    claims: Claims,
}

impl AuthToken {
    pub fn parse(token: &str) -> Result<AuthToken> {
        let claims = decode_claims(token)?;
        debug!(expires_at = claims.exp, "auth token parsed");
        Ok(Self {
            token: token.to_owned(),
            claims,
        })
    }

    /// Raw compact token, as sent in the Authorization header.
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn expires_at(&self) -> i64 {
        self.claims.exp
    }

    /// True once the expiration falls at or before now + 24h (UTC).
    /// Deliberately a day early: extra refresh calls beat an expired
    /// token mid-flight.
    pub fn requires_refresh(&self) -> bool {
        self.claims.exp <= Utc::now().timestamp() + TOKEN_REFRESH_MARGIN_SECS
    }
}

// Diagnostics only. Never used for comparison or serialization.
impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AuthToken(exp={}, iss={}, sub={})",
            self.claims.exp,
            self.claims.iss.as_deref().unwrap_or("-"),
            self.claims.sub.as_deref().unwrap_or("-"),
        )
    }
}

fn decode_claims(token: &str) -> Result<Claims> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(anyhow!("invalid JWT format"));
    }

    let decoded = URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| anyhow!("base64 decode error: {}", e))?;

    serde_json::from_slice::<Claims>(&decoded)
        .map_err(|e| anyhow!("invalid JWT claim set: {}", e))
}
