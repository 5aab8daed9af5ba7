// tests/common/mod.rs

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use reqwest::Client;

/// Minimal unsigned JWT for tests: `{"exp": exp}` with an empty
/// signature segment. Structurally valid, never signature-checked.
pub fn sample_jwt(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{}}}"#, exp));
    format!("{}.{}.", header, payload)
}

/// Same, with issuer and subject claims filled in.
pub fn sample_jwt_with_claims(exp: i64, iss: &str, sub: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(
        r#"{{"exp":{},"iss":"{}","sub":"{}"}}"#,
        exp, iss, sub
    ));
    format!("{}.{}.", header, payload)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}
