use http::uri::PathAndQuery;
use http::{Request, Uri};
use tracing::warn;

use crate::config::types::ClientConfig;
use crate::utils::constants::{API_SOURCE_HEADER, MARATHON_API_SOURCE, METRONOME_API_SOURCE};

/// Which backend service a request is destined for. Local routing only;
/// the tag is stripped before the request leaves the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiSource {
    Marathon,
    Metronome,
}

impl ApiSource {
    /// Recognizes exactly the two fixed wire values; anything else is
    /// not a source tag.
    pub fn from_header_value(value: &str) -> Option<ApiSource> {
        match value {
            MARATHON_API_SOURCE => Some(ApiSource::Marathon),
            METRONOME_API_SOURCE => Some(ApiSource::Metronome),
            _ => None,
        }
    }

    pub fn as_header_value(&self) -> &'static str {
        match self {
            ApiSource::Marathon => MARATHON_API_SOURCE,
            ApiSource::Metronome => METRONOME_API_SOURCE,
        }
    }
}

/// Rewrites tagged request paths with the configured service prefix so a
/// single HTTP client can address either backend.
#[derive(Debug, Clone)]
pub struct PathInterceptor {
    marathon_path: String,
    metronome_path: String,
}

impl PathInterceptor {
    pub fn new(marathon_path: impl Into<String>, metronome_path: impl Into<String>) -> Self {
        Self {
            marathon_path: marathon_path.into(),
            metronome_path: metronome_path.into(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.marathon_path(), config.metronome_path())
    }

    /// Prepend the service prefix for the tagged backend, then strip the
    /// tag header. Only the first header value is consulted; callers set
    /// at most one tag per request. Untagged requests pass through
    /// unchanged.
    pub fn apply<B>(&self, request: &mut Request<B>) {
        let source = request
            .headers()
            .get(API_SOURCE_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(ApiSource::from_header_value);

        if let Some(source) = source {
            let prefix = match source {
                ApiSource::Marathon => self.marathon_path.as_str(),
                ApiSource::Metronome => self.metronome_path.as_str(),
            };
            prepend_path(request, prefix);
        }

        request.headers_mut().remove(API_SOURCE_HEADER);
    }
}

fn prepend_path<B>(request: &mut Request<B>, prefix: &str) {
    let uri = request.uri();
    let path_and_query = uri.path_and_query().map(PathAndQuery::as_str).unwrap_or("/");

    let rewritten: PathAndQuery = match format!("{}{}", prefix, path_and_query).parse() {
        Ok(pq) => pq,
        Err(e) => {
            warn!(prefix, "invalid service path prefix, leaving path untouched: {e}");
            return;
        }
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(rewritten);
    match Uri::from_parts(parts) {
        Ok(new_uri) => *request.uri_mut() = new_uri,
        Err(e) => warn!("path rewrite produced an invalid URI: {e}"),
    }
}
