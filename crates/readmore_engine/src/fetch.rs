use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;

use readmore_logging::readmore_debug;

use crate::volumes::decode_volumes;
use crate::{FailureKind, FetchError, Volume};

/// Public Google Books volumes endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";
/// Page size requested from the API; there is no pagination beyond it.
pub const MAX_RESULTS: u32 = 20;

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub endpoint: String,
    pub max_results: u32,
    pub connect_timeout: Duration,
    /// Whole-request deadline; `None` waits for the server indefinitely.
    pub request_timeout: Option<Duration>,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_results: MAX_RESULTS,
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec!["application/json".to_string()],
        }
    }
}

#[async_trait::async_trait]
pub trait BookSearcher: Send + Sync {
    /// Runs one search for `query` (subject terms joined by `+subject:`).
    async fn search(&self, query: &str) -> Result<Vec<Volume>, FetchError>;
}

/// Builds `{endpoint}?q=subject:{query}&maxResults={max_results}`.
///
/// The `+` separators stay literal so the API reads them as term
/// boundaries; spaces and other unsafe bytes are percent-encoded.
pub fn build_search_url(endpoint: &str, query: &str, max_results: u32) -> Result<Url, FetchError> {
    let mut url = Url::parse(endpoint)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    url.set_query(Some(&format!("q=subject:{query}&maxResults={max_results}")));
    Ok(url)
}

#[derive(Debug, Clone)]
pub struct ReqwestSearcher {
    settings: SearchSettings,
    client: reqwest::Client,
}

impl ReqwestSearcher {
    pub fn new(settings: SearchSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit));
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl BookSearcher for ReqwestSearcher {
    async fn search(&self, query: &str) -> Result<Vec<Volume>, FetchError> {
        let url = build_search_url(&self.settings.endpoint, query, self.settings.max_results)?;
        readmore_debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }
        readmore_debug!("search body received ({} bytes)", bytes.len());

        decode_volumes(&bytes)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
