//! Thin JSON-over-HTTP wrapper.
//!
//! Single-shot: no retry, no timeout, no auth header. Any 2xx is parsed as
//! JSON; anything else becomes [`ClientError::Request`]. Transport failures
//! surface as the underlying `reqwest::Error`.

use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Failure of a single API call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-2xx status.
    #[error("API Error: {status_text}")]
    Request { status: u16, status_text: String },

    /// Connection, DNS, or protocol failure before a status was received.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A 2xx body that is not the JSON we expected.
    #[error("failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },
}

impl ClientError {
    /// HTTP status for [`ClientError::Request`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// JSON client bound to one base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`. A trailing `/` is dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// GET `path` and parse the body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        debug!("api: GET {url}");
        let resp = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;
        Self::finish(path, resp).await
    }

    /// POST `body` (if any) as JSON to `path` and parse the reply.
    pub async fn post<B, T>(&self, path: &str, body: Option<&B>) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("api: POST {url}");
        let req = self.client.post(&url);
        let req = match body {
            Some(body) => req.json(body),
            None => req.header(CONTENT_TYPE, "application/json"),
        };
        let resp = req.send().await?;
        Self::finish(path, resp).await
    }

    async fn finish<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T, ClientError> {
        let status = resp.status();
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string());
            debug!("api: {path} returned {status}");
            return Err(ClientError::Request {
                status: status.as_u16(),
                status_text,
            });
        }

        let bytes = resp.bytes().await?;
        // An empty 2xx body reads as JSON `null`.
        let body: &[u8] = if bytes.is_empty() { &b"null"[..] } else { &bytes[..] };
        serde_json::from_slice(body).map_err(|source| ClientError::Decode {
            path: path.to_string(),
            source,
        })
    }
}
