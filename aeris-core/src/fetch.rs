//! Rate-gated, retrying fetch over an injectable HTTP transport.
//!
//! One [`ResilientFetcher`] instance belongs to one provider and serializes
//! all of that provider's requests through a single watermark: the timestamp
//! of the last completed request. Concurrent callers contend on the gate,
//! which is exactly the quota contract upstream APIs expect.
//!
//! Endpoint fallback (live data, then archival data) is deliberately *not*
//! here. Only a connector knows that an empty but well-formed payload means
//! "try older data"; see the GIOS connector.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

use aeris_types::{AerisError, FetchConfig};

/// Minimal HTTP transport contract: fetch a URL, return the body as text.
///
/// The fetcher is agnostic to the wire format; connectors deserialize into
/// their provider-specific DTOs. Tests inject fakes here.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a single GET request.
    async fn get(&self, url: &str) -> Result<String, AerisError>;
}

/// Production transport backed by `reqwest`.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport with a default client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Build a transport whose client attaches the given headers to every
    /// request (e.g. an API key header).
    ///
    /// # Errors
    /// Returns `InvalidArg` if the client cannot be constructed.
    pub fn with_default_headers(headers: reqwest::header::HeaderMap) -> Result<Self, AerisError> {
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AerisError::InvalidArg(format!("http client: {e}")))?;
        Ok(Self { client })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, AerisError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AerisError::transport(url, e.to_string()))?;
        let resp = resp
            .error_for_status()
            .map_err(|e| AerisError::transport(url, e.to_string()))?;
        resp.text()
            .await
            .map_err(|e| AerisError::transport(url, e.to_string()))
    }
}

/// Shared last-request watermark enforcing minimum inter-request spacing.
///
/// The watermark advances only when a request completes successfully, so
/// spacing is measured from completion time, and it lives behind an async
/// mutex so multiple tasks sharing one provider adapter stay serialized.
pub struct RateGate {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateGate {
    /// Create a gate enforcing the given minimum spacing.
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Acquire the gate, sleeping out whatever remains of the spacing
    /// interval. The returned guard holds the gate for the duration of the
    /// request; set it to the completion time on success.
    pub async fn acquire(&self) -> tokio::sync::MutexGuard<'_, Option<Instant>> {
        let guard = self.last_request.lock().await;
        if let Some(last) = *guard {
            let due = last + self.min_interval;
            if due > Instant::now() {
                debug!(wait_ms = (due - Instant::now()).as_millis() as u64, "rate gate wait");
                tokio::time::sleep_until(due).await;
            }
        }
        guard
    }
}

/// One provider's resilient request path: rate gate, bounded retry with a
/// fixed backoff, and error propagation after the final attempt.
pub struct ResilientFetcher {
    transport: Arc<dyn Transport>,
    gate: RateGate,
    cfg: FetchConfig,
}

impl ResilientFetcher {
    /// Build a fetcher over the given transport and fetch settings.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>, cfg: FetchConfig) -> Self {
        Self {
            transport,
            gate: RateGate::new(cfg.min_interval),
            cfg,
        }
    }

    /// Fetch a URL, applying the rate gate once and retrying transport
    /// failures up to the configured attempt count.
    ///
    /// # Errors
    /// Returns `UpstreamUnavailable` when every attempt failed.
    pub async fn fetch(&self, url: &str) -> Result<String, AerisError> {
        let attempts = self.cfg.max_retries.max(1);
        let mut watermark = self.gate.acquire().await;
        let mut last_err: Option<AerisError> = None;

        for attempt in 1..=attempts {
            debug!(url, attempt, attempts, "issuing request");
            match self.transport.get(url).await {
                Ok(body) => {
                    *watermark = Some(Instant::now());
                    return Ok(body);
                }
                Err(e) => {
                    warn!(url, attempt, attempts, error = %e, "request failed");
                    last_err = Some(e);
                    if attempt < attempts {
                        tokio::time::sleep(self.cfg.retry_delay).await;
                    }
                }
            }
        }

        let msg = last_err.map_or_else(String::new, |e| e.to_string());
        Err(AerisError::UpstreamUnavailable {
            url: url.to_string(),
            attempts,
            msg,
        })
    }

    /// Fetch a URL and deserialize the JSON body.
    ///
    /// # Errors
    /// `UpstreamUnavailable` on transport exhaustion, `Data` on decode
    /// failure.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AerisError> {
        let body = self.fetch(url).await?;
        serde_json::from_str(&body).map_err(|e| AerisError::Data(format!("{url}: {e}")))
    }
}
