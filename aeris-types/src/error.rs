use thiserror::Error;

/// Unified error type for the aeris workspace.
///
/// Covers caller bugs (coordinates, unknown regions, bad arguments),
/// per-source transport failures, and the aggregate raised when every
/// registered source fails at once.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum AerisError {
    /// Coordinates outside the valid geographic range. A caller bug, never
    /// silently clamped.
    #[error("invalid coordinate: lat={lat} lon={lon}")]
    InvalidCoordinate {
        /// Latitude as supplied by the caller.
        lat: f64,
        /// Longitude as supplied by the caller.
        lon: f64,
    },

    /// The requested region identifier does not name a known region.
    #[error("region not found: {name}")]
    RegionNotFound {
        /// Identifier the caller asked for.
        name: String,
    },

    /// Invalid input argument (builder misuse, malformed request).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with returned or expected data (missing fields, parse failures).
    #[error("data issue: {0}")]
    Data(String),

    /// An individual source returned an error.
    #[error("{source} failed: {msg}")]
    Source {
        /// Source name that failed.
        // Raw identifier opts out of thiserror's `source` field inference;
        // the field name is still `source` to all callers.
        r#source: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A single HTTP request failed at the transport level.
    #[error("transport error for {url}: {msg}")]
    Transport {
        /// URL of the failed request.
        url: String,
        /// Underlying transport message.
        msg: String,
    },

    /// All retry attempts for one upstream request were exhausted.
    #[error("upstream unavailable after {attempts} attempts: {url}: {msg}")]
    UpstreamUnavailable {
        /// URL of the request that could not be completed.
        url: String,
        /// Number of attempts made before giving up.
        attempts: u32,
        /// Message from the final failed attempt.
        msg: String,
    },

    /// An individual source call exceeded the configured per-source timeout.
    #[error("source timed out: {operation} via {source}")]
    SourceTimeout {
        /// Source name that timed out.
        // Raw identifier opts out of thiserror's `source` field inference.
        r#source: String,
        /// Operation label (e.g. "stations", "measurements").
        operation: String,
    },

    /// Every registered source failed; contains the individual failures.
    #[error("all sources failed: {0:?}")]
    AllSourcesFailed(Vec<AerisError>),
}

impl AerisError {
    /// Helper: build a `Source` error with the source name and message.
    pub fn source(source: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source: source.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `Transport` error for a failed request.
    pub fn transport(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(source: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::SourceTimeout {
            source: source.into(),
            operation: operation.into(),
        }
    }

    /// Helper: build a `RegionNotFound` error for a region identifier.
    pub fn region_not_found(name: impl Into<String>) -> Self {
        Self::RegionNotFound { name: name.into() }
    }

    /// Returns true if this error reflects a caller mistake rather than an
    /// upstream or internal failure (HTTP 400-equivalent at the edge).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidCoordinate { .. } | Self::RegionNotFound { .. } | Self::InvalidArg(_)
        )
    }

    /// Flatten nested `AllSourcesFailed` structures into a plain vector.
    #[must_use]
    pub fn flatten(self) -> Vec<Self> {
        match self {
            Self::AllSourcesFailed(list) => list.into_iter().flat_map(Self::flatten).collect(),
            other => vec![other],
        }
    }
}
