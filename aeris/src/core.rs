use std::sync::Arc;
use std::time::Duration;

use aeris_core::source::AirQualitySource;
use aeris_types::{AerisConfig, AerisError, SourceKey};

/// Orchestrator that aggregates air-quality data across registered sources.
pub struct Aeris {
    pub(crate) sources: Vec<Arc<dyn AirQualitySource>>,
    pub(crate) cfg: AerisConfig,
}

impl std::fmt::Debug for Aeris {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aeris")
            .field("sources", &self.sources.iter().map(|s| s.key()).collect::<Vec<_>>())
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing an `Aeris` orchestrator with custom configuration.
pub struct AerisBuilder {
    sources: Vec<Arc<dyn AirQualitySource>>,
    cfg: AerisConfig,
}

impl Default for AerisBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AerisBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Starts with no sources; register at least one via [`with_source`].
    /// Defaults: 100-sample cap per parameter, 30-day window, 30s per-call
    /// source timeout, no overall deadline.
    ///
    /// [`with_source`]: AerisBuilder::with_source
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: vec![],
            cfg: AerisConfig::default(),
        }
    }

    /// Register a source connector.
    ///
    /// Registration order is the tiebreak everywhere order matters: it decides
    /// which source's name, unit, and description label a merged parameter
    /// group, and which sample wins a latest-timestamp tie. Duplicates are
    /// not deduplicated; avoid registering the same source twice.
    #[must_use]
    pub fn with_source(mut self, s: Arc<dyn AirQualitySource>) -> Self {
        self.sources.push(s);
        self
    }

    /// Replace the whole configuration at once.
    #[must_use]
    pub fn config(mut self, cfg: AerisConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Cap the number of measurements per (station, parameter) pair,
    /// keeping the most recent.
    #[must_use]
    pub const fn measurement_limit(mut self, limit: usize) -> Self {
        self.cfg.query.limit = limit;
        self
    }

    /// Drop measurements older than this many days at aggregation time.
    #[must_use]
    pub const fn max_age_days(mut self, days: i64) -> Self {
        self.cfg.query.max_age_days = days;
        self
    }

    /// Set the per-call source timeout.
    ///
    /// Bounds each individual station, parameter, and measurement listing;
    /// a timed-out call degrades to an empty result for that step rather
    /// than failing the whole aggregation.
    #[must_use]
    pub const fn source_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Set an overall deadline for one aggregation run.
    ///
    /// When exceeded, the engine stops issuing new upstream requests and
    /// returns the partial report computed from the calls that finished.
    #[must_use]
    pub const fn deadline(mut self, deadline: Duration) -> Self {
        self.cfg.deadline = Some(deadline);
        self
    }

    /// Build the `Aeris` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no sources have been registered via
    /// [`with_source`](AerisBuilder::with_source).
    pub fn build(self) -> Result<Aeris, AerisError> {
        if self.sources.is_empty() {
            return Err(AerisError::InvalidArg(
                "no sources registered; add at least one via with_source(...)".to_string(),
            ));
        }

        Ok(Aeris {
            sources: self.sources,
            cfg: self.cfg,
        })
    }
}

impl Aeris {
    /// Start building a new `Aeris` instance.
    ///
    /// Typical usage chains source registration and configuration, e.g.:
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let aeris = aeris::Aeris::builder()
    ///     .with_source(Arc::new(GiosSource::new()))
    ///     .with_source(Arc::new(OpenMeteoSource::new()))
    ///     .source_timeout(std::time::Duration::from_secs(10))
    ///     .build()?;
    /// let report = aeris.aggregate_region("malopolskie").await?;
    /// ```
    #[must_use]
    pub fn builder() -> AerisBuilder {
        AerisBuilder::new()
    }

    /// Wrap a source future with the per-call timeout and standardized
    /// timeout error mapping.
    pub(crate) async fn source_call_with_timeout<T, Fut>(
        source: SourceKey,
        operation: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, AerisError>
    where
        Fut: core::future::Future<Output = Result<T, AerisError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(AerisError::source_timeout(source.as_str(), operation)))
    }
}
