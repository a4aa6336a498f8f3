//! Configuration types shared across the orchestrator and source connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Upstream fetch resilience settings applied per provider.
///
/// One `FetchConfig` governs one provider's rate gate and retry loop; the
/// defaults mirror the conservative spacing the public GIOS API tolerates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Minimum spacing between two requests to the same provider.
    pub min_interval: Duration,
    /// Maximum attempts per request before giving up.
    pub max_retries: u32,
    /// Fixed pause between retry attempts.
    pub retry_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            min_interval: Duration::from_millis(1000),
            max_retries: 3,
            retry_delay: Duration::from_millis(5000),
        }
    }
}

/// Bounds applied to every measurement listing, regardless of provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MeasurementQuery {
    /// Maximum number of measurements returned, keeping the most recent.
    pub limit: usize,
    /// Drop measurements older than this many days at call time.
    pub max_age_days: i64,
}

impl Default for MeasurementQuery {
    fn default() -> Self {
        Self {
            limit: 100,
            max_age_days: 30,
        }
    }
}

/// Global configuration for the `Aeris` aggregation orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AerisConfig {
    /// Measurement window and cap used for every (station, parameter) pair.
    pub query: MeasurementQuery,
    /// Timeout applied to each individual source call.
    pub source_timeout: Duration,
    /// Optional overall deadline for one aggregation run. When exceeded the
    /// engine stops issuing new upstream requests and returns the partial
    /// aggregation computed so far.
    pub deadline: Option<Duration>,
}

impl Default for AerisConfig {
    fn default() -> Self {
        Self {
            query: MeasurementQuery::default(),
            source_timeout: Duration::from_secs(30),
            deadline: None,
        }
    }
}
