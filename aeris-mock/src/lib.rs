//! aeris-mock
//!
//! Mock source for CI-safe examples and orchestrator tests. [`MockSource`]
//! serves deterministic data from static fixtures; [`DynamicMockSource`] is
//! programmed at runtime through a [`DynamicMockController`] and can return,
//! fail, or hang per call.

use async_trait::async_trait;
use chrono::Utc;

use aeris_core::measurements::filter_window;
use aeris_core::source::AirQualitySource;
use aeris_types::{AerisError, Measurement, MeasurementQuery, Parameter, SourceKey, Station};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

/// Mock source backed by static fixture data.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Static source key for orchestrator registration.
    pub const KEY: SourceKey = fixtures::KEY;

    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AirQualitySource for MockSource {
    fn key(&self) -> SourceKey {
        Self::KEY
    }

    async fn stations(&self) -> Result<Vec<Station>, AerisError> {
        Ok(fixtures::stations())
    }

    async fn parameters(&self, station_id: &str) -> Result<Vec<Parameter>, AerisError> {
        Ok(fixtures::parameters(station_id))
    }

    async fn measurements(
        &self,
        station_id: &str,
        parameter_id: &str,
        query: &MeasurementQuery,
    ) -> Result<Vec<Measurement>, AerisError> {
        let raw = fixtures::measurements(station_id, parameter_id);
        Ok(filter_window(raw, Utc::now(), query))
    }
}
