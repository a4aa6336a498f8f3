//! The source connector contract.

use async_trait::async_trait;

use aeris_types::{AerisError, Measurement, MeasurementQuery, Parameter, SourceKey, Station};

/// Contract implemented by every provider connector.
///
/// Connectors surface upstream failures as `Err`; the orchestrator is the
/// single place that degrades those to "nothing to aggregate from this
/// source this cycle", so error paths stay observable in tests.
///
/// Requests to one provider must remain serialized through that provider's
/// rate gate; implementations built on [`crate::fetch::ResilientFetcher`]
/// get this for free.
#[async_trait]
pub trait AirQualitySource: Send + Sync {
    /// Stable key identifying this source in reports and logs.
    fn key(&self) -> SourceKey;

    /// List all stations known to this provider.
    async fn stations(&self) -> Result<Vec<Station>, AerisError>;

    /// List the parameters measured at one station.
    async fn parameters(&self, station_id: &str) -> Result<Vec<Parameter>, AerisError>;

    /// List measurements for one (station, parameter) pair, already passed
    /// through the shared filter pipeline: finite values only, within the
    /// query's age window, newest first, capped at the query's limit.
    async fn measurements(
        &self,
        station_id: &str,
        parameter_id: &str,
        query: &MeasurementQuery,
    ) -> Result<Vec<Measurement>, AerisError>;
}
