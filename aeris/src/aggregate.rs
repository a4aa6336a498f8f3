//! Region-scoped aggregation across all registered sources.
//!
//! One run fans station listings out to every source concurrently, walks each
//! surviving source's stations and parameters sequentially (the per-source
//! rate gates make intra-source concurrency pointless), and merges the
//! resulting samples into canonical parameter groups.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use tokio::time::Instant;
use tracing::{debug, warn};

use aeris_core::normalize::canonical_key;
use aeris_core::region;
use aeris_core::source::AirQualitySource;
use aeris_types::{
    AerisError, AggregatedParameter, Measurement, Parameter, Region, RegionReport, SourceKey,
    Station,
};

use crate::core::Aeris;

/// Samples for one (station, parameter) pair, tagged with the source they
/// came from. Order of appearance is preserved through grouping.
struct PairSamples {
    source: SourceKey,
    parameter: Parameter,
    samples: Vec<Measurement>,
}

struct GroupAccumulator {
    key: String,
    name: String,
    unit: String,
    description: String,
    sources: BTreeSet<SourceKey>,
    sum: f64,
    min: f64,
    max: f64,
    count: usize,
    latest_value: f64,
    latest_timestamp: DateTime<Utc>,
}

impl GroupAccumulator {
    fn new(key: String, first: &Measurement) -> Self {
        Self {
            key,
            name: String::new(),
            unit: String::new(),
            description: String::new(),
            sources: BTreeSet::new(),
            sum: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            count: 0,
            latest_value: first.value,
            latest_timestamp: first.timestamp,
        }
    }

    fn absorb(&mut self, pair: &PairSamples) {
        if self.name.is_empty()
            && let Some(name) = pair.parameter.name.as_deref().filter(|s| !s.is_empty())
        {
            self.name = name.to_string();
        }
        if self.unit.is_empty()
            && let Some(unit) = pair.parameter.unit.as_deref().filter(|s| !s.is_empty())
        {
            self.unit = unit.to_string();
        }
        if self.description.is_empty()
            && let Some(desc) = pair
                .parameter
                .description
                .as_deref()
                .filter(|s| !s.is_empty())
        {
            self.description = desc.to_string();
        }
        self.sources.insert(pair.source);

        for m in &pair.samples {
            self.sum += m.value;
            self.min = self.min.min(m.value);
            self.max = self.max.max(m.value);
            self.count += 1;
            // Strict comparison: ties keep the first-seen sample.
            if m.timestamp > self.latest_timestamp {
                self.latest_value = m.value;
                self.latest_timestamp = m.timestamp;
            }
        }
    }

    fn finish(self) -> AggregatedParameter {
        AggregatedParameter {
            key: self.key,
            name: self.name,
            unit: self.unit,
            description: self.description,
            sources: self.sources,
            average: self.sum / self.count as f64,
            min: self.min,
            max: self.max,
            count: self.count,
            latest_value: self.latest_value,
            latest_timestamp: self.latest_timestamp,
        }
    }
}

fn past(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|d| Instant::now() >= d)
}

impl Aeris {
    /// Aggregate all air-quality data for one named region.
    ///
    /// Station listings fan out to every registered source concurrently;
    /// sources whose listing fails are logged and skipped, and only when
    /// every listing fails does the run abort with `AllSourcesFailed`.
    /// Stations with invalid or out-of-region coordinates are discarded.
    /// Parameter and measurement failures degrade to empty results, so a
    /// flaky source thins the report instead of sinking it.
    ///
    /// # Errors
    /// - `RegionNotFound` when `name` does not match the region table.
    /// - `AllSourcesFailed` when every source's station listing fails.
    pub async fn aggregate_region(&self, name: &str) -> Result<RegionReport, AerisError> {
        let region = *region::find(name).ok_or_else(|| AerisError::region_not_found(name))?;
        let deadline = self.cfg.deadline.map(|d| Instant::now() + d);

        let listings = join_all(self.sources.iter().map(|s| {
            let source = Arc::clone(s);
            async move {
                let key = source.key();
                Self::source_call_with_timeout(
                    key,
                    "stations",
                    self.cfg.source_timeout,
                    source.stations(),
                )
                .await
            }
        }))
        .await;

        let mut errors: Vec<AerisError> = Vec::new();
        let mut per_source: Vec<(Arc<dyn AirQualitySource>, Vec<Station>)> = Vec::new();
        for (source, listing) in self.sources.iter().zip(listings) {
            match listing {
                Ok(stations) => {
                    let in_region = Self::stations_in_region(stations, &region);
                    debug!(source = source.key().as_str(), count = in_region.len(), "stations in region");
                    per_source.push((Arc::clone(source), in_region));
                }
                Err(e) => {
                    warn!(source = source.key().as_str(), error = %e, "station listing failed");
                    errors.push(e);
                }
            }
        }
        if per_source.is_empty() {
            return Err(AerisError::AllSourcesFailed(errors));
        }

        let harvests = join_all(
            per_source
                .into_iter()
                .map(|(source, stations)| self.harvest_source(source, stations, deadline)),
        )
        .await;

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<GroupAccumulator> = Vec::new();
        for pair in harvests.into_iter().flatten() {
            if pair.samples.is_empty() {
                continue;
            }
            let key = canonical_key(Some(pair.parameter.normalization_input()));
            let slot = *index.entry(key.clone()).or_insert_with(|| {
                groups.push(GroupAccumulator::new(key, &pair.samples[0]));
                groups.len() - 1
            });
            groups[slot].absorb(&pair);
        }

        Ok(RegionReport {
            region,
            parameters: groups.into_iter().map(GroupAccumulator::finish).collect(),
        })
    }

    /// Keep stations that sit inside the region box. Invalid coordinates are
    /// discarded, never propagated; upstream data is not a caller bug.
    fn stations_in_region(stations: Vec<Station>, region: &Region) -> Vec<Station> {
        stations
            .into_iter()
            .filter(|s| {
                region::is_in_region(s.latitude, s.longitude, region).unwrap_or_else(|_| {
                    warn!(station = %s.id, lat = s.latitude, lon = s.longitude, "invalid station coordinates");
                    false
                })
            })
            .collect()
    }

    /// Walk one source's stations sequentially, collecting per-parameter
    /// samples. Stops issuing requests once the deadline passes; everything
    /// gathered so far is still returned.
    async fn harvest_source(
        &self,
        source: Arc<dyn AirQualitySource>,
        stations: Vec<Station>,
        deadline: Option<Instant>,
    ) -> Vec<PairSamples> {
        let key = source.key();
        let mut out = Vec::new();

        'stations: for station in stations {
            if past(deadline) {
                warn!(source = key.as_str(), "deadline reached, returning partial data");
                break;
            }
            let parameters = match Self::source_call_with_timeout(
                key,
                "parameters",
                self.cfg.source_timeout,
                source.parameters(&station.id),
            )
            .await
            {
                Ok(p) => p,
                Err(e) => {
                    warn!(source = key.as_str(), station = %station.id, error = %e, "parameter listing failed");
                    continue;
                }
            };

            for parameter in parameters {
                if past(deadline) {
                    warn!(source = key.as_str(), "deadline reached, returning partial data");
                    break 'stations;
                }
                let samples = match Self::source_call_with_timeout(
                    key,
                    "measurements",
                    self.cfg.source_timeout,
                    source.measurements(&station.id, &parameter.raw_id, &self.cfg.query),
                )
                .await
                {
                    Ok(m) => m,
                    Err(e) => {
                        warn!(source = key.as_str(), station = %station.id, parameter = %parameter.raw_id, error = %e, "measurement listing failed");
                        continue;
                    }
                };
                out.push(PairSamples {
                    source: key,
                    parameter,
                    samples,
                });
            }
        }
        out
    }
}
