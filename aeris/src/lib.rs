//! Aeris aggregates air-quality data across multiple upstream providers.
//!
//! Overview
//! - Routes station, parameter, and measurement listings to sources that
//!   implement the `aeris_core` contract.
//! - Scopes every aggregation to one named region; stations are filtered by
//!   bounding-box containment before any further upstream calls are made.
//! - Merges heterogeneous parameter vocabularies into canonical groups via
//!   the shared normalizer, then computes per-group statistics over the
//!   union of all contributing samples.
//! - Degrades gracefully: a failing or timed-out source thins the report,
//!   and only a total station-listing failure aborts the run.
//!
//! Key behaviors and trade-offs
//! - Station listings fan out to all sources concurrently; within one source
//!   the detail calls run sequentially because the per-source rate gate
//!   would serialize them anyway.
//! - Per-call timeouts bound each upstream call; an optional overall
//!   deadline returns a partial report instead of an error.
//! - Source registration order is the labeling and tiebreak order for merged
//!   groups, so register the most trusted source first.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use aeris::Aeris;
//!
//! let aeris = Aeris::builder()
//!     .with_source(Arc::new(aeris_gios::GiosSource::new()))
//!     .with_source(Arc::new(aeris_openmeteo::OpenMeteoSource::new()))
//!     .source_timeout(std::time::Duration::from_secs(10))
//!     .build()?;
//!
//! let report = aeris.aggregate_region("malopolskie").await?;
//! for p in &report.parameters {
//!     println!("{}: avg {:.1} over {} samples", p.key, p.average, p.count);
//! }
//! ```
#![warn(missing_docs)]

mod aggregate;
pub(crate) mod core;

pub use core::{Aeris, AerisBuilder};

// Re-export the contract and domain types for convenience
pub use aeris_core::source::AirQualitySource;
pub use aeris_core::{REGIONS, canonical_key, classify, region::find as find_region};
pub use aeris_types::{
    AerisConfig, AerisError, AggregatedParameter, FetchConfig, Measurement, MeasurementQuery,
    Parameter, Region, RegionReport, SourceKey, Station,
};
