//! aeris-core
//!
//! Core types, traits, and utilities shared across the aeris ecosystem.
//!
//! - `source`: the `AirQualitySource` trait implemented by provider connectors.
//! - `region`: static region table and coordinate classification.
//! - `normalize`: canonical parameter key derivation.
//! - `fetch`: rate-gated, retrying HTTP fetch over an injectable transport.
//! - `measurements`: the shared measurement filter pipeline.
//!
//! Async runtime (Tokio)
//! ---------------------
//! This crate assumes the Tokio ecosystem as the async runtime. Rate-limit
//! waits and retry backoffs use `tokio::time`, so fetcher behavior can be
//! tested under a paused clock (`#[tokio::test(start_paused = true)]`).
#![warn(missing_docs)]

/// Rate-gated resilient fetching over an injectable HTTP transport.
pub mod fetch;
/// Shared measurement filtering applied uniformly by all connectors.
pub mod measurements;
/// Canonical parameter key derivation.
pub mod normalize;
/// Region table and coordinate classification.
pub mod region;
/// The `AirQualitySource` trait implemented by provider connectors.
pub mod source;

pub use fetch::{HttpTransport, RateGate, ResilientFetcher, Transport};
pub use measurements::filter_window;
pub use normalize::canonical_key;
pub use region::{REGIONS, classify, find, is_in_region, validate_coordinates};
pub use source::AirQualitySource;

pub use aeris_types::{
    AerisConfig, AerisError, AggregatedParameter, FetchConfig, Measurement, MeasurementQuery,
    Parameter, Region, RegionReport, SourceKey, Station,
};
