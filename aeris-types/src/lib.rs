//! Aeris-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod model;
mod source;

pub use config::{AerisConfig, FetchConfig, MeasurementQuery};
pub use error::AerisError;
pub use model::{AggregatedParameter, Measurement, Parameter, Region, RegionReport, Station};
pub use source::SourceKey;
