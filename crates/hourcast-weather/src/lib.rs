//! Forecast reports for hourcast
//!
//! The pure core (normalization, charts, report composition) lives in
//! `normalize`, `format`, `text`, `chart` and `report`. The `geocode`,
//! `provider` and `source` modules are the network collaborators that
//! supply raw payloads.

pub mod chart;
pub mod error;
pub mod format;
pub mod geocode;
pub mod normalize;
pub mod provider;
pub mod report;
pub mod source;
pub mod text;
pub mod types;
pub mod upstream;

pub use error::{GeocodeError, NormalizationError, WeatherError};
pub use format::{bold, cyan, strip_decoration, Format};
pub use geocode::ZipGeocoder;
pub use normalize::{normalize, normalize_json};
pub use provider::WeatherProvider;
pub use report::render;
pub use source::{FixtureSource, ForecastSource, LiveSource};
pub use types::*;
pub use upstream::RawForecast;

#[cfg(test)]
mod testing;
