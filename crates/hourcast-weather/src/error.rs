//! Forecast pipeline error types.

use hourcast_core::NetworkError;
use thiserror::Error;

/// The upstream payload could not be mapped onto a [`crate::Forecast`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizationError {
    #[error("Forecast payload is missing {0}")]
    MissingField(&'static str),

    #[error("Forecast payload has no hourly data")]
    EmptyHourly,

    #[error("Precipitation probability {value} at hour {hour} is outside [0, 1]")]
    ProbabilityOutOfRange { hour: usize, value: f64 },

    #[error("Forecast payload is malformed: {0}")]
    Malformed(String),
}

/// Zip code lookup failures.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Invalid zip code: {0}")]
    InvalidZip(String),

    #[error("Unknown zip code: {0}")]
    UnknownZip(String),

    #[error("Zip code {0} matches more than one location")]
    Ambiguous(String),

    #[error("Geocoding service error: {0}")]
    Upstream(String),

    #[error("Geocoding network error: {0}")]
    Network(#[from] NetworkError),
}

/// Errors raised while producing a raw forecast payload.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Geocoding error: {0}")]
    Geocode(#[from] GeocodeError),

    #[error("Forecast service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No forecast API key configured")]
    MissingApiKey,

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("Invalid forecast base URL: {0}")]
    InvalidBaseUrl(String),
}
