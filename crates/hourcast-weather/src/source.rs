//! Where raw forecast payloads come from.
//!
//! The front end only sees [`ForecastSource`]. The live implementation
//! geocodes and then calls the forecast API; [`FixtureSource`] answers one
//! configured zip code from a recorded payload so the rate-limited service
//! is not needed for it.

use crate::error::WeatherError;
use crate::geocode::ZipGeocoder;
use crate::provider::WeatherProvider;
use crate::upstream::RawForecast;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Recording served by [`FixtureSource::bundled`]
pub const BUNDLED_FIXTURE: &str = include_str!("../fixtures/forecast.json");

#[async_trait]
pub trait ForecastSource: Send + Sync {
    /// Raw payload for a zip code, or a typed failure.
    async fn forecast(&self, zip: &str) -> Result<RawForecast, WeatherError>;
}

/// Geocode the zip, then fetch the forecast for its coordinates.
#[derive(Debug, Clone)]
pub struct LiveSource {
    geocoder: ZipGeocoder,
    provider: WeatherProvider,
}

impl LiveSource {
    pub fn new(geocoder: ZipGeocoder, provider: WeatherProvider) -> Self {
        Self { geocoder, provider }
    }
}

#[async_trait]
impl ForecastSource for LiveSource {
    async fn forecast(&self, zip: &str) -> Result<RawForecast, WeatherError> {
        let location = self.geocoder.locate(zip).await?;
        self.provider.fetch(&location).await
    }
}

/// Serves a fixed payload for one zip code and delegates the rest.
pub struct FixtureSource {
    zip: String,
    payload: RawForecast,
    fallback: Arc<dyn ForecastSource>,
}

impl FixtureSource {
    pub fn new(zip: impl Into<String>, payload: RawForecast, fallback: Arc<dyn ForecastSource>) -> Self {
        Self {
            zip: zip.into(),
            payload,
            fallback,
        }
    }

    /// Use the recording shipped with the crate.
    pub fn bundled(
        zip: impl Into<String>,
        fallback: Arc<dyn ForecastSource>,
    ) -> Result<Self, WeatherError> {
        let payload = parse_fixture(BUNDLED_FIXTURE)?;
        Ok(Self::new(zip, payload, fallback))
    }

    /// Load the recording from a JSON file.
    pub fn from_file(
        zip: impl Into<String>,
        path: &Path,
        fallback: Arc<dyn ForecastSource>,
    ) -> Result<Self, WeatherError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| WeatherError::Fixture(format!("{}: {}", path.display(), e)))?;
        let payload = parse_fixture(&json)?;
        Ok(Self::new(zip, payload, fallback))
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }
}

fn parse_fixture(json: &str) -> Result<RawForecast, WeatherError> {
    serde_json::from_str(json).map_err(|e| WeatherError::Fixture(e.to_string()))
}

#[async_trait]
impl ForecastSource for FixtureSource {
    async fn forecast(&self, zip: &str) -> Result<RawForecast, WeatherError> {
        if zip.trim() == self.zip {
            tracing::info!("Serving recorded forecast for {}", self.zip);
            return Ok(self.payload.clone());
        }
        self.fallback.forecast(zip).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::types::HOURLY_WINDOW;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts calls and always fails
    #[derive(Default)]
    struct Unreachable {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ForecastSource for Unreachable {
        async fn forecast(&self, zip: &str) -> Result<RawForecast, WeatherError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(WeatherError::Status {
                status: 503,
                message: format!("no live data for {}", zip),
            })
        }
    }

    #[test]
    fn test_bundled_fixture_normalizes() {
        let raw = parse_fixture(BUNDLED_FIXTURE).unwrap();
        let forecast = normalize(&raw).unwrap();

        assert_eq!(forecast.hourly.len(), HOURLY_WINDOW);
        assert!(!forecast.alerts.is_empty());
        assert!(forecast.precipitation_series().any(|p| p > 0.0));
    }

    #[tokio::test]
    async fn test_fixture_zip_bypasses_fallback() {
        let fallback = Arc::new(Unreachable::default());
        let source = FixtureSource::bundled("10001", fallback.clone()).unwrap();

        assert!(source.forecast("10001").await.is_ok());
        assert!(source.forecast(" 10001 ").await.is_ok());
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_other_zips_use_fallback() {
        let fallback = Arc::new(Unreachable::default());
        let source = FixtureSource::bundled("10001", fallback.clone()).unwrap();

        let err = source.forecast("94103").await.unwrap_err();
        assert!(matches!(err, WeatherError::Status { status: 503, .. }));
        assert_eq!(fallback.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fixture_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"currently": {{"summary": "Snow", "temperature": 20.0, "apparentTemperature": 11.0}},
                "hourly": {{"summary": "Snow all day.", "data": []}}}}"#
        )
        .unwrap();

        let source =
            FixtureSource::from_file("60601", file.path(), Arc::new(Unreachable::default())).unwrap();
        let raw = source.forecast("60601").await.unwrap();
        assert_eq!(raw.currently.unwrap().summary.as_deref(), Some("Snow"));
    }

    #[test]
    fn test_missing_fixture_file() {
        let err = FixtureSource::from_file(
            "60601",
            Path::new("/nonexistent/forecast.json"),
            Arc::new(Unreachable::default()),
        )
        .err()
        .unwrap();
        assert!(matches!(err, WeatherError::Fixture(_)));
    }
}
