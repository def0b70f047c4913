use hourcast_core::Config;
use hourcast_weather::{
    FixtureSource, ForecastSource, LiveSource, WeatherError, WeatherProvider, ZipGeocoder,
};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ForecastSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn ForecastSource>) -> Self {
        Self { source }
    }

    /// Wire up the live source, fronted by the fixture when one is configured.
    pub fn from_config(config: &Config) -> Result<Self, WeatherError> {
        let geocoder = ZipGeocoder::from_config(&config.geocoding)?;
        let provider = WeatherProvider::from_config(&config.forecast)?;
        let live: Arc<dyn ForecastSource> = Arc::new(LiveSource::new(geocoder, provider));

        let source: Arc<dyn ForecastSource> = match &config.fixture.zip {
            Some(zip) => {
                let fixture = match &config.fixture.path {
                    Some(path) => FixtureSource::from_file(zip.as_str(), path, live)?,
                    None => FixtureSource::bundled(zip.as_str(), live)?,
                };
                tracing::info!("Zip {} is served from the recorded forecast", fixture.zip());
                Arc::new(fixture)
            }
            None => live,
        };

        Ok(Self::new(source))
    }
}
