//! Dark Sky compatible forecast API client.

use crate::error::WeatherError;
use crate::geocode::directory_url;
use crate::types::Location;
use crate::upstream::RawForecast;
use hourcast_core::{ForecastConfig, ReqwestErrorExt};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Blocks the forecast payload does not need
const EXCLUDE: &str = "minutely,daily,flags";

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Arc<Client>,
    base_url: Url,
    api_key: Option<String>,
}

impl WeatherProvider {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WeatherError::Network(e.into_network_error()))?;

        let base_url = directory_url(base_url)
            .map_err(|e| WeatherError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        Ok(Self {
            client: Arc::new(client),
            base_url,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn from_config(config: &ForecastConfig) -> Result<Self, WeatherError> {
        Self::new(
            &config.base_url,
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Fetch the raw forecast for a location. Never retried.
    pub async fn fetch(&self, location: &Location) -> Result<RawForecast, WeatherError> {
        let api_key = self.api_key.as_deref().ok_or(WeatherError::MissingApiKey)?;

        let url = self
            .base_url
            .join(&format!(
                "forecast/{}/{:.4},{:.4}",
                api_key, location.latitude, location.longitude
            ))
            .map_err(|e| WeatherError::Parse(e.to_string()))?;

        tracing::debug!(
            "Fetching forecast for {:.4}, {:.4}",
            location.latitude,
            location.longitude
        );

        let response = self
            .client
            .get(url)
            .query(&[("exclude", EXCLUDE)])
            .send()
            .await
            .map_err(|e| WeatherError::Network(e.into_network_error()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!("Forecast service returned {}", status);
            return Err(WeatherError::Status {
                status: status.as_u16(),
                message: message.trim().to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Network(e.into_network_error()))?;

        serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))
    }
}
