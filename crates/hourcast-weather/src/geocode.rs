//! Zip code to coordinates lookup.
//! Uses a Zippopotam-style API (`{base}/{country}/{zip}`), no API key required.

use crate::error::GeocodeError;
use crate::types::Location;
use hourcast_core::{GeocodingConfig, ReqwestErrorExt};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("hourcast/", env!("CARGO_PKG_VERSION"));

/// Coordinates closer than this are treated as the same place
const SAME_PLACE_EPSILON: f64 = 1e-4;

#[derive(Debug, Deserialize)]
struct ZipResponse {
    #[serde(default)]
    places: Vec<ZipPlace>,
}

#[derive(Debug, Deserialize)]
struct ZipPlace {
    #[serde(rename = "place name")]
    place_name: Option<String>,
    latitude: String,
    longitude: String,
}

#[derive(Debug, Clone)]
pub struct ZipGeocoder {
    client: Arc<Client>,
    base_url: Url,
    country: String,
}

impl ZipGeocoder {
    pub fn new(base_url: &str, country: &str, timeout: Duration) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GeocodeError::Network(e.into_network_error()))?;

        Ok(Self {
            client: Arc::new(client),
            base_url: directory_url(base_url)
                .map_err(|e| GeocodeError::Upstream(format!("Invalid base URL: {}", e)))?,
            country: country.to_string(),
        })
    }

    pub fn from_config(config: &GeocodingConfig) -> Result<Self, GeocodeError> {
        Self::new(
            &config.base_url,
            &config.country,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Resolve a 5-digit zip code to a single location.
    pub async fn locate(&self, zip: &str) -> Result<Location, GeocodeError> {
        let zip = zip.trim();
        if zip.len() != 5 || !zip.chars().all(|c| c.is_ascii_digit()) {
            return Err(GeocodeError::InvalidZip(zip.to_string()));
        }

        let url = self
            .base_url
            .join(&format!("{}/{}", self.country, zip))
            .map_err(|e| GeocodeError::Upstream(e.to_string()))?;

        tracing::debug!("Geocoding zip {}", zip);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GeocodeError::Network(e.into_network_error()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GeocodeError::UnknownZip(zip.to_string()));
        }
        if !status.is_success() {
            return Err(GeocodeError::Upstream(format!(
                "lookup for {} returned {}",
                zip, status
            )));
        }

        let body: ZipResponse = response
            .json()
            .await
            .map_err(|e| GeocodeError::Upstream(format!("unreadable response: {}", e)))?;

        let location = single_location(zip, &body.places)?;
        tracing::info!(
            "Zip {} resolved to {:.4}, {:.4} ({})",
            zip,
            location.latitude,
            location.longitude,
            body.places
                .first()
                .and_then(|p| p.place_name.as_deref())
                .unwrap_or("unnamed")
        );
        Ok(location)
    }
}

/// Parse `base` so that `join` appends to its path instead of replacing
/// the last segment.
pub(crate) fn directory_url(base: &str) -> Result<Url, url::ParseError> {
    if base.ends_with('/') {
        Url::parse(base)
    } else {
        Url::parse(&format!("{}/", base))
    }
}

fn single_location(zip: &str, places: &[ZipPlace]) -> Result<Location, GeocodeError> {
    let mut locations = places.iter().map(|p| {
        let latitude = p.latitude.trim().parse::<f64>();
        let longitude = p.longitude.trim().parse::<f64>();
        match (latitude, longitude) {
            (Ok(latitude), Ok(longitude)) => Ok(Location {
                latitude,
                longitude,
            }),
            _ => Err(GeocodeError::Upstream(format!(
                "bad coordinates for {}: {}, {}",
                zip, p.latitude, p.longitude
            ))),
        }
    });

    let first = locations
        .next()
        .ok_or_else(|| GeocodeError::UnknownZip(zip.to_string()))??;

    for other in locations {
        let other = other?;
        if (other.latitude - first.latitude).abs() > SAME_PLACE_EPSILON
            || (other.longitude - first.longitude).abs() > SAME_PLACE_EPSILON
        {
            return Err(GeocodeError::Ambiguous(zip.to_string()));
        }
    }

    Ok(first)
}
