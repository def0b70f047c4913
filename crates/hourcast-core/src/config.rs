use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "HOURCAST_CONFIG";

/// Environment variable that overrides `forecast.api_key`
pub const FORECAST_API_KEY_ENV: &str = "HOURCAST_FORECAST_API_KEY";

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a one-line summary of all errors
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub forecast: ForecastConfig,

    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Pre-recorded payload served for one well-known zip code
    #[serde(default)]
    pub fixture: FixtureConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the HTTP front end binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Dark Sky compatible forecast API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    #[serde(default = "default_forecast_url")]
    pub base_url: String,

    /// API key; usually supplied through `HOURCAST_FORECAST_API_KEY`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_forecast_url() -> String {
    "https://api.pirateweather.net".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            base_url: default_forecast_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Postal code lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    #[serde(default = "default_geocoding_url")]
    pub base_url: String,

    /// Country segment of the lookup path (e.g. "us")
    #[serde(default = "default_country")]
    pub country: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_geocoding_url() -> String {
    "https://api.zippopotam.us".to_string()
}

fn default_country() -> String {
    "us".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_url(),
            country: default_country(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureConfig {
    /// Zip code answered from the fixture instead of the live services
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,

    /// Payload file; the bundled recording is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl FixtureConfig {
    pub fn is_enabled(&self) -> bool {
        self.zip.is_some()
    }
}

impl Config {
    /// Load configuration from `$HOURCAST_CONFIG` or the default location,
    /// falling back to defaults when no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from an explicit path
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            tracing::info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path).map_err(|e| {
            ConfigError::NotFound(format!("{}: {}", config_path.display(), e))
        })?;

        let config: Config =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        tracing::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Load configuration and validate it
    ///
    /// Warnings are logged; critical errors abort loading.
    pub fn load_validated() -> Result<(Self, ValidationResult), ConfigError> {
        let config = Self::load()?;
        let validation = config.validate();

        if !validation.is_valid() {
            return Err(ConfigError::Invalid(validation.error_summary()));
        }

        for warning in &validation.warnings {
            tracing::warn!("Config warning: {}", warning);
        }

        Ok((config, validation))
    }

    /// Replace settings that have an environment override
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(FORECAST_API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.forecast.api_key = Some(key.trim().to_string());
            }
        }
    }

    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.server.bind_address.parse::<std::net::SocketAddr>().is_err() {
            result.add_error(
                "server.bind_address",
                format!("Not a socket address: {}", self.server.bind_address),
            );
        }

        self.validate_url(&self.forecast.base_url, "forecast.base_url", &mut result);
        self.validate_url(&self.geocoding.base_url, "geocoding.base_url", &mut result);

        if self.forecast.timeout_secs == 0 {
            result.add_error("forecast.timeout_secs", "Timeout must be greater than 0");
        }
        if self.geocoding.timeout_secs == 0 {
            result.add_error("geocoding.timeout_secs", "Timeout must be greater than 0");
        }

        if self.geocoding.country.trim().is_empty() {
            result.add_error("geocoding.country", "Country code must not be empty");
        }

        // Live lookups fail without a key, but the fixture zip still works
        let has_key = self
            .forecast
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty());
        if !has_key {
            result.add_warning(
                "forecast.api_key",
                format!(
                    "No forecast API key configured (set {})",
                    FORECAST_API_KEY_ENV
                ),
            );
        }

        if let Some(zip) = &self.fixture.zip {
            if zip.len() != 5 || !zip.chars().all(|c| c.is_ascii_digit()) {
                result.add_error("fixture.zip", format!("Not a 5-digit zip code: {}", zip));
            }
        }
        if let Some(path) = &self.fixture.path {
            if !path.is_file() {
                result.add_error(
                    "fixture.path",
                    format!("Fixture file does not exist: {}", path.display()),
                );
            }
        }

        result
    }

    fn validate_url(&self, url_str: &str, field_name: &str, result: &mut ValidationResult) {
        match Url::parse(url_str) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    result.add_error(
                        field_name,
                        format!("URL must use http or https scheme, got: {}", url.scheme()),
                    );
                }

                if url.host().is_none() {
                    result.add_error(field_name, "URL must have a host");
                }
            }
            Err(e) => {
                result.add_error(field_name, format!("Invalid URL: {}", e));
            }
        }
    }

    fn config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                ConfigError::MissingSetting(format!(
                    "no config directory on this platform; set {}",
                    CONFIG_PATH_ENV
                ))
            })?
            .join("hourcast");

        Ok(config_dir.join("config.toml"))
    }
}
