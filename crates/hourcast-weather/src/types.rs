/// Number of hour slots kept from the upstream series
pub const HOURLY_WINDOW: usize = 25;

/// One hour slot of the forecast window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyForecast {
    pub temperature: f64,
    pub feels_like: f64,
    /// Probability of rain in [0, 1]
    pub precipitation_probability: f64,
}

/// Canonical report data for one location.
///
/// Position `i` in `hourly` is the hour offset `i` from now.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub alerts: Vec<String>,
    pub temperature: f64,
    pub feels_like: f64,
    pub current_summary: String,
    pub future_summary: String,
    pub hourly: Vec<HourlyForecast>,
}

impl Forecast {
    pub fn feels_like_series(&self) -> impl Iterator<Item = f64> + '_ {
        self.hourly.iter().map(|h| h.feels_like)
    }

    pub fn precipitation_series(&self) -> impl Iterator<Item = f64> + '_ {
        self.hourly.iter().map(|h| h.precipitation_probability)
    }
}

/// Geographic location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}
