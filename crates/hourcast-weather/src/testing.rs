//! Forecast builders shared by unit tests.

use crate::types::{Forecast, HourlyForecast};

/// Forecast whose hours carry the given feels-like values and no rain.
pub fn with_feels_like(values: &[f64]) -> Forecast {
    with_hours(values.iter().map(|&t| (t, 0.0)))
}

/// Forecast at a constant 50F with the given rain probabilities.
pub fn with_precipitation(values: &[f64]) -> Forecast {
    with_hours(values.iter().map(|&p| (50.0, p)))
}

pub fn with_hours(hours: impl IntoIterator<Item = (f64, f64)>) -> Forecast {
    Forecast {
        alerts: vec![],
        temperature: 52.3,
        feels_like: 49.6,
        current_summary: "Mostly Cloudy".to_string(),
        future_summary: "Light rain in the evening.".to_string(),
        hourly: hours
            .into_iter()
            .map(|(feels_like, precipitation_probability)| HourlyForecast {
                temperature: feels_like + 2.0,
                feels_like,
                precipitation_probability,
            })
            .collect(),
    }
}
