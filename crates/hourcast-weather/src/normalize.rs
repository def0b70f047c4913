//! Maps the upstream payload onto the canonical [`Forecast`].

use crate::error::NormalizationError;
use crate::types::{Forecast, HourlyForecast, HOURLY_WINDOW};
use crate::upstream::{RawForecast, RawHourlyPoint};

/// Parse a raw JSON body and normalize it.
pub fn normalize_json(json: &str) -> Result<Forecast, NormalizationError> {
    let raw: RawForecast =
        serde_json::from_str(json).map_err(|e| NormalizationError::Malformed(e.to_string()))?;
    normalize(&raw)
}

/// Build a [`Forecast`] from an upstream payload.
///
/// Only the first [`HOURLY_WINDOW`] hours are kept. Alerts without a title
/// are dropped.
pub fn normalize(raw: &RawForecast) -> Result<Forecast, NormalizationError> {
    let currently = raw
        .currently
        .as_ref()
        .ok_or(NormalizationError::MissingField("currently"))?;
    let hourly = raw
        .hourly
        .as_ref()
        .ok_or(NormalizationError::MissingField("hourly"))?;
    let points = hourly
        .data
        .as_ref()
        .ok_or(NormalizationError::MissingField("hourly.data"))?;

    if points.is_empty() {
        return Err(NormalizationError::EmptyHourly);
    }

    let hours = points
        .iter()
        .take(HOURLY_WINDOW)
        .enumerate()
        .map(|(hour, point)| normalize_hour(hour, point))
        .collect::<Result<Vec<_>, _>>()?;

    let alerts = raw
        .alerts
        .iter()
        .flatten()
        .filter_map(|alert| alert.title.clone())
        .collect();

    Ok(Forecast {
        alerts,
        temperature: currently
            .temperature
            .ok_or(NormalizationError::MissingField("currently.temperature"))?,
        feels_like: currently
            .apparent_temperature
            .ok_or(NormalizationError::MissingField("currently.apparentTemperature"))?,
        current_summary: currently
            .summary
            .clone()
            .ok_or(NormalizationError::MissingField("currently.summary"))?,
        future_summary: hourly
            .summary
            .clone()
            .ok_or(NormalizationError::MissingField("hourly.summary"))?,
        hourly: hours,
    })
}

fn normalize_hour(hour: usize, point: &RawHourlyPoint) -> Result<HourlyForecast, NormalizationError> {
    let precipitation_probability = point
        .precip_probability
        .ok_or(NormalizationError::MissingField("hourly.data.precipProbability"))?;

    if !(0.0..=1.0).contains(&precipitation_probability) {
        return Err(NormalizationError::ProbabilityOutOfRange {
            hour,
            value: precipitation_probability,
        });
    }

    Ok(HourlyForecast {
        temperature: point
            .temperature
            .ok_or(NormalizationError::MissingField("hourly.data.temperature"))?,
        feels_like: point
            .apparent_temperature
            .ok_or(NormalizationError::MissingField("hourly.data.apparentTemperature"))?,
        precipitation_probability,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hour(temp: f64, apparent: f64, precip: f64) -> serde_json::Value {
        json!({"temperature": temp, "apparentTemperature": apparent, "precipProbability": precip})
    }

    fn payload(hours: Vec<serde_json::Value>) -> serde_json::Value {
        json!({
            "currently": {"summary": "Overcast", "temperature": 45.4, "apparentTemperature": 41.6},
            "hourly": {"summary": "Rain starting tonight.", "data": hours}
        })
    }

    #[test]
    fn test_maps_current_conditions() {
        let forecast = normalize_json(&payload(vec![hour(45.0, 41.0, 0.1)]).to_string()).unwrap();

        assert!(forecast.alerts.is_empty());
        assert_eq!(forecast.temperature, 45.4);
        assert_eq!(forecast.feels_like, 41.6);
        assert_eq!(forecast.current_summary, "Overcast");
        assert_eq!(forecast.future_summary, "Rain starting tonight.");
        assert_eq!(
            forecast.hourly,
            vec![HourlyForecast {
                temperature: 45.0,
                feels_like: 41.0,
                precipitation_probability: 0.1
            }]
        );
    }

    #[test]
    fn test_keeps_first_25_hours() {
        let hours = (0..49).map(|i| hour(i as f64, i as f64, 0.0)).collect();
        let forecast = normalize_json(&payload(hours).to_string()).unwrap();

        assert_eq!(forecast.hourly.len(), HOURLY_WINDOW);
        assert_eq!(forecast.hourly[24].temperature, 24.0);
    }

    #[test]
    fn test_alert_titles_in_order() {
        let mut body = payload(vec![hour(45.0, 41.0, 0.0)]);
        body["alerts"] = json!([
            {"title": "Flood Watch", "severity": "watch"},
            {"severity": "advisory"},
            {"title": "Wind Advisory"}
        ]);

        let forecast = normalize_json(&body.to_string()).unwrap();
        assert_eq!(forecast.alerts, vec!["Flood Watch", "Wind Advisory"]);
    }

    #[test]
    fn test_missing_currently() {
        let body = json!({"hourly": {"summary": "x", "data": [hour(1.0, 1.0, 0.0)]}});
        assert_eq!(
            normalize_json(&body.to_string()),
            Err(NormalizationError::MissingField("currently"))
        );
    }

    #[test]
    fn test_missing_hourly_series() {
        let body = json!({"currently": {"summary": "x", "temperature": 1.0, "apparentTemperature": 1.0}});
        assert_eq!(
            normalize_json(&body.to_string()),
            Err(NormalizationError::MissingField("hourly"))
        );

        let body = json!({
            "currently": {"summary": "x", "temperature": 1.0, "apparentTemperature": 1.0},
            "hourly": {"summary": "y"}
        });
        assert_eq!(
            normalize_json(&body.to_string()),
            Err(NormalizationError::MissingField("hourly.data"))
        );
    }

    #[test]
    fn test_missing_leaf_field() {
        let mut body = payload(vec![hour(45.0, 41.0, 0.0)]);
        body["currently"]
            .as_object_mut()
            .unwrap()
            .remove("apparentTemperature");
        assert_eq!(
            normalize_json(&body.to_string()),
            Err(NormalizationError::MissingField("currently.apparentTemperature"))
        );
    }

    #[test]
    fn test_empty_hourly_rejected() {
        assert_eq!(
            normalize_json(&payload(vec![]).to_string()),
            Err(NormalizationError::EmptyHourly)
        );
    }

    #[test]
    fn test_probability_out_of_range() {
        let body = payload(vec![hour(45.0, 41.0, 0.2), hour(45.0, 41.0, 1.2)]);
        assert_eq!(
            normalize_json(&body.to_string()),
            Err(NormalizationError::ProbabilityOutOfRange { hour: 1, value: 1.2 })
        );
    }

    #[test]
    fn test_out_of_range_beyond_window_is_ignored() {
        let mut hours: Vec<_> = (0..HOURLY_WINDOW).map(|_| hour(45.0, 41.0, 0.0)).collect();
        hours.push(hour(45.0, 41.0, 7.0));
        assert!(normalize_json(&payload(hours).to_string()).is_ok());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            normalize_json("{not json"),
            Err(NormalizationError::Malformed(_))
        ));
    }
}
