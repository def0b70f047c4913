//! Wire schema of the Dark Sky compatible forecast payload.
//!
//! Every field is optional; `normalize` decides which ones are required.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawForecast {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub currently: Option<RawCurrently>,
    pub hourly: Option<RawHourly>,
    pub alerts: Option<Vec<RawAlert>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCurrently {
    pub time: Option<i64>,
    pub summary: Option<String>,
    pub temperature: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub precip_probability: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHourly {
    pub summary: Option<String>,
    pub data: Option<Vec<RawHourlyPoint>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawHourlyPoint {
    pub time: Option<i64>,
    pub temperature: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub precip_probability: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAlert {
    pub title: Option<String>,
    pub severity: Option<String>,
    pub uri: Option<String>,
}
