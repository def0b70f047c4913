use super::{bars, gutter, BAR, LABEL_WIDTH};
use crate::format::Format;
use crate::text::{right_justify, round_half_up};
use crate::types::Forecast;

/// Number of bands above the baseline row
pub const TEMPERATURE_GRAPH_HEIGHT: i64 = 7;

/// Scale a temperature into `0..=TEMPERATURE_GRAPH_HEIGHT` against the
/// series range.
///
/// A flat series (`max == min`) has no range to divide by; every value is
/// drawn at full height.
pub fn scale_temperature(value: f64, min: f64, max: f64) -> i64 {
    let range = max - min;
    if range <= 0.0 {
        return TEMPERATURE_GRAPH_HEIGHT;
    }
    round_half_up((value - min) / range * TEMPERATURE_GRAPH_HEIGHT as f64)
}

/// Feels-like bar chart: seven bands topped by the high label, then a
/// filled baseline carrying the low label. Always eight lines.
pub fn temperature_graph(forecast: &Forecast, format: Format) -> String {
    let (min, max) = forecast
        .feels_like_series()
        .fold(None, |acc: Option<(f64, f64)>, t| match acc {
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
            None => Some((t, t)),
        })
        .unwrap_or((forecast.feels_like, forecast.feels_like));

    let scaled: Vec<i64> = forecast
        .feels_like_series()
        .map(|t| scale_temperature(t, min, max))
        .collect();

    let mut lines = Vec::with_capacity(TEMPERATURE_GRAPH_HEIGHT as usize + 1);

    for row in (1..=TEMPERATURE_GRAPH_HEIGHT).rev() {
        let prefix = if row == TEMPERATURE_GRAPH_HEIGHT {
            let label = format!("H {}F", round_half_up(max));
            format.bold(&right_justify(&label, LABEL_WIDTH))
        } else {
            gutter()
        };
        lines.push(format!("{}{}", prefix, bars(&scaled, row)));
    }

    let floor_label = format!("L {}F", round_half_up(min));
    lines.push(format!(
        "{}{}",
        format.bold(&right_justify(&floor_label, LABEL_WIDTH)),
        BAR.repeat(scaled.len())
    ));

    lines.join("\n")
}
