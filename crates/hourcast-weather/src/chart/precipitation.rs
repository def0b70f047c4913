use super::{bars, gutter, LABEL_WIDTH};
use crate::format::Format;
use crate::text::{right_justify, round_half_up};
use crate::types::Forecast;

pub const PRECIPITATION_GRAPH_HEIGHT: i64 = 5;

/// Rain probability chart, hanging from the top row down.
///
/// Returns an empty string when no hour has any chance of rain. Otherwise
/// five cyan lines; the row matching the peak probability carries the
/// `R <peak>%` label.
pub fn precipitation_graph(forecast: &Forecast, format: Format) -> String {
    let peak = forecast.precipitation_series().fold(0.0_f64, f64::max);
    if peak <= 0.0 {
        return String::new();
    }

    let height = PRECIPITATION_GRAPH_HEIGHT as f64;
    let scaled: Vec<i64> = forecast
        .precipitation_series()
        .map(|p| round_half_up(p * height))
        .collect();
    let label_row = round_half_up(peak * height);

    (1..=PRECIPITATION_GRAPH_HEIGHT)
        .map(|row| {
            let prefix = if row == label_row {
                let label = format!("R {}%", round_half_up(peak * 100.0));
                right_justify(&label, LABEL_WIDTH)
            } else {
                gutter()
            };
            format.cyan(&format!("{}{}", prefix, bars(&scaled, row)))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
