//! Report composition: the single rendering entry point.

use crate::chart::{precipitation_graph, temperature_graph, time_axis};
use crate::format::Format;
use crate::text::round_half_up;
use crate::types::Forecast;

const HTML_OPEN: &str = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>hourcast</title></head><body><pre>";
const HTML_CLOSE: &str = "</pre></body></html>";

/// Render the full report for `forecast`.
///
/// Deterministic and side-effect free. Upstream strings are escaped for
/// the target format.
pub fn render(forecast: &Forecast, format: Format) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(match format {
        Format::Html => HTML_OPEN.to_string(),
        Format::Tty => String::new(),
    });

    if !forecast.alerts.is_empty() {
        let titles = forecast
            .alerts
            .iter()
            .map(|a| format.escape(a))
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(format.bold(&format!("Alerts:  {}", titles)));
    }

    lines.push(format.bold(&format!(
        "Now: {}F, {}",
        round_half_up(forecast.feels_like),
        format.escape(&forecast.current_summary)
    )));
    lines.push(format.bold(&format!(
        "Later: {}",
        format.escape(&forecast.future_summary)
    )));
    lines.push(String::new());

    lines.push(time_axis(forecast, format));
    lines.push(temperature_graph(forecast, format));

    let rain = precipitation_graph(forecast, format);
    if !rain.is_empty() {
        lines.push(rain);
    }

    if format == Format::Html {
        lines.push(HTML_CLOSE.to_string());
    }

    let mut report = lines.join("\n");
    report.push_str("\n\n");
    report
}
