use super::{gutter, GAP};
use crate::format::Format;
use crate::text::left_justify;
use crate::types::Forecast;

/// Every sixth hour gets a label
const LABEL_EVERY: usize = 6;

/// Hour-offset ruler for the forecast window.
pub fn time_axis(forecast: &Forecast, format: Format) -> String {
    time_axis_for_columns(forecast.hourly.len(), format)
}

/// Ruler over `columns` slots: `<n>h` every sixth slot (spanning two slots),
/// and the final offset in bold.
pub fn time_axis_for_columns(columns: usize, format: Format) -> String {
    let mut line = gutter();
    let mut column = 0;

    while column < columns {
        if column == columns - 1 {
            line.push_str(&format.bold(&format!("{}h", column)));
            break;
        } else if column % LABEL_EVERY == 0 {
            line.push_str(&left_justify(&format!("{}h", column), GAP.len() * 2));
            column += 2;
        } else {
            line.push_str(GAP);
            column += 1;
        }
    }

    line
}
