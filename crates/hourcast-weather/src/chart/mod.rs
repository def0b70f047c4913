//! Fixed-height bar charts and the hour ruler above them.
//!
//! Every chart line starts with a [`LABEL_WIDTH`] column gutter followed by
//! one [`BAR`]-wide slot per forecast hour, so all three stay aligned.

mod axis;
mod precipitation;
mod temperature;

pub use axis::{time_axis, time_axis_for_columns};
pub use precipitation::{precipitation_graph, PRECIPITATION_GRAPH_HEIGHT};
pub use temperature::{scale_temperature, temperature_graph, TEMPERATURE_GRAPH_HEIGHT};

/// Width of the label gutter on the left of every chart line
pub const LABEL_WIDTH: usize = 9;

/// Filled slot
pub const BAR: &str = "██";

/// Empty slot
pub const GAP: &str = "  ";

fn gutter() -> String {
    " ".repeat(LABEL_WIDTH)
}

/// Slots for one chart row: a bar wherever the scaled value reaches `row`.
fn bars(scaled: &[i64], row: i64) -> String {
    scaled
        .iter()
        .map(|&level| if level >= row { BAR } else { GAP })
        .collect()
}
