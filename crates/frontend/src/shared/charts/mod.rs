//! Hand-rolled SVG chart primitives consuming `{label, value}` /
//! `{label, value, color}` sequences. Each chart takes its own
//! `value_formatter` callback; there is no shared formatting state.

pub mod bar;
pub mod geometry;
pub mod line;
pub mod pie;

pub use bar::BarChart;
pub use geometry::{ChartPoint, PiePoint};
pub use line::LineChart;
pub use pie::PieChart;

use leptos::prelude::*;

/// Applies the injected formatter, falling back to a bare number.
pub(crate) fn format_value(formatter: Option<Callback<f64, String>>, value: f64) -> String {
    match formatter {
        Some(f) => f.run(value),
        None => {
            if value.fract() == 0.0 {
                format!("{}", value as i64)
            } else {
                format!("{}", value)
            }
        }
    }
}
