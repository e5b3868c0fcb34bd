//! Pure SVG geometry for the chart components. Kept free of any view code
//! so slice paths and point scaling are unit testable.

use std::f64::consts::PI;

/// One labeled value fed to the bar and line charts.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        ChartPoint {
            label: label.into(),
            value,
        }
    }
}

/// One labeled, colored value fed to the pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PiePoint {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl PiePoint {
    pub fn new(label: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        PiePoint {
            label: label.into(),
            value,
            color: color.into(),
        }
    }
}

/// Computed arc for one pie slice.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub path: String,
    /// Share of the total, 0..=100.
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Centroid position for the in-slice percentage label.
    pub label_x: f64,
    pub label_y: f64,
}

fn polar(center: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    // 0° points up, angles grow clockwise, matching screen coordinates.
    let rad = (angle_deg - 90.0) * PI / 180.0;
    (center + radius * rad.cos(), center + radius * rad.sin())
}

/// Splits `values` into pie slices inside a `size`×`size` viewport.
/// Returns nothing when the total is not positive.
pub fn pie_slices(values: &[f64], size: f64) -> Vec<PieSlice> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let radius = size / 2.0;
    let center = radius;
    let mut cumulative = 0.0;

    values
        .iter()
        .map(|value| {
            let percentage = value / total * 100.0;
            let angle = percentage / 100.0 * 360.0;
            let start_angle = cumulative;
            let end_angle = cumulative + angle;
            cumulative = end_angle;

            let (x1, y1) = polar(center, radius, start_angle);
            let (x2, y2) = polar(center, radius, end_angle);
            let large_arc = if angle > 180.0 { 1 } else { 0 };
            let path = format!(
                "M {center} {center} L {x1} {y1} A {radius} {radius} 0 {large_arc} 1 {x2} {y2} Z"
            );

            let (label_x, label_y) = polar(center, radius * 0.7, (start_angle + end_angle) / 2.0);

            PieSlice {
                path,
                percentage,
                start_angle,
                end_angle,
                label_x,
                label_y,
            }
        })
        .collect()
}

/// One plotted line-chart point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlottedPoint {
    pub x: f64,
    pub y: f64,
}

pub const LINE_PADDING_TOP: f64 = 20.0;
pub const LINE_PADDING_RIGHT: f64 = 20.0;
pub const LINE_PADDING_BOTTOM: f64 = 30.0;
pub const LINE_PADDING_LEFT: f64 = 40.0;
/// The viewBox width; the SVG stretches to its container.
pub const LINE_VIEW_WIDTH: f64 = 100.0;

/// Value range drawn on the y axis: the data range padded by 10% on each
/// side, floored at zero. A flat series gets a symmetric ±1 band so the
/// scale never collapses.
pub fn value_bounds(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 1.0);
    }
    let max = values.iter().cloned().fold(f64::MIN, f64::max);
    let min = values.iter().cloned().fold(f64::MAX, f64::min);
    let range = max - min;
    if range == 0.0 {
        (min - 1.0, max + 1.0)
    } else {
        ((min - range * 0.1).max(0.0), max + range * 0.1)
    }
}

/// Scales `values` into the line chart's plotting area. A single value is
/// centered horizontally.
pub fn line_points(values: &[f64], height: f64) -> Vec<PlottedPoint> {
    if values.is_empty() {
        return Vec::new();
    }

    let chart_width = LINE_VIEW_WIDTH - LINE_PADDING_LEFT - LINE_PADDING_RIGHT;
    let chart_height = height - LINE_PADDING_TOP - LINE_PADDING_BOTTOM;
    let (low, high) = value_bounds(values);

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x = if values.len() == 1 {
                LINE_PADDING_LEFT + chart_width / 2.0
            } else {
                LINE_PADDING_LEFT + index as f64 / (values.len() - 1) as f64 * chart_width
            };
            let y = height - LINE_PADDING_BOTTOM - (value - low) / (high - low) * chart_height;
            PlottedPoint { x, y }
        })
        .collect()
}

/// Bar height as a percentage of the tallest bar; 0 when the data is empty
/// or non-positive throughout.
pub fn bar_height_pct(value: f64, values: &[f64]) -> f64 {
    let max = values.iter().cloned().fold(f64::MIN, f64::max);
    if max <= 0.0 {
        0.0
    } else {
        (value / max * 100.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_percentages_sum_to_one_hundred() {
        let slices = pie_slices(&[50.0, 30.0, 20.0], 250.0);
        assert_eq!(slices.len(), 3);
        let total: f64 = slices.iter().map(|s| s.percentage).sum();
        assert!((total - 100.0).abs() < 1e-9);
        assert!((slices[0].percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn slices_are_contiguous_around_the_circle() {
        let slices = pie_slices(&[1.0, 1.0, 2.0], 200.0);
        assert_eq!(slices[0].start_angle, 0.0);
        for pair in slices.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-9);
        }
        assert!((slices.last().expect("slices").end_angle - 360.0).abs() < 1e-9);
    }

    #[test]
    fn majority_slice_uses_the_large_arc_flag() {
        let slices = pie_slices(&[75.0, 25.0], 200.0);
        assert!(slices[0].path.contains(" 1 1 "));
        assert!(slices[1].path.contains(" 0 1 "));
    }

    #[test]
    fn empty_or_zero_data_yields_no_slices() {
        assert!(pie_slices(&[], 200.0).is_empty());
        assert!(pie_slices(&[0.0, 0.0], 200.0).is_empty());
    }

    #[test]
    fn line_points_span_the_plot_area() {
        let points = line_points(&[0.0, 50.0, 100.0], 300.0);
        assert_eq!(points.len(), 3);
        assert!((points[0].x - LINE_PADDING_LEFT).abs() < 1e-9);
        assert!(
            (points[2].x - (LINE_VIEW_WIDTH - LINE_PADDING_RIGHT)).abs() < 1e-9
        );
        // Larger values plot higher on screen (smaller y).
        assert!(points[2].y < points[1].y);
        assert!(points[1].y < points[0].y);
    }

    #[test]
    fn single_point_is_centered() {
        let points = line_points(&[42.0], 300.0);
        assert_eq!(points.len(), 1);
        let mid = LINE_PADDING_LEFT + (LINE_VIEW_WIDTH - LINE_PADDING_LEFT - LINE_PADDING_RIGHT) / 2.0;
        assert!((points[0].x - mid).abs() < 1e-9);
        assert!(points[0].y.is_finite());
    }

    #[test]
    fn flat_series_keeps_a_finite_scale() {
        let points = line_points(&[10.0, 10.0, 10.0], 300.0);
        assert!(points.iter().all(|p| p.y.is_finite()));
        assert!((points[0].y - points[2].y).abs() < 1e-9);
    }

    #[test]
    fn bar_heights_are_relative_to_the_maximum() {
        let values = [10.0, 20.0, 40.0];
        assert!((bar_height_pct(40.0, &values) - 100.0).abs() < 1e-9);
        assert!((bar_height_pct(10.0, &values) - 25.0).abs() < 1e-9);
        assert_eq!(bar_height_pct(1.0, &[]), 0.0);
    }
}
