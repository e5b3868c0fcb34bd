use super::format_value;
use super::geometry::{bar_height_pct, ChartPoint};
use leptos::prelude::*;

/// Vertical bar chart; column heights are percentages of the largest value.
#[component]
pub fn BarChart(
    #[prop(into)] data: Signal<Vec<ChartPoint>>,

    /// Chart height in pixels.
    #[prop(default = 300.0)]
    height: f64,

    /// Per-call-site value formatter for the bar captions.
    #[prop(optional)]
    value_formatter: Option<Callback<f64, String>>,

    /// CSS class applied to the bar fill.
    #[prop(default = "bar-chart__bar--blue")]
    color_class: &'static str,
) -> impl IntoView {
    let bars = move || {
        let points = data.get();
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        points
            .into_iter()
            .map(|point| {
                let pct = bar_height_pct(point.value, &values);
                (point, pct)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="bar-chart" style=format!("height: {}px;", height)>
            <div class="bar-chart__columns">
                <For
                    each=bars
                    key=|(point, _)| point.label.clone()
                    children=move |(point, pct)| {
                        view! {
                            <div class="bar-chart__column">
                                <div class="bar-chart__value">
                                    {format_value(value_formatter, point.value)}
                                </div>
                                <div
                                    class=format!("bar-chart__bar {}", color_class)
                                    style=format!("height: {}%;", pct)
                                ></div>
                                <div class="bar-chart__label">{point.label}</div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
