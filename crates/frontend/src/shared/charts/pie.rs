use super::format_value;
use super::geometry::{pie_slices, PiePoint, PieSlice};
use leptos::prelude::*;

/// Pie chart with hover highlight and a two-column legend. Slices holding at
/// least 10% of the total carry an in-slice percentage label.
#[component]
pub fn PieChart(
    #[prop(into)] data: Signal<Vec<PiePoint>>,

    /// Diameter in pixels.
    #[prop(default = 250.0)]
    size: f64,

    /// Per-call-site value formatter, shown in the slice tooltips.
    #[prop(optional)]
    value_formatter: Option<Callback<f64, String>>,
) -> impl IntoView {
    let active = RwSignal::new(None::<usize>);

    let slices = Memo::new(move |_| {
        let points = data.get();
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        points
            .into_iter()
            .zip(pie_slices(&values, size))
            .enumerate()
            .collect::<Vec<(usize, (PiePoint, PieSlice))>>()
    });

    view! {
        <div class="pie-chart">
            <svg width=size height=size viewBox=format!("0 0 {} {}", size, size)>
                <For
                    each=move || slices.get()
                    key=|(index, (point, _))| (*index, point.label.clone())
                    children=move |(index, (point, slice))| {
                        let tooltip = format!(
                            "{}: {}",
                            point.label,
                            format_value(value_formatter, point.value)
                        );
                        let percentage_label = if slice.percentage >= 10.0 {
                            Some(format!("{}%", slice.percentage.round()))
                        } else {
                            None
                        };
                        view! {
                            <g
                                on:mouseenter=move |_| active.set(Some(index))
                                on:mouseleave=move |_| active.set(None)
                            >
                                <path
                                    d=slice.path.clone()
                                    fill=point.color.clone()
                                    stroke="#fff"
                                    stroke-width="2"
                                    opacity=move || {
                                        if active.get() == Some(index) { "1" } else { "0.85" }
                                    }
                                >
                                    <title>{tooltip}</title>
                                </path>
                                {percentage_label
                                    .map(|text| {
                                        view! {
                                            <text
                                                x=slice.label_x
                                                y=slice.label_y
                                                text-anchor="middle"
                                                fill="#fff"
                                                font-size="12"
                                                font-weight="bold"
                                                pointer-events="none"
                                            >
                                                {text}
                                            </text>
                                        }
                                    })}
                            </g>
                        }
                    }
                />
            </svg>

            <div class="pie-chart__legend">
                <For
                    each=move || slices.get()
                    key=|(index, (point, _))| (*index, point.label.clone())
                    children=move |(index, (point, slice))| {
                        view! {
                            <div
                                class="pie-chart__legend-item"
                                class:pie-chart__legend-item--active=move || {
                                    active.get() == Some(index)
                                }
                                on:mouseenter=move |_| active.set(Some(index))
                                on:mouseleave=move |_| active.set(None)
                            >
                                <span
                                    class="pie-chart__swatch"
                                    style=format!("background-color: {};", point.color)
                                ></span>
                                <span class="pie-chart__legend-label">{point.label.clone()}</span>
                                <span class="pie-chart__legend-pct">
                                    {format!("{}%", slice.percentage.round())}
                                </span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
