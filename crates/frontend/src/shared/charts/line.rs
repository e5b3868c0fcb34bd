use super::format_value;
use super::geometry::{
    line_points, value_bounds, ChartPoint, LINE_PADDING_BOTTOM, LINE_PADDING_LEFT,
    LINE_PADDING_RIGHT, LINE_PADDING_TOP, LINE_VIEW_WIDTH,
};
use leptos::prelude::*;

/// Line chart with optional area fill, y-axis grid, and a hover tooltip per
/// data point. Degrades to an empty plot on empty input.
#[component]
pub fn LineChart(
    #[prop(into)] data: Signal<Vec<ChartPoint>>,

    /// Chart height in pixels (also the viewBox height).
    #[prop(default = 300.0)]
    height: f64,

    /// Per-call-site value formatter for axis labels and tooltips.
    #[prop(optional)]
    value_formatter: Option<Callback<f64, String>>,

    /// Stroke/fill color of the series.
    #[prop(default = "#3B82F6")]
    color: &'static str,

    /// Shade the area under the line.
    #[prop(default = true)]
    show_area: bool,
) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);
    let chart_height = height - LINE_PADDING_TOP - LINE_PADDING_BOTTOM;
    let baseline = height - LINE_PADDING_BOTTOM;

    let plotted = Memo::new(move |_| {
        let points = data.get();
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let coords = line_points(&values, height);
        points.into_iter().zip(coords).collect::<Vec<_>>()
    });

    let bounds = Memo::new(move |_| {
        let values: Vec<f64> = data.with(|points| points.iter().map(|p| p.value).collect());
        value_bounds(&values)
    });

    let line_path = Memo::new(move |_| {
        plotted.with(|points| {
            if points.is_empty() {
                return String::new();
            }
            let joined = points
                .iter()
                .map(|(_, p)| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" L ");
            format!("M {}", joined)
        })
    });

    let area_path = Memo::new(move |_| {
        plotted.with(|points| match (points.first(), points.last()) {
            (Some((_, first)), Some((_, last))) => {
                let joined = points
                    .iter()
                    .map(|(_, p)| format!("{},{}", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" L ");
                format!(
                    "M {},{} L {} L {},{} Z",
                    first.x, baseline, joined, last.x, baseline
                )
            }
            _ => String::new(),
        })
    });

    let grid = [0.0f64, 0.25, 0.5, 0.75, 1.0]
        .into_iter()
        .map(|tick| {
            let y = LINE_PADDING_TOP + chart_height - tick * chart_height;
            view! {
                <g>
                    <line
                        x1=LINE_PADDING_LEFT
                        y1=y
                        x2={LINE_VIEW_WIDTH - LINE_PADDING_RIGHT}
                        y2=y
                        stroke="#E5E7EB"
                        stroke-width="1"
                    />
                    <text
                        x={LINE_PADDING_LEFT - 5.0}
                        y=y
                        text-anchor="end"
                        dominant-baseline="middle"
                        font-size="10"
                        fill="#6B7280"
                    >
                        {move || {
                            let (low, high) = bounds.get();
                            format_value(value_formatter, low + tick * (high - low))
                        }}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="line-chart" style=format!("height: {}px;", height)>
            <svg
                width="100%"
                height=height
                viewBox=format!("0 0 {} {}", LINE_VIEW_WIDTH, height)
                preserveAspectRatio="none"
                class="line-chart__svg"
            >
                {grid}

                <Show when=move || show_area && !area_path.with(String::is_empty)>
                    <path d=move || area_path.get() fill=color fill-opacity="0.1"></path>
                </Show>

                <path d=move || line_path.get() fill="none" stroke=color stroke-width="2"></path>

                <For
                    each=move || { plotted.get().into_iter().enumerate().collect::<Vec<_>>() }
                    key=|(index, (point, _))| (*index, point.label.clone())
                    children=move |(index, (point, pos))| {
                        let label = point.label.clone();
                        let value = point.value;
                        view! {
                            <g
                                class="line-chart__point"
                                on:mouseenter=move |_| hovered.set(Some(index))
                                on:mouseleave=move |_| hovered.set(None)
                            >
                                <circle
                                    cx=pos.x
                                    cy=pos.y
                                    r=move || if hovered.get() == Some(index) { 5 } else { 3 }
                                    fill=move || {
                                        if hovered.get() == Some(index) { color } else { "#fff" }
                                    }
                                    stroke=color
                                    stroke-width="2"
                                ></circle>
                                <Show when=move || hovered.get() == Some(index)>
                                    <rect
                                        x={pos.x - 50.0}
                                        y={pos.y - 35.0}
                                        width="100"
                                        height="25"
                                        rx="3"
                                        ry="3"
                                        fill="rgba(0, 0, 0, 0.8)"
                                    ></rect>
                                    <text
                                        x=pos.x
                                        y={pos.y - 20.0}
                                        text-anchor="middle"
                                        fill="#fff"
                                        font-size="12"
                                    >
                                        {format!(
                                            "{}: {}",
                                            label,
                                            format_value(value_formatter, value)
                                        )}
                                    </text>
                                </Show>
                            </g>
                        }
                    }
                />

                {move || {
                    let points = plotted.get();
                    let step = if points.len() <= 12 { 1 } else { points.len().div_ceil(12) };
                    points
                        .into_iter()
                        .enumerate()
                        .filter(|(index, _)| index % step == 0)
                        .map(|(_, (point, pos))| {
                            view! {
                                <text
                                    x=pos.x
                                    y={height - 10.0}
                                    text-anchor="middle"
                                    font-size="10"
                                    fill="#6B7280"
                                >
                                    {point.label}
                                </text>
                            }
                        })
                        .collect_view()
                }}
            </svg>
        </div>
    }
}
