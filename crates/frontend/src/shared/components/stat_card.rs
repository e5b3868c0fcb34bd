use crate::shared::icons::icon;
use leptos::prelude::*;

/// Headline figure for the dashboard grid: icon, label, value and an
/// optional period-over-period change line.
#[component]
pub fn StatsCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    icon_name: &'static str,
    /// Change percent and whether the move is favourable.
    #[prop(optional)]
    change: Option<(f64, bool)>,
    /// Extra line under the value, e.g. a low stock warning.
    #[prop(optional, into)]
    footer: Option<Signal<String>>,
    #[prop(default = "stat-card--blue")] color_class: &'static str,
) -> impl IntoView {
    let change_view = change.map(|(pct, positive)| {
        let cls = if positive {
            "stat-card__change stat-card__change--up"
        } else {
            "stat-card__change stat-card__change--down"
        };
        let sign = if pct >= 0.0 { "+" } else { "" };
        let text = format!("{}{}% vs last period", sign, pct);
        view! { <div class=cls>{text}</div> }
    });

    view! {
        <div class=format!("stat-card {}", color_class)>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{title}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {change_view}
                {footer.map(|f| view! { <div class="stat-card__footer">{move || f.get()}</div> })}
            </div>
        </div>
    }
}
