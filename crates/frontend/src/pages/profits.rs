use crate::shared::components::Card;
use leptos::prelude::*;

/// Static profit overview. Real trend analysis is pending the aggregation
/// work tracked in the store's report methods.
#[component]
pub fn ProfitsPage() -> impl IntoView {
    view! {
        <div class="page profits">
            <Card title="Profits Overview">
                <p class="profits__intro">
                    "This page will display profit analysis and metrics for your business."
                </p>
                <div class="profits__cards">
                    <div class="profit-card profit-card--green">
                        <h3 class="profit-card__title">"Gross Profit"</h3>
                        <p class="profit-card__value">"$24,500"</p>
                        <p class="profit-card__change">"+12% from last month"</p>
                    </div>
                    <div class="profit-card profit-card--blue">
                        <h3 class="profit-card__title">"Net Profit"</h3>
                        <p class="profit-card__value">"$18,200"</p>
                        <p class="profit-card__change">"+8% from last month"</p>
                    </div>
                    <div class="profit-card profit-card--purple">
                        <h3 class="profit-card__title">"Profit Margin"</h3>
                        <p class="profit-card__value">"32%"</p>
                        <p class="profit-card__change">"+2% from last month"</p>
                    </div>
                </div>
            </Card>
            <Card title="Profit Trends">
                <p class="profits__intro">"Monthly profit analysis will be displayed here."</p>
                <div class="profits__placeholder">
                    <p>"Profit chart visualization will be implemented here"</p>
                </div>
            </Card>
        </div>
    }
}
