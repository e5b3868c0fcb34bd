use crate::shared::charts::{BarChart, ChartPoint, LineChart, PieChart, PiePoint};
use crate::shared::components::{Card, StatsCard};
use crate::shared::data::AppStore;
use crate::shared::format::{format_currency, format_currency_compact};
use contracts::reports::ReportPeriod;
use leptos::prelude::*;

const PIE_PALETTE: [&str; 5] = ["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6"];

fn low_stock_summary(count: usize) -> String {
    format!("{count} products below minimum stock level")
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = AppStore::expect();

    let revenue_data = Signal::derive(move || {
        store
            .revenue_by_period(ReportPeriod::Monthly)
            .into_iter()
            .map(|row| ChartPoint {
                label: row.period,
                value: row.amount,
            })
            .collect::<Vec<_>>()
    });

    let expenses_data = Signal::derive(move || {
        store
            .expenses_by_category()
            .into_iter()
            .enumerate()
            .map(|(index, row)| PiePoint {
                label: row.category,
                value: row.amount,
                color: PIE_PALETTE[index % PIE_PALETTE.len()].to_string(),
            })
            .collect::<Vec<_>>()
    });

    let top_products_data = Signal::derive(move || {
        store
            .top_selling_products(5)
            .into_iter()
            .map(|row| ChartPoint {
                label: row.product_name,
                value: row.revenue,
            })
            .collect::<Vec<_>>()
    });

    let low_stock = Memo::new(move |_| store.low_stock_products());

    let product_count = Signal::derive(move || store.products.get().len().to_string());
    let low_stock_footer = Signal::derive(move || low_stock_summary(low_stock.get().len()));

    let compact_currency = Callback::new(format_currency_compact);

    view! {
        <div class="page dashboard">
            <div class="dashboard__stats">
                <StatsCard
                    title="Monthly Revenue"
                    value=Signal::derive(|| format_currency(140_000.0))
                    icon_name="dollar-sign"
                    change=(12.0, true)
                    color_class="stat-card--blue"
                />
                <StatsCard
                    title="Monthly Expenses"
                    value=Signal::derive(|| format_currency(30_000.0))
                    icon_name="wallet"
                    change=(5.0, false)
                    color_class="stat-card--amber"
                />
                <StatsCard
                    title="Net Profit"
                    value=Signal::derive(|| format_currency(20_000.0))
                    icon_name="trending-up"
                    change=(8.0, true)
                    color_class="stat-card--green"
                />
                <StatsCard
                    title="Products in Stock"
                    value=product_count
                    icon_name="store"
                    footer=low_stock_footer
                    color_class="stat-card--purple"
                />
            </div>

            <div class="dashboard__charts">
                <Card title="Revenue Trend">
                    <LineChart data=revenue_data height=320.0 value_formatter=compact_currency />
                </Card>

                <Card title="Expenses by Category">
                    <PieChart data=expenses_data value_formatter=compact_currency />
                </Card>

                <Card title="Top Selling Products">
                    <BarChart data=top_products_data height=250.0 value_formatter=compact_currency />
                </Card>

                <Card title="Low Stock Products">
                    <Show
                        when=move || !low_stock.get().is_empty()
                        fallback=|| {
                            view! {
                                <div class="dashboard__empty-note">
                                    "No products below minimum stock level"
                                </div>
                            }
                        }
                    >
                        <ul class="dashboard__low-stock">
                            <For
                                each=move || low_stock.get().into_iter().take(5)
                                key=|product| product.id.clone()
                                children=|product| {
                                    let badge_class = if product.quantity_in_stock == 0 {
                                        "stock-badge stock-badge--out"
                                    } else {
                                        "stock-badge stock-badge--low"
                                    };
                                    view! {
                                        <li class="dashboard__low-stock-row">
                                            <div>
                                                <span class="dashboard__low-stock-name">
                                                    {product.name.clone()}
                                                </span>
                                                <p class="dashboard__low-stock-ref">
                                                    {product.reference.clone()}
                                                </p>
                                            </div>
                                            <span class=badge_class>
                                                {format!("{} in stock", product.quantity_in_stock)}
                                            </span>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </Show>
                </Card>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::low_stock_summary;

    #[test]
    fn low_stock_summary_tracks_the_count() {
        assert_eq!(low_stock_summary(0), "0 products below minimum stock level");
        assert_eq!(low_stock_summary(3), "3 products below minimum stock level");
    }
}
