use crate::shared::charts::{ChartPoint, LineChart, PieChart, PiePoint};
use crate::shared::components::Card;
use crate::shared::data::AppStore;
use crate::shared::format::{format_currency, format_currency_compact};
use contracts::reports::ReportPeriod;
use leptos::prelude::*;

const PIE_PALETTE: [&str; 5] = ["#3B82F6", "#10B981", "#F59E0B", "#EF4444", "#8B5CF6"];

#[component]
pub fn ReportsPage() -> impl IntoView {
    let store = AppStore::expect();
    let period = RwSignal::new(ReportPeriod::Monthly);

    let profit_rows = Memo::new(move |_| store.profit_rows(period.get()));

    let profit_chart = Signal::derive(move || {
        profit_rows
            .get()
            .into_iter()
            .map(|row| ChartPoint {
                label: row.period,
                value: row.net_profit,
            })
            .collect::<Vec<_>>()
    });

    let revenue_chart = Signal::derive(move || {
        store
            .revenue_by_period(period.get())
            .into_iter()
            .map(|row| ChartPoint {
                label: row.period,
                value: row.amount,
            })
            .collect::<Vec<_>>()
    });

    let expense_chart = Signal::derive(move || {
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

    let compact_currency = Callback::new(format_currency_compact);

    view! {
        <div class="page reports">
            <div class="reports__toolbar">
                <h2 class="reports__heading">"Financial Reports"</h2>
                <select
                    class="reports__period"
                    on:change=move |ev| period.set(ReportPeriod::from_value(&event_target_value(&ev)))
                >
                    {ReportPeriod::ALL
                        .into_iter()
                        .map(|p| {
                            view! {
                                <option value=p.value() selected=p == ReportPeriod::Monthly>
                                    {p.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="reports__grid">
                <Card title="Net Profit Trend">
                    <LineChart data=profit_chart height=320.0 value_formatter=compact_currency />
                </Card>

                <Card title="Revenue Trend">
                    <LineChart data=revenue_chart height=320.0 value_formatter=compact_currency />
                </Card>

                <Card title="Expense Distribution">
                    <PieChart data=expense_chart value_formatter=compact_currency />
                </Card>

                <Card title="Financial Summary">
                    <div class="financial-summary">
                        <For
                            each=move || profit_rows.get()
                            key=|row| row.period.clone()
                            children=|row| {
                                view! {
                                    <div class="financial-summary__period">
                                        <h4 class="financial-summary__label">{row.period.clone()}</h4>
                                        <div class="financial-summary__figures">
                                            <div>
                                                <p class="financial-summary__caption">"Revenue"</p>
                                                <p class="financial-summary__amount">
                                                    {format_currency(row.revenue)}
                                                </p>
                                            </div>
                                            <div>
                                                <p class="financial-summary__caption">"Cost of Goods"</p>
                                                <p class="financial-summary__amount">
                                                    {format_currency(row.cost_of_goods_sold)}
                                                </p>
                                            </div>
                                            <div>
                                                <p class="financial-summary__caption">"Gross Margin"</p>
                                                <p class="financial-summary__amount">
                                                    {format_currency(row.gross_margin)}
                                                </p>
                                            </div>
                                            <div>
                                                <p class="financial-summary__caption">"Net Profit"</p>
                                                <p class="financial-summary__amount">
                                                    {format_currency(row.net_profit)}
                                                </p>
                                            </div>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Card>
            </div>
        </div>
    }
}
