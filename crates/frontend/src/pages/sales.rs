use super::status::{billing_badge, delivery_badge};
use crate::shared::components::datagrid::{CellValue, Column};
use crate::shared::components::{Card, DataTable};
use crate::shared::data::store::SaleDraft;
use crate::shared::data::AppStore;
use crate::shared::format::{format_currency, format_date};
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::domain::{BillingStatus, DeliveryStatus, Sale, SaleLine};
use leptos::prelude::*;

fn sale_columns() -> Vec<Column<Sale>> {
    vec![
        Column::field("Order #", "order_number"),
        Column::field("Customer", "customer_name"),
        Column::field_with("Date", "sale_date", |_, row: &Sale| {
            view! { <span>{format_date(row.sale_date)}</span> }.into_any()
        }),
        Column::field_with("Total Amount", "total_amount", |value, _| {
            let text = match value {
                CellValue::Number(amount) => format_currency(*amount),
                other => other.display(),
            };
            view! { <span class="cell-currency">{text}</span> }.into_any()
        }),
        Column::field_with("Delivery Status", "delivery_status", |_, row: &Sale| {
            delivery_badge(row.delivery_status)
        }),
        Column::field_with("Billing Status", "billing_status", |_, row: &Sale| {
            billing_badge(row.billing_status)
        }),
        Column::derived("Actions", |row: &Sale| {
            let id = row.id.clone();
            view! {
                <button
                    class="table-action"
                    on:click=move |_| log::info!("view sale details {id}")
                >
                    {icon("file-text")}
                </button>
            }
            .into_any()
        }),
    ]
}

#[component]
pub fn SalesPage() -> impl IntoView {
    let store = AppStore::expect();
    let show_form = RwSignal::new(false);

    let new_button = view! {
        <button
            class="btn btn--primary"
            on:click=move |_| show_form.update(|open| *open = !*open)
        >
            {icon("plus")}
            "New Sale"
        </button>
    }
    .into_any();

    view! {
        <div class="page sales">
            <Card>
                <Show when=move || show_form.get()>
                    <SaleForm on_close=Callback::new(move |()| show_form.set(false)) />
                </Show>
                <DataTable
                    data=Signal::derive(move || store.sales.get())
                    columns=sale_columns()
                    searchable=true
                    title="Sales".to_string()
                    actions=new_button
                />
            </Card>
        </div>
    }
}

/// Single-line sales order entry. Saving ships the line out of stock.
#[component]
fn SaleForm(on_close: Callback<()>) -> impl IntoView {
    let store = AppStore::expect();

    let customer_id = RwSignal::new(String::new());
    let order_number = RwSignal::new(String::new());
    let sale_date = RwSignal::new(String::new());
    let product_id = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let customers = store.customers.get_untracked();
        let Some(customer) = customers.iter().find(|c| c.id == customer_id.get()) else {
            log::warn!("sale form submitted without a customer");
            return;
        };
        let products = store.products.get_untracked();
        let Some(product) = products.iter().find(|p| p.id == product_id.get()) else {
            log::warn!("sale form submitted without a product");
            return;
        };
        let Some(date) = NaiveDate::parse_from_str(&sale_date.get(), "%Y-%m-%d").ok() else {
            log::warn!("sale form submitted without a valid date");
            return;
        };
        let qty: i64 = quantity.get().parse().unwrap_or(0);
        let line = SaleLine {
            product_id: product.id.clone(),
            product_reference: product.reference.clone(),
            product_name: product.name.clone(),
            quantity: qty,
            unit_price: product.selling_price,
            total_price: qty as f64 * product.selling_price,
        };
        let total = line.total_price;
        let notes = notes.get();
        store.add_sale(SaleDraft {
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            sale_date: date,
            order_number: order_number.get(),
            expected_delivery_date: None,
            delivery_status: DeliveryStatus::Pending,
            billing_status: BillingStatus::Pending,
            items: vec![line],
            total_amount: total,
            notes: (!notes.is_empty()).then_some(notes),
        });
        on_close.run(());
    };

    view! {
        <div class="inline-form">
            <h3 class="inline-form__title">"New Sales Order"</h3>
            <form class="inline-form__grid" on:submit=save>
                <label class="inline-form__field inline-form__field--wide">
                    "Customer"
                    <select on:change=move |ev| customer_id.set(event_target_value(&ev))>
                        <option value="">"Select a customer"</option>
                        <For
                            each=move || store.customers.get()
                            key=|customer| customer.id.clone()
                            children=|customer| {
                                view! { <option value=customer.id.clone()>{customer.name.clone()}</option> }
                            }
                        />
                    </select>
                </label>
                <label class="inline-form__field">
                    "Order Number"
                    <input
                        type="text"
                        prop:value=move || order_number.get()
                        on:input=move |ev| order_number.set(event_target_value(&ev))
                    />
                </label>
                <label class="inline-form__field">
                    "Sale Date"
                    <input
                        type="date"
                        prop:value=move || sale_date.get()
                        on:input=move |ev| sale_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="inline-form__field">
                    "Product"
                    <select on:change=move |ev| product_id.set(event_target_value(&ev))>
                        <option value="">"Select a product"</option>
                        <For
                            each=move || store.products.get()
                            key=|product| product.id.clone()
                            children=|product| {
                                view! { <option value=product.id.clone()>{product.name.clone()}</option> }
                            }
                        />
                    </select>
                </label>
                <label class="inline-form__field">
                    "Quantity"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || quantity.get()
                        on:input=move |ev| quantity.set(event_target_value(&ev))
                    />
                </label>
                <label class="inline-form__field inline-form__field--wide">
                    "Notes"
                    <textarea
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="inline-form__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        "Save Sale"
                    </button>
                </div>
            </form>
        </div>
    }
}
