use super::status::delivery_badge;
use crate::shared::components::datagrid::{CellValue, Column};
use crate::shared::components::{Card, DataTable};
use crate::shared::data::store::PurchaseDraft;
use crate::shared::data::AppStore;
use crate::shared::format::{format_currency, format_date};
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::domain::{DeliveryStatus, Purchase, PurchaseLine};
use leptos::prelude::*;

fn purchase_columns() -> Vec<Column<Purchase>> {
    vec![
        Column::field("Order #", "order_number"),
        Column::field("Supplier", "supplier_name"),
        Column::field_with("Date", "purchase_date", |_, row: &Purchase| {
            view! { <span>{format_date(row.purchase_date)}</span> }.into_any()
        }),
        Column::field_with("Total Amount", "total_amount", |value, _| {
            let text = match value {
                CellValue::Number(amount) => format_currency(*amount),
                other => other.display(),
            };
            view! { <span class="cell-currency">{text}</span> }.into_any()
        }),
        Column::field_with("Delivery Status", "delivery_status", |_, row: &Purchase| {
            delivery_badge(row.delivery_status)
        }),
        Column::derived("Actions", |row: &Purchase| {
            let id = row.id.clone();
            view! {
                <button
                    class="table-action"
                    on:click=move |_| log::info!("view purchase details {id}")
                >
                    {icon("file-text")}
                </button>
            }
            .into_any()
        }),
    ]
}

#[component]
pub fn PurchasesPage() -> impl IntoView {
    let store = AppStore::expect();
    let show_form = RwSignal::new(false);

    let new_button = view! {
        <button
            class="btn btn--primary"
            on:click=move |_| show_form.update(|open| *open = !*open)
        >
            {icon("plus")}
            "New Purchase"
        </button>
    }
    .into_any();

    view! {
        <div class="page purchases">
            <Card>
                <Show when=move || show_form.get()>
                    <PurchaseForm on_close=Callback::new(move |()| show_form.set(false)) />
                </Show>
                <DataTable
                    data=Signal::derive(move || store.purchases.get())
                    columns=purchase_columns()
                    searchable=true
                    title="Purchases".to_string()
                    actions=new_button
                />
            </Card>
        </div>
    }
}

/// Single-line purchase order entry. Saving receives the line into stock.
#[component]
fn PurchaseForm(on_close: Callback<()>) -> impl IntoView {
    let store = AppStore::expect();

    let supplier_id = RwSignal::new(String::new());
    let order_number = RwSignal::new(String::new());
    let purchase_date = RwSignal::new(String::new());
    let product_id = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let unit_price = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let line_total = Memo::new(move |_| {
        let qty: i64 = quantity.get().parse().unwrap_or(0);
        let price: f64 = unit_price.get().parse().unwrap_or(0.0);
        qty as f64 * price
    });

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let suppliers = store.suppliers.get_untracked();
        let Some(supplier) = suppliers.iter().find(|s| s.id == supplier_id.get()) else {
            log::warn!("purchase form submitted without a supplier");
            return;
        };
        let products = store.products.get_untracked();
        let Some(product) = products.iter().find(|p| p.id == product_id.get()) else {
            log::warn!("purchase form submitted without a product");
            return;
        };
        let Some(date) = NaiveDate::parse_from_str(&purchase_date.get(), "%Y-%m-%d").ok() else {
            log::warn!("purchase form submitted without a valid date");
            return;
        };
        let qty: i64 = quantity.get().parse().unwrap_or(0);
        let price: f64 = unit_price.get().parse().unwrap_or(0.0);
        let line = PurchaseLine {
            product_id: product.id.clone(),
            product_reference: product.reference.clone(),
            product_name: product.name.clone(),
            quantity: qty,
            unit_price: price,
            total_price: qty as f64 * price,
        };
        let total = line.total_price;
        let notes = notes.get();
        store.add_purchase(PurchaseDraft {
            supplier_id: supplier.id.clone(),
            supplier_name: supplier.name.clone(),
            purchase_date: date,
            order_number: order_number.get(),
            expected_delivery_date: None,
            delivery_status: DeliveryStatus::Pending,
            items: vec![line],
            total_amount: total,
            notes: (!notes.is_empty()).then_some(notes),
        });
        on_close.run(());
    };

    view! {
        <div class="inline-form">
            <h3 class="inline-form__title">"New Purchase Order"</h3>
            <form class="inline-form__grid" on:submit=save>
                <label class="inline-form__field inline-form__field--wide">
                    "Supplier"
                    <select on:change=move |ev| supplier_id.set(event_target_value(&ev))>
                        <option value="">"Select a supplier"</option>
                        <For
                            each=move || store.suppliers.get()
                            key=|supplier| supplier.id.clone()
                            children=|supplier| {
                                view! { <option value=supplier.id.clone()>{supplier.name.clone()}</option> }
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
                    "Purchase Date"
                    <input
                        type="date"
                        prop:value=move || purchase_date.get()
                        on:input=move |ev| purchase_date.set(event_target_value(&ev))
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
                <label class="inline-form__field">
                    "Unit Price"
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        prop:value=move || unit_price.get()
                        on:input=move |ev| unit_price.set(event_target_value(&ev))
                    />
                </label>
                <div class="inline-form__field">
                    "Total"
                    <span class="inline-form__total">
                        {move || format_currency(line_total.get())}
                    </span>
                </div>
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
                        "Save Purchase"
                    </button>
                </div>
            </form>
        </div>
    }
}
