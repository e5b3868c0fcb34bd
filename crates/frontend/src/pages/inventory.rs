use crate::shared::components::datagrid::{CellValue, Column};
use crate::shared::components::{Card, DataTable};
use crate::shared::data::store::ProductDraft;
use crate::shared::data::AppStore;
use crate::shared::format::format_currency;
use crate::shared::icons::icon;
use contracts::domain::Product;
use leptos::prelude::*;

fn product_columns() -> Vec<Column<Product>> {
    vec![
        Column::field("Reference", "reference"),
        Column::field("Name", "name"),
        Column::field("Description", "description"),
        Column::field_with("Quantity", "quantity_in_stock", |value, row: &Product| {
            let low = row.is_low_stock();
            let quantity = value.display();
            view! {
                <span class="cell-quantity" class:cell-quantity--low=low>
                    {quantity}
                    {low.then(|| view! { <span class="cell-quantity__warning">{icon("alert-triangle")}</span> })}
                </span>
            }
            .into_any()
        }),
        Column::field_with("Purchase Price", "average_purchase_price", |value, _| {
            currency_cell(value)
        }),
        Column::field_with("Selling Price", "selling_price", |value, _| currency_cell(value)),
        Column::field("Min. Stock", "minimum_stock_level"),
        Column::derived("Actions", |row: &Product| {
            let id = row.id.clone();
            view! {
                <button
                    class="table-action"
                    on:click=move |_| log::info!("edit product {id}")
                >
                    "Edit"
                </button>
            }
            .into_any()
        }),
    ]
}

fn currency_cell(value: &CellValue) -> AnyView {
    let text = match value {
        CellValue::Number(amount) => format_currency(*amount),
        other => other.display(),
    };
    view! { <span class="cell-currency">{text}</span> }.into_any()
}

#[component]
pub fn InventoryPage() -> impl IntoView {
    let store = AppStore::expect();
    let show_form = RwSignal::new(false);

    let new_button = view! {
        <button
            class="btn btn--primary"
            on:click=move |_| show_form.update(|open| *open = !*open)
        >
            {icon("plus")}
            "New Product"
        </button>
    }
    .into_any();

    view! {
        <div class="page inventory">
            <Card>
                <Show when=move || show_form.get()>
                    <ProductForm on_close=Callback::new(move |()| show_form.set(false)) />
                </Show>
                <DataTable
                    data=Signal::derive(move || store.products.get())
                    columns=product_columns()
                    searchable=true
                    title="Inventory".to_string()
                    actions=new_button
                />
            </Card>
        </div>
    }
}

#[component]
fn ProductForm(on_close: Callback<()>) -> impl IntoView {
    let store = AppStore::expect();

    let reference = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let minimum = RwSignal::new(String::new());
    let purchase_price = RwSignal::new(String::new());
    let selling_price = RwSignal::new(String::new());

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        store.add_product(ProductDraft {
            reference: reference.get(),
            name: name.get(),
            description: description.get(),
            quantity_in_stock: quantity.get().parse().unwrap_or(0),
            average_purchase_price: purchase_price.get().parse().unwrap_or(0.0),
            selling_price: selling_price.get().parse().unwrap_or(0.0),
            minimum_stock_level: minimum.get().parse().unwrap_or(0),
        });
        on_close.run(());
    };

    view! {
        <div class="inline-form">
            <h3 class="inline-form__title">"New Product"</h3>
            <form class="inline-form__grid" on:submit=save>
                <label class="inline-form__field">
                    "Reference"
                    <input
                        type="text"
                        prop:value=move || reference.get()
                        on:input=move |ev| reference.set(event_target_value(&ev))
                    />
                </label>
                <label class="inline-form__field">
                    "Name"
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="inline-form__field inline-form__field--wide">
                    "Description"
                    <textarea
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="inline-form__field">
                    "Initial Quantity"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || quantity.get()
                        on:input=move |ev| quantity.set(event_target_value(&ev))
                    />
                </label>
                <label class="inline-form__field">
                    "Minimum Stock Level"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || minimum.get()
                        on:input=move |ev| minimum.set(event_target_value(&ev))
                    />
                </label>
                <label class="inline-form__field">
                    "Purchase Price"
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        prop:value=move || purchase_price.get()
                        on:input=move |ev| purchase_price.set(event_target_value(&ev))
                    />
                </label>
                <label class="inline-form__field">
                    "Selling Price"
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        prop:value=move || selling_price.get()
                        on:input=move |ev| selling_price.set(event_target_value(&ev))
                    />
                </label>
                <div class="inline-form__actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn--primary">
                        "Save Product"
                    </button>
                </div>
            </form>
        </div>
    }
}
