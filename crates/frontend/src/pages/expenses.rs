use crate::shared::components::datagrid::{CellValue, Column};
use crate::shared::components::{Card, DataTable};
use crate::shared::data::store::ExpenseDraft;
use crate::shared::data::AppStore;
use crate::shared::format::{format_currency, format_date};
use crate::shared::icons::icon;
use chrono::NaiveDate;
use contracts::domain::{Expense, ExpenseCategory};
use leptos::prelude::*;

fn expense_columns() -> Vec<Column<Expense>> {
    vec![
        Column::field_with("Date", "date", |_, row: &Expense| {
            view! { <span>{format_date(row.date)}</span> }.into_any()
        }),
        Column::field("Category", "category"),
        Column::field("Description", "description"),
        Column::field_with("Amount", "amount", |value, _| {
            let text = match value {
                CellValue::Number(amount) => format_currency(*amount),
                other => other.display(),
            };
            view! { <span class="cell-currency">{text}</span> }.into_any()
        }),
        Column::field("Supplier", "supplier"),
        Column::derived("Actions", |row: &Expense| {
            let id = row.id.clone();
            view! {
                <button
                    class="table-action"
                    on:click=move |_| log::info!("edit expense {id}")
                >
                    "Edit"
                </button>
            }
            .into_any()
        }),
    ]
}

#[component]
pub fn ExpensesPage() -> impl IntoView {
    let store = AppStore::expect();
    let show_form = RwSignal::new(false);

    let new_button = view! {
        <button
            class="btn btn--primary"
            on:click=move |_| show_form.update(|open| *open = !*open)
        >
            {icon("plus")}
            "New Expense"
        </button>
    }
    .into_any();

    view! {
        <div class="page expenses">
            <Card>
                <Show when=move || show_form.get()>
                    <ExpenseForm on_close=Callback::new(move |()| show_form.set(false)) />
                </Show>
                <DataTable
                    data=Signal::derive(move || store.expenses.get())
                    columns=expense_columns()
                    searchable=true
                    title="Expenses".to_string()
                    actions=new_button
                />
            </Card>
        </div>
    }
}

#[component]
fn ExpenseForm(on_close: Callback<()>) -> impl IntoView {
    let store = AppStore::expect();

    let date = RwSignal::new(String::new());
    let category = RwSignal::new("rent".to_string());
    let description = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let supplier = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(parsed_date) = NaiveDate::parse_from_str(&date.get(), "%Y-%m-%d").ok() else {
            log::warn!("expense form submitted without a valid date");
            return;
        };
        let supplier = supplier.get();
        let notes = notes.get();
        store.add_expense(ExpenseDraft {
            date: parsed_date,
            category: ExpenseCategory::from_value(&category.get()),
            description: description.get(),
            amount: amount.get().parse().unwrap_or(0.0),
            supplier: (!supplier.is_empty()).then_some(supplier),
            notes: (!notes.is_empty()).then_some(notes),
        });
        on_close.run(());
    };

    view! {
        <div class="inline-form">
            <h3 class="inline-form__title">"New Expense"</h3>
            <form class="inline-form__grid" on:submit=save>
                <label class="inline-form__field">
                    "Date"
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </label>
                <label class="inline-form__field">
                    "Category"
                    <select on:change=move |ev| category.set(event_target_value(&ev))>
                        {ExpenseCategory::ALL
                            .into_iter()
                            .map(|cat| {
                                view! { <option value=cat.value()>{cat.label()}</option> }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="inline-form__field inline-form__field--wide">
                    "Description"
                    <input
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="inline-form__field">
                    "Amount"
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                <label class="inline-form__field">
                    "Supplier (optional)"
                    <input
                        type="text"
                        prop:value=move || supplier.get()
                        on:input=move |ev| supplier.set(event_target_value(&ev))
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
                        "Save Expense"
                    </button>
                </div>
            </form>
        </div>
    }
}
