//! [`GridRecord`] implementations for the domain entities shown in tables.
//!
//! Only scalar fields participate: line item collections are represented by
//! the already-computed totals on the document, and statuses expose their
//! display label so search and sort work on what the user sees.

use crate::shared::components::datagrid::{CellValue, GridRecord};
use contracts::domain::{Expense, Product, Purchase, Sale};

fn opt_text(value: &Option<String>) -> CellValue {
    match value {
        Some(s) => CellValue::Text(s.clone()),
        None => CellValue::Missing,
    }
}

impl GridRecord for Product {
    fn field_names() -> &'static [&'static str] {
        &[
            "id",
            "reference",
            "name",
            "description",
            "quantity_in_stock",
            "average_purchase_price",
            "selling_price",
            "minimum_stock_level",
            "created_at",
            "updated_at",
        ]
    }

    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => CellValue::Text(self.id.clone()),
            "reference" => CellValue::Text(self.reference.clone()),
            "name" => CellValue::Text(self.name.clone()),
            "description" => CellValue::Text(self.description.clone()),
            "quantity_in_stock" => CellValue::Number(self.quantity_in_stock as f64),
            "average_purchase_price" => CellValue::Number(self.average_purchase_price),
            "selling_price" => CellValue::Number(self.selling_price),
            "minimum_stock_level" => CellValue::Number(self.minimum_stock_level as f64),
            "created_at" => CellValue::Date(self.created_at),
            "updated_at" => CellValue::Date(self.updated_at),
            _ => CellValue::Missing,
        }
    }
}

impl GridRecord for Purchase {
    fn field_names() -> &'static [&'static str] {
        &[
            "id",
            "supplier_id",
            "supplier_name",
            "purchase_date",
            "order_number",
            "expected_delivery_date",
            "delivery_status",
            "total_amount",
            "notes",
        ]
    }

    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => CellValue::Text(self.id.clone()),
            "supplier_id" => CellValue::Text(self.supplier_id.clone()),
            "supplier_name" => CellValue::Text(self.supplier_name.clone()),
            "purchase_date" => CellValue::Date(self.purchase_date),
            "order_number" => CellValue::Text(self.order_number.clone()),
            "expected_delivery_date" => match self.expected_delivery_date {
                Some(date) => CellValue::Date(date),
                None => CellValue::Missing,
            },
            "delivery_status" => CellValue::Text(self.delivery_status.label().to_string()),
            "total_amount" => CellValue::Number(self.total_amount),
            "notes" => opt_text(&self.notes),
            _ => CellValue::Missing,
        }
    }
}

impl GridRecord for Sale {
    fn field_names() -> &'static [&'static str] {
        &[
            "id",
            "customer_id",
            "customer_name",
            "sale_date",
            "order_number",
            "expected_delivery_date",
            "delivery_status",
            "billing_status",
            "total_amount",
            "notes",
        ]
    }

    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => CellValue::Text(self.id.clone()),
            "customer_id" => CellValue::Text(self.customer_id.clone()),
            "customer_name" => CellValue::Text(self.customer_name.clone()),
            "sale_date" => CellValue::Date(self.sale_date),
            "order_number" => CellValue::Text(self.order_number.clone()),
            "expected_delivery_date" => match self.expected_delivery_date {
                Some(date) => CellValue::Date(date),
                None => CellValue::Missing,
            },
            "delivery_status" => CellValue::Text(self.delivery_status.label().to_string()),
            "billing_status" => CellValue::Text(self.billing_status.label().to_string()),
            "total_amount" => CellValue::Number(self.total_amount),
            "notes" => opt_text(&self.notes),
            _ => CellValue::Missing,
        }
    }
}

impl GridRecord for Expense {
    fn field_names() -> &'static [&'static str] {
        &[
            "id",
            "date",
            "category",
            "description",
            "amount",
            "supplier",
            "notes",
        ]
    }

    fn row_key(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> CellValue {
        match name {
            "id" => CellValue::Text(self.id.clone()),
            "date" => CellValue::Date(self.date),
            "category" => CellValue::Text(self.category.label().to_string()),
            "description" => CellValue::Text(self.description.clone()),
            "amount" => CellValue::Number(self.amount),
            "supplier" => opt_text(&self.supplier),
            "notes" => opt_text(&self.notes),
            _ => CellValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::sample::{
        SAMPLE_EXPENSES, SAMPLE_PRODUCTS, SAMPLE_PURCHASES, SAMPLE_SALES,
    };
    use crate::shared::components::datagrid::engine::filter_records;
    use crate::shared::components::datagrid::GridState;

    #[test]
    fn every_declared_field_resolves() {
        let product = &SAMPLE_PRODUCTS[0];
        for name in Product::field_names() {
            assert_ne!(product.field(name), CellValue::Missing, "field {name}");
        }
    }

    #[test]
    fn unknown_field_is_missing() {
        assert_eq!(SAMPLE_PRODUCTS[0].field("nonexistent"), CellValue::Missing);
    }

    #[test]
    fn status_fields_search_by_label() {
        let matched = filter_records(&SAMPLE_SALES, "paid");
        assert_eq!(matched.len(), SAMPLE_SALES.len());
    }

    #[test]
    fn counterparty_ids_participate_in_search() {
        let mut purchase = SAMPLE_PURCHASES[0].clone();
        purchase.supplier_id = "sup-904".into();
        assert_eq!(filter_records(&[purchase], "sup-904").len(), 1);

        let mut sale = SAMPLE_SALES[0].clone();
        sale.customer_id = "cus-311".into();
        assert_eq!(filter_records(&[sale], "cus-311").len(), 1);
    }

    #[test]
    fn numeric_fields_do_not_match_search() {
        // "2500" appears only as an amount, which search ignores.
        let matched = filter_records(&SAMPLE_EXPENSES, "2500");
        assert!(matched.is_empty());
    }

    #[test]
    fn missing_supplier_sorts_as_equal() {
        let mut state = GridState::default();
        state.toggle_sort("supplier");
        let sorted = state.apply(&SAMPLE_EXPENSES);
        assert_eq!(sorted.len(), SAMPLE_EXPENSES.len());
    }
}
