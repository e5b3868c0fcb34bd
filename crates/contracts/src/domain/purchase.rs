use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery state of a purchase or sales order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Pending,
    Delivered,
    Canceled,
}

impl DeliveryStatus {
    /// Capitalized label for table badges.
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Canceled => "Canceled",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One ordered product line on a purchase document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseLine {
    pub product_id: String,
    pub product_reference: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
}

/// A purchase order placed with a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub id: String,
    pub supplier_id: String,
    pub supplier_name: String,
    pub purchase_date: NaiveDate,
    pub order_number: String,
    pub expected_delivery_date: Option<NaiveDate>,
    pub delivery_status: DeliveryStatus,
    pub items: Vec<PurchaseLine>,
    pub total_amount: f64,
    pub notes: Option<String>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_status_wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&DeliveryStatus::Delivered).expect("serialize"),
            "\"delivered\""
        );
        let parsed: DeliveryStatus = serde_json::from_str("\"pending\"").expect("deserialize");
        assert_eq!(parsed, DeliveryStatus::Pending);
    }

    #[test]
    fn delivery_status_labels_are_capitalized() {
        assert_eq!(DeliveryStatus::Pending.label(), "Pending");
        assert_eq!(DeliveryStatus::Canceled.to_string(), "Canceled");
    }
}
