use crate::domain::purchase::DeliveryStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Invoicing state of a sales order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingStatus {
    Pending,
    Billed,
    Paid,
}

impl BillingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BillingStatus::Pending => "Pending",
            BillingStatus::Billed => "Billed",
            BillingStatus::Paid => "Paid",
        }
    }
}

impl fmt::Display for BillingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One sold product line on a sales document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    pub product_id: String,
    pub product_reference: String,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
}

/// A sales order issued to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub sale_date: NaiveDate,
    pub order_number: String,
    pub expected_delivery_date: Option<NaiveDate>,
    pub delivery_status: DeliveryStatus,
    pub billing_status: BillingStatus,
    pub items: Vec<SaleLine>,
    pub total_amount: f64,
    pub notes: Option<String>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}
