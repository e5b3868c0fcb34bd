use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A goods supplier the business orders from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}
