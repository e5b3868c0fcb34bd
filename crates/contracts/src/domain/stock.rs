use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What caused a stock level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockMovementType {
    Purchase,
    Sale,
    Adjustment,
}

/// An audit record of one stock level change.
///
/// `quantity` is signed: positive for goods received, negative for goods
/// shipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: String,
    pub product_id: String,
    #[serde(rename = "type")]
    pub movement_type: StockMovementType,
    pub quantity: i64,
    pub previous_quantity: i64,
    pub new_quantity: i64,
    pub related_document_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}
