use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A stocked product with purchase/sale pricing and a reorder threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub reference: String,
    pub name: String,
    pub description: String,
    pub quantity_in_stock: i64,
    pub average_purchase_price: f64,
    pub selling_price: f64,
    pub minimum_stock_level: i64,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

impl Product {
    /// A product is low on stock when it is at or below its minimum level.
    pub fn is_low_stock(&self) -> bool {
        self.quantity_in_stock <= self.minimum_stock_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn product(stock: i64, minimum: i64) -> Product {
        Product {
            id: "1".to_string(),
            reference: "PROD-001".to_string(),
            name: "Smartphone XYZ".to_string(),
            description: "Latest smartphone with 128GB storage".to_string(),
            quantity_in_stock: stock,
            average_purchase_price: 400.0,
            selling_price: 599.99,
            minimum_stock_level: minimum,
            created_at: NaiveDate::from_ymd_opt(2023, 1, 10).expect("valid date"),
            updated_at: NaiveDate::from_ymd_opt(2023, 1, 10).expect("valid date"),
        }
    }

    #[test]
    fn low_stock_at_or_below_minimum() {
        assert!(product(10, 10).is_low_stock());
        assert!(product(0, 10).is_low_stock());
        assert!(!product(11, 10).is_low_stock());
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let json = serde_json::to_value(product(25, 10)).expect("serialize");
        assert_eq!(json["quantityInStock"], 25);
        assert_eq!(json["averagePurchasePrice"], 400.0);
        assert_eq!(json["minimumStockLevel"], 10);
        assert_eq!(json["createdAt"], "2023-01-10");
    }
}
