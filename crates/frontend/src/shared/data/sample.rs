//! Seed data loaded into the store on startup.

use chrono::NaiveDate;
use contracts::domain::{
    BillingStatus, Customer, DeliveryStatus, Expense, ExpenseCategory, Product, Purchase,
    PurchaseLine, Sale, SaleLine, Supplier,
};
use once_cell::sync::Lazy;

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
}

pub static SAMPLE_SUPPLIERS: Lazy<Vec<Supplier>> = Lazy::new(|| {
    vec![
        Supplier {
            id: "1".into(),
            name: "Tech Solutions Inc.".into(),
            contact_person: "John Doe".into(),
            phone: "123-456-7890".into(),
            email: "john@techsolutions.com".into(),
            address: "123 Tech St, Silicon Valley, CA".into(),
            created_at: d(2023, 1, 1),
            updated_at: d(2023, 1, 1),
        },
        Supplier {
            id: "2".into(),
            name: "Global Electronics".into(),
            contact_person: "Jane Smith".into(),
            phone: "987-654-3210".into(),
            email: "jane@globalelectronics.com".into(),
            address: "456 Global Ave, New York, NY".into(),
            created_at: d(2023, 1, 15),
            updated_at: d(2023, 1, 15),
        },
        Supplier {
            id: "3".into(),
            name: "Supply Depot".into(),
            contact_person: "Robert Johnson".into(),
            phone: "555-123-4567".into(),
            email: "robert@supplydepot.com".into(),
            address: "789 Supply Rd, Chicago, IL".into(),
            created_at: d(2023, 2, 1),
            updated_at: d(2023, 2, 1),
        },
    ]
});

pub static SAMPLE_CUSTOMERS: Lazy<Vec<Customer>> = Lazy::new(|| {
    vec![
        Customer {
            id: "1".into(),
            name: "Retail Giant".into(),
            contact_person: "Alice Williams".into(),
            phone: "111-222-3333".into(),
            email: "alice@retailgiant.com".into(),
            address: "321 Retail Blvd, Los Angeles, CA".into(),
            created_at: d(2023, 1, 5),
            updated_at: d(2023, 1, 5),
        },
        Customer {
            id: "2".into(),
            name: "Online Store Pro".into(),
            contact_person: "Bob Anderson".into(),
            phone: "444-555-6666".into(),
            email: "bob@onlinestorepro.com".into(),
            address: "654 Digital St, Seattle, WA".into(),
            created_at: d(2023, 1, 20),
            updated_at: d(2023, 1, 20),
        },
        Customer {
            id: "3".into(),
            name: "Local Shop".into(),
            contact_person: "Carol Martin".into(),
            phone: "777-888-9999".into(),
            email: "carol@localshop.com".into(),
            address: "987 Main St, Austin, TX".into(),
            created_at: d(2023, 2, 5),
            updated_at: d(2023, 2, 5),
        },
    ]
});

pub static SAMPLE_PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product {
            id: "1".into(),
            reference: "PROD-001".into(),
            name: "Smartphone XYZ".into(),
            description: "Latest smartphone with 128GB storage".into(),
            quantity_in_stock: 25,
            average_purchase_price: 400.0,
            selling_price: 599.99,
            minimum_stock_level: 10,
            created_at: d(2023, 1, 10),
            updated_at: d(2023, 1, 10),
        },
        Product {
            id: "2".into(),
            reference: "PROD-002".into(),
            name: "Laptop ABC".into(),
            description: "High-performance laptop with 16GB RAM".into(),
            quantity_in_stock: 15,
            average_purchase_price: 1200.0,
            selling_price: 1699.99,
            minimum_stock_level: 5,
            created_at: d(2023, 1, 12),
            updated_at: d(2023, 1, 12),
        },
        Product {
            id: "3".into(),
            reference: "PROD-003".into(),
            name: "Wireless Headphones".into(),
            description: "Premium noise-cancelling headphones".into(),
            quantity_in_stock: 50,
            average_purchase_price: 120.0,
            selling_price: 199.99,
            minimum_stock_level: 20,
            created_at: d(2023, 1, 15),
            updated_at: d(2023, 1, 15),
        },
        Product {
            id: "4".into(),
            reference: "PROD-004".into(),
            name: "Smart Watch".into(),
            description: "Fitness tracker and smartwatch".into(),
            quantity_in_stock: 30,
            average_purchase_price: 150.0,
            selling_price: 249.99,
            minimum_stock_level: 15,
            created_at: d(2023, 1, 20),
            updated_at: d(2023, 1, 20),
        },
        Product {
            id: "5".into(),
            reference: "PROD-005".into(),
            name: "Tablet Pro".into(),
            description: "10-inch tablet with 64GB storage".into(),
            quantity_in_stock: 20,
            average_purchase_price: 300.0,
            selling_price: 449.99,
            minimum_stock_level: 8,
            created_at: d(2023, 1, 25),
            updated_at: d(2023, 1, 25),
        },
    ]
});

pub static SAMPLE_PURCHASES: Lazy<Vec<Purchase>> = Lazy::new(|| {
    vec![
        Purchase {
            id: "1".into(),
            supplier_id: "1".into(),
            supplier_name: "Tech Solutions Inc.".into(),
            purchase_date: d(2023, 1, 15),
            order_number: "PO-2023-001".into(),
            expected_delivery_date: Some(d(2023, 1, 25)),
            delivery_status: DeliveryStatus::Delivered,
            items: vec![
                PurchaseLine {
                    product_id: "1".into(),
                    product_reference: "PROD-001".into(),
                    product_name: "Smartphone XYZ".into(),
                    quantity: 10,
                    unit_price: 400.0,
                    total_price: 4000.0,
                },
                PurchaseLine {
                    product_id: "3".into(),
                    product_reference: "PROD-003".into(),
                    product_name: "Wireless Headphones".into(),
                    quantity: 20,
                    unit_price: 120.0,
                    total_price: 2400.0,
                },
            ],
            total_amount: 6400.0,
            notes: Some("Regular stock replenishment".into()),
            created_at: d(2023, 1, 15),
            updated_at: d(2023, 1, 15),
        },
        Purchase {
            id: "2".into(),
            supplier_id: "2".into(),
            supplier_name: "Global Electronics".into(),
            purchase_date: d(2023, 2, 5),
            order_number: "PO-2023-002".into(),
            expected_delivery_date: Some(d(2023, 2, 15)),
            delivery_status: DeliveryStatus::Delivered,
            items: vec![
                PurchaseLine {
                    product_id: "2".into(),
                    product_reference: "PROD-002".into(),
                    product_name: "Laptop ABC".into(),
                    quantity: 5,
                    unit_price: 1200.0,
                    total_price: 6000.0,
                },
                PurchaseLine {
                    product_id: "5".into(),
                    product_reference: "PROD-005".into(),
                    product_name: "Tablet Pro".into(),
                    quantity: 8,
                    unit_price: 300.0,
                    total_price: 2400.0,
                },
            ],
            total_amount: 8400.0,
            notes: Some("Quarterly order".into()),
            created_at: d(2023, 2, 5),
            updated_at: d(2023, 2, 5),
        },
    ]
});

pub static SAMPLE_SALES: Lazy<Vec<Sale>> = Lazy::new(|| {
    vec![
        Sale {
            id: "1".into(),
            customer_id: "1".into(),
            customer_name: "Retail Giant".into(),
            sale_date: d(2023, 1, 20),
            order_number: "SO-2023-001".into(),
            expected_delivery_date: Some(d(2023, 1, 25)),
            delivery_status: DeliveryStatus::Delivered,
            billing_status: BillingStatus::Paid,
            items: vec![
                SaleLine {
                    product_id: "1".into(),
                    product_reference: "PROD-001".into(),
                    product_name: "Smartphone XYZ".into(),
                    quantity: 3,
                    unit_price: 599.99,
                    total_price: 1799.97,
                },
                SaleLine {
                    product_id: "3".into(),
                    product_reference: "PROD-003".into(),
                    product_name: "Wireless Headphones".into(),
                    quantity: 5,
                    unit_price: 199.99,
                    total_price: 999.95,
                },
            ],
            total_amount: 2799.92,
            notes: Some("Regular customer order".into()),
            created_at: d(2023, 1, 20),
            updated_at: d(2023, 1, 20),
        },
        Sale {
            id: "2".into(),
            customer_id: "2".into(),
            customer_name: "Online Store Pro".into(),
            sale_date: d(2023, 2, 10),
            order_number: "SO-2023-002".into(),
            expected_delivery_date: Some(d(2023, 2, 15)),
            delivery_status: DeliveryStatus::Delivered,
            billing_status: BillingStatus::Paid,
            items: vec![
                SaleLine {
                    product_id: "2".into(),
                    product_reference: "PROD-002".into(),
                    product_name: "Laptop ABC".into(),
                    quantity: 2,
                    unit_price: 1699.99,
                    total_price: 3399.98,
                },
                SaleLine {
                    product_id: "4".into(),
                    product_reference: "PROD-004".into(),
                    product_name: "Smart Watch".into(),
                    quantity: 4,
                    unit_price: 249.99,
                    total_price: 999.96,
                },
            ],
            total_amount: 4399.94,
            notes: Some("Online order with express shipping".into()),
            created_at: d(2023, 2, 10),
            updated_at: d(2023, 2, 10),
        },
    ]
});

pub static SAMPLE_EXPENSES: Lazy<Vec<Expense>> = Lazy::new(|| {
    vec![
        Expense {
            id: "1".into(),
            date: d(2023, 1, 5),
            category: ExpenseCategory::Rent,
            description: "Office rent for January 2023".into(),
            amount: 2500.0,
            supplier: None,
            notes: Some("Paid on time".into()),
            created_at: d(2023, 1, 5),
            updated_at: d(2023, 1, 5),
        },
        Expense {
            id: "2".into(),
            date: d(2023, 1, 15),
            category: ExpenseCategory::Salary,
            description: "Employee salaries for January 2023".into(),
            amount: 12000.0,
            supplier: None,
            notes: Some("For 5 employees".into()),
            created_at: d(2023, 1, 15),
            updated_at: d(2023, 1, 15),
        },
        Expense {
            id: "3".into(),
            date: d(2023, 1, 20),
            category: ExpenseCategory::Marketing,
            description: "Digital marketing campaign".into(),
            amount: 1500.0,
            supplier: Some("Marketing Agency XYZ".into()),
            notes: Some("Social media and Google Ads".into()),
            created_at: d(2023, 1, 20),
            updated_at: d(2023, 1, 20),
        },
        Expense {
            id: "4".into(),
            date: d(2023, 2, 5),
            category: ExpenseCategory::Utilities,
            description: "Electricity bill for January 2023".into(),
            amount: 350.0,
            supplier: None,
            notes: Some("Higher than usual due to winter".into()),
            created_at: d(2023, 2, 5),
            updated_at: d(2023, 2, 5),
        },
        Expense {
            id: "5".into(),
            date: d(2023, 2, 10),
            category: ExpenseCategory::Supplies,
            description: "Office supplies and stationery".into(),
            amount: 250.0,
            supplier: Some("Office Supplies Store".into()),
            notes: Some("Quarterly purchase".into()),
            created_at: d(2023, 2, 10),
            updated_at: d(2023, 2, 10),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_totals_match_their_lines() {
        for purchase in SAMPLE_PURCHASES.iter() {
            let sum: f64 = purchase.items.iter().map(|line| line.total_price).sum();
            assert!((sum - purchase.total_amount).abs() < 0.01, "{}", purchase.order_number);
        }
    }

    #[test]
    fn sale_totals_match_their_lines() {
        for sale in SAMPLE_SALES.iter() {
            let sum: f64 = sale.items.iter().map(|line| line.total_price).sum();
            assert!((sum - sale.total_amount).abs() < 0.01, "{}", sale.order_number);
        }
    }

    #[test]
    fn fixture_ids_are_unique_per_collection() {
        let mut ids: Vec<&str> = SAMPLE_PRODUCTS.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SAMPLE_PRODUCTS.len());
    }
}
