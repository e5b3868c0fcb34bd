//! Application state: one [`RwSignal`] per collection, shared through
//! context. Mutations append; documents also adjust stock levels and leave
//! an audit trail of [`StockMovement`] entries.

use chrono::{NaiveDate, Utc};
use contracts::domain::{
    BillingStatus, Customer, DeliveryStatus, Expense, ExpenseCategory, Product, Purchase,
    PurchaseLine, Sale, SaleLine, StockMovement, StockMovementType, Supplier,
};
use contracts::reports::{CategoryExpense, PeriodRevenue, ProfitData, ReportPeriod, SalesByProduct};
use leptos::prelude::*;
use uuid::Uuid;

use super::sample::{
    SAMPLE_CUSTOMERS, SAMPLE_EXPENSES, SAMPLE_PRODUCTS, SAMPLE_PURCHASES, SAMPLE_SALES,
    SAMPLE_SUPPLIERS,
};

/// New supplier or customer, before the store assigns id and timestamps.
pub struct PartyDraft {
    pub name: String,
    pub contact_person: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

pub struct ProductDraft {
    pub reference: String,
    pub name: String,
    pub description: String,
    pub quantity_in_stock: i64,
    pub average_purchase_price: f64,
    pub selling_price: f64,
    pub minimum_stock_level: i64,
}

pub struct PurchaseDraft {
    pub supplier_id: String,
    pub supplier_name: String,
    pub purchase_date: NaiveDate,
    pub order_number: String,
    pub expected_delivery_date: Option<NaiveDate>,
    pub delivery_status: DeliveryStatus,
    pub items: Vec<PurchaseLine>,
    pub total_amount: f64,
    pub notes: Option<String>,
}

pub struct SaleDraft {
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
}

pub struct ExpenseDraft {
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: f64,
    pub supplier: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone, Copy)]
pub struct AppStore {
    pub suppliers: RwSignal<Vec<Supplier>>,
    pub customers: RwSignal<Vec<Customer>>,
    pub products: RwSignal<Vec<Product>>,
    pub purchases: RwSignal<Vec<Purchase>>,
    pub sales: RwSignal<Vec<Sale>>,
    pub expenses: RwSignal<Vec<Expense>>,
    pub stock_movements: RwSignal<Vec<StockMovement>>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

impl AppStore {
    /// Seeds every collection from the bundled sample data.
    pub fn new() -> Self {
        Self {
            suppliers: RwSignal::new(SAMPLE_SUPPLIERS.clone()),
            customers: RwSignal::new(SAMPLE_CUSTOMERS.clone()),
            products: RwSignal::new(SAMPLE_PRODUCTS.clone()),
            purchases: RwSignal::new(SAMPLE_PURCHASES.clone()),
            sales: RwSignal::new(SAMPLE_SALES.clone()),
            expenses: RwSignal::new(SAMPLE_EXPENSES.clone()),
            stock_movements: RwSignal::new(Vec::new()),
        }
    }

    pub fn provide() -> Self {
        let store = Self::new();
        provide_context(store);
        store
    }

    pub fn expect() -> Self {
        use_context::<Self>().expect("AppStore provided at the application root")
    }

    pub fn add_supplier(&self, draft: PartyDraft) {
        let now = today();
        let supplier = Supplier {
            id: new_id(),
            name: draft.name,
            contact_person: draft.contact_person,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
            created_at: now,
            updated_at: now,
        };
        log::info!("adding supplier {}", supplier.name);
        self.suppliers.update(|list| list.push(supplier));
    }

    pub fn add_customer(&self, draft: PartyDraft) {
        let now = today();
        let customer = Customer {
            id: new_id(),
            name: draft.name,
            contact_person: draft.contact_person,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
            created_at: now,
            updated_at: now,
        };
        log::info!("adding customer {}", customer.name);
        self.customers.update(|list| list.push(customer));
    }

    pub fn add_product(&self, draft: ProductDraft) {
        let now = today();
        let product = Product {
            id: new_id(),
            reference: draft.reference,
            name: draft.name,
            description: draft.description,
            quantity_in_stock: draft.quantity_in_stock,
            average_purchase_price: draft.average_purchase_price,
            selling_price: draft.selling_price,
            minimum_stock_level: draft.minimum_stock_level,
            created_at: now,
            updated_at: now,
        };
        log::info!("adding product {} ({})", product.name, product.reference);
        self.products.update(|list| list.push(product));
    }

    /// Records the purchase, receives its items into stock and appends one
    /// stock movement per line.
    pub fn add_purchase(&self, draft: PurchaseDraft) {
        let now = today();
        let purchase = Purchase {
            id: new_id(),
            supplier_id: draft.supplier_id,
            supplier_name: draft.supplier_name,
            purchase_date: draft.purchase_date,
            order_number: draft.order_number,
            expected_delivery_date: draft.expected_delivery_date,
            delivery_status: draft.delivery_status,
            items: draft.items,
            total_amount: draft.total_amount,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        };
        log::info!("adding purchase {}", purchase.order_number);
        self.products.update(|products| {
            self.stock_movements.update(|movements| {
                receive_purchase_stock(products, movements, &purchase, now);
            });
        });
        self.purchases.update(|list| list.push(purchase));
    }

    /// Records the sale, ships its items out of stock and appends one stock
    /// movement per line.
    pub fn add_sale(&self, draft: SaleDraft) {
        let now = today();
        let sale = Sale {
            id: new_id(),
            customer_id: draft.customer_id,
            customer_name: draft.customer_name,
            sale_date: draft.sale_date,
            order_number: draft.order_number,
            expected_delivery_date: draft.expected_delivery_date,
            delivery_status: draft.delivery_status,
            billing_status: draft.billing_status,
            items: draft.items,
            total_amount: draft.total_amount,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        };
        log::info!("adding sale {}", sale.order_number);
        self.products.update(|products| {
            self.stock_movements.update(|movements| {
                ship_sale_stock(products, movements, &sale, now);
            });
        });
        self.sales.update(|list| list.push(sale));
    }

    pub fn add_expense(&self, draft: ExpenseDraft) {
        let now = today();
        let expense = Expense {
            id: new_id(),
            date: draft.date,
            category: draft.category,
            description: draft.description,
            amount: draft.amount,
            supplier: draft.supplier,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        };
        log::info!("adding expense {} ({})", expense.description, expense.category);
        self.expenses.update(|list| list.push(expense));
    }

    pub fn low_stock_products(&self) -> Vec<Product> {
        self.products
            .get()
            .into_iter()
            .filter(|p| p.is_low_stock())
            .collect()
    }

    // The aggregate reports below serve canned figures until real
    // aggregation over the document history lands.

    pub fn profit_rows(&self, _period: ReportPeriod) -> Vec<ProfitData> {
        vec![
            ProfitData {
                period: "Jan 2023".into(),
                revenue: 120_000.0,
                cost_of_goods_sold: 80_000.0,
                gross_margin: 40_000.0,
                expenses: 25_000.0,
                net_profit: 15_000.0,
            },
            ProfitData {
                period: "Feb 2023".into(),
                revenue: 130_000.0,
                cost_of_goods_sold: 85_000.0,
                gross_margin: 45_000.0,
                expenses: 27_000.0,
                net_profit: 18_000.0,
            },
            ProfitData {
                period: "Mar 2023".into(),
                revenue: 140_000.0,
                cost_of_goods_sold: 90_000.0,
                gross_margin: 50_000.0,
                expenses: 30_000.0,
                net_profit: 20_000.0,
            },
        ]
    }

    pub fn top_selling_products(&self, limit: usize) -> Vec<SalesByProduct> {
        let mut rows = vec![
            SalesByProduct {
                product_id: "1".into(),
                product_name: "Smartphone XYZ".into(),
                quantity_sold: 50,
                revenue: 25_000.0,
            },
            SalesByProduct {
                product_id: "2".into(),
                product_name: "Laptop ABC".into(),
                quantity_sold: 30,
                revenue: 45_000.0,
            },
            SalesByProduct {
                product_id: "3".into(),
                product_name: "Headphones Premium".into(),
                quantity_sold: 100,
                revenue: 15_000.0,
            },
        ];
        rows.truncate(limit);
        rows
    }

    pub fn revenue_by_period(&self, _period: ReportPeriod) -> Vec<PeriodRevenue> {
        [
            ("Jan", 120_000.0),
            ("Feb", 130_000.0),
            ("Mar", 140_000.0),
            ("Apr", 125_000.0),
            ("May", 135_000.0),
            ("Jun", 145_000.0),
        ]
        .into_iter()
        .map(|(period, amount)| PeriodRevenue {
            period: period.into(),
            amount,
        })
        .collect()
    }

    pub fn expenses_by_category(&self) -> Vec<CategoryExpense> {
        [
            ("Rent", 50_000.0),
            ("Salaries", 120_000.0),
            ("Marketing", 30_000.0),
            ("Utilities", 15_000.0),
            ("Other", 25_000.0),
        ]
        .into_iter()
        .map(|(category, amount)| CategoryExpense {
            category: category.into(),
            amount,
        })
        .collect()
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Adds each purchased line to its product's stock. Lines referencing an
/// unknown product are skipped.
fn receive_purchase_stock(
    products: &mut [Product],
    movements: &mut Vec<StockMovement>,
    purchase: &Purchase,
    now: NaiveDate,
) {
    for item in &purchase.items {
        let Some(product) = products.iter_mut().find(|p| p.id == item.product_id) else {
            continue;
        };
        let previous = product.quantity_in_stock;
        product.quantity_in_stock = previous + item.quantity;
        product.updated_at = now;
        movements.push(StockMovement {
            id: new_id(),
            product_id: product.id.clone(),
            movement_type: StockMovementType::Purchase,
            quantity: item.quantity,
            previous_quantity: previous,
            new_quantity: product.quantity_in_stock,
            related_document_id: Some(purchase.id.clone()),
            notes: None,
            created_at: now,
            updated_at: now,
        });
    }
}

/// Removes each sold line from its product's stock. The movement quantity
/// is negative for outbound goods.
fn ship_sale_stock(
    products: &mut [Product],
    movements: &mut Vec<StockMovement>,
    sale: &Sale,
    now: NaiveDate,
) {
    for item in &sale.items {
        let Some(product) = products.iter_mut().find(|p| p.id == item.product_id) else {
            continue;
        };
        let previous = product.quantity_in_stock;
        product.quantity_in_stock = previous - item.quantity;
        product.updated_at = now;
        movements.push(StockMovement {
            id: new_id(),
            product_id: product.id.clone(),
            movement_type: StockMovementType::Sale,
            quantity: -item.quantity,
            previous_quantity: previous,
            new_quantity: product.quantity_in_stock,
            related_document_id: Some(sale.id.clone()),
            notes: None,
            created_at: now,
            updated_at: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::sample::{SAMPLE_PRODUCTS, SAMPLE_PURCHASES, SAMPLE_SALES};

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn purchase_receipt_raises_stock_and_logs_movements() {
        let mut products = SAMPLE_PRODUCTS.clone();
        let mut movements = Vec::new();
        let purchase = SAMPLE_PURCHASES[0].clone();

        receive_purchase_stock(&mut products, &mut movements, &purchase, d(2023, 3, 1));

        // 25 smartphones + 10, 50 headphones + 20.
        assert_eq!(products[0].quantity_in_stock, 35);
        assert_eq!(products[2].quantity_in_stock, 70);
        assert_eq!(movements.len(), 2);
        assert_eq!(movements[0].movement_type, StockMovementType::Purchase);
        assert_eq!(movements[0].quantity, 10);
        assert_eq!(movements[0].previous_quantity, 25);
        assert_eq!(movements[0].new_quantity, 35);
        assert_eq!(movements[0].related_document_id.as_deref(), Some("1"));
    }

    #[test]
    fn sale_shipment_lowers_stock_with_negative_movements() {
        let mut products = SAMPLE_PRODUCTS.clone();
        let mut movements = Vec::new();
        let sale = SAMPLE_SALES[0].clone();

        ship_sale_stock(&mut products, &mut movements, &sale, d(2023, 3, 1));

        // 25 smartphones - 3, 50 headphones - 5.
        assert_eq!(products[0].quantity_in_stock, 22);
        assert_eq!(products[2].quantity_in_stock, 45);
        assert_eq!(movements.len(), 2);
        assert_eq!(movements[0].quantity, -3);
        assert_eq!(movements[1].quantity, -5);
    }

    #[test]
    fn shipment_below_minimum_marks_product_low_stock() {
        let mut products = SAMPLE_PRODUCTS.clone();
        let mut movements = Vec::new();
        let mut sale = SAMPLE_SALES[0].clone();
        sale.items.truncate(1);
        sale.items[0].quantity = 16;

        assert!(!products[0].is_low_stock());
        ship_sale_stock(&mut products, &mut movements, &sale, d(2023, 3, 1));

        // 25 - 16 = 9, under the minimum of 10.
        assert_eq!(products[0].quantity_in_stock, 9);
        assert!(products[0].is_low_stock());
    }

    #[test]
    fn unknown_product_lines_are_skipped() {
        let mut products = SAMPLE_PRODUCTS.clone();
        let mut movements = Vec::new();
        let mut purchase = SAMPLE_PURCHASES[0].clone();
        purchase.items[0].product_id = "missing".into();

        receive_purchase_stock(&mut products, &mut movements, &purchase, d(2023, 3, 1));

        assert_eq!(products[0].quantity_in_stock, 25);
        assert_eq!(movements.len(), 1);
    }
}
