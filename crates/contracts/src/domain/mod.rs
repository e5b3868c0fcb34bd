pub mod customer;
pub mod expense;
pub mod product;
pub mod purchase;
pub mod sale;
pub mod stock;
pub mod supplier;

pub use customer::Customer;
pub use expense::{Expense, ExpenseCategory};
pub use product::Product;
pub use purchase::{DeliveryStatus, Purchase, PurchaseLine};
pub use sale::{BillingStatus, Sale, SaleLine};
pub use stock::{StockMovement, StockMovementType};
pub use supplier::Supplier;
