pub mod dashboard;
pub mod expenses;
pub mod inventory;
pub mod profits;
pub mod purchases;
pub mod reports;
pub mod sales;
mod status;

pub use dashboard::DashboardPage;
pub use expenses::ExpensesPage;
pub use inventory::InventoryPage;
pub use profits::ProfitsPage;
pub use purchases::PurchasesPage;
pub use reports::ReportsPage;
pub use sales::SalesPage;
