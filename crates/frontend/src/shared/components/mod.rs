pub mod card;
pub mod datagrid;
pub mod stat_card;

pub use card::Card;
pub use datagrid::{CellValue, Column, DataTable, GridRecord};
pub use stat_card::StatsCard;
