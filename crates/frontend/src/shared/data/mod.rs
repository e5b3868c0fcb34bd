pub mod records;
pub mod sample;
pub mod store;

pub use store::AppStore;
