pub mod global_context;
pub mod header;
pub mod sidebar;

pub use global_context::{AppGlobalContext, Page};
pub use header::Header;
pub use sidebar::Sidebar;
