pub mod charts;
pub mod components;
pub mod data;
pub mod format;
pub mod icons;
