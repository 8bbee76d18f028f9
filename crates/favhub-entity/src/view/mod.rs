//! Render-ready view records.

pub mod item;

pub use item::DisplayItem;
