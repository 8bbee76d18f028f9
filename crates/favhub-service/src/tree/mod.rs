//! Tree ownership, path resolution, and display ordering.

pub mod ordering;
pub mod store;

pub use ordering::display_order;
pub use store::{NodeLocation, TreeStore};
