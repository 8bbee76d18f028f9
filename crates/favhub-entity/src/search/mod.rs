//! Search result records.

pub mod record;

pub use record::SearchRecord;
