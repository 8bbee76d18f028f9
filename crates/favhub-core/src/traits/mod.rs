//! Trait definitions at the seams between the tree engine and its
//! external collaborators.

pub mod events;
pub mod storage;

pub use events::EventSink;
pub use storage::StateStore;
