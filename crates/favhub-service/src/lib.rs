//! # favhub-service
//!
//! The bookmark tree engine: the [`tree::TreeStore`] that owns the tree
//! and resolves folder paths, display ordering, search, the selection
//! set, the move/reorder engine, the drag state machine, and the
//! [`manager::BookmarkService`] facade that persists and announces every
//! committed mutation.
//!
//! View state (current path, search keyword, selection, drag) lives in an
//! explicit [`context::ViewSession`] passed into each operation.

pub mod context;
pub mod drag;
pub mod events;
pub mod manager;
pub mod moves;
pub mod notice;
pub mod search;
pub mod selection;
pub mod tree;

pub use context::ViewSession;
pub use manager::BookmarkService;
