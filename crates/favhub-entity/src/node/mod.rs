//! Bookmark tree nodes.

pub mod draft;
pub mod model;

pub use draft::{FolderDraft, LinkDraft, NodeDraft};
pub use model::{Folder, Link, Node, NodeKind};
