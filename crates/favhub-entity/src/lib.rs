//! # favhub-entity
//!
//! Domain entity models for FavHub. [`node::Node`] is the persisted
//! schema (a recursive array of folders and links); the remaining
//! modules hold input drafts and the derived records the views hand out.

pub mod node;
pub mod search;
pub mod view;
