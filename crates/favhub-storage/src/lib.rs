//! # favhub-storage
//!
//! Persistence for the bookmark tree: pluggable [`StateStore`] providers,
//! the [`gateway::PersistenceGateway`] that loads with a default-tree
//! fallback and saves after every mutation, and the JSON exchange format
//! used by import/export.
//!
//! [`StateStore`]: favhub_core::traits::StateStore

pub mod defaults;
pub mod exchange;
pub mod gateway;
pub mod providers;

pub use gateway::PersistenceGateway;
