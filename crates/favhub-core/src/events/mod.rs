//! Domain events emitted by FavHub operations.
//!
//! Events are delivered synchronously to an [`EventSink`](crate::traits::EventSink)
//! owned by the presentation layer.

pub mod tree;
pub mod view;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::EventId;

pub use tree::TreeEvent;
pub use view::{Notice, ViewEvent};

/// Wrapper for all domain events with metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    /// Unique event ID.
    pub id: EventId,
    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    pub payload: EventPayload,
}

/// Union of all domain event types.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "domain", content = "event")]
pub enum EventPayload {
    /// The bookmark tree changed.
    Tree(TreeEvent),
    /// The presentation layer should react (render, notify).
    View(ViewEvent),
}

impl DomainEvent {
    /// Create a new domain event.
    pub fn new(payload: EventPayload) -> Self {
        Self {
            id: EventId::new(),
            timestamp: Utc::now(),
            payload,
        }
    }

    /// Shorthand for a tree event.
    pub fn tree(event: TreeEvent) -> Self {
        Self::new(EventPayload::Tree(event))
    }

    /// Shorthand for a view event.
    pub fn view(event: ViewEvent) -> Self {
        Self::new(EventPayload::View(event))
    }
}
