//! Outbound notifications to the presentation layer.

use crate::events::DomainEvent;

/// Receives render requests, status notices, and persistence failures.
///
/// The presentation layer implements this to repaint its view and show
/// messages; everything runs on one thread so no synchronization is
/// required.
pub trait EventSink: std::fmt::Debug {
    /// Deliver one event.
    fn publish(&mut self, event: DomainEvent);
}
