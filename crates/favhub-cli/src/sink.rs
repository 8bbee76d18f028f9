//! Console event sink.

use tracing::debug;

use favhub_core::events::{DomainEvent, EventPayload, ViewEvent};
use favhub_core::traits::EventSink;

use crate::output;

/// Prints status notices and save failures to the terminal.
///
/// With `quiet` set (JSON output), notices are left out so that stdout
/// stays machine-readable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    quiet: bool,
}

impl ConsoleSink {
    /// Create a sink; `quiet` suppresses status notices.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl EventSink for ConsoleSink {
    fn publish(&mut self, event: DomainEvent) {
        match &event.payload {
            EventPayload::View(ViewEvent::Notice(notice)) if !self.quiet => {
                output::print_success(&notice.message);
            }
            EventPayload::View(ViewEvent::PersistFailed { message }) => {
                output::print_warning(&format!("Change could not be saved: {message}"));
            }
            payload => debug!(event_id = %event.id, payload = ?payload, "Event"),
        }
    }
}
