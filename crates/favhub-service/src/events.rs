//! Event sinks provided by the service layer.

use std::cell::RefCell;
use std::rc::Rc;

use favhub_core::events::{DomainEvent, EventPayload, Notice, TreeEvent, ViewEvent};
use favhub_core::traits::EventSink;

/// Keeps every published event for later inspection.
///
/// Clones share one buffer, so a front end can hand one clone to the
/// service and read events back through another.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<DomainEvent>>>,
}

impl RecordingSink {
    /// Create a sink with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event published so far.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.borrow().clone()
    }

    /// Tree events, in publication order.
    pub fn tree_events(&self) -> Vec<TreeEvent> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match &e.payload {
                EventPayload::Tree(event) => Some(event.clone()),
                EventPayload::View(_) => None,
            })
            .collect()
    }

    /// View events, in publication order.
    pub fn view_events(&self) -> Vec<ViewEvent> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match &e.payload {
                EventPayload::View(event) => Some(event.clone()),
                EventPayload::Tree(_) => None,
            })
            .collect()
    }

    /// Posted notices, in publication order.
    pub fn notices(&self) -> Vec<Notice> {
        self.view_events()
            .into_iter()
            .filter_map(|e| match e {
                ViewEvent::Notice(notice) => Some(notice),
                _ => None,
            })
            .collect()
    }

    /// Number of render requests.
    pub fn render_count(&self) -> usize {
        self.view_events()
            .iter()
            .filter(|e| matches!(e, ViewEvent::RenderRequested { .. }))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn publish(&mut self, event: DomainEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let sink = RecordingSink::new();
        let mut publisher = sink.clone();
        publisher.publish(DomainEvent::view(ViewEvent::RenderRequested { delay_ms: 0 }));
        publisher.publish(DomainEvent::view(ViewEvent::Notice(Notice::new("hi", 10))));
        publisher.publish(DomainEvent::tree(TreeEvent::Deleted {
            names: vec!["a".to_string()],
        }));

        assert_eq!(sink.render_count(), 1);
        assert_eq!(sink.notices()[0].message, "hi");
        assert_eq!(sink.tree_events().len(), 1);
        assert_eq!(sink.events().len(), 3);
    }
}
