//! Auto-dismissing status notices.

use chrono::{DateTime, Utc};

use favhub_core::events::Notice;

/// Holds the notices currently on screen.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    /// Lifetime of each posted notice.
    ttl_ms: u64,
    /// Posted notices, oldest first.
    notices: Vec<Notice>,
}

impl NoticeBoard {
    /// Create a board whose notices live for `ttl_ms`.
    pub fn new(ttl_ms: u64) -> Self {
        Self {
            ttl_ms,
            notices: Vec::new(),
        }
    }

    /// Post a notice and return a copy of it.
    ///
    /// Notices that have already expired are dismissed first.
    pub fn post(&mut self, message: impl Into<String>) -> Notice {
        let notice = Notice::new(message, self.ttl_ms);
        self.prune(notice.issued_at);
        self.notices.push(notice.clone());
        notice
    }

    /// Number of notices held, including expired ones not yet pruned.
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// Notices still visible at `now`.
    pub fn active(&self, now: DateTime<Utc>) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(move |n| !n.is_expired(now))
    }

    /// The most recently posted notice, expired or not.
    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Drop expired notices; returns how many were dismissed.
    pub fn prune(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.notices.len();
        self.notices.retain(|n| !n.is_expired(now));
        before - self.notices.len()
    }
}
