//! Presentation-layer events.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::types::NoticeId;

/// A transient, auto-dismissing status message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    /// Notice identifier.
    pub id: NoticeId,
    /// Message text.
    pub message: String,
    /// When the notice was posted.
    pub issued_at: DateTime<Utc>,
    /// How long the notice stays visible.
    pub ttl_ms: u64,
}

impl Notice {
    /// Create a notice issued now.
    pub fn new(message: impl Into<String>, ttl_ms: u64) -> Self {
        Self {
            id: NoticeId::new(),
            message: message.into(),
            issued_at: Utc::now(),
            ttl_ms,
        }
    }

    /// The instant after which the notice is dismissed.
    pub fn expires_at(&self) -> DateTime<Utc> {
        let ttl = i64::try_from(self.ttl_ms).unwrap_or(i64::MAX);
        self.issued_at + Duration::milliseconds(ttl)
    }

    /// Whether the notice has been dismissed at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

/// Requests directed at the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViewEvent {
    /// Re-render the current view, optionally after a delay.
    RenderRequested {
        /// Delay in milliseconds before re-rendering (0 = immediately).
        delay_ms: u64,
    },
    /// Show a transient status notice.
    Notice(Notice),
    /// A save failed; show a blocking notification.
    PersistFailed {
        /// The storage error message.
        message: String,
    },
    /// A request was rejected; show a notice, nothing changed.
    Rejected {
        /// Why the request was rejected.
        message: String,
    },
}
