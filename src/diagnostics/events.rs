// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for notification activity.
//!
//! Every store mutation produces one of these events when a
//! [`DiagnosticsHandle`](super::DiagnosticsHandle) is attached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::feedback::{Anchor, DismissReason, Kind, NotificationId};

/// What happened to a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedbackEvent {
    /// A notification entered the store.
    Added {
        id: NotificationId,
        kind: Kind,
        anchor: Anchor,
        duration_ms: u64,
        /// Sanitized message text.
        message: String,
    },

    /// A notification left the store.
    Removed {
        id: NotificationId,
        reason: DismissReason,
    },

    /// The action button of a notification was triggered.
    ActionTriggered {
        id: NotificationId,
        label: String,
    },
}

impl FeedbackEvent {
    /// Returns the id of the notification this event concerns.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        match self {
            FeedbackEvent::Added { id, .. }
            | FeedbackEvent::Removed { id, .. }
            | FeedbackEvent::ActionTriggered { id, .. } => *id,
        }
    }
}

/// A timestamped [`FeedbackEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    /// When the event was recorded (wall clock).
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: FeedbackEvent,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: FeedbackEvent) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: FeedbackEvent, timestamp: DateTime<Utc>) -> Self {
        Self { timestamp, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn removed_event_serializes_with_tag_and_reason() {
        let event = FeedbackEvent::Removed {
            id: NotificationId::from_raw(4),
            reason: DismissReason::Evicted,
        };
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "removed");
        assert_eq!(json["id"], 4);
        assert_eq!(json["reason"], "evicted");
    }

    #[test]
    fn diagnostic_event_flattens_kind() {
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let event = DiagnosticEvent::with_timestamp(
            FeedbackEvent::ActionTriggered {
                id: NotificationId::from_raw(1),
                label: "Retry".into(),
            },
            timestamp,
        );
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "action_triggered");
        assert_eq!(json["label"], "Retry");
        assert!(json["timestamp"].as_str().unwrap().starts_with("2024-05-01T12:00:00"));

        let back: DiagnosticEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn id_accessor_covers_all_variants() {
        let id = NotificationId::from_raw(9);
        let added = FeedbackEvent::Added {
            id,
            kind: Kind::Info,
            anchor: Anchor::TopRight,
            duration_ms: 0,
            message: String::new(),
        };
        assert_eq!(added.id(), id);
    }
}
