// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Feature code raises short success / error / warning / info messages; the
//! presentation layer renders them stacked per screen anchor and reports
//! dismissals back.
//!
//! # Components
//!
//! - [`notification`] - The `Notification` entity, its partial spec and enums
//! - [`store`] - `FeedbackStore` with capacity eviction and timed expiry
//! - [`callbacks`] - Action callbacks and dismiss hooks detached from the store
//! - [`shared`] - `SharedStore`, an `Rc<RefCell<_>>` handle running callbacks unborrowed
//! - [`timers`] - Cancellable expiry timers keyed by notification id
//! - [`grouping`] - Partitioning of active notifications by anchor
//! - [`helpers`] - `Feedback` facade for loading, confirmation and API results
//! - [`driver`] - Tokio loop firing expiry timers on a `LocalSet`
//!
//! # Usage
//!
//! ```
//! use admin_feedback::feedback::{Anchor, FeedbackMessage, FeedbackStore, Overrides};
//!
//! let mut store = FeedbackStore::new();
//! let id = store.success("Customer saved", Overrides::new());
//! store.error("Upload failed", Overrides::new().anchor(Anchor::BottomLeft));
//!
//! let grouped = store.grouped();
//! assert_eq!(grouped.ids(Anchor::TopRight), vec![id]);
//!
//! store.handle_message(&FeedbackMessage::Dismiss(id));
//! assert_eq!(store.len(), 1);
//! ```
//!
//! # Design Considerations
//!
//! - Durations: 5s for success/info, 4s for errors, 7s for warnings, 0 = persistent
//! - At most 5 notifications at once; the oldest is evicted on overflow
//! - Default anchor: top-right

pub mod callbacks;
pub mod clock;
pub mod driver;
pub mod grouping;
pub mod helpers;
pub mod notification;
pub mod shared;
pub mod store;
pub mod timers;

pub use callbacks::{CallbackMode, Callbacks};
pub use clock::{Clock, ManualClock, SystemClock, TokioClock};
pub use grouping::{group_by_anchor, GroupedNotifications};
pub use helpers::{ApiResponse, Feedback, DEFAULT_LOADING_MESSAGE};
pub use notification::{
    Action, Anchor, DismissHook, DismissReason, HorizontalAlign, Kind, Notification,
    NotificationId, NotificationSpec, Overrides, Placement, Rgb, UnknownVariant, VerticalEdge,
};
pub use shared::SharedStore;
pub use store::{FeedbackStore, Message as FeedbackMessage, StoreSettings};
pub use timers::{TimerHandle, TimerTable};
