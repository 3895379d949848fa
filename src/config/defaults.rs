// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Durations**: Auto-dismiss delays per notification kind
//! - **Capacity**: Bounds on the number of active notifications
//! - **Diagnostics**: Event buffer and channel sizes

use crate::feedback::Anchor;

// ==========================================================================
// Duration Defaults
// ==========================================================================

/// Store-wide auto-dismiss delay, used by success and info notifications.
pub const DEFAULT_DURATION_MS: u64 = 5_000;

/// Auto-dismiss delay for error notifications.
pub const DEFAULT_ERROR_DURATION_MS: u64 = 4_000;

/// Auto-dismiss delay for warning notifications.
pub const DEFAULT_WARNING_DURATION_MS: u64 = 7_000;

/// Delay used by the loading and confirmation helpers.
pub const DEFAULT_PROMPT_DURATION_MS: u64 = 3_000;

/// A duration of zero keeps the notification until it is dismissed.
pub const PERSISTENT_DURATION_MS: u64 = 0;

// ==========================================================================
// Placement Defaults
// ==========================================================================

/// Anchor used when a notification does not name one.
pub const DEFAULT_ANCHOR: Anchor = Anchor::TopRight;

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default number of notifications kept at once.
pub const DEFAULT_MAX_ITEMS: usize = 5;

/// Smallest accepted capacity.
pub const MIN_MAX_ITEMS: usize = 1;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of events kept by the diagnostics collector.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 500;

/// Pending events buffered between a handle and the collector.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 100;

/// Longest text logged for a notification message.
pub const MAX_LOGGED_MESSAGE_CHARS: usize = 200;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DURATION_MS > PERSISTENT_DURATION_MS);
    assert!(DEFAULT_ERROR_DURATION_MS > PERSISTENT_DURATION_MS);
    assert!(DEFAULT_WARNING_DURATION_MS > DEFAULT_DURATION_MS);
    assert!(DEFAULT_PROMPT_DURATION_MS > PERSISTENT_DURATION_MS);

    assert!(MIN_MAX_ITEMS > 0);
    assert!(DEFAULT_MAX_ITEMS >= MIN_MAX_ITEMS);

    assert!(DEFAULT_DIAGNOSTICS_CAPACITY > 0);
    assert!(DIAGNOSTICS_CHANNEL_CAPACITY > 0);
    assert!(MAX_LOGGED_MESSAGE_CHARS > 0);
};
