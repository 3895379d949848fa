// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording notification activity.
//!
//! The store reports every mutation as a [`FeedbackEvent`] through a
//! [`DiagnosticsHandle`]. Events travel over a bounded channel to a
//! [`DiagnosticsCollector`], which keeps them in a memory-bounded
//! [`CircularBuffer`] and can export them as a JSON report.
//!
//! # Privacy
//!
//! Message bodies are sanitized and truncated before they are logged.

mod buffer;
mod collector;
mod events;
mod export;
mod sanitizer;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, FeedbackEvent};
pub use export::{
    default_export_directory, generate_default_filename, write_atomic, DiagnosticReport,
};
pub use sanitizer::sanitize_message;
