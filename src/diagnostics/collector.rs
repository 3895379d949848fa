// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for notification activity.
//!
//! The store logs through a [`DiagnosticsHandle`]; the application drains the
//! channel into the collector's ring buffer with
//! [`DiagnosticsCollector::process_pending`].

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::export::{default_export_directory, generate_default_filename, write_atomic};
use super::{sanitize_message, CircularBuffer, DiagnosticEvent, DiagnosticReport, FeedbackEvent};
use crate::config::{DEFAULT_DIAGNOSTICS_CAPACITY, DIAGNOSTICS_CHANNEL_CAPACITY};
use crate::error::Result;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block: when the channel is full the event is
/// dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs an event, dropping it if the channel is full or disconnected.
    pub fn log(&self, event: FeedbackEvent) {
        let _ = self.try_log(event);
    }

    /// Logs an event, reporting whether it was accepted.
    ///
    /// Message text of `Added` events is sanitized before sending.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the channel buffer is full,
    /// or `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log(
        &self,
        event: FeedbackEvent,
    ) -> std::result::Result<(), TrySendError<DiagnosticEvent>> {
        let event = match event {
            FeedbackEvent::Added {
                id,
                kind,
                anchor,
                duration_ms,
                message,
            } => FeedbackEvent::Added {
                id,
                kind,
                anchor,
                duration_ms,
                message: sanitize_message(&message),
            },
            other => other,
        };
        self.event_tx.try_send(DiagnosticEvent::new(event))
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: DateTime<Utc>,
}

impl DiagnosticsCollector {
    /// Creates a collector keeping at most `capacity` events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(DIAGNOSTICS_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer. Returns the number of events moved.
    pub fn process_pending(&mut self) -> usize {
        let mut moved = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            moved += 1;
        }
        moved
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over stored events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Builds a report from the current buffer contents.
    #[must_use]
    pub fn build_report(&self) -> DiagnosticReport {
        let events: Vec<DiagnosticEvent> = self.buffer.iter().cloned().collect();
        DiagnosticReport {
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: self.collection_started_at,
            generated_at: Utc::now(),
            event_count: events.len(),
            overwritten_events: self.buffer.overwritten(),
            events,
        }
    }

    /// Exports all collected events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.build_report())?)
    }

    /// Writes the JSON report to `path` atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn export_to_file(&self, path: &Path) -> Result<()> {
        let json = self.export_json()?;
        write_atomic(path, &json)?;
        Ok(())
    }

    /// Writes the report to the default export directory with a generated name.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn export_to_default_location(&self) -> Result<PathBuf> {
        let path = default_export_directory().join(generate_default_filename());
        self.export_to_file(&path)?;
        Ok(path)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(DEFAULT_DIAGNOSTICS_CAPACITY)
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .field("collection_started_at", &self.collection_started_at)
            .finish_non_exhaustive()
    }
}
