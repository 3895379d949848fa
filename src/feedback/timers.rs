// SPDX-License-Identifier: MPL-2.0
//! Side table of cancellable expiry timers.
//!
//! Each timed notification owns at most one entry. Entries are ordered by
//! deadline, then by the order they were scheduled in, so timers that elapse
//! at the same instant fire oldest first. Cancelling removes the entry
//! outright; a cancelled timer can never fire.

use super::notification::NotificationId;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// Handle to a scheduled expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerHandle {
    deadline: Instant,
    sequence: u64,
}

impl TimerHandle {
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

/// Pending expiries keyed by notification id.
#[derive(Debug, Default)]
pub struct TimerTable {
    queue: BTreeMap<(Instant, u64), NotificationId>,
    handles: HashMap<NotificationId, TimerHandle>,
    next_sequence: u64,
}

impl TimerTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules expiry of `id` at `deadline`, replacing any earlier timer for it.
    pub fn schedule(&mut self, id: NotificationId, deadline: Instant) -> TimerHandle {
        self.cancel(id);
        let handle = TimerHandle {
            deadline,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.queue.insert((deadline, handle.sequence), id);
        self.handles.insert(id, handle);
        handle
    }

    /// Cancels the timer for `id`. Returns `false` if none was pending.
    pub fn cancel(&mut self, id: NotificationId) -> bool {
        match self.handles.remove(&id) {
            Some(handle) => {
                self.queue.remove(&(handle.deadline, handle.sequence));
                true
            }
            None => false,
        }
    }

    /// Removes and returns the earliest timer due at `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<NotificationId> {
        let (&key, _) = self.queue.first_key_value()?;
        if key.0 > now {
            return None;
        }
        let id = self.queue.remove(&key)?;
        self.handles.remove(&id);
        Some(id)
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.first_key_value().map(|(key, _)| key.0)
    }

    #[must_use]
    pub fn handle(&self, id: NotificationId) -> Option<TimerHandle> {
        self.handles.get(&id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
        self.handles.clear();
    }
}
