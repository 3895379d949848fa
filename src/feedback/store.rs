// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The [`FeedbackStore`] owns the active notifications in insertion order,
//! enforces the capacity bound by evicting the oldest entries, and keeps one
//! cancellable expiry timer per timed notification. None of its operations
//! fail: overflow evicts, unknown ids are ignored.
//!
//! Action callbacks and dismiss hooks never run while the store is in an
//! inconsistent state. By default they run at the end of the mutating call
//! and must not call back into the store. A store shared behind a `RefCell`
//! switches to [`CallbackMode::Deferred`] and runs them once its borrow is
//! released; see [`SharedStore`](super::shared::SharedStore).

use super::callbacks::{CallbackMode, Callbacks};
use super::clock::{Clock, SystemClock};
use super::grouping::{group_by_anchor, GroupedNotifications};
use super::notification::{
    Anchor, DismissReason, Kind, Notification, NotificationId, NotificationSpec, Overrides,
};
use super::timers::TimerTable;
use crate::config::{
    FeedbackConfig, DEFAULT_ANCHOR, DEFAULT_DURATION_MS, DEFAULT_ERROR_DURATION_MS,
    DEFAULT_WARNING_DURATION_MS,
};
use crate::diagnostics::{DiagnosticsHandle, FeedbackEvent};
use crate::domain::feedback::MaxItems;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Notify;

/// Messages a presentation layer sends back to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The user closed a notification.
    Dismiss(NotificationId),
    /// The user pressed a notification's action button.
    Action(NotificationId),
    /// Periodic tick for firing due expiry timers.
    Tick,
}

/// Store-wide defaults applied to every insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreSettings {
    /// Duration used when a spec leaves it unset; also the success/info default.
    pub default_duration_ms: u64,
    pub default_anchor: Anchor,
    pub max_items: MaxItems,
    pub error_duration_ms: u64,
    pub warning_duration_ms: u64,
}

impl StoreSettings {
    /// Returns the default duration the kind constructors apply.
    #[must_use]
    pub fn duration_for(&self, kind: Kind) -> u64 {
        match kind {
            Kind::Success | Kind::Info => self.default_duration_ms,
            Kind::Error => self.error_duration_ms,
            Kind::Warning => self.warning_duration_ms,
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_DURATION_MS,
            default_anchor: DEFAULT_ANCHOR,
            max_items: MaxItems::default(),
            error_duration_ms: DEFAULT_ERROR_DURATION_MS,
            warning_duration_ms: DEFAULT_WARNING_DURATION_MS,
        }
    }
}

/// Bounded, ordered collection of active notifications.
pub struct FeedbackStore<C: Clock = SystemClock> {
    /// Active notifications, oldest first.
    items: VecDeque<Notification>,
    timers: TimerTable,
    settings: StoreSettings,
    clock: C,
    next_id: u64,
    /// Bumped on every change to `items`.
    revision: u64,
    /// Signalled whenever a timer is scheduled.
    wakeup: Arc<Notify>,
    diagnostics: Option<DiagnosticsHandle>,
    /// Callbacks produced but not yet run.
    pending: Callbacks,
    callback_mode: CallbackMode,
}

impl FeedbackStore<SystemClock> {
    /// Creates an empty store with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock, StoreSettings::default())
    }

    #[must_use]
    pub fn with_settings(settings: StoreSettings) -> Self {
        Self::with_clock(SystemClock, settings)
    }

    #[must_use]
    pub fn from_config(config: &FeedbackConfig) -> Self {
        Self::with_settings(config.settings())
    }
}

impl Default for FeedbackStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FeedbackStore<C> {
    #[must_use]
    pub fn with_clock(clock: C, settings: StoreSettings) -> Self {
        Self {
            items: VecDeque::with_capacity(settings.max_items.value() + 1),
            timers: TimerTable::new(),
            settings,
            clock,
            next_id: 1,
            revision: 0,
            wakeup: Arc::new(Notify::new()),
            diagnostics: None,
            pending: Callbacks::default(),
            callback_mode: CallbackMode::Immediate,
        }
    }

    /// Sets the diagnostics handle every mutation is logged to.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    /// Chooses when callbacks run. Switching back to immediate runs anything
    /// still queued.
    pub fn set_callback_mode(&mut self, mode: CallbackMode) {
        self.callback_mode = mode;
        self.settle();
    }

    #[must_use]
    pub fn callback_mode(&self) -> CallbackMode {
        self.callback_mode
    }

    /// Takes the callbacks queued in deferred mode, oldest first.
    ///
    /// Run them after releasing any borrow of the store.
    pub fn take_callbacks(&mut self) -> Callbacks {
        std::mem::take(&mut self.pending)
    }

    /// Changes the capacity, evicting the oldest entries if it shrank.
    pub fn set_max_items(&mut self, max_items: MaxItems) {
        self.settings.max_items = max_items;
        let evicted = self.evict_overflow();
        self.queue_hooks(evicted);
        self.settle();
    }

    /// Adds a notification and returns its id.
    ///
    /// Unset duration and anchor take the store defaults. When the store
    /// grows past capacity the oldest entries are evicted. A positive
    /// duration schedules an automatic removal.
    pub fn add(&mut self, spec: NotificationSpec) -> NotificationId {
        let id = NotificationId::from_raw(self.next_id);
        self.next_id += 1;

        let notification = spec.into_notification(
            id,
            self.clock.now(),
            self.settings.default_duration_ms,
            self.settings.default_anchor,
        );

        if let Some(deadline) = notification.expires_at() {
            self.timers.schedule(id, deadline);
            self.wakeup.notify_one();
        }

        self.log(|| FeedbackEvent::Added {
            id,
            kind: notification.kind(),
            anchor: notification.anchor(),
            duration_ms: notification.duration_ms(),
            message: notification.message().to_string(),
        });

        self.items.push_back(notification);
        self.revision += 1;

        let evicted = self.evict_overflow();
        self.queue_hooks(evicted);
        self.settle();
        id
    }

    /// Removes a notification by id, cancelling its timer and running its
    /// dismiss hook.
    ///
    /// Unknown or already removed ids are ignored. Returns whether anything
    /// was removed.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let Some(notification) = self.take(id, DismissReason::Dismissed) else {
            return false;
        };
        self.queue_hooks(vec![notification]);
        self.settle();
        true
    }

    /// Removes every notification, running dismiss hooks in display order.
    pub fn clear(&mut self) {
        self.timers.clear();
        if self.items.is_empty() {
            return;
        }
        let removed: Vec<Notification> = self.items.drain(..).collect();
        self.revision += 1;
        for notification in &removed {
            self.log(|| FeedbackEvent::Removed {
                id: notification.id(),
                reason: DismissReason::Cleared,
            });
        }
        self.queue_hooks(removed);
        self.settle();
    }

    pub fn success(&mut self, message: impl Into<String>, overrides: Overrides) -> NotificationId {
        self.add_kind(Kind::Success, message.into(), overrides)
    }

    pub fn error(&mut self, message: impl Into<String>, overrides: Overrides) -> NotificationId {
        self.add_kind(Kind::Error, message.into(), overrides)
    }

    pub fn warning(&mut self, message: impl Into<String>, overrides: Overrides) -> NotificationId {
        self.add_kind(Kind::Warning, message.into(), overrides)
    }

    pub fn info(&mut self, message: impl Into<String>, overrides: Overrides) -> NotificationId {
        self.add_kind(Kind::Info, message.into(), overrides)
    }

    /// Adds a notification of `kind` with the kind's default title and
    /// duration, then the caller's overrides on top.
    pub fn add_kind(
        &mut self,
        kind: Kind,
        message: String,
        overrides: Overrides,
    ) -> NotificationId {
        let spec = NotificationSpec::new(kind, message)
            .title(kind.default_title())
            .duration_ms(self.settings.duration_for(kind))
            .overlay(overrides);
        self.add(spec)
    }

    /// Runs the action callback of a notification without dismissing it.
    ///
    /// In deferred mode the callback is queued instead. Returns `false` if
    /// the id is unknown or has no action.
    pub fn invoke_action(&mut self, id: NotificationId) -> bool {
        let Some(action) = self
            .items
            .iter()
            .find(|n| n.id() == id)
            .and_then(|n| n.action().cloned())
        else {
            return false;
        };
        self.log(|| FeedbackEvent::ActionTriggered {
            id,
            label: action.label().to_string(),
        });
        self.pending.push_action(action);
        self.settle();
        true
    }

    /// Fires every timer due at the current time. Returns how many
    /// notifications expired.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let mut expired = Vec::new();
        while let Some(id) = self.timers.pop_due(now) {
            if let Some(notification) = self.take(id, DismissReason::Expired) {
                expired.push(notification);
            }
        }
        let count = expired.len();
        self.queue_hooks(expired);
        self.settle();
        count
    }

    /// Handles a presentation-layer message.
    ///
    /// `Action` runs the action callback and then removes the notification,
    /// so the action always comes before the dismiss hook.
    pub fn handle_message(&mut self, message: &Message) {
        match *message {
            Message::Dismiss(id) => {
                self.remove(id);
            }
            Message::Action(id) => {
                self.invoke_action(id);
                self.remove(id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the active notifications grouped by anchor.
    #[must_use]
    pub fn grouped(&self) -> GroupedNotifications<'_> {
        group_by_anchor(self.items.iter())
    }

    /// Returns the active notifications in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Increases on every change to the active list.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Earliest pending expiry, if any timer is scheduled.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Time until the next expiry, zero if one is already due.
    #[must_use]
    pub fn time_until_next_expiry(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.next_deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns the notifier signalled whenever a timer is scheduled.
    #[must_use]
    pub fn wakeup_handle(&self) -> Arc<Notify> {
        Arc::clone(&self.wakeup)
    }

    #[must_use]
    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Detaches a notification and its timer without running its hook.
    fn take(&mut self, id: NotificationId, reason: DismissReason) -> Option<Notification> {
        let position = self.items.iter().position(|n| n.id() == id)?;
        let notification = self.items.remove(position)?;
        self.timers.cancel(id);
        self.revision += 1;
        self.log(|| FeedbackEvent::Removed { id, reason });
        Some(notification)
    }

    /// Detaches the oldest entries until the store is within capacity.
    fn evict_overflow(&mut self) -> Vec<Notification> {
        let mut evicted = Vec::new();
        while self.items.len() > self.settings.max_items.value() {
            let Some(oldest) = self.items.pop_front() else {
                break;
            };
            let id = oldest.id();
            self.timers.cancel(id);
            self.revision += 1;
            self.log(|| FeedbackEvent::Removed {
                id,
                reason: DismissReason::Evicted,
            });
            evicted.push(oldest);
        }
        evicted
    }

    fn queue_hooks(&mut self, removed: Vec<Notification>) {
        for hook in removed.into_iter().filter_map(Notification::into_dismiss_hook) {
            self.pending.push_hook(hook);
        }
    }

    /// Runs queued callbacks unless they are deferred.
    fn settle(&mut self) {
        if self.callback_mode == CallbackMode::Immediate && !self.pending.is_empty() {
            self.take_callbacks().run();
        }
    }

    /// Builds the event only when a diagnostics handle is attached.
    fn log(&self, event: impl FnOnce() -> FeedbackEvent) {
        if let Some(handle) = &self.diagnostics {
            handle.log(event());
        }
    }
}

impl<C: Clock> std::fmt::Debug for FeedbackStore<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackStore")
            .field("items", &self.items)
            .field("pending_timers", &self.timers.len())
            .field("settings", &self.settings)
            .field("revision", &self.revision)
            .field("pending_callbacks", &self.pending.len())
            .field("callback_mode", &self.callback_mode)
            .finish_non_exhaustive()
    }
}
