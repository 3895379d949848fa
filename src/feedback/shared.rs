// SPDX-License-Identifier: MPL-2.0
//! Single-threaded shared ownership of a store.
//!
//! UI code, action callbacks and the expiry driver all need to reach the same
//! store. [`SharedStore`] keeps it behind `Rc<RefCell<_>>` in deferred
//! callback mode: every call borrows the store, releases the borrow, and only
//! then runs the callbacks the call produced. A confirmation callback can
//! therefore raise a follow-up toast, and a dismiss hook can add or remove
//! notifications.
//!
//! ```
//! use admin_feedback::feedback::{FeedbackMessage, FeedbackStore, Overrides, SharedStore};
//!
//! let store = SharedStore::new(FeedbackStore::new());
//! let handle = store.clone();
//! let id = store.feedback(|feedback| {
//!     feedback.show_confirmation("Delete customer?", move || {
//!         handle.success("Customer deleted", Overrides::new());
//!     })
//! });
//!
//! store.handle_message(&FeedbackMessage::Action(id));
//! assert_eq!(store.borrow().len(), 1);
//! ```

use super::callbacks::CallbackMode;
use super::clock::{Clock, SystemClock};
use super::helpers::Feedback;
use super::notification::{NotificationId, NotificationSpec, Overrides};
use super::store::{FeedbackStore, Message};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Cloneable handle to a store shared within one thread.
pub struct SharedStore<C: Clock = SystemClock> {
    inner: Rc<RefCell<FeedbackStore<C>>>,
}

impl<C: Clock> SharedStore<C> {
    /// Wraps a store, switching it to deferred callbacks.
    pub fn new(mut store: FeedbackStore<C>) -> Self {
        store.set_callback_mode(CallbackMode::Deferred);
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    /// Borrows the store for reading.
    ///
    /// # Panics
    ///
    /// Panics if called from inside [`update`](Self::update).
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, FeedbackStore<C>> {
        self.inner.borrow()
    }

    /// Runs `f` against the store, then runs the callbacks it produced.
    ///
    /// # Panics
    ///
    /// Panics if `f` itself reaches this store through another handle.
    pub fn update<R>(&self, f: impl FnOnce(&mut FeedbackStore<C>) -> R) -> R {
        let result = {
            let mut store = self.inner.borrow_mut();
            f(&mut *store)
        };
        self.run_callbacks();
        result
    }

    /// Runs queued callbacks until none are left.
    ///
    /// Callbacks that change the store queue further callbacks of their own;
    /// those run in the same pass.
    pub fn run_callbacks(&self) {
        loop {
            let callbacks = self.inner.borrow_mut().take_callbacks();
            if callbacks.is_empty() {
                break;
            }
            callbacks.run();
        }
    }

    /// Runs `f` with a [`Feedback`] facade over the store.
    pub fn feedback<R>(&self, f: impl FnOnce(&mut Feedback<'_, C>) -> R) -> R {
        self.update(|store| f(&mut Feedback::new(store)))
    }

    pub fn add(&self, spec: NotificationSpec) -> NotificationId {
        self.update(|store| store.add(spec))
    }

    pub fn success(&self, message: impl Into<String>, overrides: Overrides) -> NotificationId {
        self.update(|store| store.success(message, overrides))
    }

    pub fn error(&self, message: impl Into<String>, overrides: Overrides) -> NotificationId {
        self.update(|store| store.error(message, overrides))
    }

    pub fn warning(&self, message: impl Into<String>, overrides: Overrides) -> NotificationId {
        self.update(|store| store.warning(message, overrides))
    }

    pub fn info(&self, message: impl Into<String>, overrides: Overrides) -> NotificationId {
        self.update(|store| store.info(message, overrides))
    }

    pub fn remove(&self, id: NotificationId) -> bool {
        self.update(|store| store.remove(id))
    }

    pub fn clear(&self) {
        self.update(FeedbackStore::clear);
    }

    /// Fires due expiry timers. Returns how many notifications expired.
    pub fn tick(&self) -> usize {
        self.update(FeedbackStore::tick)
    }

    pub fn handle_message(&self, message: &Message) {
        self.update(|store| store.handle_message(message));
    }
}

impl<C: Clock> Clone for SharedStore<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C: Clock> std::fmt::Debug for SharedStore<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_borrow() {
            Ok(store) => f.debug_tuple("SharedStore").field(&*store).finish(),
            Err(_) => f.write_str("SharedStore(<borrowed>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::clock::ManualClock;
    use crate::feedback::store::StoreSettings;
    use crate::feedback::Kind;
    use std::cell::Cell;

    fn shared() -> (SharedStore<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let store = FeedbackStore::with_clock(clock.clone(), StoreSettings::default());
        (SharedStore::new(store), clock)
    }

    #[test]
    fn wrapping_switches_to_deferred() {
        let (store, _clock) = shared();
        assert_eq!(store.borrow().callback_mode(), CallbackMode::Deferred);
    }

    #[test]
    fn confirm_callback_can_raise_follow_up() {
        let (store, _clock) = shared();
        let handle = store.clone();
        let id = store.feedback(|feedback| {
            feedback.show_confirmation("Delete terminal POS-0042?", move || {
                handle.success("Terminal deleted", Overrides::new());
            })
        });

        store.handle_message(&Message::Action(id));

        let store = store.borrow();
        assert!(!store.contains(id));
        assert_eq!(store.len(), 1);
        assert_eq!(store.iter().next().map(|n| n.message()), Some("Terminal deleted"));
    }

    #[test]
    fn expiry_hook_can_add_notification() {
        let (store, clock) = shared();
        let handle = store.clone();
        store.add(
            NotificationSpec::new(Kind::Info, "Session expiring")
                .duration_ms(1_000)
                .on_dismiss(move || {
                    handle.warning("Session expired", Overrides::new().persistent());
                }),
        );

        clock.advance_ms(1_000);
        assert_eq!(store.tick(), 1);

        let store = store.borrow();
        assert_eq!(store.len(), 1);
        assert_eq!(store.iter().next().map(|n| n.kind()), Some(Kind::Warning));
    }

    #[test]
    fn hook_can_remove_another_notification() {
        let (store, _clock) = shared();
        let sibling = store.info("Uploading...", Overrides::new().persistent());
        let handle = store.clone();
        let dismissed = Rc::new(Cell::new(0));
        let counter = Rc::clone(&dismissed);
        let parent = store.add(
            NotificationSpec::new(Kind::Info, "Upload")
                .persistent()
                .on_dismiss(move || {
                    handle.remove(sibling);
                }),
        );
        store.add(
            NotificationSpec::new(Kind::Info, "counter")
                .persistent()
                .on_dismiss(move || counter.set(counter.get() + 1)),
        );

        assert!(store.remove(parent));
        assert_eq!(store.borrow().len(), 1);

        store.clear();
        assert!(store.borrow().is_empty());
        assert_eq!(dismissed.get(), 1);
    }

    #[test]
    fn chained_callbacks_all_run() {
        let (store, _clock) = shared();
        let first_handle = store.clone();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);

        let second = NotificationSpec::new(Kind::Info, "second").on_dismiss(move || flag.set(true));
        let first = store.add(NotificationSpec::new(Kind::Info, "first").on_dismiss(move || {
            first_handle.add(second);
        }));
        store.remove(first);
        assert_eq!(store.borrow().len(), 1);

        store.clear();
        assert!(fired.get());
    }
}
