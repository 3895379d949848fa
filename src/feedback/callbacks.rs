// SPDX-License-Identifier: MPL-2.0
//! Action callbacks and dismiss hooks detached from the store.
//!
//! Every store mutation that removes a notification or presses its action
//! produces callbacks. A store in [`CallbackMode::Immediate`] runs them at the
//! end of the call. In [`CallbackMode::Deferred`] they wait in a queue until
//! the owner takes them with
//! [`FeedbackStore::take_callbacks`](super::store::FeedbackStore::take_callbacks)
//! and runs them with no borrow of the store held, so they are free to call
//! back into it.

use super::notification::{Action, DismissHook};
use std::fmt;

/// When a store runs the callbacks its mutations produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallbackMode {
    /// Run before the mutating call returns. Callbacks must not touch the store.
    #[default]
    Immediate,
    /// Queue until taken. Used when the store is shared behind a `RefCell`.
    Deferred,
}

enum Callback {
    Action(Action),
    Dismiss(DismissHook),
}

/// Pending callbacks, in the order the store produced them.
#[must_use = "callbacks do nothing unless run"]
#[derive(Default)]
pub struct Callbacks {
    queue: Vec<Callback>,
}

impl Callbacks {
    pub(crate) fn push_action(&mut self, action: Action) {
        self.queue.push(Callback::Action(action));
    }

    pub(crate) fn push_hook(&mut self, hook: DismissHook) {
        self.queue.push(Callback::Dismiss(hook));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Runs every callback once, in order.
    pub fn run(self) {
        for callback in self.queue {
            match callback {
                Callback::Action(action) => action.invoke(),
                Callback::Dismiss(hook) => hook(),
            }
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let actions = self
            .queue
            .iter()
            .filter(|c| matches!(c, Callback::Action(_)))
            .count();
        f.debug_struct("Callbacks")
            .field("actions", &actions)
            .field("hooks", &(self.queue.len() - actions))
            .finish()
    }
}
