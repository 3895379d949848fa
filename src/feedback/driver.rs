// SPDX-License-Identifier: MPL-2.0
//! Tokio driver for notification expiry.
//!
//! Hosts without their own periodic tick can run [`run_expiry`] on a
//! `tokio::task::LocalSet`. The loop sleeps until the store's next deadline,
//! or until the store schedules a new timer, then fires whatever is due.
//! Dismiss hooks run after the store's borrow is released, so they may
//! raise or remove notifications.
//!
//! ```no_run
//! use admin_feedback::feedback::{
//!     driver, FeedbackStore, Overrides, SharedStore, StoreSettings, TokioClock,
//! };
//!
//! # async fn demo() {
//! let store = SharedStore::new(FeedbackStore::with_clock(
//!     TokioClock,
//!     StoreSettings::default(),
//! ));
//! let local = tokio::task::LocalSet::new();
//! local
//!     .run_until(async {
//!         let expiry = tokio::task::spawn_local(driver::run_expiry(store.clone()));
//!         store.success("Terminal activated", Overrides::new());
//!         // ... run the UI ...
//!         expiry.abort();
//!     })
//!     .await;
//! # }
//! ```

use super::clock::TokioClock;
use super::shared::SharedStore;
use tokio::time::{sleep_until, Instant};

/// Fires expiry timers as they come due. Runs until its task is aborted.
///
/// The store is only borrowed between awaits, never across one.
pub async fn run_expiry(store: SharedStore<TokioClock>) {
    let wakeup = store.borrow().wakeup_handle();
    loop {
        let next = store.borrow().next_deadline();
        match next {
            Some(deadline) => {
                tokio::select! {
                    () = sleep_until(Instant::from_std(deadline)) => {
                        store.tick();
                    }
                    () = wakeup.notified() => {}
                }
            }
            None => wakeup.notified().await,
        }
    }
}
