// SPDX-License-Identifier: MPL-2.0
//! Higher-level helpers feature code uses to raise feedback.
//!
//! [`Feedback`] borrows a store and wraps the recurring dashboard patterns:
//! loading prompts, confirmations, and reporting an API response.

use super::clock::{Clock, SystemClock};
use super::notification::{Kind, NotificationId, Overrides};
use super::store::FeedbackStore;
use crate::config::DEFAULT_PROMPT_DURATION_MS;
use serde::Deserialize;
use std::cell::Cell;
use std::rc::Rc;

/// Message shown by [`Feedback::show_loading`] when none is given.
pub const DEFAULT_LOADING_MESSAGE: &str = "Processing...";

/// Outcome of a backend call, as returned by the dashboard's REST services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub status_code: Option<u16>,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            status_code: None,
        }
    }

    pub fn failed(message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self {
            success: false,
            message: message.into(),
            status_code,
        }
    }
}

/// Convenience facade over a [`FeedbackStore`].
pub struct Feedback<'s, C: Clock = SystemClock> {
    store: &'s mut FeedbackStore<C>,
}

impl<'s, C: Clock> Feedback<'s, C> {
    pub fn new(store: &'s mut FeedbackStore<C>) -> Self {
        Self { store }
    }

    pub fn show(
        &mut self,
        kind: Kind,
        message: impl Into<String>,
        overrides: Overrides,
    ) -> NotificationId {
        self.store.add_kind(kind, message.into(), overrides)
    }

    pub fn show_success(
        &mut self,
        message: impl Into<String>,
        overrides: Overrides,
    ) -> NotificationId {
        self.store.success(message, overrides)
    }

    pub fn show_error(
        &mut self,
        message: impl Into<String>,
        overrides: Overrides,
    ) -> NotificationId {
        self.store.error(message, overrides)
    }

    pub fn show_warning(
        &mut self,
        message: impl Into<String>,
        overrides: Overrides,
    ) -> NotificationId {
        self.store.warning(message, overrides)
    }

    pub fn show_info(
        &mut self,
        message: impl Into<String>,
        overrides: Overrides,
    ) -> NotificationId {
        self.store.info(message, overrides)
    }

    /// Shows a "Loading" info toast with a "Cancel" button.
    ///
    /// The button does nothing by itself; pressing it dismisses the toast.
    pub fn show_loading(&mut self, message: impl Into<String>) -> NotificationId {
        self.store.info(
            message,
            Overrides::new()
                .title("Loading")
                .duration_ms(DEFAULT_PROMPT_DURATION_MS)
                .action("Cancel", || {}),
        )
    }

    /// Shows a "Confirmation Required" warning with a "Confirm" button.
    pub fn show_confirmation(
        &mut self,
        message: impl Into<String>,
        on_confirm: impl Fn() + 'static,
    ) -> NotificationId {
        self.store.warning(message, confirmation_overrides(on_confirm))
    }

    /// Like [`show_confirmation`](Self::show_confirmation), calling
    /// `on_cancel` if the toast goes away without being confirmed.
    pub fn show_confirmation_with_cancel(
        &mut self,
        message: impl Into<String>,
        on_confirm: impl Fn() + 'static,
        on_cancel: impl FnOnce() + 'static,
    ) -> NotificationId {
        let confirmed = Rc::new(Cell::new(false));
        let mark = Rc::clone(&confirmed);
        let overrides = confirmation_overrides(move || {
            mark.set(true);
            on_confirm();
        })
        .on_dismiss(move || {
            if !confirmed.get() {
                on_cancel();
            }
        });
        self.store.warning(message, overrides)
    }

    /// Shows a success or error toast for a backend response.
    ///
    /// Titles default to "Success" and "Error"; the error title gets the
    /// status code appended when the response carries one.
    pub fn show_api_response(
        &mut self,
        response: &ApiResponse,
        success_title: Option<&str>,
        error_title: Option<&str>,
    ) -> NotificationId {
        if response.success {
            let title = success_title.unwrap_or(Kind::Success.default_title());
            self.store
                .success(response.message.clone(), Overrides::new().title(title))
        } else {
            let base = error_title.unwrap_or(Kind::Error.default_title());
            let title = match response.status_code {
                Some(code) => format!("{base} ({code})"),
                None => base.to_string(),
            };
            self.store
                .error(response.message.clone(), Overrides::new().title(title))
        }
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.store.remove(id)
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }
}

fn confirmation_overrides(on_confirm: impl Fn() + 'static) -> Overrides {
    Overrides::new()
        .title("Confirmation Required")
        .duration_ms(DEFAULT_PROMPT_DURATION_MS)
        .action("Confirm", on_confirm)
}
