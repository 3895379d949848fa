// SPDX-License-Identifier: MPL-2.0
//! Message sanitization for logged notification text.
//!
//! Notification bodies are user-facing strings and may carry customer data
//! (names, account numbers). Logged copies are flattened to a single line and
//! truncated so the diagnostics buffer never holds full messages.

use crate::config::MAX_LOGGED_MESSAGE_CHARS;

const ELLIPSIS: char = '…';

/// Flattens control characters to spaces and truncates to
/// [`MAX_LOGGED_MESSAGE_CHARS`] characters.
#[must_use]
pub fn sanitize_message(message: &str) -> String {
    let mut sanitized = String::with_capacity(message.len().min(MAX_LOGGED_MESSAGE_CHARS * 4));
    for (count, ch) in message.chars().enumerate() {
        if count == MAX_LOGGED_MESSAGE_CHARS {
            sanitized.push(ELLIPSIS);
            break;
        }
        sanitized.push(if ch.is_control() { ' ' } else { ch });
    }
    sanitized
}
