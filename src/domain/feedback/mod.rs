// SPDX-License-Identifier: MPL-2.0
//! Feedback domain types.
//!
//! This module provides pure domain types for the notification store:
//! - [`MaxItems`]: Capacity of the active notification list

mod newtypes;

pub use newtypes::{max_items_bounds, MaxItems};
