// SPDX-License-Identifier: MPL-2.0
//! `admin_feedback` is the toast notification core of the super-admin
//! dashboard.
//!
//! It keeps the active feedback messages in a bounded store with timed
//! auto-dismiss, groups them by screen anchor for rendering, loads store
//! preferences from a TOML file and records notification activity for
//! diagnostics.

#![doc(html_root_url = "https://docs.rs/admin_feedback/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod feedback;
