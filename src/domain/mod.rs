// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`feedback`]: Notification store types ([`MaxItems`](feedback::MaxItems))

pub mod feedback;
