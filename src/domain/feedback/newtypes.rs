// SPDX-License-Identifier: MPL-2.0
//! Feedback newtypes.
//!
//! Type-safe wrappers for store values, always within their valid ranges.

// =============================================================================
// Max Items Bounds
// =============================================================================

/// Capacity bounds. There is no upper limit.
pub mod max_items_bounds {
    /// Minimum capacity. A store must be able to hold the notification being added.
    pub const MIN: usize = 1;
    /// Default capacity.
    pub const DEFAULT: usize = 5;
}

// =============================================================================
// MaxItems
// =============================================================================

/// Maximum number of notifications a store keeps at once.
///
/// Zero is raised to the minimum rather than rejected. Large values are
/// kept as given.
///
/// # Example
///
/// ```
/// use admin_feedback::domain::feedback::MaxItems;
///
/// assert_eq!(MaxItems::new(2).value(), 2);
/// assert_eq!(MaxItems::new(0).value(), 1);
/// assert_eq!(MaxItems::new(100).value(), 100);
/// assert_eq!(MaxItems::default().value(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaxItems(usize);

impl MaxItems {
    /// Creates a new capacity, raising it to the minimum if needed.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.max(max_items_bounds::MIN))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= max_items_bounds::MIN
    }
}

impl Default for MaxItems {
    fn default() -> Self {
        Self(max_items_bounds::DEFAULT)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_MAX_ITEMS, MIN_MAX_ITEMS};

    #[test]
    fn domain_bounds_match_config() {
        assert_eq!(max_items_bounds::MIN, MIN_MAX_ITEMS);
        assert_eq!(max_items_bounds::DEFAULT, DEFAULT_MAX_ITEMS);
    }

    #[test]
    fn max_items_raises_zero_to_min() {
        assert_eq!(MaxItems::new(0).value(), max_items_bounds::MIN);
    }

    #[test]
    fn max_items_has_no_upper_limit() {
        assert_eq!(MaxItems::new(100).value(), 100);
        assert_eq!(MaxItems::new(10_000).value(), 10_000);
    }

    #[test]
    fn max_items_accepts_valid_values() {
        assert_eq!(MaxItems::new(2).value(), 2);
        assert_eq!(MaxItems::new(5).value(), 5);
        assert_eq!(MaxItems::new(50).value(), 50);
    }

    #[test]
    fn max_items_min() {
        assert!(MaxItems::new(max_items_bounds::MIN).is_min());
        assert!(!MaxItems::default().is_min());
    }
}
