// SPDX-License-Identifier: MPL-2.0
//! Partitioning of active notifications by anchor.
//!
//! The presentation layer renders one stack per anchor. Grouping is a pure
//! function of the active list: every notification lands in exactly one
//! group, groups keep insertion order, and anchors without notifications are
//! absent.

use super::notification::{Anchor, Notification, NotificationId};
use std::collections::BTreeMap;

/// Active notifications keyed by anchor, in [`Anchor::ALL`] order.
#[derive(Debug, Default)]
pub struct GroupedNotifications<'a> {
    groups: BTreeMap<Anchor, Vec<&'a Notification>>,
}

impl<'a> GroupedNotifications<'a> {
    /// Returns the stack for `anchor`, or `None` if nothing is anchored there.
    #[must_use]
    pub fn get(&self, anchor: Anchor) -> Option<&[&'a Notification]> {
        self.groups.get(&anchor).map(Vec::as_slice)
    }

    /// Returns the ids stacked at `anchor`, oldest first.
    #[must_use]
    pub fn ids(&self, anchor: Anchor) -> Vec<NotificationId> {
        self.get(anchor)
            .map(|group| group.iter().map(|n| n.id()).collect())
            .unwrap_or_default()
    }

    /// Iterates over non-empty groups.
    pub fn iter(&self) -> impl Iterator<Item = (Anchor, &[&'a Notification])> {
        self.groups
            .iter()
            .map(|(anchor, group)| (*anchor, group.as_slice()))
    }

    pub fn anchors(&self) -> impl Iterator<Item = Anchor> + '_ {
        self.groups.keys().copied()
    }

    /// Number of non-empty groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of notifications across all groups.
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

impl PartialEq for GroupedNotifications<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.groups.len() == other.groups.len()
            && self.iter().zip(other.iter()).all(|((a, xs), (b, ys))| {
                a == b
                    && xs.len() == ys.len()
                    && xs.iter().zip(ys.iter()).all(|(x, y)| x.id() == y.id())
            })
    }
}

impl Eq for GroupedNotifications<'_> {}

/// Groups notifications by anchor, preserving their relative order.
pub fn group_by_anchor<'a, I>(notifications: I) -> GroupedNotifications<'a>
where
    I: IntoIterator<Item = &'a Notification>,
{
    let mut groups: BTreeMap<Anchor, Vec<&'a Notification>> = BTreeMap::new();
    for notification in notifications {
        groups
            .entry(notification.anchor())
            .or_default()
            .push(notification);
    }
    GroupedNotifications { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::notification::{Kind, NotificationSpec};
    use std::time::Instant;

    fn make(raw: u64, anchor: Anchor) -> Notification {
        NotificationSpec::new(Kind::Info, format!("n{raw}"))
            .anchor(anchor)
            .into_notification(NotificationId::from_raw(raw), Instant::now(), 0, Anchor::TopRight)
    }

    fn raw(ids: Vec<NotificationId>) -> Vec<u64> {
        ids.into_iter().map(NotificationId::value).collect()
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let grouped = group_by_anchor(std::iter::empty::<&Notification>());
        assert!(grouped.is_empty());
        assert_eq!(grouped.total(), 0);
    }

    #[test]
    fn groups_preserve_insertion_order() {
        let items = vec![
            make(1, Anchor::TopRight),
            make(2, Anchor::BottomLeft),
            make(3, Anchor::TopRight),
            make(4, Anchor::BottomLeft),
            make(5, Anchor::TopRight),
        ];
        let grouped = group_by_anchor(&items);

        assert_eq!(raw(grouped.ids(Anchor::TopRight)), vec![1, 3, 5]);
        assert_eq!(raw(grouped.ids(Anchor::BottomLeft)), vec![2, 4]);
    }

    #[test]
    fn empty_anchors_are_absent() {
        let items = vec![make(1, Anchor::TopCenter)];
        let grouped = group_by_anchor(&items);

        assert_eq!(grouped.len(), 1);
        assert!(grouped.get(Anchor::TopRight).is_none());
        assert!(grouped.ids(Anchor::BottomRight).is_empty());
        assert_eq!(grouped.anchors().collect::<Vec<_>>(), vec![Anchor::TopCenter]);
    }

    #[test]
    fn partition_is_complete() {
        let items: Vec<_> = (0..12u64)
            .map(|i| make(i, Anchor::ALL[(i % 6) as usize]))
            .collect();
        let grouped = group_by_anchor(&items);

        assert_eq!(grouped.total(), items.len());
        assert_eq!(grouped.len(), 6);
        for item in &items {
            let hits = grouped
                .iter()
                .filter(|(_, group)| group.iter().any(|n| n.id() == item.id()))
                .count();
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn grouping_is_idempotent() {
        let items = vec![
            make(1, Anchor::BottomRight),
            make(2, Anchor::TopLeft),
            make(3, Anchor::BottomRight),
        ];
        assert_eq!(group_by_anchor(&items), group_by_anchor(&items));
    }

    #[test]
    fn groups_iterate_in_anchor_order() {
        let items = vec![make(1, Anchor::BottomRight), make(2, Anchor::TopLeft)];
        let anchors: Vec<_> = group_by_anchor(&items).anchors().collect();
        assert_eq!(anchors, vec![Anchor::TopLeft, Anchor::BottomRight]);
    }
}
