// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-row swipe/checked state, owned by the controller.
//!
//! ## Overview
//!
//! The store is indexed by list position and re-synced explicitly whenever
//! the host's data set changes ([`ItemStateStore::resize`]). Reads past the
//! end answer with defaults — an absent row is simply "not swiped, not
//! checked" — so the store can never fail a query.

use alloc::vec::Vec;

/// State of one row.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ItemState {
    /// The row is open (front view slid aside).
    pub swiped: bool,
    /// When open: it was opened by a rightward swipe.
    pub swiped_right: bool,
    /// The row is checked (choice action).
    pub checked: bool,
}

/// Position-indexed store of [`ItemState`].
#[derive(Clone, Debug, Default)]
pub struct ItemStateStore {
    items: Vec<ItemState>,
}

impl ItemStateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Re-sync with a data set of `count` rows: grows with defaults and
    /// truncates on shrink.
    pub fn resize(&mut self, count: usize) {
        self.items.resize(count, ItemState::default());
    }

    /// Number of tracked rows.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no rows are tracked.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// State of `position`; out-of-range reads default.
    pub fn get(&self, position: usize) -> ItemState {
        self.items.get(position).copied().unwrap_or_default()
    }

    /// Whether `position` is open.
    pub fn is_swiped(&self, position: usize) -> bool {
        self.get(position).swiped
    }

    /// Whether `position` was opened to the right.
    pub fn is_swiped_right(&self, position: usize) -> bool {
        self.get(position).swiped_right
    }

    /// Whether `position` is checked.
    pub fn is_checked(&self, position: usize) -> bool {
        self.get(position).checked
    }

    /// Record `position` as open (`to_right` gives the side) or closed.
    ///
    /// Out-of-range writes are ignored; the row no longer exists.
    pub fn set_swiped(&mut self, position: usize, swiped: bool, to_right: bool) {
        if let Some(item) = self.items.get_mut(position) {
            item.swiped = swiped;
            if swiped {
                item.swiped_right = to_right;
            }
        }
    }

    /// Set the checked flag.
    pub fn set_checked(&mut self, position: usize, checked: bool) {
        if let Some(item) = self.items.get_mut(position) {
            item.checked = checked;
        }
    }

    /// Number of checked rows.
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    /// Positions of checked rows, ascending.
    pub fn checked_positions(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.checked.then_some(i))
            .collect()
    }

    /// Positions of open rows, ascending.
    pub fn swiped_positions(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.swiped.then_some(i))
            .collect()
    }

    /// Remove the entries for a dismissed batch.
    ///
    /// `positions` must be sorted descending so that each removal leaves
    /// the remaining indices valid.
    pub fn remove_descending(&mut self, positions: &[usize]) {
        for &p in positions {
            if p < self.items.len() {
                self.items.remove(p);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn untouched_positions_default_to_unswiped_unchecked() {
        let store = ItemStateStore::new();
        assert!(!store.is_swiped(0));
        assert!(!store.is_checked(42));
        let mut store = ItemStateStore::new();
        store.resize(3);
        assert!(!store.is_swiped(2));
        assert!(!store.is_checked(2));
        // Past the end still answers.
        assert!(!store.is_swiped(99));
    }

    #[test]
    fn swipe_roundtrip() {
        let mut store = ItemStateStore::new();
        store.resize(5);
        store.set_swiped(3, true, true);
        assert!(store.is_swiped(3));
        assert!(store.is_swiped_right(3));
        store.set_swiped(3, false, false);
        assert!(!store.is_swiped(3));
    }

    #[test]
    fn closing_preserves_opened_side() {
        let mut store = ItemStateStore::new();
        store.resize(2);
        store.set_swiped(0, true, true);
        store.set_swiped(0, false, false);
        // The side survives the close; onUnswiped reports it.
        assert!(store.is_swiped_right(0));
    }

    #[test]
    fn out_of_range_writes_ignored() {
        let mut store = ItemStateStore::new();
        store.resize(2);
        store.set_swiped(10, true, true);
        store.set_checked(10, true);
        assert_eq!(store.len(), 2);
        assert!(!store.is_swiped(10));
    }

    #[test]
    fn shrink_then_grow_resets_state() {
        let mut store = ItemStateStore::new();
        store.resize(4);
        store.set_checked(3, true);
        store.resize(2);
        store.resize(4);
        assert!(!store.is_checked(3));
    }

    #[test]
    fn checked_bookkeeping() {
        let mut store = ItemStateStore::new();
        store.resize(6);
        store.set_checked(1, true);
        store.set_checked(4, true);
        assert_eq!(store.checked_count(), 2);
        assert_eq!(store.checked_positions(), vec![1, 4]);
    }

    #[test]
    fn remove_descending_shifts_state() {
        let mut store = ItemStateStore::new();
        store.resize(6);
        store.set_checked(5, true);
        store.set_swiped(2, true, false);
        // Dismiss positions 4 and 1; the checked row at 5 lands at 3, the
        // open row at 2 lands at 1.
        store.remove_descending(&[4, 1]);
        assert_eq!(store.len(), 4);
        assert!(store.is_checked(3));
        assert!(store.is_swiped(1));
    }
}
