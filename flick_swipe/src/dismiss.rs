// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Batched dismissal bookkeeping.
//!
//! ## Overview
//!
//! Dismiss requests can arrive for rows that are off-screen (no collapse
//! animation to run) and while other collapses are still in flight. The
//! batcher accumulates all of them and releases a single batch only when no
//! collapse animation remains outstanding, sorted by descending position so
//! the host can remove rows without invalidating lower indices. Multiple
//! simultaneous dismissals ("dismiss all checked") therefore report as one
//! atomic, index-consistent removal instead of racing with animation
//! completions.

use alloc::vec::Vec;

/// Accumulates dismissal requests until the batch can be released.
#[derive(Clone, Debug, Default)]
pub struct DismissBatcher {
    pending: Vec<usize>,
    in_flight: usize,
}

impl DismissBatcher {
    /// Create an empty batcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dismissal for `position`.
    ///
    /// `animated` is whether a collapse animation was started for it; the
    /// batch stays open until every started collapse reports back through
    /// [`collapse_finished`](Self::collapse_finished).
    pub fn request(&mut self, position: usize, animated: bool) {
        if !self.pending.contains(&position) {
            self.pending.push(position);
        }
        if animated {
            self.in_flight += 1;
        }
    }

    /// One collapse animation completed.
    pub fn collapse_finished(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Whether no collapse animations are outstanding.
    pub fn is_idle(&self) -> bool {
        self.in_flight == 0
    }

    /// Number of registered, unflushed dismissals.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether `position` has a registered, unflushed dismissal.
    pub fn is_pending(&self, position: usize) -> bool {
        self.pending.contains(&position)
    }

    /// Release the batch if nothing is in flight and anything is pending.
    ///
    /// Returns the dismissed positions sorted descending, exactly once per
    /// batch.
    pub fn flush(&mut self) -> Option<Vec<usize>> {
        if self.in_flight > 0 || self.pending.is_empty() {
            return None;
        }
        let mut batch = core::mem::take(&mut self.pending);
        batch.sort_unstable_by(|a, b| b.cmp(a));
        Some(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn offscreen_batch_flushes_descending_once() {
        let mut b = DismissBatcher::new();
        b.request(5, false);
        b.request(2, false);
        b.request(8, false);
        assert_eq!(b.flush(), Some(vec![8, 5, 2]));
        // Exactly once.
        assert_eq!(b.flush(), None);
    }

    #[test]
    fn batch_waits_for_all_collapses() {
        let mut b = DismissBatcher::new();
        b.request(1, true);
        b.request(4, true);
        assert_eq!(b.flush(), None);
        b.collapse_finished();
        assert_eq!(b.flush(), None);
        b.collapse_finished();
        assert_eq!(b.flush(), Some(vec![4, 1]));
    }

    #[test]
    fn mixed_visible_and_offscreen_requests_form_one_batch() {
        let mut b = DismissBatcher::new();
        b.request(3, true);
        b.request(9, false);
        assert_eq!(b.flush(), None);
        b.collapse_finished();
        assert_eq!(b.flush(), Some(vec![9, 3]));
    }

    #[test]
    fn duplicate_requests_collapse() {
        let mut b = DismissBatcher::new();
        b.request(7, false);
        b.request(7, false);
        assert_eq!(b.flush(), Some(vec![7]));
    }

    #[test]
    fn empty_flush_is_none() {
        let mut b = DismissBatcher::new();
        assert_eq!(b.flush(), None);
    }
}
