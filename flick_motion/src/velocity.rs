// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Windowed velocity estimation over a stream of motion samples.
//!
//! ## Overview
//!
//! [`VelocityTracker`] keeps the samples observed over the last
//! [`HORIZON_MS`] milliseconds (capped at [`MAX_SAMPLES`]) and estimates
//! instantaneous velocity along an axis by least-squares regression of
//! position over time. Regression over a short window is robust against the
//! sample jitter that a naive `(last - first) / dt` amplifies.
//!
//! The tracker is a scoped resource: the gesture controllers create one per
//! gesture and clear it on every gesture-exit path — commit, cancel, or
//! forced disable.

use alloc::collections::VecDeque;

use crate::types::{Axis, Sample};

/// Samples older than this (relative to the newest) are evicted.
pub const HORIZON_MS: u64 = 100;

/// Upper bound on retained samples.
pub const MAX_SAMPLES: usize = 20;

/// Rolling window of motion samples with per-axis velocity estimation.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    window: VecDeque<Sample>,
}

impl VelocityTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self {
            window: VecDeque::new(),
        }
    }

    /// Start a fresh gesture: clear the window and record the down sample.
    pub fn begin(&mut self, sample: Sample) {
        self.window.clear();
        self.window.push_back(sample);
    }

    /// Add a sample, evicting anything older than the horizon.
    ///
    /// Samples must arrive in non-decreasing timestamp order; an older
    /// timestamp is ignored rather than corrupting the window.
    pub fn push(&mut self, sample: Sample) {
        if let Some(last) = self.window.back()
            && sample.t < last.t
        {
            return;
        }
        self.window.push_back(sample);
        let cutoff = sample.t.saturating_sub(HORIZON_MS);
        while let Some(front) = self.window.front() {
            if front.t >= cutoff && self.window.len() <= MAX_SAMPLES {
                break;
            }
            self.window.pop_front();
        }
    }

    /// Number of samples currently retained.
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Drop all samples. The tracker can be reused with [`begin`](Self::begin).
    pub fn clear(&mut self) {
        self.window.clear();
    }

    /// Estimated velocity along `axis`, in pixels per second.
    ///
    /// Least-squares slope of position over time across the window. Returns
    /// `0.0` when fewer than two samples are retained or when all samples
    /// share one timestamp.
    pub fn velocity(&self, axis: Axis) -> f64 {
        let n = self.window.len();
        if n < 2 {
            return 0.0;
        }
        // Times are shifted to the window start so the accumulators stay
        // small regardless of the host's timestamp origin.
        let t0 = self.window.front().map_or(0, |s| s.t);
        let nf = n as f64;
        let (mut sum_t, mut sum_p, mut sum_tt, mut sum_tp) =
            (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);
        for s in &self.window {
            let t = (s.t - t0) as f64;
            let p = axis.of(*s);
            sum_t += t;
            sum_p += p;
            sum_tt += t * t;
            sum_tp += t * p;
        }
        let den = nf * sum_tt - sum_t * sum_t;
        if den == 0.0 {
            return 0.0;
        }
        // Slope is px/ms; report px/s.
        (nf * sum_tp - sum_t * sum_p) / den * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(x: f64, y: f64, t: u64) -> Sample {
        Sample { x, y, t }
    }

    #[test]
    fn constant_speed_is_exact() {
        let mut v = VelocityTracker::new();
        v.begin(s(0.0, 0.0, 0));
        for i in 1..=6_u64 {
            v.push(s(i as f64 * 5.0, 0.0, i * 10));
        }
        // 5 px per 10 ms = 500 px/s.
        assert!((v.velocity(Axis::Horizontal) - 500.0).abs() < 1e-9);
        assert_eq!(v.velocity(Axis::Vertical), 0.0);
    }

    #[test]
    fn negative_velocity_for_leftward_motion() {
        let mut v = VelocityTracker::new();
        v.begin(s(100.0, 0.0, 0));
        v.push(s(80.0, 0.0, 10));
        v.push(s(60.0, 0.0, 20));
        assert!(v.velocity(Axis::Horizontal) < -1999.0);
    }

    #[test]
    fn horizon_evicts_stale_samples() {
        let mut v = VelocityTracker::new();
        v.begin(s(0.0, 0.0, 0));
        // A long pause, then fast movement; the stale origin must not
        // drag the estimate toward zero.
        v.push(s(0.0, 0.0, 1000));
        v.push(s(30.0, 0.0, 1010));
        v.push(s(60.0, 0.0, 1020));
        assert_eq!(v.len(), 3);
        assert!((v.velocity(Axis::Horizontal) - 3000.0).abs() < 1e-9);
    }

    #[test]
    fn window_is_capped() {
        let mut v = VelocityTracker::new();
        v.begin(s(0.0, 0.0, 0));
        for i in 1..100_u64 {
            // 1 ms apart, all within the horizon.
            v.push(s(i as f64, 0.0, i));
        }
        assert!(v.len() <= MAX_SAMPLES);
    }

    #[test]
    fn degenerate_windows_report_zero() {
        let mut v = VelocityTracker::new();
        assert_eq!(v.velocity(Axis::Horizontal), 0.0);
        v.begin(s(5.0, 5.0, 10));
        assert_eq!(v.velocity(Axis::Horizontal), 0.0);
        // Same-timestamp samples: no time spread.
        v.push(s(9.0, 5.0, 10));
        assert_eq!(v.velocity(Axis::Horizontal), 0.0);
    }

    #[test]
    fn out_of_order_sample_ignored() {
        let mut v = VelocityTracker::new();
        v.begin(s(0.0, 0.0, 100));
        v.push(s(50.0, 0.0, 10));
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn begin_resets_previous_gesture() {
        let mut v = VelocityTracker::new();
        v.begin(s(0.0, 0.0, 0));
        v.push(s(100.0, 0.0, 10));
        v.begin(s(0.0, 0.0, 20));
        assert_eq!(v.len(), 1);
        assert_eq!(v.velocity(Axis::Horizontal), 0.0);
    }
}
