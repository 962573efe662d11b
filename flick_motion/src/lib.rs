// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=flick_motion --heading-base-level=0

//! Flick Motion: shared primitives for touch-gesture engines.
//!
//! This crate is the leaf layer under the swipe-row and pull-header engines.
//! It knows nothing about lists, rows, or headers — only about motion samples
//! and what can be derived from them.
//!
//! - A [`Sample`](crate::types::Sample) is a point with a timestamp; a
//!   [`PointerEvent`](crate::types::PointerEvent) wraps one sample in the
//!   down/move/up/cancel alphabet. That is the entire input-device surface.
//! - [`VelocityTracker`](crate::velocity::VelocityTracker) keeps a rolling
//!   window of recent samples and reports instantaneous velocity along an
//!   axis, in pixels per second.
//! - [`GestureClassifier`](crate::classify::GestureClassifier) watches
//!   successive samples and decides — once, per gesture — whether the user is
//!   dragging horizontally or scrolling vertically, gated by a slop threshold
//!   so jitter never classifies.
//! - [`AnimationDriver`](crate::animate::AnimationDriver) is the outbound
//!   capability: "animate numeric property `P` from `a` to `b` over `d`
//!   milliseconds and hand me a token I will hear about when it finishes."
//!   The engines consume it; a toolkit implements it.
//!
//! # Example
//!
//! ```rust
//! use flick_motion::classify::{Classification, GestureClassifier};
//! use flick_motion::velocity::VelocityTracker;
//! use flick_motion::types::{Axis, Sample};
//!
//! let mut classifier = GestureClassifier::new(8.0);
//! let mut tracker = VelocityTracker::new();
//!
//! classifier.begin(100.0, 40.0);
//! tracker.begin(Sample { x: 100.0, y: 40.0, t: 0 });
//!
//! // A decisive horizontal drag: 30 px right in 20 ms.
//! tracker.push(Sample { x: 130.0, y: 42.0, t: 20 });
//! assert_eq!(classifier.update(130.0, 42.0), Classification::Horizontal);
//! assert!(tracker.velocity(Axis::Horizontal) > 1000.0);
//! ```
//!
//! All state here is transient: trackers and classifiers are created at
//! gesture start and reset at gesture end. Nothing is persisted.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod animate;
pub mod classify;
pub mod types;
pub mod velocity;

pub use animate::{Animation, AnimationDriver, AnimationToken};
pub use classify::{Classification, GestureClassifier};
pub use types::{Axis, PointerEvent, Sample};
pub use velocity::VelocityTracker;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_classifies_and_measures() {
        let mut classifier = GestureClassifier::new(8.0);
        let mut tracker = VelocityTracker::new();
        classifier.begin(0.0, 0.0);
        tracker.begin(Sample {
            x: 0.0,
            y: 0.0,
            t: 0,
        });
        for i in 1..=5_u64 {
            let x = i as f64 * 10.0;
            tracker.push(Sample { x, y: 1.0, t: i * 10 });
            classifier.update(x, 1.0);
        }
        assert_eq!(classifier.classification(), Classification::Horizontal);
        // 10 px per 10 ms is 1000 px/s.
        let vx = tracker.velocity(Axis::Horizontal);
        assert!((vx - 1000.0).abs() < 1.0, "vx = {vx}");
    }
}
