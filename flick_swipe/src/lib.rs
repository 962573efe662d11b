// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=flick_swipe --heading-base-level=0

//! Flick Swipe: a swipe-row gesture engine for scrollable lists.
//!
//! ## Overview
//!
//! This crate turns a raw stream of pointer events into swipe gestures on
//! list rows — reveal a back view, dismiss the row, or toggle a checked
//! flag — without owning the list. It attaches to a host through two
//! capability traits:
//!
//! - [`ListHost`](crate::host::ListHost): viewport geometry for hit testing,
//!   per-row flags, touch-stream coordination, and the presentation
//!   properties a drag manipulates directly.
//! - [`AnimationDriver`](flick_motion::animate::AnimationDriver): runs the
//!   release animations and reports completions back by token.
//!
//! Everything the engine wants the application to know comes back as
//! [`SwipeEvent`](crate::types::SwipeEvent) values, returned synchronously
//! from every entry point, in order. There are no listener interfaces to
//! implement.
//!
//! ## Gesture model
//!
//! A gesture starts when a pointer lands on an enabled, interactive row.
//! Once the drag exceeds the slop threshold with horizontal speed
//! dominating, the engine resolves the action for that direction, asks the
//! host to suppress its own scrolling, and tracks the pull. On release it
//! commits when the drag crossed half the row width or the release velocity
//! qualifies as a fling, then animates the row to its resolved rest
//! position. See [`controller`] for the full state machine and
//! [`dismiss`] for how simultaneous dismissals batch into one
//! index-consistent removal.
//!
//! ## Workflow
//!
//! 1) Validate a [`SwipeOptions`](crate::options::SwipeOptions) and build a
//!    [`SwipeController`](crate::controller::SwipeController).
//! 2) Feed it pointer events, scroll-state changes, and animation
//!    completions; dispatch the returned events.
//! 3) Call [`reset_items`](crate::controller::SwipeController::reset_items)
//!    whenever the data set changes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod dismiss;
pub mod host;
pub mod options;
pub mod state;
pub mod types;

pub use controller::SwipeController;
pub use host::{ListHost, ViewLayer, ViewTarget};
pub use options::{OffsetMetric, OptionsError, SwipeAction, SwipeMode, SwipeOptions};
pub use types::{ScrollState, SwipeEvent, SwipeProperty};
