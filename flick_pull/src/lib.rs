// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=flick_pull --heading-base-level=0

//! Flick Pull: pull-to-refresh and pull-to-load-more engines.
//!
//! ## Overview
//!
//! Two small engines that attach to a scrollable list without owning it:
//!
//! - [`PullController`](crate::refresh::PullController) runs the
//!   pull-to-refresh header: it tracks the header's exposed margin as the
//!   user drags past the top of the list (with a resistance divisor for
//!   feel), flips between `PULL_TO_REFRESH` and `RELEASE_TO_REFRESH` as the
//!   pull crosses the configured threshold, commits to a refresh on
//!   release, and snaps the header back through an
//!   [`AnimationDriver`](flick_motion::animate::AnimationDriver).
//! - [`EndReachedWatcher`](crate::load_more::EndReachedWatcher) watches
//!   scroll reports and requests more items once when the end of the list
//!   becomes visible, latching until the host reports completion.
//!
//! Like the swipe engine, both return their events (`Vec<PullEvent>` /
//! `Vec<LoadEvent>`) synchronously from every entry point; there are no
//! listener interfaces.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod load_more;
pub mod refresh;
pub mod types;

pub use load_more::{EndReachedWatcher, LoadEvent};
pub use refresh::PullController;
pub use types::{HeaderProperty, PullEvent, PullOptions, PullState};
