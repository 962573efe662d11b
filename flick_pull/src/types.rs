// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header states, events, options, and the animated-property address.

use alloc::string::String;

/// States of the pull-to-refresh header.
///
/// The state is the sole gate for whether a release commits to a refresh:
/// only a release in [`ReleaseToRefresh`](PullState::ReleaseToRefresh)
/// invokes the refresh callback.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum PullState {
    /// Header not pulled far enough; release snaps back with no refresh.
    #[default]
    PullToRefresh,
    /// Pulled past the threshold; release triggers a refresh.
    ReleaseToRefresh,
    /// A refresh is running; the header is parked (or hidden).
    Refreshing,
}

/// Events reported by the header controller.
#[derive(Clone, Debug, PartialEq)]
pub enum PullEvent {
    /// The user started pulling on the header.
    PullStarted,
    /// The pull ended (release, cancel, or the header scrolled away).
    PullEnded,
    /// The header's exposed top margin changed, in pixels
    /// (`-header_height` is fully hidden, `0` fully shown).
    Margin {
        /// New top margin.
        px: f64,
    },
    /// The header state changed.
    StateChanged {
        /// Previous state.
        from: PullState,
        /// New state.
        to: PullState,
    },
    /// Flip the header arrow 180°. Fires exactly once per threshold
    /// crossing: counter-clockwise when the pull passes the threshold,
    /// clockwise when it drops back below.
    ArrowFlip {
        /// Rotation direction.
        clockwise: bool,
    },
    /// A refresh was committed; the host should start loading and call
    /// [`refresh_complete`](crate::refresh::PullController::refresh_complete)
    /// when done.
    Refresh,
    /// A snap-back animation started.
    SnapBack {
        /// The header is heading fully off-screen (as opposed to parking
        /// at margin `0` to show the refreshing spinner).
        hidden: bool,
    },
}

/// The single property the header controller animates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HeaderProperty {
    /// Top margin of the header, in pixels.
    TopMargin,
}

/// Host configuration for the pull header.
#[derive(Clone, Debug)]
pub struct PullOptions {
    /// Resistance divisor applied to the raw finger displacement; values
    /// above `1` make the header trail the finger. A feel parameter, not a
    /// physical constant.
    pub resistance: f64,
    /// Margin the pull must exceed before a release refreshes, in pixels.
    pub pull_threshold: f64,
    /// Park the header (spinner + loading text) while refreshing instead of
    /// hiding it.
    pub refreshing_header_visible: bool,
    /// Swallow touch input while a refresh is running.
    pub lock_while_refreshing: bool,
    /// Duration of the snap-back animation, in milliseconds.
    pub bounce_ms: u64,
    /// Duration of the arrow-flip animation, in milliseconds.
    pub rotate_ms: u64,
    /// Show the last-updated line in the header.
    pub show_last_updated: bool,
    /// Caption while not pulled far enough.
    pub pull_text: String,
    /// Caption once the pull passes the threshold.
    pub release_text: String,
    /// Caption while refreshing.
    pub refreshing_text: String,
    /// Format for the last-updated line; `{}` is replaced by the rendered
    /// timestamp.
    pub last_updated_text: String,
}

/// Default resistance divisor.
pub const PULL_RESISTANCE: f64 = 1.7;

/// Default snap-back duration, in milliseconds.
pub const BOUNCE_MS: u64 = 500;

/// Default arrow-flip duration, in milliseconds.
pub const ROTATE_ARROW_MS: u64 = 250;

impl Default for PullOptions {
    fn default() -> Self {
        Self {
            resistance: PULL_RESISTANCE,
            pull_threshold: 0.0,
            refreshing_header_visible: true,
            lock_while_refreshing: false,
            bounce_ms: BOUNCE_MS,
            rotate_ms: ROTATE_ARROW_MS,
            show_last_updated: false,
            pull_text: String::from("Pull to refresh"),
            release_text: String::from("Release to refresh"),
            refreshing_text: String::from("Loading…"),
            last_updated_text: String::from("Updated: {}"),
        }
    }
}
