// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pull-to-refresh header state machine.
//!
//! ## Overview
//!
//! [`PullController`] tracks the header's exposed top margin while the user
//! pulls down past the top of the list, runs the
//! `PULL_TO_REFRESH → RELEASE_TO_REFRESH → REFRESHING` state machine, and
//! drives the snap-back animation through
//! [`AnimationDriver`](flick_motion::animate::AnimationDriver). It is the
//! one-directional cousin of the swipe engine: same sample-in, events-out
//! shape, but a single axis and a single "row" (the header).
//!
//! The raw finger displacement is divided by a resistance factor so the
//! header trails the finger. Crossing the configured threshold flips the
//! state (and the header arrow) exactly once per crossing; only a release
//! in `RELEASE_TO_REFRESH` commits to a refresh.
//!
//! While the user is pulling, the host should disable the swipe engine
//! (`SwipeController::set_enabled(false)`), and re-enable it when the pull
//! ends.

use alloc::string::String;
use alloc::vec::Vec;

use flick_motion::animate::{Animation, AnimationDriver, AnimationToken};
use flick_motion::classify::{Classification, GestureClassifier};
use flick_motion::types::{PointerEvent, Sample};

use crate::types::{HeaderProperty, PullEvent, PullOptions, PullState};

/// The pull-to-refresh gesture engine.
///
/// Feed it pointer events with [`handle_event`](Self::handle_event)
/// (together with the list's first visible position), and report snap-back
/// completions with [`animation_finished`](Self::animation_finished). The
/// host signals the end of its asynchronous refresh with
/// [`refresh_complete`](Self::refresh_complete).
#[derive(Debug)]
pub struct PullController {
    opts: PullOptions,
    classifier: GestureClassifier,
    state: PullState,
    pulling: bool,
    pull_origin: f64,
    header_height: f64,
    margin: f64,
    last_updated: Option<u64>,
    enabled: bool,
    snap_token: Option<AnimationToken>,
    snap_target: f64,
    snap_reset: bool,
}

impl PullController {
    /// Create a controller. A resistance below `1` is clamped to `1`.
    pub fn new(mut opts: PullOptions) -> Self {
        opts.resistance = opts.resistance.max(1.0);
        Self {
            classifier: GestureClassifier::new(flick_motion::classify::DEFAULT_SLOP),
            state: PullState::PullToRefresh,
            pulling: false,
            pull_origin: 0.0,
            header_height: 0.0,
            margin: 0.0,
            last_updated: None,
            enabled: true,
            snap_token: None,
            snap_target: 0.0,
            snap_reset: false,
            opts,
        }
    }

    /// Current configuration.
    pub fn options(&self) -> &PullOptions {
        &self.opts
    }

    /// Current header state.
    pub fn state(&self) -> PullState {
        self.state
    }

    /// Current header top margin, in pixels.
    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Whether a refresh is running.
    pub fn is_refreshing(&self) -> bool {
        self.state == PullState::Refreshing
    }

    /// Whether the user is pulling on the header.
    pub fn is_pulling(&self) -> bool {
        self.pulling
    }

    /// Timestamp recorded by the last completed refresh.
    pub fn last_updated(&self) -> Option<u64> {
        self.last_updated
    }

    /// Header caption for the current state.
    pub fn caption(&self) -> &str {
        match self.state {
            PullState::PullToRefresh => &self.opts.pull_text,
            PullState::ReleaseToRefresh => &self.opts.release_text,
            PullState::Refreshing => &self.opts.refreshing_text,
        }
    }

    /// The last-updated line, rendered through a host-supplied timestamp
    /// formatter. `None` when disabled or before the first refresh.
    pub fn last_updated_caption<F>(&self, render: F) -> Option<String>
    where
        F: FnOnce(u64) -> String,
    {
        if !self.opts.show_last_updated {
            return None;
        }
        let t = self.last_updated?;
        Some(self.opts.last_updated_text.replace("{}", &render(t)))
    }

    /// Report the measured header height; the header starts hidden.
    pub fn set_header_height(&mut self, height: f64) {
        self.header_height = height.max(0.0);
        if self.state != PullState::Refreshing {
            self.margin = -self.header_height;
        }
    }

    /// Enable or disable pull-to-refresh.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Change the pull threshold.
    pub fn set_pull_threshold(&mut self, threshold: f64) {
        self.opts.pull_threshold = threshold;
    }

    /// Park or hide the header while refreshing.
    pub fn set_refreshing_header_visible(&mut self, visible: bool) {
        self.opts.refreshing_header_visible = visible;
    }

    /// Swallow input while refreshing.
    pub fn set_lock_while_refreshing(&mut self, lock: bool) {
        self.opts.lock_while_refreshing = lock;
    }

    /// Show the last-updated line.
    pub fn show_last_updated(&mut self, show: bool) {
        self.opts.show_last_updated = show;
    }

    /// Process one pointer event. `first_visible` is the position of the
    /// first laid-out row (`0` means the header is on screen).
    pub fn handle_event(
        &mut self,
        event: PointerEvent,
        first_visible: usize,
        driver: &mut impl AnimationDriver<HeaderProperty>,
    ) -> Vec<PullEvent> {
        let mut events = Vec::new();
        if !self.enabled {
            return events;
        }
        if self.opts.lock_while_refreshing && self.state == PullState::Refreshing {
            return events;
        }
        if self.snap_token.is_some() {
            // Input is swallowed while the header is animating back.
            return events;
        }
        match event {
            PointerEvent::Down(s) => {
                self.classifier.begin(s.x, s.y);
            }
            PointerEvent::Move(s) => self.on_move(s, first_visible, &mut events),
            PointerEvent::Up(_) => self.on_release(driver, &mut events),
            PointerEvent::Cancel(_) => {
                self.snap_back(true, driver, &mut events);
                self.end_pull(&mut events);
            }
        }
        events
    }

    /// Report completion of a snap-back animation. Unknown tokens are
    /// ignored.
    pub fn animation_finished(&mut self, token: AnimationToken) -> Vec<PullEvent> {
        let mut events = Vec::new();
        if self.snap_token != Some(token) {
            return events;
        }
        self.snap_token = None;
        self.margin = self.snap_target;
        if self.snap_reset {
            self.reset_header(&mut events);
        }
        events
    }

    /// The host's asynchronous refresh finished: record the timestamp and
    /// return the header to rest. `header_visible` is whether the header is
    /// still laid out (off-screen headers reset without animation).
    pub fn refresh_complete(
        &mut self,
        now: u64,
        header_visible: bool,
        driver: &mut impl AnimationDriver<HeaderProperty>,
    ) -> Vec<PullEvent> {
        self.last_updated = Some(now);
        let mut events = Vec::new();
        if self.pulling {
            self.set_state(PullState::PullToRefresh, &mut events);
        } else if header_visible {
            self.snap_back(true, driver, &mut events);
        } else {
            self.reset_header(&mut events);
        }
        events
    }

    /// Jump straight to `Refreshing` with the header parked (e.g. a refresh
    /// triggered on startup rather than by a pull).
    pub fn set_refreshing(&mut self) -> Vec<PullEvent> {
        let mut events = Vec::new();
        self.set_state(PullState::Refreshing, &mut events);
        self.set_margin(0.0, &mut events);
        events
    }

    // --- internals ---

    fn on_move(&mut self, s: Sample, first_visible: usize, events: &mut Vec<PullEvent>) {
        self.classifier.update(s.x, s.y);
        if first_visible > 0 {
            // Header scrolled away; the pull (if any) is over.
            self.end_pull(events);
            return;
        }
        if !self.pulling {
            if self.classifier.classification() != Classification::Vertical {
                return;
            }
            self.pulling = true;
            self.pull_origin = s.y;
            events.push(PullEvent::PullStarted);
        }

        let relative = (s.y - self.pull_origin) / self.opts.resistance;
        let new_margin = (relative - self.header_height).max(-self.header_height);
        if new_margin != self.margin && self.state != PullState::Refreshing {
            self.set_margin(new_margin, events);
            if self.state == PullState::PullToRefresh && self.margin > self.opts.pull_threshold {
                self.set_state(PullState::ReleaseToRefresh, events);
                events.push(PullEvent::ArrowFlip { clockwise: false });
            } else if self.state == PullState::ReleaseToRefresh
                && self.margin < self.opts.pull_threshold
            {
                self.set_state(PullState::PullToRefresh, events);
                events.push(PullEvent::ArrowFlip { clockwise: true });
            }
        }
    }

    fn on_release(
        &mut self,
        driver: &mut impl AnimationDriver<HeaderProperty>,
        events: &mut Vec<PullEvent>,
    ) {
        if !self.pulling {
            return;
        }
        match self.state {
            PullState::ReleaseToRefresh => {
                self.set_state(PullState::Refreshing, events);
                self.snap_back(!self.opts.refreshing_header_visible, driver, events);
                events.push(PullEvent::Refresh);
            }
            PullState::PullToRefresh => {
                self.snap_back(true, driver, events);
            }
            PullState::Refreshing => {}
        }
        self.end_pull(events);
    }

    fn end_pull(&mut self, events: &mut Vec<PullEvent>) {
        if self.pulling {
            self.pulling = false;
            events.push(PullEvent::PullEnded);
        }
    }

    fn set_margin(&mut self, margin: f64, events: &mut Vec<PullEvent>) {
        if margin != self.margin {
            self.margin = margin;
            events.push(PullEvent::Margin { px: margin });
        }
    }

    fn set_state(&mut self, state: PullState, events: &mut Vec<PullEvent>) {
        if state != self.state {
            events.push(PullEvent::StateChanged {
                from: self.state,
                to: state,
            });
            self.state = state;
        }
    }

    fn snap_back(
        &mut self,
        reset: bool,
        driver: &mut impl AnimationDriver<HeaderProperty>,
        events: &mut Vec<PullEvent>,
    ) {
        if self.snap_token.is_some() {
            return;
        }
        let target = if reset { -self.header_height } else { 0.0 };
        if self.margin == target {
            if reset {
                self.reset_header(events);
            }
            return;
        }
        let token = driver.animate(Animation {
            target: HeaderProperty::TopMargin,
            from: self.margin,
            to: target,
            duration_ms: self.opts.bounce_ms,
        });
        self.snap_token = Some(token);
        self.snap_target = target;
        self.snap_reset = reset;
        events.push(PullEvent::SnapBack { hidden: reset });
    }

    fn reset_header(&mut self, events: &mut Vec<PullEvent>) {
        self.set_margin(-self.header_height, events);
        self.set_state(PullState::PullToRefresh, events);
    }
}
