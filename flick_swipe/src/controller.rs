// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swipe gesture state machine.
//!
//! ## Overview
//!
//! [`SwipeController`] turns pointer events into row gestures. One gesture
//! moves through IDLE → TRACKING (a row was hit) → PULLING (direction and
//! action resolved) → ANIMATING (released, animation in flight) → IDLE.
//!
//! ## Commit rules
//!
//! A release commits ("swaps") when the drag traveled more than half the row
//! width, or when the release velocity qualifies as a fling: at least the
//! configured minimum, at most the maximum, horizontally dominant
//! (`2·|vy| < |vx|`), and in a direction the row's state permits. When only
//! the fling qualifies, the fling direction wins over the drag direction.
//!
//! ## Re-entrancy
//!
//! All state is touched from the host's event thread. A row with an
//! animation in flight is not eligible for a new gesture; everything else
//! is, because each completion closed over its position at commit time.

use alloc::vec::Vec;

use flick_motion::animate::{Animation, AnimationDriver, AnimationToken};
use flick_motion::classify::{Classification, GestureClassifier};
use flick_motion::types::{Axis, PointerEvent, Sample};
use flick_motion::velocity::VelocityTracker;
use kurbo::{Point, Rect};

use crate::dismiss::DismissBatcher;
use crate::host::{ListHost, ViewTarget};
use crate::options::{OffsetMetric, OptionsError, SwipeAction, SwipeMode, SwipeOptions};
use crate::state::ItemStateStore;
use crate::types::{DISPLACE_CHOICE, SCROLL_GUARD_MS, ScrollState, SwipeEvent, SwipeProperty};

/// Whether a drag in the given direction is legal.
///
/// Legality depends on whether the row is currently open: a one-sided mode
/// forbids opening the other way, but still allows the closing drag of a row
/// it opened. The full table:
///
/// | mode  | closed, right | closed, left | open, right | open, left |
/// |-------|---------------|--------------|-------------|------------|
/// | none  | no            | no           | no          | no         |
/// | both  | yes           | yes          | yes         | yes        |
/// | left  | no            | yes          | yes         | no         |
/// | right | yes           | no           | no          | yes        |
pub fn direction_allowed(mode: SwipeMode, swiped: bool, to_right: bool) -> bool {
    if mode.is_empty() {
        return false;
    }
    if mode.contains(SwipeMode::BOTH) {
        return true;
    }
    let open_ward = mode == SwipeMode::RIGHT;
    if swiped {
        // Only the closing direction remains legal.
        to_right != open_ward
    } else {
        to_right == open_ward
    }
}

/// The row a gesture is acting on. At most one exists at a time.
#[derive(Clone, Debug)]
struct MovingItem {
    position: usize,
    frame: Rect,
    /// Translation currently applied to the moving layer.
    translation: f64,
}

/// Transient per-gesture tracking state; dropped on every gesture exit,
/// which releases the velocity tracker exactly once.
#[derive(Clone, Debug)]
struct Motion {
    down_x: f64,
    to_right: bool,
    pulling: bool,
    tracker: VelocityTracker,
}

/// What to do when an animation completes. The position is captured at
/// commit time so a finishing animation cannot touch a newer gesture's row.
#[derive(Copy, Clone, Debug)]
enum Completion {
    Reveal {
        position: usize,
        swap: bool,
        to_right: bool,
    },
    Dismiss {
        position: usize,
        swap: bool,
    },
    Choice {
        position: usize,
    },
    Collapse {
        position: usize,
    },
}

impl Completion {
    fn position(&self) -> usize {
        match *self {
            Self::Reveal { position, .. }
            | Self::Dismiss { position, .. }
            | Self::Choice { position }
            | Self::Collapse { position } => position,
        }
    }
}

/// The swipe-list gesture engine.
///
/// Feed it pointer events with [`handle_event`](Self::handle_event), scroll
/// activity with [`scroll_state_changed`](Self::scroll_state_changed), and
/// animation completions with [`animation_finished`](Self::animation_finished).
/// Every entry point returns the [`SwipeEvent`]s produced, in order.
pub struct SwipeController {
    opts: SwipeOptions,
    /// Effective actions; forced to `Choice` while any row is checked.
    action_left: SwipeAction,
    action_right: SwipeAction,
    store: ItemStateStore,
    batcher: DismissBatcher,
    classifier: GestureClassifier,
    moving: Option<MovingItem>,
    motion: Option<Motion>,
    /// Action resolved for the gesture in progress.
    action: SwipeAction,
    view_width: f64,
    enabled: bool,
    scrolling: bool,
    guard_until: Option<u64>,
    pending: Vec<(AnimationToken, Completion)>,
}

impl core::fmt::Debug for SwipeController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwipeController")
            .field("items", &self.store.len())
            .field("action", &self.action)
            .field("enabled", &self.enabled)
            .field("pending_animations", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl SwipeController {
    /// Create a controller from validated options.
    pub fn new(opts: SwipeOptions) -> Result<Self, OptionsError> {
        let opts = opts.validated()?;
        Ok(Self {
            action_left: opts.action_left,
            action_right: opts.action_right,
            classifier: GestureClassifier::new(opts.slop),
            store: ItemStateStore::new(),
            batcher: DismissBatcher::new(),
            moving: None,
            motion: None,
            action: SwipeAction::None,
            view_width: 1.0,
            enabled: true,
            scrolling: false,
            guard_until: None,
            pending: Vec::new(),
            opts,
        })
    }

    /// Current configuration.
    pub fn options(&self) -> &SwipeOptions {
        &self.opts
    }

    /// Effective left/right actions (forced to `Choice` while rows are
    /// checked).
    pub fn current_actions(&self) -> (SwipeAction, SwipeAction) {
        (self.action_left, self.action_right)
    }

    /// Whether any swipe direction is enabled at all.
    pub fn is_swipe_enabled(&self) -> bool {
        !self.opts.mode.is_empty()
    }

    /// Whether a drag is currently in progress (the host should suppress
    /// its own scrolling while this holds).
    pub fn is_gesture_active(&self) -> bool {
        self.motion.as_ref().is_some_and(|m| m.pulling)
    }

    /// Whether `position` is open.
    pub fn is_swiped(&self, position: usize) -> bool {
        self.store.is_swiped(position)
    }

    /// Whether `position` is checked.
    pub fn is_checked(&self, position: usize) -> bool {
        self.store.is_checked(position)
    }

    /// Checked positions, ascending.
    pub fn checked_positions(&self) -> Vec<usize> {
        self.store.checked_positions()
    }

    /// Number of checked rows.
    pub fn checked_count(&self) -> usize {
        self.store.checked_count()
    }

    /// Open positions, ascending.
    pub fn swiped_positions(&self) -> Vec<usize> {
        self.store.swiped_positions()
    }

    // --- option setters ---

    /// Change the permitted swipe directions.
    pub fn set_mode(&mut self, mode: SwipeMode) {
        self.opts.mode = mode;
    }

    /// Change the leftward action.
    pub fn set_action_left(&mut self, action: SwipeAction) {
        self.opts.action_left = action;
        if self.store.checked_count() == 0 {
            self.action_left = action;
        }
    }

    /// Change the rightward action.
    pub fn set_action_right(&mut self, action: SwipeAction) {
        self.opts.action_right = action;
        if self.store.checked_count() == 0 {
            self.action_right = action;
        }
    }

    /// Change the offset interpretation.
    pub fn set_offset_metric(&mut self, metric: OffsetMetric) {
        self.opts.offset_metric = metric;
    }

    /// Change the left open offset.
    pub fn set_offset_left(&mut self, offset: f64) {
        self.opts.offset_left = offset.max(0.0);
    }

    /// Change the right open offset.
    pub fn set_offset_right(&mut self, offset: f64) {
        self.opts.offset_right = offset.max(0.0);
    }

    /// Change the release-animation duration; `0` is ignored.
    pub fn set_animation_ms(&mut self, ms: u64) {
        if ms > 0 {
            self.opts.animation_ms = ms;
        }
    }

    /// Toggle open-on-long-press.
    pub fn set_open_on_long_press(&mut self, open: bool) {
        self.opts.open_on_long_press = open;
    }

    /// Toggle multi-select.
    pub fn set_multiple_select(&mut self, multiple: bool) {
        self.opts.multiple_select = multiple;
    }

    /// Toggle close-open-rows-on-scroll.
    pub fn set_close_on_scroll(&mut self, close: bool) {
        self.opts.close_on_scroll = close;
    }

    // --- data-set lifecycle ---

    /// Re-sync per-row state with a data set of `count` rows.
    pub fn reset_items(&mut self, count: usize) -> Vec<SwipeEvent> {
        self.store.resize(count);
        alloc::vec![SwipeEvent::ListChanged]
    }

    /// Enable or disable the engine.
    ///
    /// Disabling cancels any gesture in progress and immediately closes all
    /// open rows (the host does this while the pull header is active).
    pub fn set_enabled(
        &mut self,
        enabled: bool,
        host: &mut impl ListHost,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) -> Vec<SwipeEvent> {
        self.enabled = enabled;
        let mut events = Vec::new();
        if !enabled {
            events.extend(self.cancel_gesture(host, driver));
            events.extend(self.close_open_rows(host, driver));
        }
        events
    }

    // --- input ---

    /// Process one pointer event.
    pub fn handle_event(
        &mut self,
        event: PointerEvent,
        host: &mut impl ListHost,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) -> Vec<SwipeEvent> {
        if !self.is_swipe_enabled() {
            return Vec::new();
        }
        match event {
            PointerEvent::Down(s) => self.on_down(s, host),
            PointerEvent::Move(s) => self.on_move(s, host),
            PointerEvent::Up(s) => self.on_up(s, host, driver),
            PointerEvent::Cancel(_) => self.cancel_gesture(host, driver),
        }
    }

    /// React to list scroll activity.
    ///
    /// Scrolling pauses gesture recognition; once the list settles,
    /// recognition resumes only after a short guard delay, judged against
    /// the next down's timestamp.
    pub fn scroll_state_changed(
        &mut self,
        state: ScrollState,
        now: u64,
        host: &mut impl ListHost,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) -> Vec<SwipeEvent> {
        let mut events = Vec::new();
        match state {
            ScrollState::TouchScroll => {
                self.scrolling = true;
                if self.opts.close_on_scroll {
                    events.extend(self.close_open_rows(host, driver));
                }
                events.extend(self.cancel_gesture(host, driver));
            }
            ScrollState::Fling => {
                self.scrolling = true;
                events.extend(self.cancel_gesture(host, driver));
            }
            ScrollState::Idle => {
                self.scrolling = false;
                self.guard_until = Some(now + SCROLL_GUARD_MS);
            }
        }
        events
    }

    /// Report completion of an animation started by this controller.
    ///
    /// Unknown tokens are ignored.
    pub fn animation_finished(
        &mut self,
        token: AnimationToken,
        host: &mut impl ListHost,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) -> Vec<SwipeEvent> {
        let Some(idx) = self.pending.iter().position(|(t, _)| *t == token) else {
            return Vec::new();
        };
        let (_, completion) = self.pending.remove(idx);
        let mut events = Vec::new();
        match completion {
            Completion::Reveal {
                position,
                swap,
                to_right,
            } => {
                if swap {
                    let now_open = !self.store.is_swiped(position);
                    self.store.set_swiped(position, now_open, to_right);
                    if now_open {
                        events.push(SwipeEvent::Swiped { position, to_right });
                    } else {
                        events.push(SwipeEvent::Unswiped {
                            position,
                            from_right: self.store.is_swiped_right(position),
                        });
                    }
                }
                host.set_clickable(position, self.store.is_swiped(position));
            }
            Completion::Dismiss { position, swap } => {
                if swap {
                    events.extend(self.close_open_rows(host, driver));
                    events.extend(self.collapse_row(position, host, driver));
                    events.extend(self.flush_dismissals());
                } else {
                    host.set_clickable(position, self.store.is_swiped(position));
                }
            }
            Completion::Choice { position } => {
                if self.opts.has_back_view {
                    host.set_back_visible(position, true);
                }
                host.set_clickable(position, self.store.is_swiped(position));
            }
            Completion::Collapse { .. } => {
                self.batcher.collapse_finished();
                events.extend(self.flush_dismissals());
            }
        }
        events
    }

    // --- programmatic row operations ---

    /// Open `position` with an animation; a no-op when already open.
    ///
    /// The row opens toward the side the mode permits (leftward unless only
    /// rightward swiping is enabled).
    pub fn swipe(
        &mut self,
        position: usize,
        _host: &mut impl ListHost,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) -> Vec<SwipeEvent> {
        if self.store.is_swiped(position) || self.has_pending_animation(position) {
            return Vec::new();
        }
        let to_right = self.opts.mode == SwipeMode::RIGHT;
        let token = driver.animate(Animation {
            target: SwipeProperty::Translation(ViewTarget::front(position)),
            from: 0.0,
            to: self.open_offset(to_right),
            duration_ms: self.opts.animation_ms,
        });
        self.pending.push((
            token,
            Completion::Reveal {
                position,
                swap: true,
                to_right,
            },
        ));
        Vec::new()
    }

    /// Close `position` with an animation; a no-op when already closed.
    pub fn unswipe(
        &mut self,
        position: usize,
        _host: &mut impl ListHost,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) -> Vec<SwipeEvent> {
        if !self.store.is_swiped(position) || self.has_pending_animation(position) {
            return Vec::new();
        }
        let from_right = self.store.is_swiped_right(position);
        let token = driver.animate(Animation {
            target: SwipeProperty::Translation(ViewTarget::front(position)),
            from: self.open_offset(from_right),
            to: 0.0,
            duration_ms: self.opts.animation_ms,
        });
        self.pending.push((
            token,
            Completion::Reveal {
                position,
                swap: true,
                to_right: from_right,
            },
        ));
        Vec::new()
    }

    /// Close every open row in the viewport.
    pub fn close_open_rows(
        &mut self,
        host: &mut impl ListHost,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) -> Vec<SwipeEvent> {
        let mut events = Vec::new();
        let first = host.first_visible();
        let last = host.last_visible();
        for position in first..=last {
            if self.store.is_swiped(position) {
                events.extend(self.unswipe(position, host, driver));
            }
        }
        events
    }

    /// Uncheck every checked row and leave choice mode.
    pub fn uncheck_all(&mut self) -> Vec<SwipeEvent> {
        let mut events = Vec::new();
        for position in self.store.checked_positions() {
            self.store.set_checked(position, false);
            events.push(SwipeEvent::ChoiceChanged {
                position,
                checked: false,
            });
        }
        events.push(SwipeEvent::ChoiceEnded);
        self.restore_actions();
        events
    }

    /// Register a dismissal for `position` without releasing the batch.
    ///
    /// Starts the height-collapse animation when the row is laid out;
    /// off-screen rows are only registered. Call
    /// [`flush_dismissals`](Self::flush_dismissals) (or let the last
    /// collapse completion do it) to release the batch.
    pub fn request_dismiss(
        &mut self,
        position: usize,
        host: &mut impl ListHost,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) -> Vec<SwipeEvent> {
        self.collapse_row(position, host, driver)
    }

    /// Dismiss one row: register it and release the batch if nothing is
    /// animating.
    pub fn dismiss(
        &mut self,
        position: usize,
        host: &mut impl ListHost,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) -> Vec<SwipeEvent> {
        let mut events = self.collapse_row(position, host, driver);
        events.extend(self.flush_dismissals());
        events
    }

    /// Dismiss every checked row as one batch.
    pub fn dismiss_checked(
        &mut self,
        host: &mut impl ListHost,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) -> Vec<SwipeEvent> {
        let mut events = Vec::new();
        for position in self.store.checked_positions() {
            events.extend(self.collapse_row(position, host, driver));
        }
        events.extend(self.flush_dismissals());
        self.restore_actions();
        events
    }

    /// Release the pending dismissal batch if no collapse is in flight.
    pub fn flush_dismissals(&mut self) -> Vec<SwipeEvent> {
        match self.batcher.flush() {
            Some(positions) => {
                self.store.remove_descending(&positions);
                alloc::vec![SwipeEvent::Dismiss { positions }]
            }
            None => Vec::new(),
        }
    }

    /// A long press on `position` opens it, when configured to.
    pub fn long_press(
        &mut self,
        position: usize,
        host: &mut impl ListHost,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) -> Vec<SwipeEvent> {
        if self.opts.open_on_long_press && self.enabled && !self.scrolling {
            self.swipe(position, host, driver)
        } else {
            Vec::new()
        }
    }

    // --- gesture phases ---

    fn on_down(&mut self, s: Sample, host: &mut impl ListHost) -> Vec<SwipeEvent> {
        self.view_width = host.width().max(1.0);
        if !self.enabled || self.scrolling {
            return Vec::new();
        }
        if let Some(guard) = self.guard_until {
            if s.t < guard {
                return Vec::new();
            }
            self.guard_until = None;
        }
        self.action = SwipeAction::None;
        self.classifier.begin(s.x, s.y);

        let point = Point::new(s.x, s.y);
        for i in 0..host.child_count() {
            let Some(frame) = host.child_frame(i) else {
                continue;
            };
            if !frame.contains(point) {
                continue;
            }
            let Some(position) = host.position_for_child(i) else {
                continue;
            };
            if !host.is_enabled(position) || !host.is_interactive(position) {
                continue;
            }
            if self.has_pending_animation(position) {
                // The row is mid-animation; this gesture passes through.
                break;
            }
            let swiped = self.store.is_swiped(position);
            host.set_clickable(position, !swiped);
            let translation = if swiped {
                self.open_offset(self.store.is_swiped_right(position))
            } else {
                0.0
            };
            self.moving = Some(MovingItem {
                position,
                frame,
                translation,
            });
            let mut tracker = VelocityTracker::new();
            tracker.begin(s);
            self.motion = Some(Motion {
                down_x: s.x,
                to_right: false,
                pulling: false,
                tracker,
            });
            break;
        }
        Vec::new()
    }

    fn on_move(&mut self, s: Sample, host: &mut impl ListHost) -> Vec<SwipeEvent> {
        let mut events = Vec::new();
        if !self.enabled || self.scrolling {
            return events;
        }
        let Some(position) = self.moving.as_ref().map(|m| m.position) else {
            return events;
        };
        let swiped = self.store.is_swiped(position);
        let mode = self.opts.mode;
        let slop = self.opts.slop;
        let action_unresolved = self.action == SwipeAction::None;
        self.classifier.update(s.x, s.y);
        let horizontal = self.classifier.classification() == Classification::Horizontal;

        let mut started = None;
        let mut delta;
        {
            let Some(motion) = self.motion.as_mut() else {
                return events;
            };
            motion.tracker.push(s);
            delta = s.x - motion.down_x;
            if !motion.pulling {
                if delta != 0.0 && !direction_allowed(mode, swiped, delta > 0.0) {
                    // Rejected direction: fold it into the origin so a legal
                    // drag can still start cleanly from here.
                    motion.down_x = s.x;
                    delta = 0.0;
                }
                let vx = motion.tracker.velocity(Axis::Horizontal).abs();
                let vy = motion.tracker.velocity(Axis::Vertical).abs();
                if delta.abs() > slop && action_unresolved && vy < vx && horizontal {
                    motion.pulling = true;
                    motion.to_right = delta > 0.0;
                    started = Some(motion.to_right);
                }
            }
            if !motion.pulling {
                return events;
            }
        }

        if let Some(to_right) = started {
            if swiped {
                self.action = SwipeAction::Reveal;
                events.push(SwipeEvent::StartClose { position, to_right });
            } else {
                self.action = self.resolve_action(to_right);
                events.push(SwipeEvent::StartOpen {
                    position,
                    action: self.action,
                    to_right,
                });
            }
            host.request_disallow_intercept(true);
            host.cancel_touch_stream();
            if self.opts.has_back_view {
                host.set_back_visible(position, self.action.shows_back_view());
            }
        }

        // Dragging an open row continues from its open position.
        if swiped {
            delta += self.open_offset(self.store.is_swiped_right(position));
        }
        events.extend(self.apply_move(position, delta, host));
        events
    }

    fn apply_move(
        &mut self,
        position: usize,
        delta: f64,
        host: &mut impl ListHost,
    ) -> Vec<SwipeEvent> {
        let mut events = alloc::vec![SwipeEvent::Move { position, x: delta }];

        // Crossing the rest position mid-drag re-resolves direction and
        // action.
        let flipped = match self.motion.as_mut() {
            Some(motion) if delta > 0.0 && !motion.to_right => {
                motion.to_right = true;
                true
            }
            Some(motion) if delta < 0.0 && motion.to_right => {
                motion.to_right = false;
                true
            }
            _ => false,
        };
        if flipped {
            self.action = self.resolve_action(delta > 0.0);
            if self.opts.has_back_view {
                host.set_back_visible(position, self.action.shows_back_view());
            }
        }

        match self.action {
            SwipeAction::Dismiss => {
                host.set_translation(ViewTarget::row(position), delta);
                let alpha = (1.0 - 2.0 * delta.abs() / self.view_width).clamp(0.0, 1.0);
                host.set_alpha(ViewTarget::row(position), alpha);
                self.set_current_translation(delta);
            }
            SwipeAction::Choice => {
                // Rubber band: the row only follows inside the deadband.
                if delta.abs() < DISPLACE_CHOICE {
                    host.set_translation(ViewTarget::front(position), delta);
                    self.set_current_translation(delta);
                }
            }
            _ => {
                host.set_translation(ViewTarget::front(position), delta);
                self.set_current_translation(delta);
            }
        }
        events
    }

    fn on_up(
        &mut self,
        s: Sample,
        host: &mut impl ListHost,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) -> Vec<SwipeEvent> {
        let Some(position) = self.moving.as_ref().map(|m| m.position) else {
            return Vec::new();
        };
        let mut events = Vec::new();

        let (pulling, down_x, drag_to_right, vx_signed, vy_abs) = {
            let Some(motion) = self.motion.as_mut() else {
                return events;
            };
            motion.tracker.push(s);
            (
                motion.pulling,
                motion.down_x,
                motion.to_right,
                motion.tracker.velocity(Axis::Horizontal),
                motion.tracker.velocity(Axis::Vertical).abs(),
            )
        };

        if !pulling {
            if (s.x - down_x).abs() <= self.opts.slop {
                events.push(self.click_event(position, s));
            }
            self.clear_gesture();
            return events;
        }

        let delta = s.x - down_x;
        let swiped = self.store.is_swiped(position);
        let swiped_right = self.store.is_swiped_right(position);

        let mut vel_x = vx_signed.abs();
        if !swiped {
            // A fling the mode forbids cannot commit an open.
            if self.opts.mode == SwipeMode::LEFT && vx_signed > 0.0 {
                vel_x = 0.0;
            }
            if self.opts.mode == SwipeMode::RIGHT && vx_signed < 0.0 {
                vel_x = 0.0;
            }
        }

        let mut swap = false;
        let mut swap_right = false;
        if self.opts.min_fling_velocity <= vel_x
            && vel_x <= self.opts.max_fling_velocity
            && vy_abs * 2.0 < vel_x
        {
            swap_right = vx_signed > 0.0;
            if swap_right != drag_to_right && self.action_left != self.action_right {
                // The fling points at a different action than the drag
                // resolved; refuse rather than commit the wrong one.
                swap = false;
            } else if swiped && swiped_right && swap_right {
                swap = false;
            } else if swiped && !swiped_right && !swap_right {
                swap = false;
            } else {
                swap = true;
            }
        } else if delta.abs() > self.view_width / 2.0 {
            swap = true;
            swap_right = delta > 0.0;
        }

        if self.action == SwipeAction::Choice && swap {
            // Listeners observe the toggle synchronously, before the
            // snap-back animation starts.
            events.extend(self.toggle_checked(position, host, driver));
        }
        self.start_release_animation(position, swap, swap_right, driver);
        self.clear_gesture();
        events
    }

    /// Motion-cancel: identical to a release that cannot commit.
    fn cancel_gesture(
        &mut self,
        _host: &mut impl ListHost,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) -> Vec<SwipeEvent> {
        if let (Some(moving), Some(motion)) = (self.moving.as_ref(), self.motion.as_ref())
            && motion.pulling
        {
            let position = moving.position;
            self.start_release_animation(position, false, false, driver);
        }
        self.clear_gesture();
        Vec::new()
    }

    // --- internals ---

    fn clear_gesture(&mut self) {
        // Dropping `Motion` releases the velocity tracker.
        self.motion = None;
        self.moving = None;
        self.action = SwipeAction::None;
        self.classifier.end();
    }

    fn set_current_translation(&mut self, x: f64) {
        if let Some(moving) = self.moving.as_mut() {
            moving.translation = x;
        }
    }

    fn resolve_action(&self, to_right: bool) -> SwipeAction {
        let configured = if to_right {
            self.action_right
        } else {
            self.action_left
        };
        match configured {
            SwipeAction::Dismiss | SwipeAction::Choice => configured,
            _ => SwipeAction::Reveal,
        }
    }

    /// Signed translation of an open row.
    ///
    /// The one formula used both to position an already-open row during a
    /// drag and as the release-animation target.
    fn open_offset(&self, to_right: bool) -> f64 {
        match self.opts.offset_metric {
            OffsetMetric::Traveled => {
                if to_right {
                    self.opts.offset_left
                } else {
                    -self.opts.offset_right
                }
            }
            OffsetMetric::Remaining => {
                if to_right {
                    self.view_width - self.opts.offset_right
                } else {
                    -(self.view_width - self.opts.offset_left)
                }
            }
        }
    }

    fn release_target(&self, position: usize, swap: bool, swap_right: bool) -> f64 {
        if self.store.is_swiped(position) {
            if swap {
                0.0
            } else {
                self.open_offset(self.store.is_swiped_right(position))
            }
        } else if swap {
            self.open_offset(swap_right)
        } else {
            0.0
        }
    }

    fn start_release_animation(
        &mut self,
        position: usize,
        swap: bool,
        swap_right: bool,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) {
        let from = self.moving.as_ref().map_or(0.0, |m| m.translation);
        let duration_ms = self.opts.animation_ms;
        match self.action {
            SwipeAction::Choice => {
                let token = driver.animate(Animation {
                    target: SwipeProperty::Translation(ViewTarget::front(position)),
                    from,
                    to: 0.0,
                    duration_ms,
                });
                self.pending.push((token, Completion::Choice { position }));
            }
            SwipeAction::Dismiss => {
                let to = self.release_target(position, swap, swap_right);
                let token = driver.animate(Animation {
                    target: SwipeProperty::Translation(ViewTarget::row(position)),
                    from,
                    to,
                    duration_ms,
                });
                let alpha_from = (1.0 - 2.0 * from.abs() / self.view_width).clamp(0.0, 1.0);
                let alpha_to = if swap { 0.0 } else { 1.0 };
                // Completion rides on the translation; the fade needs no
                // continuation of its own.
                let _ = driver.animate(Animation {
                    target: SwipeProperty::Alpha(ViewTarget::row(position)),
                    from: alpha_from,
                    to: alpha_to,
                    duration_ms,
                });
                self.pending.push((token, Completion::Dismiss { position, swap }));
            }
            _ => {
                let to = self.release_target(position, swap, swap_right);
                let token = driver.animate(Animation {
                    target: SwipeProperty::Translation(ViewTarget::front(position)),
                    from,
                    to,
                    duration_ms,
                });
                self.pending.push((
                    token,
                    Completion::Reveal {
                        position,
                        swap,
                        to_right: swap_right,
                    },
                ));
            }
        }
    }

    fn toggle_checked(
        &mut self,
        position: usize,
        host: &mut impl ListHost,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) -> Vec<SwipeEvent> {
        let mut events = Vec::new();
        let last_count = self.store.checked_count();
        let was = self.store.is_checked(position);
        if !was && !self.opts.multiple_select {
            for other in self.store.checked_positions() {
                self.store.set_checked(other, false);
                events.push(SwipeEvent::ChoiceChanged {
                    position: other,
                    checked: false,
                });
            }
        }
        self.store.set_checked(position, !was);
        let count = self.store.checked_count();
        if last_count == 0 && count == 1 {
            events.push(SwipeEvent::ChoiceStarted);
            events.extend(self.close_open_rows(host, driver));
            self.action_left = SwipeAction::Choice;
            self.action_right = SwipeAction::Choice;
        }
        if last_count == 1 && count == 0 {
            events.push(SwipeEvent::ChoiceEnded);
            self.restore_actions();
        }
        events.push(SwipeEvent::ChoiceChanged {
            position,
            checked: !was,
        });
        events
    }

    fn restore_actions(&mut self) {
        self.action_left = self.opts.action_left;
        self.action_right = self.opts.action_right;
    }

    fn collapse_row(
        &mut self,
        position: usize,
        host: &mut impl ListHost,
        driver: &mut impl AnimationDriver<SwipeProperty>,
    ) -> Vec<SwipeEvent> {
        let first = host.first_visible();
        let visible = position >= first && position <= host.last_visible();
        if visible {
            let height = host
                .child_frame(position - first)
                .map_or(0.0, |f| f.height());
            if height > 0.0 {
                self.batcher.request(position, true);
                let token = driver.animate(Animation {
                    target: SwipeProperty::Height { position },
                    from: height,
                    to: 0.0,
                    duration_ms: self.opts.animation_ms,
                });
                self.pending.push((token, Completion::Collapse { position }));
                return Vec::new();
            }
        }
        // Off-screen: its height is already effectively collapsed.
        self.batcher.request(position, false);
        Vec::new()
    }

    fn has_pending_animation(&self, position: usize) -> bool {
        self.pending.iter().any(|(_, c)| c.position() == position)
    }

    fn click_event(&self, position: usize, s: Sample) -> SwipeEvent {
        if self.store.is_swiped(position) {
            let frame = self.moving.as_ref().map_or(Rect::ZERO, |m| m.frame);
            let offset = self.open_offset(self.store.is_swiped_right(position));
            let in_back = if offset >= 0.0 {
                // Open to the right: the back peeks out on the left.
                s.x < frame.x0 + offset
            } else {
                s.x > frame.x1 + offset
            };
            if in_back {
                return SwipeEvent::BackClicked { position };
            }
        }
        SwipeEvent::FrontClicked { position }
    }
}
