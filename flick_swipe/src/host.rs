// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-list capability consumed by the swipe engine.
//!
//! ## Overview
//!
//! The engine does not subclass or own a list widget; it talks to one
//! through [`ListHost`]. The trait is deliberately narrow: viewport
//! geometry for hit testing, per-row interaction flags, two touch-stream
//! coordination calls, and the handful of presentation properties the drag
//! manipulates directly. Everything animated goes through the separate
//! [`AnimationDriver`](flick_motion::animate::AnimationDriver) capability
//! instead.

use kurbo::Rect;

/// Which layer of a row a property addresses.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ViewLayer {
    /// The sliding front view (reveal and choice act here).
    Front,
    /// The whole row (dismiss slides and fades the row as one).
    Row,
}

/// Address of one row layer, as the host understands it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ViewTarget {
    /// List position of the row.
    pub position: usize,
    /// Layer within the row.
    pub layer: ViewLayer,
}

impl ViewTarget {
    /// The front view of `position`.
    pub fn front(position: usize) -> Self {
        Self {
            position,
            layer: ViewLayer::Front,
        }
    }

    /// The whole row at `position`.
    pub fn row(position: usize) -> Self {
        Self {
            position,
            layer: ViewLayer::Row,
        }
    }
}

/// Capability interface to the scrollable list hosting the engine.
///
/// Positions are stable data indices (already header/footer adjusted by the
/// host); viewport indices address currently laid-out children. Lookup
/// methods answer `None`/`false` for anything not laid out or not known —
/// the engine treats that as "not our gesture".
pub trait ListHost {
    /// Number of rows in the data set.
    fn item_count(&self) -> usize;

    /// Position of the first laid-out row.
    fn first_visible(&self) -> usize;

    /// Position of the last laid-out row.
    fn last_visible(&self) -> usize;

    /// Number of laid-out children.
    fn child_count(&self) -> usize;

    /// Frame of the child at `viewport_index`, in list coordinates.
    fn child_frame(&self, viewport_index: usize) -> Option<Rect>;

    /// List position of the child at `viewport_index`.
    fn position_for_child(&self, viewport_index: usize) -> Option<usize>;

    /// Width of the list viewport, in pixels.
    fn width(&self) -> f64;

    /// Whether the row at `position` is enabled in the data source.
    fn is_enabled(&self, position: usize) -> bool;

    /// Whether the row at `position` is an interactive item (not a
    /// decoration such as a header, footer, or separator).
    fn is_interactive(&self, position: usize) -> bool;

    /// Keep enclosing scroll containers from stealing the active gesture.
    fn request_disallow_intercept(&mut self, disallow: bool);

    /// Cancel the list's own in-flight touch handling; called once when a
    /// drag commits to the swipe gesture.
    fn cancel_touch_stream(&mut self);

    /// Set the horizontal translation of a row layer, in pixels.
    fn set_translation(&mut self, target: ViewTarget, x: f64);

    /// Set the opacity of a row layer, `0.0..=1.0`.
    fn set_alpha(&mut self, target: ViewTarget, alpha: f64);

    /// Show or hide the back view behind `position`.
    fn set_back_visible(&mut self, position: usize, visible: bool);

    /// Allow or suppress click handling on the front view of `position`.
    fn set_clickable(&mut self, position: usize, clickable: bool);
}
