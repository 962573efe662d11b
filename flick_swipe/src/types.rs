// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events emitted by the engine and the animated-property address space.
//!
//! ## Overview
//!
//! Every controller entry point returns a `Vec<SwipeEvent>`; the host
//! dispatches them synchronously on its event thread. This replaces a
//! many-method listener interface with one typed stream per concern.

use alloc::vec::Vec;

use crate::host::ViewTarget;
use crate::options::SwipeAction;

/// Events reported to the host.
#[derive(Clone, Debug, PartialEq)]
pub enum SwipeEvent {
    /// A drag committed to opening `position`; `action` is what a commit
    /// will do and the host should prepare the row (back view visibility is
    /// already handled through [`ListHost`](crate::host::ListHost)).
    StartOpen {
        /// Row being dragged.
        position: usize,
        /// Action resolved for this drag direction.
        action: SwipeAction,
        /// Drag direction.
        to_right: bool,
    },
    /// A drag started closing an already-open row.
    StartClose {
        /// Row being dragged.
        position: usize,
        /// Drag direction.
        to_right: bool,
    },
    /// The tracked row moved; `x` is its current translation.
    Move {
        /// Row being dragged.
        position: usize,
        /// Current translation in pixels (signed).
        x: f64,
    },
    /// A row finished opening.
    Swiped {
        /// Row that opened.
        position: usize,
        /// It opened to the right.
        to_right: bool,
    },
    /// A row finished closing.
    Unswiped {
        /// Row that closed.
        position: usize,
        /// It had been open to the right.
        from_right: bool,
    },
    /// A dismissal batch completed. Positions are sorted descending so the
    /// host can remove them one by one without re-indexing.
    Dismiss {
        /// Dismissed positions, descending.
        positions: Vec<usize>,
    },
    /// A row's checked flag changed.
    ChoiceChanged {
        /// Row whose flag changed.
        position: usize,
        /// New value.
        checked: bool,
    },
    /// The first row became checked; choice mode begins.
    ChoiceStarted,
    /// The last checked row was unchecked; choice mode ends.
    ChoiceEnded,
    /// The front view of a closed row was tapped.
    FrontClicked {
        /// Tapped row.
        position: usize,
    },
    /// The exposed back view of an open row was tapped.
    BackClicked {
        /// Tapped row.
        position: usize,
    },
    /// The per-row state store was re-synced with the data set.
    ListChanged,
}

/// Properties the engine animates through
/// [`AnimationDriver`](flick_motion::animate::AnimationDriver).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SwipeProperty {
    /// Horizontal translation of a row layer.
    Translation(ViewTarget),
    /// Opacity of a row layer.
    Alpha(ViewTarget),
    /// Height of the whole row (dismiss collapse).
    Height {
        /// Collapsing row.
        position: usize,
    },
}

/// Scroll activity reported by the host list.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ScrollState {
    /// The list is at rest.
    Idle,
    /// The user is scrolling with a finger down.
    TouchScroll,
    /// The list is coasting after a fling.
    Fling,
}

/// Deadband radius for the choice action's rubber-band drag, in pixels.
pub const DISPLACE_CHOICE: f64 = 80.0;

/// Guard delay after a scroll settles before gestures resume, in
/// milliseconds.
pub const SCROLL_GUARD_MS: u64 = 500;
