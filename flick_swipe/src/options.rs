// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration: modes, actions, offsets, feel constants.

use bitflags::bitflags;

bitflags! {
    /// Directions in which swiping is permitted.
    ///
    /// An empty set disables the engine entirely; [`SwipeMode::BOTH`] allows
    /// opening to either side. A one-sided mode still permits the closing
    /// drag of an item opened to that side (see
    /// [`direction_allowed`](crate::controller::direction_allowed)).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SwipeMode: u8 {
        /// Leftward swipes are allowed (open by dragging left).
        const LEFT  = 0b0000_0001;
        /// Rightward swipes are allowed (open by dragging right).
        const RIGHT = 0b0000_0010;
        /// Both directions.
        const BOTH  = Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

impl Default for SwipeMode {
    fn default() -> Self {
        Self::BOTH
    }
}

/// What a committed swipe does to the row.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum SwipeAction {
    /// Slide the front view aside to expose the back view (drawer style).
    #[default]
    Reveal,
    /// Remove the row from the list after the commit.
    Dismiss,
    /// Toggle the row's checked flag; the row itself snaps back.
    Choice,
    /// Do nothing.
    None,
}

impl SwipeAction {
    /// Whether this action exposes the back view during the drag.
    pub fn shows_back_view(self) -> bool {
        !matches!(self, Self::Choice)
    }

    /// Whether this action needs a back layer to exist at all.
    pub fn needs_back_view(self) -> bool {
        matches!(self, Self::Reveal | Self::Choice)
    }
}

/// How the configured open offsets are interpreted.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum OffsetMetric {
    /// Offset is the part of the row still visible after opening; the front
    /// view travels `width - offset`.
    #[default]
    Remaining,
    /// Offset is the distance traveled from the rest position.
    Traveled,
}

/// Errors detected when validating a configuration.
///
/// These are construction-time failures: an engine cannot run with them, so
/// they are reported eagerly rather than degraded at runtime.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OptionsError {
    /// A reveal or choice action is configured but the host declared no
    /// back layer to expose.
    MissingBackView,
    /// A configured offset is negative.
    NegativeOffset,
}

impl core::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingBackView => {
                write!(f, "reveal/choice actions require a back view layer")
            }
            Self::NegativeOffset => write!(f, "swipe offsets must be non-negative"),
        }
    }
}

impl core::error::Error for OptionsError {}

/// Host configuration for the swipe engine.
///
/// Construct with [`SwipeOptions::default`], adjust fields, then hand it to
/// [`SwipeController::new`](crate::controller::SwipeController::new), which
/// validates it. Most fields can be changed later through controller
/// setters.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeOptions {
    /// Permitted swipe directions.
    pub mode: SwipeMode,
    /// Action bound to a leftward swipe.
    pub action_left: SwipeAction,
    /// Action bound to a rightward swipe.
    pub action_right: SwipeAction,
    /// Interpretation of `offset_left` / `offset_right`.
    pub offset_metric: OffsetMetric,
    /// Offset for rows opened by a leftward swipe, in pixels.
    pub offset_left: f64,
    /// Offset for rows opened by a rightward swipe, in pixels.
    pub offset_right: f64,
    /// Duration of release animations, in milliseconds. `0` selects
    /// [`DEFAULT_ANIMATION_MS`].
    pub animation_ms: u64,
    /// Open a row on long press.
    pub open_on_long_press: bool,
    /// Allow more than one row to be checked at a time.
    pub multiple_select: bool,
    /// Close open rows when the list starts a touch scroll.
    pub close_on_scroll: bool,
    /// Whether the host lays out a back view behind each row.
    pub has_back_view: bool,
    /// Minimum intentional-drag displacement, in pixels.
    pub slop: f64,
    /// Minimum horizontal release velocity that counts as a fling, px/s.
    pub min_fling_velocity: f64,
    /// Maximum horizontal release velocity that counts as a fling, px/s.
    pub max_fling_velocity: f64,
}

/// Release-animation duration used when the host leaves it at `0`.
pub const DEFAULT_ANIMATION_MS: u64 = 250;

/// Default minimum fling velocity, px/s.
pub const DEFAULT_MIN_FLING: f64 = 800.0;

/// Default maximum fling velocity, px/s.
pub const DEFAULT_MAX_FLING: f64 = 12_000.0;

impl Default for SwipeOptions {
    fn default() -> Self {
        Self {
            mode: SwipeMode::BOTH,
            action_left: SwipeAction::Reveal,
            action_right: SwipeAction::Reveal,
            offset_metric: OffsetMetric::Remaining,
            offset_left: 0.0,
            offset_right: 0.0,
            animation_ms: DEFAULT_ANIMATION_MS,
            open_on_long_press: true,
            multiple_select: true,
            close_on_scroll: true,
            has_back_view: true,
            slop: flick_motion::classify::DEFAULT_SLOP,
            min_fling_velocity: DEFAULT_MIN_FLING,
            max_fling_velocity: DEFAULT_MAX_FLING,
        }
    }
}

impl SwipeOptions {
    /// Validate and normalize.
    ///
    /// Fails fast on configurations the engine cannot run with; fills in
    /// the default animation duration when unset.
    pub fn validated(mut self) -> Result<Self, OptionsError> {
        if self.offset_left < 0.0 || self.offset_right < 0.0 {
            return Err(OptionsError::NegativeOffset);
        }
        if !self.has_back_view
            && (self.action_left.needs_back_view() || self.action_right.needs_back_view())
        {
            return Err(OptionsError::MissingBackView);
        }
        if self.animation_ms == 0 {
            self.animation_ms = DEFAULT_ANIMATION_MS;
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_validate() {
        let opts = SwipeOptions::default().validated().unwrap();
        assert_eq!(opts.animation_ms, DEFAULT_ANIMATION_MS);
        assert_eq!(opts.mode, SwipeMode::BOTH);
    }

    #[test]
    fn zero_duration_gets_default() {
        let opts = SwipeOptions {
            animation_ms: 0,
            ..Default::default()
        };
        assert_eq!(opts.validated().unwrap().animation_ms, DEFAULT_ANIMATION_MS);
    }

    #[test]
    fn reveal_without_back_view_fails_fast() {
        let opts = SwipeOptions {
            has_back_view: false,
            ..Default::default()
        };
        assert_eq!(opts.validated(), Err(OptionsError::MissingBackView));
    }

    #[test]
    fn dismiss_only_needs_no_back_view() {
        let opts = SwipeOptions {
            has_back_view: false,
            action_left: SwipeAction::Dismiss,
            action_right: SwipeAction::Dismiss,
            ..Default::default()
        };
        assert!(opts.validated().is_ok());
    }

    #[test]
    fn negative_offset_rejected() {
        let opts = SwipeOptions {
            offset_left: -4.0,
            ..Default::default()
        };
        assert_eq!(opts.validated(), Err(OptionsError::NegativeOffset));
    }

    #[test]
    fn mode_flags_compose() {
        assert!(SwipeMode::BOTH.contains(SwipeMode::LEFT));
        assert!(SwipeMode::BOTH.contains(SwipeMode::RIGHT));
        assert!(SwipeMode::empty().is_empty());
    }
}
