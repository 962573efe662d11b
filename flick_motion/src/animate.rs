// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The animation-driver capability consumed by the gesture engines.
//!
//! ## Overview
//!
//! The engines never run animations themselves. They describe one —
//! "property `P`, from `a` to `b`, over `d` milliseconds" — and hand it to
//! an [`AnimationDriver`] the host toolkit implements. The driver returns an
//! [`AnimationToken`]; when the animation reaches its end value the host
//! calls the owning controller's `animation_finished` with that token, which
//! is the controllers' only suspension point.
//!
//! Each engine defines its own property address type `P` (a row's
//! translation, a header's top margin, …); this module is agnostic.

/// Opaque handle for an in-flight animation, minted by the driver.
///
/// Tokens only need to be unique among animations the driver currently has
/// in flight.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AnimationToken(pub u64);

/// A description of one property animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Animation<P> {
    /// The property to animate, addressed in engine-specific terms.
    pub target: P,
    /// Starting value (the property's current value as the engine knows it).
    pub from: f64,
    /// End value.
    pub to: f64,
    /// Duration in milliseconds.
    pub duration_ms: u64,
}

/// Capability for running property animations.
///
/// Implementations must eventually report completion of every started
/// animation back to the controller that issued it, exactly once, on the
/// same thread that drives gesture input.
pub trait AnimationDriver<P> {
    /// Start an animation and return its token.
    fn animate(&mut self, animation: Animation<P>) -> AnimationToken;
}
