// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe-engine basics.
//!
//! Scripts two gestures against a toy five-row list — open a row with a
//! rightward drag, then dismiss one with a leftward drag — and prints the
//! event stream the engine emits.
//!
//! Run:
//! - `cargo run -p flick_demos --example swipe_basics`

use flick_motion::animate::{Animation, AnimationDriver, AnimationToken};
use flick_motion::types::{PointerEvent, Sample};
use flick_swipe::controller::SwipeController;
use flick_swipe::host::{ListHost, ViewTarget};
use flick_swipe::options::{SwipeAction, SwipeOptions};
use flick_swipe::types::{SwipeEvent, SwipeProperty};
use kurbo::Rect;

const ROW_H: f64 = 40.0;
const WIDTH: f64 = 320.0;

struct DemoHost {
    rows: usize,
}

impl ListHost for DemoHost {
    fn item_count(&self) -> usize {
        self.rows
    }
    fn first_visible(&self) -> usize {
        0
    }
    fn last_visible(&self) -> usize {
        self.rows - 1
    }
    fn child_count(&self) -> usize {
        self.rows
    }
    fn child_frame(&self, viewport_index: usize) -> Option<Rect> {
        (viewport_index < self.rows).then(|| {
            let y0 = viewport_index as f64 * ROW_H;
            Rect::new(0.0, y0, WIDTH, y0 + ROW_H)
        })
    }
    fn position_for_child(&self, viewport_index: usize) -> Option<usize> {
        (viewport_index < self.rows).then_some(viewport_index)
    }
    fn width(&self) -> f64 {
        WIDTH
    }
    fn is_enabled(&self, _position: usize) -> bool {
        true
    }
    fn is_interactive(&self, _position: usize) -> bool {
        true
    }
    fn request_disallow_intercept(&mut self, disallow: bool) {
        println!("  host: disallow parent intercept = {disallow}");
    }
    fn cancel_touch_stream(&mut self) {
        println!("  host: list touch stream cancelled");
    }
    fn set_translation(&mut self, _target: ViewTarget, _x: f64) {}
    fn set_alpha(&mut self, _target: ViewTarget, _alpha: f64) {}
    fn set_back_visible(&mut self, position: usize, visible: bool) {
        println!("  host: back view of row {position} visible = {visible}");
    }
    fn set_clickable(&mut self, _position: usize, _clickable: bool) {}
}

struct DemoDriver {
    next: u64,
    started: Vec<AnimationToken>,
}

impl AnimationDriver<SwipeProperty> for DemoDriver {
    fn animate(&mut self, animation: Animation<SwipeProperty>) -> AnimationToken {
        self.next += 1;
        let token = AnimationToken(self.next);
        println!(
            "  anim: {:?} {} -> {} over {} ms",
            animation.target, animation.from, animation.to, animation.duration_ms
        );
        self.started.push(token);
        token
    }
}

fn report(events: &[SwipeEvent]) {
    for event in events {
        println!("  event: {event:?}");
    }
}

fn drag(
    ctrl: &mut SwipeController,
    host: &mut DemoHost,
    driver: &mut DemoDriver,
    y: f64,
    from_x: f64,
    to_x: f64,
    t0: u64,
) {
    report(&ctrl.handle_event(
        PointerEvent::Down(Sample { x: from_x, y, t: t0 }),
        host,
        driver,
    ));
    let steps = 8;
    for k in 1..=steps {
        let x = from_x + (to_x - from_x) * k as f64 / steps as f64;
        let sample = Sample {
            x,
            y,
            t: t0 + k * 10,
        };
        report(&ctrl.handle_event(PointerEvent::Move(sample), host, driver));
    }
    // Hold still so the release carries no fling velocity.
    for k in 1..=3_u64 {
        let sample = Sample {
            x: to_x,
            y,
            t: t0 + 80 + k * 60,
        };
        report(&ctrl.handle_event(PointerEvent::Move(sample), host, driver));
    }
    report(&ctrl.handle_event(
        PointerEvent::Up(Sample {
            x: to_x,
            y,
            t: t0 + 280,
        }),
        host,
        driver,
    ));
}

fn finish_animations(ctrl: &mut SwipeController, host: &mut DemoHost, driver: &mut DemoDriver) {
    loop {
        let batch = std::mem::take(&mut driver.started);
        if batch.is_empty() {
            break;
        }
        for token in batch {
            let events = ctrl.animation_finished(token, host, driver);
            report(&events);
        }
    }
}

fn main() {
    let opts = SwipeOptions {
        action_left: SwipeAction::Dismiss,
        offset_right: 80.0,
        ..Default::default()
    };
    let mut ctrl = SwipeController::new(opts).expect("valid options");
    let mut host = DemoHost { rows: 5 };
    let mut driver = DemoDriver {
        next: 0,
        started: Vec::new(),
    };
    let _ = ctrl.reset_items(5);

    println!("== Drag row 1 right past half the width (reveal) ==");
    drag(&mut ctrl, &mut host, &mut driver, 60.0, 20.0, 220.0, 0);
    finish_animations(&mut ctrl, &mut host, &mut driver);
    println!("row 1 swiped: {}", ctrl.is_swiped(1));

    println!();
    println!("== Drag row 3 left past half the width (dismiss) ==");
    drag(&mut ctrl, &mut host, &mut driver, 140.0, 300.0, 100.0, 5000);
    finish_animations(&mut ctrl, &mut host, &mut driver);
    println!("rows remaining in state store: {}", ctrl.swiped_positions().len());
}
