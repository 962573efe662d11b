// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pull-to-refresh basics.
//!
//! Scripts a full pull cycle — reveal the header, cross the threshold both
//! ways, release to refresh, complete the refresh — and prints the events.
//!
//! Run:
//! - `cargo run -p flick_demos --example pull_basics`

use flick_motion::animate::{Animation, AnimationDriver, AnimationToken};
use flick_motion::types::{PointerEvent, Sample};
use flick_pull::refresh::PullController;
use flick_pull::types::{HeaderProperty, PullEvent, PullOptions};

struct DemoDriver {
    next: u64,
    started: Vec<AnimationToken>,
}

impl AnimationDriver<HeaderProperty> for DemoDriver {
    fn animate(&mut self, animation: Animation<HeaderProperty>) -> AnimationToken {
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

fn report(ctrl: &PullController, events: &[PullEvent]) {
    for event in events {
        println!("  event: {event:?}  (caption: \"{}\")", ctrl.caption());
    }
}

fn finish_animations(ctrl: &mut PullController, driver: &mut DemoDriver) {
    for token in std::mem::take(&mut driver.started) {
        let events = ctrl.animation_finished(token);
        report(ctrl, &events);
    }
}

fn main() {
    let mut ctrl = PullController::new(PullOptions::default());
    ctrl.set_header_height(64.0);
    ctrl.show_last_updated(true);
    let mut driver = DemoDriver {
        next: 0,
        started: Vec::new(),
    };

    println!("== Pull down past the threshold, wobble, release ==");
    let moves = [
        (100.0_f64, 0_u64),
        (130.0, 10),
        (220.0, 30),
        (260.0, 50),
        (230.0, 70),
        (270.0, 90),
    ];
    let events = ctrl.handle_event(
        PointerEvent::Down(Sample {
            x: 40.0,
            y: moves[0].0,
            t: moves[0].1,
        }),
        0,
        &mut driver,
    );
    report(&ctrl, &events);
    for (y, t) in &moves[1..] {
        let events = ctrl.handle_event(
            PointerEvent::Move(Sample {
                x: 40.0,
                y: *y,
                t: *t,
            }),
            0,
            &mut driver,
        );
        report(&ctrl, &events);
    }
    let events = ctrl.handle_event(
        PointerEvent::Up(Sample {
            x: 40.0,
            y: 270.0,
            t: 110,
        }),
        0,
        &mut driver,
    );
    report(&ctrl, &events);
    finish_animations(&mut ctrl, &mut driver);

    println!();
    println!("== Host finishes its refresh ==");
    let events = ctrl.refresh_complete(1_723_459_200_000, true, &mut driver);
    report(&ctrl, &events);
    finish_animations(&mut ctrl, &mut driver);
    if let Some(line) = ctrl.last_updated_caption(|t| format!("{t} ms")) {
        println!("header last-updated line: \"{line}\"");
    }
}
