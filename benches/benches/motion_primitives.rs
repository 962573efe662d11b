// Copyright 2026 the Flick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use flick_motion::classify::GestureClassifier;
use flick_motion::types::{Axis, Sample};
use flick_motion::velocity::VelocityTracker;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_gesture(samples: usize, seed: u64) -> Vec<Sample> {
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(samples);
    let (mut x, mut y) = (160.0, 400.0);
    for i in 0..samples {
        x += rng.next_f64() * 24.0 - 4.0;
        y += rng.next_f64() * 6.0 - 3.0;
        out.push(Sample {
            x,
            y,
            t: i as u64 * 8,
        });
    }
    out
}

fn bench_velocity(c: &mut Criterion) {
    let gesture = gen_gesture(4096, 0x5eed);
    let mut group = c.benchmark_group("velocity_tracker");
    group.throughput(Throughput::Elements(gesture.len() as u64));

    group.bench_function("push_stream", |b| {
        b.iter_batched(
            VelocityTracker::new,
            |mut tracker| {
                for s in &gesture {
                    tracker.push(*s);
                }
                tracker
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("push_and_query", |b| {
        b.iter_batched(
            VelocityTracker::new,
            |mut tracker| {
                let mut acc = 0.0;
                for s in &gesture {
                    tracker.push(*s);
                    acc += tracker.velocity(Axis::Horizontal);
                }
                black_box(acc)
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_classifier(c: &mut Criterion) {
    let gesture = gen_gesture(4096, 0xfeed);
    let mut group = c.benchmark_group("gesture_classifier");
    group.throughput(Throughput::Elements(gesture.len() as u64));

    group.bench_function("classify_stream", |b| {
        b.iter(|| {
            let mut classifier = GestureClassifier::new(8.0);
            // One classifier per 32-sample "gesture", as a list would see.
            for chunk in gesture.chunks(32) {
                classifier.begin(chunk[0].x, chunk[0].y);
                for s in &chunk[1..] {
                    black_box(classifier.update(s.x, s.y));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_velocity, bench_classifier);
criterion_main!(benches);
