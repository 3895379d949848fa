// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for notification store operations.
//!
//! Measures the performance of:
//! - Adding past capacity (eviction on every insert)
//! - Firing a burst of expiry timers
//! - Building the grouped view

use admin_feedback::domain::feedback::MaxItems;
use admin_feedback::feedback::{
    Anchor, FeedbackStore, Kind, ManualClock, NotificationSpec, StoreSettings,
};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn store(max_items: usize) -> (FeedbackStore<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let settings = StoreSettings {
        max_items: MaxItems::new(max_items),
        ..StoreSettings::default()
    };
    (FeedbackStore::with_clock(clock.clone(), settings), clock)
}

/// Every insert beyond capacity evicts the oldest entry and cancels its timer.
fn bench_add_with_eviction(c: &mut Criterion) {
    let mut group = c.benchmark_group("feedback_store");

    group.bench_function("add_with_eviction", |b| {
        let (mut store, _clock) = store(5);
        b.iter(|| {
            let id = store.add(NotificationSpec::new(Kind::Info, "tick").duration_ms(5_000));
            black_box(id);
        });
    });

    group.finish();
}

/// Fills a full-size store with timed entries and expires them in one tick.
fn bench_expire_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("feedback_store");

    group.bench_function("expire_burst", |b| {
        b.iter(|| {
            let (mut store, clock) = store(50);
            for i in 0..50u64 {
                let spec = NotificationSpec::new(Kind::Warning, "burst").duration_ms(100 + i);
                store.add(spec);
            }
            clock.advance_ms(1_000);
            black_box(store.tick());
        });
    });

    group.finish();
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("feedback_store");

    let (mut store, _clock) = store(50);
    for i in 0..50usize {
        store.add(
            NotificationSpec::new(Kind::Success, "grouped")
                .anchor(Anchor::ALL[i % Anchor::ALL.len()])
                .persistent(),
        );
    }

    group.bench_function("grouped_view", |b| {
        b.iter(|| black_box(store.grouped().total()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_add_with_eviction,
    bench_expire_burst,
    bench_grouping
);
criterion_main!(benches);
