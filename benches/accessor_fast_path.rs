// Steady-state cost of reading an already-initialized singleton.
// Double-checked locking should sit next to OnceLock and lazy_static; the
// always-lock accessor pays for a mutex on every call.

use creational_patterns::{AlwaysLockSlot, DoubleCheckedSlot, InitSlot, UnsynchronizedSlot};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::OnceLock;

#[derive(Debug)]
struct Settings {
    retries: u32,
}

fn build_settings() -> Settings {
    Settings { retries: 3 }
}

lazy_static::lazy_static! {
    static ref LAZY_STATIC_SETTINGS: Settings = build_settings();
}

fn benchmark_steady_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("accessor_steady_state");

    let double_checked = DoubleCheckedSlot::new();
    double_checked.get_or_init(build_settings);
    group.bench_function("double_checked", |b| {
        b.iter(|| black_box(double_checked.get_or_init(build_settings).retries))
    });

    let always_lock = AlwaysLockSlot::new();
    always_lock.get_or_init(build_settings);
    group.bench_function("always_lock", |b| {
        b.iter(|| black_box(always_lock.get_or_init(build_settings).retries))
    });

    let unsynchronized = UnsynchronizedSlot::new();
    unsynchronized.get_or_init(build_settings);
    group.bench_function("unsynchronized", |b| {
        b.iter(|| black_box(unsynchronized.get_or_init(build_settings).retries))
    });

    let once_lock = OnceLock::new();
    once_lock.get_or_init(build_settings);
    group.bench_function("std_once_lock", |b| {
        b.iter(|| black_box(once_lock.get_or_init(build_settings).retries))
    });

    group.bench_function("lazy_static", |b| {
        b.iter(|| black_box(LAZY_STATIC_SETTINGS.retries))
    });

    group.finish();
}

criterion_group!(benches, benchmark_steady_state);
criterion_main!(benches);
