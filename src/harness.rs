//! Concurrent first-access harness.
//!
//! Races `N` callers at an empty slot and records what they got back: how
//! many distinct instances were handed out, how often the constructor ran,
//! and how often the guard was taken.

use crate::config::HarnessConfig;
use crate::singleton::{AlwaysLockSlot, DoubleCheckedSlot, InitSlot, InitStats, UnsynchronizedSlot};
use rand::Rng;
use std::collections::HashSet;
use std::panic;
use std::sync::Barrier;
use std::thread;
use std::time::Duration;
use uuid::Uuid;

/// The instance type raced over. Every construction gets a fresh id.
#[derive(Debug)]
pub struct Probe {
    pub id: Uuid,
    pub built_by: Option<String>,
}

impl Probe {
    /// Build a probe, sleeping first to hold the check-then-store window open.
    pub fn build(delay: Duration) -> Self {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        Self {
            id: Uuid::new_v4(),
            built_by: thread::current().name().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceReport {
    pub strategy: &'static str,
    pub callers: usize,
    pub distinct_instances: usize,
    pub stats: InitStats,
}

impl RaceReport {
    pub fn is_sound(&self) -> bool {
        self.distinct_instances == 1 && self.stats.constructions == 1
    }
}

/// Release `callers` threads at once against `slot`, each calling
/// `get_or_init` a single time.
pub fn race_first_access<T, S, F>(slot: &S, callers: usize, jitter: bool, init: F) -> RaceReport
where
    T: Sync,
    S: InitSlot<T> + Sync,
    F: Fn() -> T + Sync,
{
    let barrier = &Barrier::new(callers);
    let init = &init;

    let addresses: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..callers)
            .map(|_| {
                s.spawn(move || {
                    barrier.wait();
                    if jitter {
                        let yields = rand::thread_rng().gen_range(0..4);
                        for _ in 0..yields {
                            thread::yield_now();
                        }
                    }
                    slot.get_or_init(init) as *const T as usize
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    });

    let distinct_instances = addresses.into_iter().collect::<HashSet<_>>().len();
    RaceReport {
        strategy: S::STRATEGY,
        callers,
        distinct_instances,
        stats: slot.stats(),
    }
}

/// Call the accessor `reads` more times on an initialized slot and return how
/// many extra guard acquisitions that cost.
pub fn repeat_reads<T, S, F>(slot: &S, reads: usize, init: F) -> usize
where
    S: InitSlot<T>,
    F: Fn() -> T,
{
    slot.get_or_init(&init);
    let before = slot.stats().guard_acquisitions;
    for _ in 0..reads {
        slot.get_or_init(&init);
    }
    slot.stats().guard_acquisitions - before
}

// ============================================================================
// Stress runs: many fresh slots per strategy and caller count
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressSummary {
    pub strategy: &'static str,
    pub callers: usize,
    pub rounds: usize,
    /// Rounds where the constructor ran more than once.
    pub racy_rounds: usize,
    pub max_constructions: usize,
    pub max_distinct_instances: usize,
}

impl StressSummary {
    pub fn is_sound(&self) -> bool {
        self.racy_rounds == 0 && self.max_distinct_instances <= 1
    }
}

pub fn stress_strategy<S>(config: &HarnessConfig, callers: usize) -> StressSummary
where
    S: InitSlot<Probe> + Default + Sync,
{
    let delay = config.construction_delay();
    let mut summary = StressSummary {
        strategy: S::STRATEGY,
        callers,
        rounds: config.rounds,
        racy_rounds: 0,
        max_constructions: 0,
        max_distinct_instances: 0,
    };

    for _ in 0..config.rounds {
        let slot = S::default();
        let report = race_first_access(&slot, callers, config.jitter, || Probe::build(delay));
        if report.stats.constructions > 1 {
            summary.racy_rounds += 1;
        }
        summary.max_constructions = summary.max_constructions.max(report.stats.constructions);
        summary.max_distinct_instances = summary
            .max_distinct_instances
            .max(report.distinct_instances);
    }

    log::info!(
        "{} x{}: {} of {} rounds constructed more than once (max {})",
        summary.strategy,
        callers,
        summary.racy_rounds,
        summary.rounds,
        summary.max_constructions
    );
    summary
}

/// Every strategy against every configured caller count.
pub fn stress(config: &HarnessConfig) -> Vec<StressSummary> {
    config
        .caller_counts
        .iter()
        .flat_map(|&callers| {
            [
                stress_strategy::<UnsynchronizedSlot<Probe>>(config, callers),
                stress_strategy::<AlwaysLockSlot<Probe>>(config, callers),
                stress_strategy::<DoubleCheckedSlot<Probe>>(config, callers),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const CALLER_COUNTS: [usize; 3] = [2, 8, 64];

    fn counted_probe(counter: &AtomicUsize) -> Probe {
        counter.fetch_add(1, Ordering::SeqCst);
        Probe::build(Duration::from_millis(1))
    }

    #[test]
    fn test_double_checked_single_instance() {
        for callers in CALLER_COUNTS {
            for _ in 0..10 {
                let slot = DoubleCheckedSlot::new();
                let built = AtomicUsize::new(0);
                let report = race_first_access(&slot, callers, true, || counted_probe(&built));

                assert!(report.is_sound(), "{:?}", report);
                assert_eq!(built.load(Ordering::SeqCst), 1);
            }
        }
    }

    #[test]
    fn test_always_lock_single_instance() {
        for callers in CALLER_COUNTS {
            for _ in 0..10 {
                let slot = AlwaysLockSlot::new();
                let built = AtomicUsize::new(0);
                let report = race_first_access(&slot, callers, true, || counted_probe(&built));

                assert!(report.is_sound(), "{:?}", report);
                assert_eq!(built.load(Ordering::SeqCst), 1);
                assert_eq!(report.stats.guard_acquisitions, callers);
            }
        }
    }

    #[test]
    fn test_two_simultaneous_first_callers() {
        let slot = DoubleCheckedSlot::new();
        let report = race_first_access(&slot, 2, false, || Probe::build(Duration::from_millis(5)));

        assert_eq!(report.distinct_instances, 1);
        assert_eq!(report.stats.constructions, 1);
        // Both may miss the fast path, but only one constructs.
        assert!(report.stats.guard_acquisitions <= 2);
    }

    #[test]
    fn test_idempotent_after_first_call() {
        let slot = DoubleCheckedSlot::new();
        let built = AtomicUsize::new(0);
        let first = slot.get_or_init(|| counted_probe(&built)).id;

        race_first_access(&slot, 8, false, || counted_probe(&built));
        for _ in 0..100 {
            assert_eq!(slot.get_or_init(|| counted_probe(&built)).id, first);
        }
        assert_eq!(built.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_fast_path_vs_always_lock() {
        let double_checked = DoubleCheckedSlot::new();
        let always_lock = AlwaysLockSlot::new();

        assert_eq!(repeat_reads(&double_checked, 500, || 5u8), 0);
        assert_eq!(repeat_reads(&always_lock, 500, || 5u8), 500);
    }

    #[test]
    fn test_stress_shows_unsynchronized_race() {
        let config = HarnessConfig {
            caller_counts: vec![16],
            rounds: 10,
            construction_delay_ms: 5,
            jitter: false,
            ..HarnessConfig::default()
        };

        let summaries = stress(&config);
        assert_eq!(summaries.len(), 3);

        for summary in &summaries {
            match summary.strategy {
                "unsynchronized" => {
                    assert!(summary.racy_rounds > 0, "{:?}", summary);
                    assert!(!summary.is_sound());
                }
                _ => assert!(summary.is_sound(), "{:?}", summary),
            }
        }
    }
}
