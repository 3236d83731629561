//! # Lazy Singleton
//!
//! A slot that holds at most one instance of `T`, filled on first demand and
//! never emptied while the slot lives. The slot and its guard are an explicit
//! value: put one in a `static` for a process-wide singleton, or own one
//! locally when a test needs a fresh, empty slot.
//!
//! Three strategies implement [`InitSlot`] so they can be raced against each
//! other:
//!
//! | Strategy | First access | Steady state | Correct |
//! |---|---|---|---|
//! | [`UnsynchronizedSlot`] | check, construct, store | atomic load | no |
//! | [`AlwaysLockSlot`] | lock, check, construct | lock | yes |
//! | [`DoubleCheckedSlot`] | load, lock, re-check, construct | atomic load | yes |
//!
//! ```
//! use creational_patterns::LazySingleton;
//!
//! struct Registry {
//!     names: Vec<&'static str>,
//! }
//!
//! static REGISTRY: LazySingleton<Registry> =
//!     LazySingleton::new(|| Registry { names: vec!["default"] });
//!
//! assert!(std::ptr::eq(REGISTRY.get_instance(), REGISTRY.get_instance()));
//! assert_eq!(REGISTRY.get_instance().names, ["default"]);
//! ```

mod always_lock;
mod double_checked;
pub mod guard;
mod unsynchronized;

pub use always_lock::AlwaysLockSlot;
pub use double_checked::DoubleCheckedSlot;
pub use guard::InitGuard;
pub use unsynchronized::UnsynchronizedSlot;

use std::convert::Infallible;

/// Counters every slot keeps about itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitStats {
    /// Successful absent -> present writes. Exactly 1 for a correct slot
    /// once initialized; the unsynchronized slot can exceed it.
    pub constructions: usize,
    /// Times the guard was taken.
    pub guard_acquisitions: usize,
}

/// Storage strategy for a lazily constructed instance.
pub trait InitSlot<T> {
    /// Short name used in reports and log lines.
    const STRATEGY: &'static str;

    /// The instance, if some caller already published it.
    fn get(&self) -> Option<&T>;

    /// Returns the instance, running `init` if the slot is absent.
    ///
    /// If `init` fails the slot stays absent and the error goes back to this
    /// caller only; the next call runs its own `init`.
    fn get_or_try_init<E, F>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>;

    fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok::<T, Infallible>(init())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }

    fn stats(&self) -> InitStats;
}

// ============================================================================
// Process-scoped holders: a slot paired with its constructor
// ============================================================================

/// A slot plus the constructor that fills it, exposing a zero-argument
/// accessor.
pub struct LazySingleton<T, S = DoubleCheckedSlot<T>> {
    slot: S,
    init: fn() -> T,
}

impl<T> LazySingleton<T> {
    pub const fn new(init: fn() -> T) -> Self {
        Self::with_slot(DoubleCheckedSlot::new(), init)
    }
}

impl<T, S> LazySingleton<T, S> {
    pub const fn with_slot(slot: S, init: fn() -> T) -> Self {
        Self { slot, init }
    }
}

impl<T, S: InitSlot<T>> LazySingleton<T, S> {
    pub fn get_instance(&self) -> &T {
        self.slot.get_or_init(self.init)
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    pub fn stats(&self) -> InitStats {
        self.slot.stats()
    }
}

/// Like [`LazySingleton`], for constructors that can fail.
///
/// A failure is never cached: the slot stays absent and the next
/// `get_instance` call tries again.
pub struct TryLazySingleton<T, E, S = DoubleCheckedSlot<T>> {
    slot: S,
    init: fn() -> Result<T, E>,
}

impl<T, E> TryLazySingleton<T, E> {
    pub const fn new(init: fn() -> Result<T, E>) -> Self {
        Self::with_slot(DoubleCheckedSlot::new(), init)
    }
}

impl<T, E, S> TryLazySingleton<T, E, S> {
    pub const fn with_slot(slot: S, init: fn() -> Result<T, E>) -> Self {
        Self { slot, init }
    }
}

impl<T, E, S: InitSlot<T>> TryLazySingleton<T, E, S> {
    pub fn get_instance(&self) -> Result<&T, E> {
        self.slot.get_or_try_init(self.init)
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    pub fn stats(&self) -> InitStats {
        self.slot.stats()
    }
}
