//! Double-checked locking.
//!
//! 1. Load the slot without the guard; if present, return it.
//! 2. Take the guard.
//! 3. Load again: another caller may have published between 1 and 2.
//! 4. Still absent: construct, publish, release the guard.
//!
//! The publish is a `Release` store and every read is an `Acquire` load, so
//! a caller whose unguarded load sees the pointer also sees the fully
//! constructed instance behind it. With plain (`Relaxed`) accesses the fast
//! path could observe the pointer before the writes that initialized it.

use super::guard::InitGuard;
use super::{InitSlot, InitStats};
use std::any::type_name;
use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};

pub struct DoubleCheckedSlot<T> {
    slot: AtomicPtr<T>,
    guard: InitGuard<()>,
    constructions: AtomicUsize,
    _owns: PhantomData<Box<T>>,
}

impl<T> DoubleCheckedSlot<T> {
    pub const fn new() -> Self {
        Self {
            slot: AtomicPtr::new(ptr::null_mut()),
            guard: InitGuard::new(()),
            constructions: AtomicUsize::new(0),
            _owns: PhantomData,
        }
    }
}

impl<T> Default for DoubleCheckedSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InitSlot<T> for DoubleCheckedSlot<T> {
    const STRATEGY: &'static str = "double-checked";

    fn get(&self) -> Option<&T> {
        let ptr = self.slot.load(Ordering::Acquire);
        // SAFETY: a non-null pointer was produced by `Box::into_raw` below and
        // published with Release. It is never replaced or freed before `drop`.
        unsafe { ptr.as_ref() }
    }

    fn get_or_try_init<E, F>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.get() {
            return Ok(value);
        }

        let _held = self.guard.acquire();
        if let Some(value) = self.get() {
            return Ok(value);
        }

        log::debug!("{}: constructing {}", Self::STRATEGY, type_name::<T>());
        let value = match init() {
            Ok(value) => value,
            Err(err) => {
                log::warn!(
                    "{}: constructing {} failed, slot stays absent",
                    Self::STRATEGY,
                    type_name::<T>()
                );
                return Err(err);
            }
        };

        // Counted before the publish so the Release store carries it.
        self.constructions.fetch_add(1, Ordering::Relaxed);
        let ptr = Box::into_raw(Box::new(value));
        self.slot.store(ptr, Ordering::Release);

        // SAFETY: just allocated, now owned by the slot until `drop`.
        Ok(unsafe { &*ptr })
    }

    fn stats(&self) -> InitStats {
        InitStats {
            constructions: self.constructions.load(Ordering::Relaxed),
            guard_acquisitions: self.guard.acquisitions(),
        }
    }
}

impl<T> Drop for DoubleCheckedSlot<T> {
    fn drop(&mut self) {
        let ptr = *self.slot.get_mut();
        if !ptr.is_null() {
            // SAFETY: `&mut self` means no reference handed out by `get` is alive.
            drop(unsafe { Box::from_raw(ptr) });
        }
    }
}

// SAFETY: `&T` is shared across threads (needs `T: Sync`) and the instance
// may be built on one thread and dropped on another (needs `T: Send`).
unsafe impl<T: Send + Sync> Sync for DoubleCheckedSlot<T> {}
unsafe impl<T: Send> Send for DoubleCheckedSlot<T> {}
