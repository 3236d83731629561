//! Unsynchronized lazy check. **Broken under concurrency.**
//!
//! Read the slot; if absent, construct and store. Nothing stops two callers
//! from both seeing "absent", both constructing, and both storing: the slot
//! ends up with whichever store landed last and the earlier caller walks off
//! with an instance nobody else will ever see.
//!
//! It exists to be raced against the correct strategies. The slot is still
//! an atomic pointer, so there is no data race in the memory-model sense;
//! the bug is purely the gap between the check and the store. Instances that
//! lose the race are parked until drop so the references their constructors
//! returned stay valid.

use super::{InitSlot, InitStats};
use crossbeam::queue::SegQueue;
use std::any::type_name;
use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::{AtomicPtr, AtomicUsize, Ordering};

struct Superseded<T>(*mut T);

// SAFETY: the pointer is uniquely owned by the queue once pushed.
unsafe impl<T: Send> Send for Superseded<T> {}

pub struct UnsynchronizedSlot<T> {
    slot: AtomicPtr<T>,
    superseded: SegQueue<Superseded<T>>,
    constructions: AtomicUsize,
    _owns: PhantomData<Box<T>>,
}

impl<T> UnsynchronizedSlot<T> {
    pub const fn new() -> Self {
        Self {
            slot: AtomicPtr::new(ptr::null_mut()),
            superseded: SegQueue::new(),
            constructions: AtomicUsize::new(0),
            _owns: PhantomData,
        }
    }

    /// Instances that were published and then overwritten by a racing caller.
    pub fn superseded(&self) -> usize {
        self.superseded.len()
    }
}

impl<T> Default for UnsynchronizedSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InitSlot<T> for UnsynchronizedSlot<T> {
    const STRATEGY: &'static str = "unsynchronized";

    fn get(&self) -> Option<&T> {
        let ptr = self.slot.load(Ordering::Acquire);
        // SAFETY: non-null pointers come from `Box::into_raw` and are freed
        // only in `drop`, whether still in the slot or parked as superseded.
        unsafe { ptr.as_ref() }
    }

    fn get_or_try_init<E, F>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.get() {
            return Ok(value);
        }

        // Another caller can pass the same check right now.
        let ptr = Box::into_raw(Box::new(init()?));
        self.constructions.fetch_add(1, Ordering::Relaxed);

        let previous = self.slot.swap(ptr, Ordering::AcqRel);
        if !previous.is_null() {
            log::debug!(
                "{}: overwrote a published {}; two callers now hold different instances",
                Self::STRATEGY,
                type_name::<T>()
            );
            self.superseded.push(Superseded(previous));
        }

        // SAFETY: see `get`.
        Ok(unsafe { &*ptr })
    }

    fn stats(&self) -> InitStats {
        InitStats {
            constructions: self.constructions.load(Ordering::Relaxed),
            guard_acquisitions: 0,
        }
    }
}

impl<T> Drop for UnsynchronizedSlot<T> {
    fn drop(&mut self) {
        let ptr = *self.slot.get_mut();
        if !ptr.is_null() {
            // SAFETY: `&mut self`, no outstanding references.
            drop(unsafe { Box::from_raw(ptr) });
        }
        while let Some(Superseded(ptr)) = self.superseded.pop() {
            // SAFETY: each superseded pointer was swapped out exactly once.
            drop(unsafe { Box::from_raw(ptr) });
        }
    }
}

// SAFETY: same requirements as the other slots; see `DoubleCheckedSlot`.
unsafe impl<T: Send + Sync> Sync for UnsynchronizedSlot<T> {}
unsafe impl<T: Send> Send for UnsynchronizedSlot<T> {}
