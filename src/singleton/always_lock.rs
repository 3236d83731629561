//! Always-lock accessor: every call takes the guard, even long after the
//! instance exists. Correct, but the steady state pays for a lock.

use super::guard::InitGuard;
use super::{InitSlot, InitStats};
use std::any::type_name;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct AlwaysLockSlot<T> {
    guard: InitGuard<Option<Box<T>>>,
    constructions: AtomicUsize,
}

impl<T> AlwaysLockSlot<T> {
    pub const fn new() -> Self {
        Self {
            guard: InitGuard::new(None),
            constructions: AtomicUsize::new(0),
        }
    }
}

impl<T> Default for AlwaysLockSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> InitSlot<T> for AlwaysLockSlot<T> {
    const STRATEGY: &'static str = "always-lock";

    fn get(&self) -> Option<&T> {
        let slot = self.guard.acquire();
        let ptr = slot.as_deref().map(|value| value as *const T);
        drop(slot);
        // SAFETY: once stored, the box is never replaced or taken out while
        // `&self` is alive, so its heap allocation outlives the guard.
        ptr.map(|ptr| unsafe { &*ptr })
    }

    fn get_or_try_init<E, F>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let mut slot = self.guard.acquire();
        let ptr: *const T = match slot.as_deref() {
            Some(value) => value,
            None => {
                log::debug!("{}: constructing {}", Self::STRATEGY, type_name::<T>());
                let value = init().map_err(|err| {
                    log::warn!(
                        "{}: constructing {} failed, slot stays absent",
                        Self::STRATEGY,
                        type_name::<T>()
                    );
                    err
                })?;
                self.constructions.fetch_add(1, Ordering::Relaxed);
                &**slot.insert(Box::new(value))
            }
        };
        drop(slot);
        // SAFETY: see `get`.
        Ok(unsafe { &*ptr })
    }

    fn stats(&self) -> InitStats {
        InitStats {
            constructions: self.constructions.load(Ordering::Relaxed),
            guard_acquisitions: self.guard.acquisitions(),
        }
    }
}

// SAFETY: the guard makes the slot itself `Sync` for `T: Send`; handing out
// `&T` to other threads additionally needs `T: Sync`.
unsafe impl<T: Send + Sync> Sync for AlwaysLockSlot<T> {}
