use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Mutex that serializes the absent -> present transition of a slot.
///
/// Acquisitions are counted so the fast path of double-checked locking can be
/// told apart from the always-lock accessor. Release is tied to the returned
/// `MutexGuard`, so every exit path (including `?` and unwinding) unlocks.
///
/// A constructor that panics while holding the guard poisons the mutex. The
/// slot it was filling is still absent at that point, so the poison flag is
/// cleared on the next acquisition instead of being reported to every later
/// caller.
pub struct InitGuard<G> {
    lock: Mutex<G>,
    acquisitions: AtomicUsize,
}

impl<G> InitGuard<G> {
    pub const fn new(value: G) -> Self {
        Self {
            lock: Mutex::new(value),
            acquisitions: AtomicUsize::new(0),
        }
    }

    pub fn acquire(&self) -> MutexGuard<'_, G> {
        let guard = self.lock.lock().unwrap_or_else(|poisoned| {
            log::warn!("init guard was poisoned by a panicking constructor; recovering");
            self.lock.clear_poison();
            poisoned.into_inner()
        });
        self.acquisitions.fetch_add(1, Ordering::Relaxed);
        guard
    }

    pub fn acquisitions(&self) -> usize {
        self.acquisitions.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_counts_acquisitions() {
        let guard = InitGuard::new(0u32);
        assert_eq!(guard.acquisitions(), 0);

        *guard.acquire() += 1;
        *guard.acquire() += 1;

        assert_eq!(guard.acquisitions(), 2);
        assert_eq!(*guard.acquire(), 2);
    }

    #[test]
    fn test_released_on_early_return() {
        fn fails(guard: &InitGuard<()>) -> Result<(), &'static str> {
            let _held = guard.acquire();
            Err("constructor failed")
        }

        let guard = InitGuard::new(());
        assert!(fails(&guard).is_err());
        // Would deadlock if the first acquisition leaked.
        drop(guard.acquire());
        assert_eq!(guard.acquisitions(), 2);
    }

    #[test]
    fn test_recovers_from_poison() {
        let guard = InitGuard::new(Vec::<u8>::new());

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _held = guard.acquire();
            panic!("constructor panicked");
        }));
        assert!(result.is_err());

        guard.acquire().push(7);
        assert_eq!(*guard.acquire(), vec![7]);
    }
}
