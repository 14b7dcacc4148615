#[cfg(not(feature = "check-loom"))]
use core::sync::atomic::{AtomicBool, Ordering::*};
#[cfg(feature = "check-loom")]
use loom::sync::atomic::{AtomicBool, Ordering::*};

#[cfg(not(feature = "check-loom"))]
use crossbeam_utils::Backoff;

use crate::lock::RawLock;

/// Test-and-set spin lock.
///
/// Contending threads are admitted in no particular order.
#[derive(Debug)]
pub struct SpinLock {
    locked: AtomicBool,
}

impl Default for SpinLock {
    fn default() -> Self {
        Self {
            locked: AtomicBool::new(false),
        }
    }
}

// SAFETY: the CAS from `false` to `true` succeeds for one thread at a time,
// and `unlock`'s release store synchronizes-with the acquire CAS of the next
// owner.
unsafe impl RawLock for SpinLock {
    type Token = ();

    fn lock(&self) {
        #[cfg(not(feature = "check-loom"))]
        let backoff = Backoff::new();

        while self
            .locked
            .compare_exchange(false, true, Acquire, Relaxed)
            .is_err()
        {
            #[cfg(not(feature = "check-loom"))]
            backoff.snooze();
            #[cfg(feature = "check-loom")]
            loom::thread::yield_now();
        }
    }

    unsafe fn unlock(&self, _token: ()) {
        self.locked.store(false, Release);
    }
}
