#[cfg(not(feature = "check-loom"))]
use core::sync::atomic::{AtomicUsize, Ordering::*};
#[cfg(feature = "check-loom")]
use loom::sync::atomic::{AtomicUsize, Ordering::*};

#[cfg(not(feature = "check-loom"))]
use crossbeam_utils::Backoff;

use crate::lock::RawLock;

/// Ticket lock.
///
/// Each waiter draws a ticket and spins until it is served, so admission is
/// first-come-first-served.
#[derive(Debug)]
pub struct TicketLock {
    curr: AtomicUsize,
    next: AtomicUsize,
}

impl Default for TicketLock {
    fn default() -> Self {
        Self {
            curr: AtomicUsize::new(0),
            next: AtomicUsize::new(0),
        }
    }
}

// SAFETY: tickets are drawn with a fetch-and-add, so they are unique, and
// `curr` serves one ticket at a time; the release store in `unlock`
// synchronizes-with the acquire load of the next ticket holder.
unsafe impl RawLock for TicketLock {
    type Token = usize;

    fn lock(&self) -> usize {
        let ticket = self.next.fetch_add(1, Relaxed);

        #[cfg(not(feature = "check-loom"))]
        let backoff = Backoff::new();

        while self.curr.load(Acquire) != ticket {
            #[cfg(not(feature = "check-loom"))]
            backoff.snooze();
            #[cfg(feature = "check-loom")]
            loom::thread::yield_now();
        }

        ticket
    }

    unsafe fn unlock(&self, ticket: usize) {
        self.curr.store(ticket.wrapping_add(1), Release);
    }
}
