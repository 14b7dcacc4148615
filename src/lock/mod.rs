//! Mutual exclusion.
//!
//! [`Lock`] couples a value with a raw exclusion primitive and hands out
//! scoped [`LockGuard`]s, so the value is unreachable while the lock is free
//! and the lock is released on every exit path. [`RawLock`] is the seam for
//! swapping the primitive; [`SpinLock`] is the default used by the stack.

mod api;
mod spinlock;
mod ticketlock;

pub use api::{Lock, LockGuard, RawLock};
pub use spinlock::SpinLock;
pub use ticketlock::TicketLock;
