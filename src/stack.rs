use thiserror::Error;

use crate::lock::{Lock, RawLock, SpinLock};

/// Failed pop: the stack held no element when the attempt was made.
///
/// The stack never waits for an element to appear; retrying is the caller's
/// business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("empty stack")]
pub struct EmptyError;

/// Concurrent LIFO stack guarded by a single per-instance lock.
///
/// Every operation, the snapshotting [`Clone`] included, runs as a critical
/// section on that lock, so concurrent calls behave as if executed in some
/// serial order. Usable with any number of pushers and poppers.
#[derive(Debug)]
pub struct LockStack<T, L: RawLock = SpinLock> {
    items: Lock<L, Vec<T>>,
}

impl<T, L: RawLock> Default for LockStack<T, L> {
    fn default() -> Self {
        Self {
            items: Lock::new(Vec::new()),
        }
    }
}

impl<T> LockStack<T> {
    /// Creates a new, empty stack guarded by a spin lock.
    ///
    /// For a different lock backend, use `LockStack::<T, L>::default()`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, L: RawLock> LockStack<T, L> {
    /// Pushes a value on top of the stack.
    pub fn push(&self, value: T) {
        self.items.lock().push(value);
    }

    /// Removes the top element and transfers its ownership to the caller.
    ///
    /// The emptiness check and the removal are a single critical section, and
    /// the lock is released before an [`EmptyError`] reaches the caller.
    pub fn pop(&self) -> Result<T, EmptyError> {
        self.items.lock().pop().ok_or(EmptyError)
    }

    /// Like [`LockStack::pop`], but delivers the element through `slot`.
    ///
    /// On failure `slot` is left untouched. The value `slot` previously held
    /// is dropped after the lock is released, so its destructor never runs
    /// inside the critical section.
    pub fn pop_into(&self, slot: &mut T) -> Result<(), EmptyError> {
        let value = self.items.lock().pop().ok_or(EmptyError)?;
        *slot = value;
        Ok(())
    }

    /// Returns whether the stack held no element at some instant during the
    /// call.
    ///
    /// Other threads may push or pop right away, so the result must not be
    /// used to predict the outcome of a later [`LockStack::pop`].
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Consumes the stack and returns its buffer, bottom element first.
    pub fn into_inner(self) -> Vec<T> {
        self.items.into_inner()
    }
}

/// Snapshot copy.
///
/// `clone` holds the source's lock for the duration of the copy, so the
/// snapshot is never a half-updated buffer. The clone owns its own buffer and
/// its own lock; afterwards the two stacks are fully independent.
impl<T: Clone, L: RawLock> Clone for LockStack<T, L> {
    fn clone(&self) -> Self {
        let items = self.items.lock();
        Self {
            items: Lock::new((*items).clone()),
        }
    }
}
