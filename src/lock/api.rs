use core::cell::UnsafeCell;
use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};

/// Raw mutual exclusion primitive.
///
/// Acquisition waits indefinitely; there is no try or timeout variant. The
/// order in which contending threads are admitted is up to the
/// implementation.
///
/// # Safety
///
/// Implementations must be exclusive: [`RawLock::lock`] must not return while
/// a token from an earlier `lock` call on the same primitive is still
/// unreleased, and each `unlock` must synchronize-with the `lock` that next
/// succeeds.
pub unsafe trait RawLock: Default + Send + Sync {
    /// Proof of acquisition, consumed by the release.
    ///
    /// `Send`/`Sync` are deliberately not required here; [`LockGuard`]
    /// restricts them in its own `Send`/`Sync` impls.
    type Token;

    /// Acquires the lock, waiting as long as necessary.
    fn lock(&self) -> Self::Token;

    /// Releases the lock.
    ///
    /// # Safety
    ///
    /// `token` must originate from a [`RawLock::lock`] call on `self` whose
    /// acquisition has not been released yet.
    unsafe fn unlock(&self, token: Self::Token);
}

/// A value guarded by a raw lock.
///
/// The value is only reachable through [`Lock::lock`], so every read and
/// write of it happens inside a critical section.
#[derive(Debug, Default)]
pub struct Lock<L: RawLock, T> {
    raw: L,
    data: UnsafeCell<T>,
}

// SAFETY: `&Lock` only yields `&mut T` through the raw lock's exclusion, so
// sharing the lock across threads amounts to sending `T` between them.
unsafe impl<L: RawLock, T: Send> Sync for Lock<L, T> {}

impl<L: RawLock, T> Lock<L, T> {
    /// Creates a lock guarding `data`.
    pub fn new(data: T) -> Self {
        Self {
            raw: L::default(),
            data: UnsafeCell::new(data),
        }
    }

    /// Consumes the lock and returns the guarded value.
    pub fn into_inner(self) -> T {
        self.data.into_inner()
    }

    /// Acquires the lock, returning a guard that dereferences to the value.
    pub fn lock(&self) -> LockGuard<'_, L, T> {
        let token = self.raw.lock();
        LockGuard {
            lock: self,
            token: ManuallyDrop::new(token),
        }
    }
}

/// Scoped proof of exclusive access to the value behind a [`Lock`].
///
/// Dropping the guard releases the lock, so the release happens on every exit
/// path of the critical section, early returns and panics included.
#[derive(Debug)]
pub struct LockGuard<'s, L: RawLock, T> {
    lock: &'s Lock<L, T>,
    token: ManuallyDrop<L::Token>,
}

// SAFETY: sending the guard sends the token and (logically) `T`, so both must
// be `Send`.
unsafe impl<L: RawLock, T: Send> Send for LockGuard<'_, L, T> where L::Token: Send {}

// SAFETY: `&LockGuard` only exposes `&T`.
unsafe impl<L: RawLock, T: Sync> Sync for LockGuard<'_, L, T> {}

impl<L: RawLock, T> Drop for LockGuard<'_, L, T> {
    fn drop(&mut self) {
        // SAFETY: the token is taken exactly once, here, and `self` is gone
        // afterwards.
        let token = unsafe { ManuallyDrop::take(&mut self.token) };

        // SAFETY: `token` came from a `lock()` on this very lock and has not
        // been released before.
        unsafe { self.lock.raw.unlock(token) };
    }
}

impl<L: RawLock, T> Deref for LockGuard<'_, L, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        // SAFETY: a live guard means the lock is held, so the value exists and
        // may be shared for as long as the guard is borrowed.
        unsafe { &*self.lock.data.get() }
    }
}

impl<L: RawLock, T> DerefMut for LockGuard<'_, L, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: a live guard means the lock is held, and `&mut self` makes
        // this the only live reference into the value.
        unsafe { &mut *self.lock.data.get() }
    }
}
