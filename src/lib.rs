//! Lock-based concurrent LIFO stack.
//!
//! [`LockStack`] serializes every operation on a single per-instance lock, so
//! any number of threads may push and pop through a shared reference without
//! further coordination. Popping from an empty stack does not wait for an
//! element; it fails immediately with [`EmptyError`].
//!
//! The lock itself is pluggable: [`lock`] defines the [`lock::RawLock`]
//! interface together with two implementations, and the stack defaults to
//! [`lock::SpinLock`].

#![warn(missing_docs, missing_debug_implementations)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod lock;
mod stack;

pub use stack::{EmptyError, LockStack};
