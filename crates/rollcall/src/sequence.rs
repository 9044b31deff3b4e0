// File: src/sequence.rs
// Purpose: Registration sequence counters

use std::cell::Cell;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of registration sequence numbers
///
/// Numbers start at 1 and grow by one per successful registration. Reading
/// the current value and advancing it is a single operation, so callers
/// never see the same number twice from one generator. After `u32::MAX`
/// has been handed out the generator is exhausted and yields `None`.
pub trait SequenceGenerator {
    /// Returns the current value and advances the counter
    fn next_value(&self) -> Option<u32>;

    /// The value the next call to `next_value` will return
    fn peek(&self) -> Option<u32>;
}

/// Counter for a single form window on a single thread
///
/// Not thread-safe (`Cell` makes it `!Sync`). Lives only as long as the
/// process; a restart begins again at 1.
#[derive(Debug)]
pub struct LocalSequence {
    next: Cell<Option<u32>>,
}

impl LocalSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u32) -> Self {
        Self {
            next: Cell::new(Some(first)),
        }
    }
}

impl Default for LocalSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for LocalSequence {
    fn next_value(&self) -> Option<u32> {
        let value = self.next.get()?;
        self.next.set(value.checked_add(1));
        Some(value)
    }

    fn peek(&self) -> Option<u32> {
        self.next.get()
    }
}

/// Counter safe to share between concurrent submit paths
///
/// Counts in 64 bits so the increment itself never wraps; values past
/// `u32::MAX` are reported as exhausted.
#[derive(Debug)]
pub struct AtomicSequence {
    next: AtomicU64,
}

impl AtomicSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u32) -> Self {
        Self {
            next: AtomicU64::new(u64::from(first)),
        }
    }
}

impl Default for AtomicSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl SequenceGenerator for AtomicSequence {
    fn next_value(&self) -> Option<u32> {
        u32::try_from(self.next.fetch_add(1, Ordering::SeqCst)).ok()
    }

    fn peek(&self) -> Option<u32> {
        u32::try_from(self.next.load(Ordering::SeqCst)).ok()
    }
}

impl<S: SequenceGenerator + ?Sized> SequenceGenerator for &S {
    fn next_value(&self) -> Option<u32> {
        (**self).next_value()
    }

    fn peek(&self) -> Option<u32> {
        (**self).peek()
    }
}
