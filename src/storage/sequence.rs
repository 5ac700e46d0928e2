use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::{Result, TaskmgrError};

/// Strictly increasing id source starting at 1.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: AtomicU32,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn starting_after(last: u32) -> Self {
        Self {
            last: AtomicU32::new(last),
        }
    }

    /// Issue the next id. Fails once `u32::MAX` has been handed out; ids
    /// never wrap.
    pub fn next(&self) -> Result<u32> {
        self.last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
            .map(|last| last + 1)
            .map_err(|_| TaskmgrError::IdsExhausted)
    }

    /// Last id handed out, or 0 if none yet.
    pub fn current(&self) -> u32 {
        self.last.load(Ordering::SeqCst)
    }
}
