//! Single-slot deferred task scheduling.
//!
//! Some emissions must happen *after* the current update pass settles, so a
//! batch of simultaneous state changes produces one outgoing event carrying
//! the final state rather than one event per intermediate mutation. A
//! [`DeferredSlot`] models exactly that: scheduling replaces any pending
//! payload, and the owner drains the slot once per pass.

use std::fmt;
use std::sync::{Arc, Mutex};

/// A single pending payload, replaced on re-schedule.
///
/// There is no cancellation primitive: if state changes again before the
/// slot is drained, only the latest payload is seen. Schedules spanning
/// separate passes each produce their own emission.
pub struct DeferredSlot<P> {
    pending: Arc<Mutex<Option<P>>>,
}

impl<P> DeferredSlot<P> {
    /// Create an empty slot.
    pub fn new() -> Self {
        Self {
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Schedule a payload, replacing any pending one.
    pub fn schedule(&self, payload: P) {
        if let Ok(mut guard) = self.pending.lock() {
            *guard = Some(payload);
        }
    }

    /// Take the pending payload, if any, leaving the slot empty.
    pub fn take(&self) -> Option<P> {
        self.pending.lock().ok().and_then(|mut guard| guard.take())
    }

    /// Check whether a payload is pending.
    pub fn is_scheduled(&self) -> bool {
        self.pending
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }
}

impl<P> Default for DeferredSlot<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for DeferredSlot<P> {
    fn clone(&self) -> Self {
        Self {
            pending: Arc::clone(&self.pending),
        }
    }
}

impl<P> fmt::Debug for DeferredSlot<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredSlot")
            .field("scheduled", &self.is_scheduled())
            .finish()
    }
}
