//! Outgoing events and the sink the host drains them from.
//!
//! Components never call back into the host directly. User interactions are
//! translated into [`TableEvent`] values pushed onto an [`EventQueue`]; the
//! host drains the queue after each update pass and reacts (issuing a server
//! fetch for `Request`, adjusting its own scroll state, and so on).

use std::sync::{Arc, Mutex};

use crate::components::table::Pagination;
use crate::filters::Filter;

/// Result of handling a user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Direction of a programmatic or user scroll, relative to the previous
/// scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollChange {
    /// The new offset is further down than the previous one.
    Increase,
    /// The new offset is further up than the previous one.
    Decrease,
}

/// Payload of a scroll notification.
///
/// `from..=to` is the row-index range currently materialized (or, for the
/// non-virtual `scroll_to` path, the current page's row-index range).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollDetails {
    /// Row index the scroll targeted or settled on.
    pub index: usize,
    /// First materialized row index.
    pub from: usize,
    /// Last materialized row index (inclusive).
    pub to: usize,
    /// Direction relative to the previous offset.
    pub direction: ScrollChange,
}

/// Events emitted by a table component.
#[derive(Debug, Clone, PartialEq)]
pub enum TableEvent {
    /// Server-mode fetch trigger. The caller performs the fetch, then echoes
    /// the (possibly updated) pagination back via `set_pagination`.
    Request {
        pagination: Pagination,
        filter: Filter,
    },
    /// Scroll position notification.
    VirtualScroll(ScrollDetails),
    /// A data row was clicked.
    RowClick { key: String, index: usize },
    /// A data row was double-clicked.
    RowDblClick { key: String, index: usize },
}

/// Shared event sink.
///
/// Cheap to clone (all clones share the same buffer). The host calls
/// [`EventQueue::drain`] once per update pass.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    inner: Arc<Mutex<Vec<TableEvent>>>,
}

impl EventQueue {
    /// Create a new empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event onto the queue.
    pub fn push(&self, event: TableEvent) {
        if let Ok(mut guard) = self.inner.lock() {
            guard.push(event);
        }
    }

    /// Take all pending events, leaving the queue empty.
    pub fn drain(&self) -> Vec<TableEvent> {
        self.inner
            .lock()
            .map(|mut guard| std::mem::take(&mut *guard))
            .unwrap_or_default()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.inner.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Check if no events are pending.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
