//! Virtual-scroll viewport state.

use std::ops::Range;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;

use crate::events::{ScrollChange, ScrollDetails};

/// Unique identifier for a VirtualScroll component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualScrollId(usize);

impl VirtualScrollId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for VirtualScrollId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__virtual_scroll_{}", self.0)
    }
}

/// Internal state for the VirtualScroll component.
#[derive(Debug)]
struct VirtualScrollInner {
    /// Estimated size of a single item, in layout units.
    item_size: usize,
    /// Viewport size along the scroll axis - updated by renderer.
    viewport_size: usize,
    /// Extra items materialized beyond each edge of the viewport.
    overscan: usize,
    /// Current scroll offset along the scroll axis.
    scroll_offset: usize,
    /// Number of items backing the viewport.
    item_count: usize,
    /// Composite fingerprint of the structural properties that invalidate
    /// cached offsets when they change.
    fingerprint: Option<String>,
}

impl Default for VirtualScrollInner {
    fn default() -> Self {
        Self {
            item_size: 48,
            viewport_size: 0,
            overscan: 1,
            scroll_offset: 0,
            item_count: 0,
            fingerprint: None,
        }
    }
}

/// A virtual-scroll viewport with reactive state.
///
/// Given an item count, a per-item size estimate and a viewport size, the
/// component decides which contiguous index range to materialize and
/// recomputes it on every scroll. Cheap to clone (clones share state).
#[derive(Debug)]
pub struct VirtualScroll {
    /// Unique identifier.
    id: VirtualScrollId,
    /// Internal state.
    inner: Arc<RwLock<VirtualScrollInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl VirtualScroll {
    /// Create a new viewport with default settings.
    pub fn new() -> Self {
        Self {
            id: VirtualScrollId::new(),
            inner: Arc::new(RwLock::new(VirtualScrollInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a viewport with an explicit item size estimate.
    pub fn with_item_size(item_size: usize) -> Self {
        Self {
            id: VirtualScrollId::new(),
            inner: Arc::new(RwLock::new(VirtualScrollInner {
                item_size: item_size.max(1),
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID.
    pub fn id(&self) -> VirtualScrollId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Get the item size estimate.
    pub fn item_size(&self) -> usize {
        self.inner.read().map(|g| g.item_size).unwrap_or(48)
    }

    /// Set the item size estimate (clamped to at least 1).
    pub fn set_item_size(&self, item_size: usize) {
        if let Ok(mut guard) = self.inner.write() {
            let item_size = item_size.max(1);
            if guard.item_size != item_size {
                guard.item_size = item_size;
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Get the overscan (extra items beyond each viewport edge).
    pub fn overscan(&self) -> usize {
        self.inner.read().map(|g| g.overscan).unwrap_or(1)
    }

    /// Set the overscan.
    pub fn set_overscan(&self, overscan: usize) {
        if let Ok(mut guard) = self.inner.write() {
            guard.overscan = overscan;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the number of backing items.
    pub fn item_count(&self) -> usize {
        self.inner.read().map(|g| g.item_count).unwrap_or(0)
    }

    /// Set the number of backing items (called by the owning component on
    /// every render pass).
    pub fn set_item_count(&self, count: usize) {
        if let Ok(mut guard) = self.inner.write()
            && guard.item_count != count
        {
            guard.item_count = count;
            let max_offset = Self::max_scroll_offset_inner(&guard);
            if guard.scroll_offset > max_offset {
                guard.scroll_offset = max_offset;
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Viewport (set by renderer)
    // -------------------------------------------------------------------------

    /// Set the viewport size along the scroll axis.
    pub fn set_viewport_size(&self, size: usize) {
        if let Ok(mut guard) = self.inner.write() {
            guard.viewport_size = size;
            let max_offset = Self::max_scroll_offset_inner(&guard);
            if guard.scroll_offset > max_offset {
                guard.scroll_offset = max_offset;
            }
        }
    }

    /// Get the viewport size.
    pub fn viewport_size(&self) -> usize {
        self.inner.read().map(|g| g.viewport_size).unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// Get the scroll offset.
    pub fn scroll_offset(&self) -> usize {
        self.inner.read().map(|g| g.scroll_offset).unwrap_or(0)
    }

    /// Set the scroll offset, clamped to the content extent. Returns the
    /// materialized window after the move.
    pub fn set_scroll_offset(&self, offset: usize) -> Range<usize> {
        if let Ok(mut guard) = self.inner.write() {
            let max_offset = Self::max_scroll_offset_inner(&guard);
            let offset = offset.min(max_offset);
            if guard.scroll_offset != offset {
                guard.scroll_offset = offset;
                self.dirty.store(true, Ordering::SeqCst);
            }
            return Self::window_inner(&guard);
        }
        0..0
    }

    /// The contiguous index range currently materialized.
    pub fn window(&self) -> Range<usize> {
        self.inner
            .read()
            .map(|g| Self::window_inner(&g))
            .unwrap_or(0..0)
    }

    /// Total content size along the scroll axis.
    pub fn total_size(&self) -> usize {
        self.inner
            .read()
            .map(|g| g.item_count * g.item_size)
            .unwrap_or(0)
    }

    /// Scroll so the given item sits at the top of the viewport.
    ///
    /// Out-of-range indices are a silent no-op. Returns the scroll details
    /// to re-emit, with the direction relative to the previous offset.
    pub fn scroll_to(&self, index: usize) -> Option<ScrollDetails> {
        if let Ok(mut guard) = self.inner.write() {
            if index >= guard.item_count {
                return None;
            }
            let previous = guard.scroll_offset;
            let target = index * guard.item_size;
            let max_offset = Self::max_scroll_offset_inner(&guard);
            let target = target.min(max_offset);
            let direction = if target < previous {
                ScrollChange::Decrease
            } else {
                ScrollChange::Increase
            };
            if guard.scroll_offset != target {
                guard.scroll_offset = target;
                self.dirty.store(true, Ordering::SeqCst);
            }
            let window = Self::window_inner(&guard);
            debug!(
                "virtual scroll {}: scroll_to {} -> offset {} (window {:?})",
                self.id, index, target, window
            );
            return Some(ScrollDetails {
                index,
                from: window.start,
                to: window.end.saturating_sub(1),
                direction,
            });
        }
        None
    }

    /// Discard cached measurements and return to the top.
    ///
    /// Idempotent and synchronous. Must be called whenever structural
    /// properties invalidate the current offsets; the owning table does this
    /// through [`check_fingerprint`](VirtualScroll::check_fingerprint).
    pub fn reset(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.scroll_offset = 0;
            guard.fingerprint = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Compare the structural fingerprint against the stored one, resetting
    /// scroll state when it changed. Returns whether a reset happened.
    ///
    /// The first fingerprint ever seen is stored without resetting.
    pub fn check_fingerprint(&self, fingerprint: &str) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if guard.fingerprint.as_deref() == Some(fingerprint) {
                return false;
            }
            let changed = guard.fingerprint.is_some();
            guard.fingerprint = Some(fingerprint.to_string());
            if changed {
                guard.scroll_offset = 0;
                self.dirty.store(true, Ordering::SeqCst);
            }
            return changed;
        }
        false
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the viewport has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn max_scroll_offset_inner(guard: &VirtualScrollInner) -> usize {
        (guard.item_count * guard.item_size).saturating_sub(guard.viewport_size)
    }

    fn window_inner(guard: &VirtualScrollInner) -> Range<usize> {
        if guard.item_count == 0 {
            return 0..0;
        }
        let first_visible = guard.scroll_offset / guard.item_size;
        let start = first_visible.saturating_sub(guard.overscan);
        // A zero-sized viewport still materializes one item so the first
        // measurement pass has something to measure.
        let visible = guard.viewport_size.div_ceil(guard.item_size).max(1);
        let end = (first_visible + visible + guard.overscan).min(guard.item_count);
        start..end
    }
}

impl Clone for VirtualScroll {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for VirtualScroll {
    fn default() -> Self {
        Self::new()
    }
}
