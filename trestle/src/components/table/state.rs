//! Table component state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::debug;
use serde_json::Value;

use crate::components::virtual_scroll::VirtualScroll;
use crate::events::{EventQueue, ScrollChange, ScrollDetails, TableEvent};
use crate::filters::Filter;
use crate::node::Node;
use crate::scheduler::DeferredSlot;

use super::column::{Column, Record, RowKey};
use super::pagination::{DEFAULT_ROWS_PER_PAGE_OPTIONS, Pagination};
use super::pipeline::{self, FilterFn, SortFn};
use super::render::Separator;

/// Unique identifier for a Table component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Payload pending for a deferred request emission.
#[derive(Debug, Clone)]
pub(super) struct RequestPayload {
    pub pagination: Pagination,
    pub filter: Filter,
}

/// Internal state for the Table component.
pub(super) struct TableInner<T: Record> {
    /// The caller-owned record set, treated as read-only input.
    pub records: Vec<T>,
    /// Column descriptors.
    pub columns: Vec<Column<T>>,
    /// Row identity selector.
    pub row_key: RowKey<T>,
    /// Effective pagination/sort state.
    pub pagination: Pagination,
    /// Opaque filter value.
    pub filter: Filter,
    /// Page-size options offered in the bottom bar.
    pub rows_per_page_options: Vec<usize>,
    /// Keys of the currently selected rows.
    pub selected: Vec<String>,
    /// Keys of the currently expanded rows.
    pub expanded: Vec<String>,
    /// Restrict selection to at most one row.
    pub single_selection: bool,
    /// Column names to display, in declared column order. `None` shows all.
    pub visible_columns: Option<Vec<String>>,
    /// Caller-supplied filter function, if any.
    pub filter_fn: Option<FilterFn<T>>,
    /// Caller-supplied sort function, if any.
    pub sort_fn: Option<SortFn<T>>,

    // Display configuration
    pub title: Option<String>,
    pub loading: bool,
    pub binary_state_sort: bool,
    pub hide_header: bool,
    pub grid: bool,
    pub grid_header: bool,
    pub dense: bool,
    pub flat: bool,
    pub bordered: bool,
    pub square: bool,
    pub dark: bool,
    pub separator: Separator,
    pub wrap_cells: bool,
    pub fullscreen: bool,
    pub virtual_scroll: bool,
    pub virtual_scroll_item_size: Option<usize>,

    // Labels
    pub no_data_label: Option<String>,
    pub no_results_label: Option<String>,
    pub loading_label: Option<String>,
    pub rows_per_page_label: Option<String>,

    // Style/class overrides for table regions
    pub table_class: Option<String>,
    pub table_style: Option<String>,
    pub table_header_class: Option<String>,
    pub table_header_style: Option<String>,
    pub card_class: Option<String>,
    pub card_style: Option<String>,

    /// Caller-supplied loading overlay, shown only while `loading` is set.
    pub loading_node: Option<Node>,

    /// Scroll offset of the plain (non-virtual) body container.
    pub scroll_offset: usize,
}

impl<T: Record> TableInner<T> {
    fn new(columns: Vec<Column<T>>, records: Vec<T>) -> Self {
        Self {
            records,
            columns,
            row_key: RowKey::default(),
            pagination: Pagination::initial(DEFAULT_ROWS_PER_PAGE_OPTIONS),
            filter: Filter::None,
            rows_per_page_options: DEFAULT_ROWS_PER_PAGE_OPTIONS.to_vec(),
            selected: Vec::new(),
            expanded: Vec::new(),
            single_selection: false,
            visible_columns: None,
            filter_fn: None,
            sort_fn: None,
            title: None,
            loading: false,
            binary_state_sort: false,
            hide_header: false,
            grid: false,
            grid_header: false,
            dense: false,
            flat: false,
            bordered: false,
            square: false,
            dark: false,
            separator: Separator::default(),
            wrap_cells: false,
            fullscreen: false,
            virtual_scroll: false,
            virtual_scroll_item_size: None,
            no_data_label: None,
            no_results_label: None,
            loading_label: None,
            rows_per_page_label: None,
            table_class: None,
            table_style: None,
            table_header_class: None,
            table_header_style: None,
            card_class: None,
            card_style: None,
            loading_node: None,
            scroll_offset: 0,
        }
    }
}

/// A data-table component.
///
/// `Table<T>` turns a caller-owned record set plus column and display
/// configuration into a view tree, and reports user interactions back as
/// [`TableEvent`]s. In client mode the filter/sort/paginate pipeline runs
/// locally; supplying `rows_number` in the pagination switches to server
/// mode, where the table only displays the page the host prepared.
///
/// # Example
///
/// ```ignore
/// use trestle::prelude::*;
///
/// let columns = vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("calories", "Calories").align(Alignment::Right).sortable(),
/// ];
/// let table = Table::with_rows(columns, rows);
/// table.set_filter("berry".into());
/// let tree = table.render();
/// for event in table.drain_events() {
///     // react to requests, row clicks, scroll notifications
/// }
/// ```
pub struct Table<T: Record> {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<TableInner<T>>>,
    /// Dirty flag for re-render.
    pub(super) dirty: Arc<AtomicBool>,
    /// Outgoing event sink.
    pub(super) events: EventQueue,
    /// Pending deferred request emission.
    pub(super) deferred: DeferredSlot<RequestPayload>,
    /// Virtual-scroll viewport, active when enabled and not in grid mode.
    pub(super) viewport: VirtualScroll,
}

impl<T: Record> Table<T> {
    /// Create a table with columns and no rows.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self::with_rows(columns, Vec::new())
    }

    /// Create a table with columns and initial rows.
    pub fn with_rows(columns: Vec<Column<T>>, records: Vec<T>) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner::new(columns, records))),
            dirty: Arc::new(AtomicBool::new(false)),
            events: EventQueue::new(),
            deferred: DeferredSlot::new(),
            viewport: VirtualScroll::new(),
        }
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Read a snapshot of the internal state.
    pub(super) fn read<R>(&self, default: R, f: impl FnOnce(&TableInner<T>) -> R) -> R {
        self.inner.read().map(|guard| f(&guard)).unwrap_or(default)
    }

    /// Mutate the internal state and mark dirty.
    pub(super) fn write(&self, f: impl FnOnce(&mut TableInner<T>)) {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Records and columns
    // -------------------------------------------------------------------------

    /// Number of records (before filtering).
    pub fn len(&self) -> usize {
        self.read(0, |g| g.records.len())
    }

    /// Check if there are no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all records.
    pub fn records(&self) -> Vec<T> {
        self.read(Vec::new(), |g| g.records.clone())
    }

    /// Replace the record set.
    ///
    /// Pagination is left untouched; callers wanting a fresh first page
    /// combine this with [`first_page`](Table::first_page).
    pub fn set_records(&self, records: Vec<T>) {
        self.write(|g| g.records = records);
    }

    /// Get the column descriptors.
    pub fn columns(&self) -> Vec<Column<T>> {
        self.read(Vec::new(), |g| g.columns.clone())
    }

    /// Replace the column descriptors.
    pub fn set_columns(&self, columns: Vec<Column<T>>) {
        self.write(|g| g.columns = columns);
    }

    /// Set the row identity selector.
    pub fn set_row_key(&self, row_key: RowKey<T>) {
        self.write(|g| g.row_key = row_key);
    }

    /// Extract the identity key for a row.
    pub fn row_key_of(&self, row: &T) -> String {
        self.read(String::new(), |g| g.row_key.key_of(row))
    }

    /// Extract a cell value, honoring the column's custom extractor.
    ///
    /// Falls back to `row.field(name)` when no column matches.
    pub fn cell_value(&self, name: &str, row: &T) -> Value {
        self.read(Value::Null, |g| {
            match g.columns.iter().find(|c| c.name == name) {
                Some(col) => col.value(row),
                None => row.field(name),
            }
        })
    }

    // -------------------------------------------------------------------------
    // Pipeline output
    // -------------------------------------------------------------------------

    /// The rows visible on the current page, after filter, sort and slice.
    pub fn computed_rows(&self) -> Vec<T> {
        self.compute().0
    }

    /// Total row count: filtered length in client mode, `rows_number` in
    /// server mode.
    pub fn computed_rows_number(&self) -> usize {
        self.compute().1
    }

    /// Run the full pipeline once.
    pub fn compute(&self) -> (Vec<T>, usize) {
        self.read((Vec::new(), 0), |g| {
            pipeline::compute_visible_rows(
                &g.records,
                &g.filter,
                &g.columns,
                &g.pagination,
                g.filter_fn.as_ref(),
                g.sort_fn.as_ref(),
            )
        })
    }

    /// Check if the current page has no rows to show.
    pub fn nothing_to_display(&self) -> bool {
        self.compute().0.is_empty()
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Get the current pagination.
    pub fn pagination(&self) -> Pagination {
        self.read(Pagination::default(), |g| g.pagination.clone())
    }

    /// Replace the pagination wholesale.
    ///
    /// This is the controlled-component write path: server-mode hosts echo
    /// the pagination from each `Request` event back here after their fetch
    /// resolves. No request is scheduled for it.
    pub fn set_pagination(&self, pagination: Pagination) {
        self.write(|g| g.pagination = pagination);
    }

    /// Check if the host computes pages externally.
    ///
    /// Derived from the pagination on every call, never stored.
    pub fn is_server_side(&self) -> bool {
        self.read(false, |g| g.pagination.is_server_side())
    }

    /// Number of pages for the current total.
    pub fn pages_number(&self) -> usize {
        let total = self.computed_rows_number();
        self.read(1, |g| g.pagination.pages_number(total))
    }

    /// Go to a specific page, clamped to `[1, pages_number]`.
    pub fn set_page(&self, page: usize) {
        let pages = self.pages_number();
        let before = self.pagination();
        self.write(|g| g.pagination.page = page.clamp(1, pages));
        self.after_user_pagination_change(&before);
    }

    /// Go to the first page.
    pub fn first_page(&self) {
        self.set_page(1);
    }

    /// Go to the previous page.
    pub fn prev_page(&self) {
        let page = self.pagination().page;
        self.set_page(page.saturating_sub(1).max(1));
    }

    /// Go to the next page.
    pub fn next_page(&self) {
        let page = self.pagination().page;
        self.set_page(page + 1);
    }

    /// Go to the last page.
    pub fn last_page(&self) {
        self.set_page(self.pages_number());
    }

    /// Change the page size and return to the first page.
    pub fn set_rows_per_page(&self, rows_per_page: usize) {
        let before = self.pagination();
        self.write(|g| {
            g.pagination.rows_per_page = rows_per_page;
            g.pagination.page = 1;
        });
        self.after_user_pagination_change(&before);
    }

    /// Get the configured page-size options.
    pub fn rows_per_page_options(&self) -> Vec<usize> {
        self.read(Vec::new(), |g| g.rows_per_page_options.clone())
    }

    /// Replace the page-size options.
    pub fn set_rows_per_page_options(&self, options: Vec<usize>) {
        self.write(|g| g.rows_per_page_options = options);
    }

    /// In server mode a user-driven pagination change means the host must
    /// fetch; in client mode a re-render suffices. Navigation that lands on
    /// the same pagination (a clamped page jump, say) schedules nothing.
    pub(super) fn after_user_pagination_change(&self, before: &Pagination) {
        if self.is_server_side() && self.pagination() != *before {
            self.request_server_interaction(None, None);
        }
    }

    // -------------------------------------------------------------------------
    // Filter
    // -------------------------------------------------------------------------

    /// Get the current filter.
    pub fn filter(&self) -> Filter {
        self.read(Filter::None, |g| g.filter.clone())
    }

    /// Replace the filter. A changed filter returns to the first page.
    pub fn set_filter(&self, filter: Filter) {
        let changed = self.read(false, |g| g.filter != filter);
        if !changed {
            return;
        }
        self.write(|g| {
            g.filter = filter;
            g.pagination.page = 1;
        });
        // The filter itself changed, so a server-mode fetch is always due
        // even when the pagination stayed put.
        if self.is_server_side() {
            self.request_server_interaction(None, None);
        }
    }

    /// Supply a custom filter function.
    pub fn set_filter_fn(&self, f: FilterFn<T>) {
        self.write(|g| g.filter_fn = Some(f));
    }

    /// Supply a custom sort function.
    pub fn set_sort_fn(&self, f: SortFn<T>) {
        self.write(|g| g.sort_fn = Some(f));
    }

    // -------------------------------------------------------------------------
    // Selection and expansion
    // -------------------------------------------------------------------------

    /// Keys of the currently selected rows.
    pub fn selected_keys(&self) -> Vec<String> {
        self.read(Vec::new(), |g| g.selected.clone())
    }

    /// Replace the selection wholesale.
    pub fn set_selected(&self, keys: Vec<String>) {
        self.write(|g| g.selected = keys);
    }

    /// Check if the row with the given key is selected.
    pub fn is_selected(&self, key: &str) -> bool {
        self.read(false, |g| g.selected.iter().any(|k| k == key))
    }

    /// Toggle selection for a row key.
    ///
    /// With single selection enabled, selecting a new key replaces the
    /// previous selection instead of adding to it.
    pub fn toggle_selected(&self, key: impl Into<String>) {
        let key = key.into();
        self.write(|g| {
            if let Some(pos) = g.selected.iter().position(|k| *k == key) {
                g.selected.remove(pos);
            } else if g.single_selection {
                g.selected = vec![key];
            } else {
                g.selected.push(key);
            }
        });
    }

    /// Deselect all rows.
    pub fn clear_selection(&self) {
        self.write(|g| g.selected.clear());
    }

    /// Number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.read(0, |g| g.selected.len())
    }

    /// Restrict selection to at most one row.
    pub fn set_single_selection(&self, single: bool) {
        self.write(|g| g.single_selection = single);
    }

    /// Keys of the currently expanded rows.
    pub fn expanded_keys(&self) -> Vec<String> {
        self.read(Vec::new(), |g| g.expanded.clone())
    }

    /// Replace the expanded set wholesale.
    pub fn set_expanded(&self, keys: Vec<String>) {
        self.write(|g| g.expanded = keys);
    }

    /// Check if the row with the given key is expanded.
    pub fn is_expanded(&self, key: &str) -> bool {
        self.read(false, |g| g.expanded.iter().any(|k| k == key))
    }

    /// Toggle expansion for a row key.
    pub fn toggle_expanded(&self, key: impl Into<String>) {
        let key = key.into();
        self.write(|g| {
            if let Some(pos) = g.expanded.iter().position(|k| *k == key) {
                g.expanded.remove(pos);
            } else {
                g.expanded.push(key);
            }
        });
    }

    // -------------------------------------------------------------------------
    // Column visibility
    // -------------------------------------------------------------------------

    /// Restrict the displayed columns to the named subset.
    ///
    /// Columns keep their declared order; names matching no column are
    /// ignored. `None` shows every column.
    pub fn set_visible_columns(&self, names: Option<Vec<String>>) {
        self.write(|g| g.visible_columns = names);
    }

    /// Names of the columns currently displayed, in declared order.
    pub fn visible_column_names(&self) -> Vec<String> {
        self.read(Vec::new(), |g| {
            g.columns
                .iter()
                .filter(|c| match &g.visible_columns {
                    Some(names) => names.iter().any(|n| n == &c.name),
                    None => true,
                })
                .map(|c| c.name.clone())
                .collect()
        })
    }

    // -------------------------------------------------------------------------
    // Server interaction
    // -------------------------------------------------------------------------

    /// Schedule a deferred `Request` emission.
    ///
    /// The emission fires when [`settle`](Table::settle) runs at the end of
    /// the current update pass; until then further schedules replace the
    /// pending payload, so a batch of simultaneous changes coalesces into a
    /// single request reflecting the final state.
    pub fn request_server_interaction(
        &self,
        pagination: Option<Pagination>,
        filter: Option<Filter>,
    ) {
        let payload = RequestPayload {
            pagination: pagination.unwrap_or_else(|| self.pagination()),
            filter: filter.unwrap_or_else(|| self.filter()),
        };
        debug!("table {}: scheduling request {:?}", self.id, payload.pagination);
        self.deferred.schedule(payload);
    }

    /// Emit the pending request, if any.
    ///
    /// The host calls this once per update pass, after all state changes of
    /// the pass have been applied.
    pub fn settle(&self) {
        if let Some(payload) = self.deferred.take() {
            self.events.push(TableEvent::Request {
                pagination: payload.pagination,
                filter: payload.filter,
            });
        }
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    /// Check if the virtual-scroll viewport is active.
    pub fn has_virtual_scroll(&self) -> bool {
        self.read(false, |g| g.virtual_scroll && !g.grid)
    }

    /// Effective per-row size estimate for the viewport.
    pub fn effective_item_size(&self) -> usize {
        self.read(48, |g| {
            g.virtual_scroll_item_size
                .unwrap_or(if g.dense { 28 } else { 48 })
        })
    }

    /// Get the virtual-scroll viewport.
    ///
    /// The renderer uses this to feed viewport size and scroll offsets in.
    pub fn viewport(&self) -> VirtualScroll {
        self.viewport.clone()
    }

    /// Scroll so the given row sits at the top.
    ///
    /// With virtual scrolling active this delegates to the viewport;
    /// otherwise the row's offset is computed directly from the item size
    /// and assigned to the plain body container. Both paths emit the same
    /// `VirtualScroll` event shape. An index with no renderable row is a
    /// silent no-op.
    pub fn scroll_to(&self, index: usize) {
        if self.has_virtual_scroll() {
            if let Some(details) = self.viewport.scroll_to(index) {
                self.events.push(TableEvent::VirtualScroll(details));
            }
            return;
        }

        let (rows, _) = self.compute();
        if index >= rows.len() {
            return;
        }

        let item_size = self.effective_item_size();
        let mut details = None;
        self.write(|g| {
            let offset_top = index * item_size;
            let direction = if offset_top < g.scroll_offset {
                ScrollChange::Decrease
            } else {
                ScrollChange::Increase
            };
            g.scroll_offset = offset_top;
            let to = if g.pagination.rows_per_page == 0 {
                rows.len().saturating_sub(1)
            } else {
                g.pagination.rows_per_page - 1
            };
            details = Some(ScrollDetails {
                index,
                from: 0,
                to,
                direction,
            });
        });
        if let Some(details) = details {
            self.events.push(TableEvent::VirtualScroll(details));
        }
    }

    /// Reset the virtual-scroll viewport to the top, discarding cached
    /// measurements. No-op when virtual scrolling is inactive.
    pub fn reset_virtual_scroll(&self) {
        if self.has_virtual_scroll() {
            self.viewport.reset();
        }
    }

    /// Re-emit a scroll notification from the viewport unchanged.
    pub fn notify_scroll(&self, details: ScrollDetails) {
        self.events.push(TableEvent::VirtualScroll(details));
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Get the outgoing event sink.
    pub fn events(&self) -> EventQueue {
        self.events.clone()
    }

    /// Take all pending events.
    pub fn drain_events(&self) -> Vec<TableEvent> {
        self.events.drain()
    }

    // -------------------------------------------------------------------------
    // Display configuration
    // -------------------------------------------------------------------------

    /// Set the top-bar title.
    pub fn set_title(&self, title: impl Into<String>) {
        self.write(|g| g.title = Some(title.into()));
    }

    /// Set the loading flag.
    pub fn set_loading(&self, loading: bool) {
        self.write(|g| g.loading = loading);
    }

    /// Get the loading flag.
    pub fn loading(&self) -> bool {
        self.read(false, |g| g.loading)
    }

    /// Limit header sort cycling to ascending/descending (never unsorted).
    pub fn set_binary_state_sort(&self, binary: bool) {
        self.write(|g| g.binary_state_sort = binary);
    }

    /// Hide the header row.
    pub fn set_hide_header(&self, hide: bool) {
        self.write(|g| g.hide_header = hide);
    }

    /// Switch between table and grid (card) layout.
    pub fn set_grid(&self, grid: bool) {
        self.write(|g| g.grid = grid);
    }

    /// Show the header while in grid layout.
    pub fn set_grid_header(&self, grid_header: bool) {
        self.write(|g| g.grid_header = grid_header);
    }

    /// Set dense display (also shrinks the default virtual-scroll item size).
    pub fn set_dense(&self, dense: bool) {
        self.write(|g| g.dense = dense);
    }

    /// Set the flat card variant.
    pub fn set_flat(&self, flat: bool) {
        self.write(|g| g.flat = flat);
    }

    /// Set the bordered card variant.
    pub fn set_bordered(&self, bordered: bool) {
        self.write(|g| g.bordered = bordered);
    }

    /// Set the square card variant.
    pub fn set_square(&self, square: bool) {
        self.write(|g| g.square = square);
    }

    /// Set the dark theme variant.
    pub fn set_dark(&self, dark: bool) {
        self.write(|g| g.dark = dark);
    }

    /// Set the row separator style.
    pub fn set_separator(&self, separator: Separator) {
        self.write(|g| g.separator = separator);
    }

    /// Allow cell content to wrap.
    pub fn set_wrap_cells(&self, wrap: bool) {
        self.write(|g| g.wrap_cells = wrap);
    }

    /// Toggle fullscreen display.
    pub fn set_fullscreen(&self, fullscreen: bool) {
        self.write(|g| g.fullscreen = fullscreen);
    }

    /// Enable virtual scrolling (ignored while in grid layout).
    pub fn set_virtual_scroll(&self, virtual_scroll: bool) {
        self.write(|g| g.virtual_scroll = virtual_scroll);
    }

    /// Override the virtual-scroll item size estimate.
    pub fn set_virtual_scroll_item_size(&self, size: Option<usize>) {
        self.write(|g| g.virtual_scroll_item_size = size);
    }

    /// Message shown when there are no records at all.
    pub fn set_no_data_label(&self, label: impl Into<String>) {
        self.write(|g| g.no_data_label = Some(label.into()));
    }

    /// Message shown when the filter matched nothing.
    pub fn set_no_results_label(&self, label: impl Into<String>) {
        self.write(|g| g.no_results_label = Some(label.into()));
    }

    /// Message shown while loading with nothing to display yet.
    pub fn set_loading_label(&self, label: impl Into<String>) {
        self.write(|g| g.loading_label = Some(label.into()));
    }

    /// Label for the page-size select in the bottom bar.
    pub fn set_rows_per_page_label(&self, label: impl Into<String>) {
        self.write(|g| g.rows_per_page_label = Some(label.into()));
    }

    /// Class override for the scrollable table region.
    pub fn set_table_class(&self, class: impl Into<String>) {
        self.write(|g| g.table_class = Some(class.into()));
    }

    /// Style override for the scrollable table region.
    pub fn set_table_style(&self, style: impl Into<String>) {
        self.write(|g| g.table_style = Some(style.into()));
    }

    /// Class override for the header row.
    pub fn set_table_header_class(&self, class: impl Into<String>) {
        self.write(|g| g.table_header_class = Some(class.into()));
    }

    /// Style override for the header row.
    pub fn set_table_header_style(&self, style: impl Into<String>) {
        self.write(|g| g.table_header_style = Some(style.into()));
    }

    /// Class merged onto the container when not in grid layout.
    pub fn set_card_class(&self, class: impl Into<String>) {
        self.write(|g| g.card_class = Some(class.into()));
    }

    /// Style merged onto the container when not in grid layout.
    pub fn set_card_style(&self, style: impl Into<String>) {
        self.write(|g| g.card_style = Some(style.into()));
    }

    /// Supply the loading overlay node.
    pub fn set_loading_node(&self, node: Node) {
        self.write(|g| g.loading_node = Some(node));
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst) || self.viewport.is_dirty()
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
        self.viewport.clear_dirty();
    }
}

impl<T: Record> Clone for Table<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            events: self.events.clone(),
            deferred: self.deferred.clone(),
            viewport: self.viewport.clone(),
        }
    }
}

impl<T: Record> std::fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("id", &self.id)
            .field("records", &self.len())
            .field("pagination", &self.pagination())
            .field("server_side", &self.is_server_side())
            .finish()
    }
}
