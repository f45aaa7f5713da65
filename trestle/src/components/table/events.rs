//! Event handling for the Table component.

use log::debug;

use crate::events::{EventResult, TableEvent};

use super::column::Record;
use super::state::Table;

impl<T: Record> Table<T> {
    /// Cycle the sort state for a column.
    ///
    /// Default cycle per column: ascending, descending, unsorted. With
    /// binary-state sort enabled the unsorted step is skipped and the
    /// direction just flips. Either way the page returns to 1.
    ///
    /// Returns the new `(sort_by, descending)` state.
    pub fn sort(&self, name: &str) -> (Option<String>, bool) {
        let before = self.pagination();
        let mut result = (None, false);
        self.write(|g| {
            if g.pagination.sort_by.as_deref() == Some(name) {
                if g.binary_state_sort {
                    g.pagination.descending = !g.pagination.descending;
                } else if g.pagination.descending {
                    g.pagination.sort_by = None;
                    g.pagination.descending = false;
                } else {
                    g.pagination.descending = true;
                }
            } else {
                g.pagination.sort_by = Some(name.to_string());
                g.pagination.descending = false;
            }
            g.pagination.page = 1;
            result = (g.pagination.sort_by.clone(), g.pagination.descending);
        });
        debug!("table sort: {:?}", result);
        self.after_user_pagination_change(&before);
        result
    }

    /// Handle a click on a header cell.
    ///
    /// Ignored for unknown or non-sortable columns.
    pub fn on_header_click(&self, name: &str) -> EventResult {
        let sortable = self.read(false, |g| {
            g.columns.iter().any(|c| c.name == name && c.sortable)
        });
        if !sortable {
            return EventResult::Ignored;
        }
        self.sort(name);
        EventResult::Consumed
    }

    /// Handle a click on a visible data row.
    ///
    /// `index` addresses the current page's visible rows. Out-of-range
    /// indices are ignored.
    pub fn on_row_click(&self, index: usize) -> EventResult {
        match self.visible_row_key(index) {
            Some(key) => {
                self.events.push(TableEvent::RowClick { key, index });
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    /// Handle a double-click on a visible data row.
    pub fn on_row_dblclick(&self, index: usize) -> EventResult {
        match self.visible_row_key(index) {
            Some(key) => {
                self.events.push(TableEvent::RowDblClick { key, index });
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    fn visible_row_key(&self, index: usize) -> Option<String> {
        let (rows, _) = self.compute();
        let row = rows.get(index)?;
        Some(self.row_key_of(row))
    }
}
