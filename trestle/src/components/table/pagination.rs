//! Pagination state.

use serde::{Deserialize, Serialize};

/// Rows-per-page options offered when none are configured.
///
/// The trailing 0 is the "All" option (no page limit).
pub const DEFAULT_ROWS_PER_PAGE_OPTIONS: &[usize] = &[5, 7, 10, 15, 20, 25, 50, 0];

/// Pagination, sorting and (in server mode) the authoritative row count.
///
/// The presence of `rows_number` is the sole discriminator between server
/// mode (the host computed the page externally and supplies the total) and
/// client mode (the pipeline computes everything locally). It is re-derived
/// on every [`is_server_side`](Pagination::is_server_side) call, never
/// stored as a flag.
///
/// Server-mode hosts are expected to echo the pagination carried by each
/// `Request` event back into the table after the fetch resolves, updating
/// `rows_number` with the fresh total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Name of the column sorted by, if any.
    pub sort_by: Option<String>,
    /// Sort direction.
    pub descending: bool,
    /// Current page, 1-based.
    pub page: usize,
    /// Rows per page; 0 means unlimited.
    pub rows_per_page: usize,
    /// Total row count as known by the server. `Some` switches the table
    /// into server mode, including `Some(0)`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_number: Option<usize>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            sort_by: None,
            descending: false,
            page: 1,
            rows_per_page: 5,
            rows_number: None,
        }
    }
}

impl Pagination {
    /// Initial pagination: defaults with `rows_per_page` taken from the
    /// first configured page-size option (5 when the list is empty).
    pub fn initial(rows_per_page_options: &[usize]) -> Self {
        Self {
            rows_per_page: rows_per_page_options.first().copied().unwrap_or(5),
            ..Self::default()
        }
    }

    /// Check if the host computes pages externally.
    pub fn is_server_side(&self) -> bool {
        self.rows_number.is_some()
    }

    /// Index of the first row on the current page.
    pub fn first_row_index(&self) -> usize {
        self.page.saturating_sub(1) * self.rows_per_page
    }

    /// Exclusive index one past the last row on the current page.
    pub fn last_row_index(&self) -> usize {
        self.first_row_index() + self.rows_per_page
    }

    /// Number of pages for the given total row count (at least 1).
    pub fn pages_number(&self, total: usize) -> usize {
        if self.rows_per_page == 0 {
            1
        } else {
            total.div_ceil(self.rows_per_page).max(1)
        }
    }
}
