//! The row pipeline: filter, then sort, then slice for the current page.
//!
//! Pure functions of their inputs. The caller's record slice is never
//! reordered in place; sorting always operates on a copy.

use std::sync::Arc;

use log::debug;

use crate::filters::{self, Filter};

use super::column::{Column, Record};
use super::pagination::Pagination;

/// Caller-supplied filter function.
///
/// Receives the full record set, the opaque filter value and the column
/// descriptors; returns the surviving rows.
pub type FilterFn<T> = Arc<dyn Fn(&[T], &Filter, &[Column<T>]) -> Vec<T> + Send + Sync>;

/// Caller-supplied sort function.
///
/// Receives an owned copy of the rows, the sort column name, the direction
/// and the column descriptors; returns the rows in order.
pub type SortFn<T> = Arc<dyn Fn(Vec<T>, &str, bool, &[Column<T>]) -> Vec<T> + Send + Sync>;

/// Default sort: stable sort by the named column's comparator.
///
/// A `sort_by` naming no column leaves the order untouched. Equal keys keep
/// their relative order, descending included (the comparator is reversed,
/// not the result).
pub fn default_sort<T: Record>(
    mut rows: Vec<T>,
    sort_by: &str,
    descending: bool,
    columns: &[Column<T>],
) -> Vec<T> {
    let Some(col) = columns.iter().find(|c| c.name == sort_by) else {
        return rows;
    };
    rows.sort_by(|a, b| {
        let ord = col.compare(&col.value(a), &col.value(b));
        if descending { ord.reverse() } else { ord }
    });
    rows
}

/// Apply filter then sort, without pagination slicing.
///
/// Server mode and empty input short-circuit: the records come back
/// unchanged, the pipeline does no local work when the server is
/// authoritative.
pub fn filtered_sorted_rows<T: Record>(
    records: &[T],
    filter: &Filter,
    columns: &[Column<T>],
    pagination: &Pagination,
    filter_fn: Option<&FilterFn<T>>,
    sort_fn: Option<&SortFn<T>>,
) -> Vec<T> {
    if pagination.is_server_side() || records.is_empty() {
        return records.to_vec();
    }

    let mut rows = if filter.is_none() {
        records.to_vec()
    } else {
        match filter_fn {
            Some(f) => f(records, filter, columns),
            None => filters::substring(records, filter, columns),
        }
    };

    if let Some(sort_by) = pagination.sort_by.clone()
        && columns.iter().any(|c| c.name == sort_by)
    {
        rows = match sort_fn {
            Some(f) => f(rows, &sort_by, pagination.descending, columns),
            None => default_sort(rows, &sort_by, pagination.descending, columns),
        };
    }

    rows
}

/// Derive the displayed row subset and the total row count.
///
/// Client mode: filter, sort, then slice `[first_row_index, last_row_index)`
/// unless `rows_per_page` is 0 (unlimited). The total is the filtered,
/// pre-pagination length. Server mode: the records pass through unchanged
/// and the total is `rows_number` (0 when absent).
pub fn compute_visible_rows<T: Record>(
    records: &[T],
    filter: &Filter,
    columns: &[Column<T>],
    pagination: &Pagination,
    filter_fn: Option<&FilterFn<T>>,
    sort_fn: Option<&SortFn<T>>,
) -> (Vec<T>, usize) {
    if pagination.is_server_side() {
        return (records.to_vec(), pagination.rows_number.unwrap_or(0));
    }
    if records.is_empty() {
        return (Vec::new(), 0);
    }

    let mut rows = filtered_sorted_rows(records, filter, columns, pagination, filter_fn, sort_fn);
    let total = rows.len();

    if pagination.rows_per_page != 0 {
        let first = pagination.first_row_index();
        let last = pagination.last_row_index();

        if first == 0 {
            // Already page one and the rows are already our copy: drop the
            // tail instead of re-slicing.
            rows.truncate(last);
        } else if first >= rows.len() {
            rows.clear();
        } else {
            rows = rows[first..last.min(rows.len())].to_vec();
        }
    }

    debug!(
        "pipeline: {} records -> {} visible (total {}, page {}, rpp {})",
        records.len(),
        rows.len(),
        total,
        pagination.page,
        pagination.rows_per_page
    );

    (rows, total)
}
