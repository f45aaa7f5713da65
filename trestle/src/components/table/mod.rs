//! Table component - records in, view tree and interaction events out.
//!
//! The Table component provides:
//! - A filter -> sort -> paginate pipeline deriving the visible rows
//! - Client- and server-side pagination (server mode only emits `Request`
//!   events; the host performs the fetch)
//! - Sortable columns with three-state or binary cycling
//! - Grid (card) or table layout, with dense/flat/bordered/square variants
//! - Virtual scrolling through a windowed viewport
//!
//! # Example
//!
//! ```ignore
//! use trestle::prelude::*;
//! use serde_json::json;
//!
//! let columns = vec![
//!     Column::new("name", "Dessert").sortable(),
//!     Column::new("calories", "Calories").align(Alignment::Right).sortable(),
//! ];
//! let rows = vec![
//!     json!({ "id": 1, "name": "Frozen Yogurt", "calories": 159 }),
//!     json!({ "id": 2, "name": "Eclair", "calories": 262 }),
//! ];
//!
//! let table = Table::with_rows(columns, rows);
//! table.sort("calories");
//! let tree = table.render();
//! ```

mod column;
mod events;
mod pagination;
mod pipeline;
mod render;
mod state;

pub use column::{
    Alignment, Column, CompareFn, Record, RowKey, ValueFn, default_compare, value_text,
};
pub use pagination::{DEFAULT_ROWS_PER_PAGE_OPTIONS, Pagination};
pub use pipeline::{FilterFn, SortFn, compute_visible_rows, default_sort, filtered_sorted_rows};
pub use render::Separator;
pub use state::{Table, TableId};
