//! UI components.

mod progress;
pub mod table;
mod virtual_scroll;

pub use progress::LinearProgress;
pub use table::{
    Alignment, Column, Pagination, Record, RowKey, Separator, Table, TableId,
};
pub use virtual_scroll::{VirtualScroll, VirtualScrollId};
