//! trestle - a data-table view component.
//!
//! Transforms a caller-owned array of records plus column and display
//! configuration into a view tree, and reports user interactions (sort
//! clicks, page changes, row clicks, scrolls, server fetch requests) back
//! as events. Purely presentational: no persistence, no I/O, no opinion on
//! how the host paints the emitted tree.

pub mod components;
pub mod error;
pub mod events;
pub mod filters;
pub mod node;
pub mod scheduler;

pub mod prelude {
    pub use crate::components::table::{
        Alignment, Column, Pagination, Record, RowKey, Separator, Table, TableId,
    };
    pub use crate::components::{LinearProgress, VirtualScroll, VirtualScrollId};
    pub use crate::events::{
        EventQueue, EventResult, ScrollChange, ScrollDetails, TableEvent,
    };
    pub use crate::filters::Filter;
    pub use crate::node::Node;
    pub use crate::scheduler::DeferredSlot;
}
