//! Virtual-scroll viewport component.
//!
//! Renders only the contiguous window of items currently near the visible
//! viewport. The table delegates to this component whenever virtual
//! scrolling is enabled and the display is not in grid mode.

mod state;

pub use state::{VirtualScroll, VirtualScrollId};
