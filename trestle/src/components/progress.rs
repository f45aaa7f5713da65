//! Linear progress indicator.
//!
//! Consumed by the table's loading state; a thin component that only knows
//! how to describe itself as a node.

use crate::node::Node;

/// An indeterminate linear progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgress {
    /// Indicator color name.
    pub color: String,
    /// Dark theme variant.
    pub dark: bool,
    /// Animate without a known completion fraction.
    pub indeterminate: bool,
}

impl Default for LinearProgress {
    fn default() -> Self {
        Self {
            color: "grey-8".to_string(),
            dark: false,
            indeterminate: true,
        }
    }
}

impl LinearProgress {
    /// Create a progress bar with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indicator color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the dark theme variant.
    pub fn dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    /// Describe this progress bar as a node.
    pub fn node(&self, class: impl Into<String>) -> Node {
        Node::Progress {
            class: class.into(),
            color: self.color.clone(),
            dark: self.dark,
            indeterminate: self.indeterminate,
        }
    }
}
