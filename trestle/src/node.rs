//! The view tree emitted by components.
//!
//! Rendering a component produces a `Node` tree: a pure description of what
//! should be on screen. The host runtime owns diffing and painting; nothing
//! in this crate touches the screen directly. Nodes compare with `==`, which
//! keeps snapshot-style assertions cheap in tests.

/// A node in the emitted view tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// Empty node (renders nothing)
    #[default]
    Empty,

    /// Text content
    Text {
        content: String,
        class: String,
    },

    /// Generic container
    Element {
        class: String,
        style: String,
        children: Vec<Node>,
    },

    /// Linear progress indicator
    Progress {
        class: String,
        color: String,
        dark: bool,
        indeterminate: bool,
    },

    /// Virtual-scroll viewport wrapper.
    ///
    /// `children` holds only the materialized window `[from, to]`; the
    /// header node renders above the windowed rows and never scrolls out.
    Viewport {
        class: String,
        style: String,
        from: usize,
        to: usize,
        header: Box<Node>,
        children: Vec<Node>,
    },
}

impl Node {
    /// Create an empty node
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Create a text node without classes
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            class: String::new(),
        }
    }

    /// Create a text node with a class string
    pub fn text_classed(content: impl Into<String>, class: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            class: class.into(),
        }
    }

    /// Create a container node
    pub fn element(class: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Element {
            class: class.into(),
            style: String::new(),
            children,
        }
    }

    /// Create a container node with inline style
    pub fn element_styled(
        class: impl Into<String>,
        style: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Self::Element {
            class: class.into(),
            style: style.into(),
            children,
        }
    }

    /// Check if node is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Get the class string if this node carries one
    pub fn class(&self) -> Option<&str> {
        match self {
            Self::Text { class, .. }
            | Self::Element { class, .. }
            | Self::Progress { class, .. }
            | Self::Viewport { class, .. } => Some(class),
            Self::Empty => None,
        }
    }

    /// Get child nodes, if any
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Element { children, .. } | Self::Viewport { children, .. } => children,
            _ => &[],
        }
    }

    /// Depth-first search for the first descendant whose class string
    /// contains `fragment`.
    pub fn find_class(&self, fragment: &str) -> Option<&Node> {
        if self.class().is_some_and(|c| c.contains(fragment)) {
            return Some(self);
        }
        match self {
            Self::Viewport {
                header, children, ..
            } => header
                .find_class(fragment)
                .or_else(|| children.iter().find_map(|c| c.find_class(fragment))),
            _ => self
                .children()
                .iter()
                .find_map(|c| c.find_class(fragment)),
        }
    }
}
