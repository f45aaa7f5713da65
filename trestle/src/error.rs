//! Error types for configuration parsing.

/// Error type for parsing a [`Separator`](crate::components::Separator)
/// from its string form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown separator style: {0:?} (expected horizontal, vertical, cell or none)")]
pub struct ParseSeparatorError(pub String);
