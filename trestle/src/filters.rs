//! Filter values and the built-in filter functions.
//!
//! The table core treats the filter as opaque: whatever the host supplies is
//! passed verbatim to the filter function. Two built-ins are provided:
//! [`substring`] (the default, case-insensitive containment over every
//! column's cell text) and [`fuzzy`] (nucleo-matcher scoring, used for
//! membership only; matching rows keep their original order so the sort
//! stage stays authoritative).

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde_json::Value;

use crate::components::table::{Column, Record, value_text};

/// An opaque filter value.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Filter {
    /// No filter applied.
    #[default]
    None,
    /// Free-text search terms.
    Text(String),
    /// Structured filter value, interpreted by the filter function only.
    Value(Value),
}

impl Filter {
    /// Check if no filter is set.
    pub fn is_none(&self) -> bool {
        matches!(self, Filter::None)
    }

    /// Get the search terms as text.
    ///
    /// A structured value is serialized; `None` yields an empty string.
    pub fn terms(&self) -> String {
        match self {
            Filter::None => String::new(),
            Filter::Text(s) => s.clone(),
            Filter::Value(v) => value_text(v),
        }
    }
}

impl From<&str> for Filter {
    fn from(s: &str) -> Self {
        Filter::Text(s.to_string())
    }
}

impl From<String> for Filter {
    fn from(s: String) -> Self {
        Filter::Text(s)
    }
}

/// Default filter: keep rows where any column's cell text contains the
/// search terms, case-insensitively. An empty filter keeps everything.
pub fn substring<T: Record>(records: &[T], filter: &Filter, columns: &[Column<T>]) -> Vec<T> {
    let needle = filter.terms().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|row| {
            columns
                .iter()
                .any(|col| value_text(&col.value(row)).to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Fuzzy filter using nucleo-matcher.
///
/// A row survives when the concatenated cell text of its columns scores
/// against the pattern. Scores only gate membership; the relative order of
/// surviving rows is preserved.
pub fn fuzzy<T: Record>(records: &[T], filter: &Filter, columns: &[Column<T>]) -> Vec<T> {
    let query = filter.terms();
    if query.is_empty() {
        return records.to_vec();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        &query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    records
        .iter()
        .filter(|row| {
            let haystack: String = columns
                .iter()
                .map(|col| value_text(&col.value(row)))
                .collect::<Vec<_>>()
                .join(" ");
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(&haystack, &mut buf);
            pattern.score(haystack, &mut matcher).is_some()
        })
        .cloned()
        .collect()
}
