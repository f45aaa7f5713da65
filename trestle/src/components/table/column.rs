//! Column descriptors, the Record trait and row-key selection.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Trait for values displayable as table rows.
///
/// A record is opaque to the table: the only requirement is that named
/// fields can be extracted as [`Value`]s. Implemented for `serde_json::Value`
/// out of the box, so JSON rows work without any impl.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone)]
/// struct User {
///     id: u64,
///     name: String,
/// }
///
/// impl Record for User {
///     fn field(&self, name: &str) -> Value {
///         match name {
///             "id" => self.id.into(),
///             "name" => self.name.clone().into(),
///             _ => Value::Null,
///         }
///     }
/// }
/// ```
pub trait Record: Clone + Send + Sync + 'static {
    /// Extract a named field from this record.
    ///
    /// Unknown names return `Value::Null`.
    fn field(&self, name: &str) -> Value;
}

impl Record for Value {
    fn field(&self, name: &str) -> Value {
        self.get(name).cloned().unwrap_or(Value::Null)
    }
}

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Class fragment for this alignment.
    pub fn class(&self) -> &'static str {
        match self {
            Alignment::Left => "text-left",
            Alignment::Center => "text-center",
            Alignment::Right => "text-right",
        }
    }
}

/// Custom cell value extractor.
pub type ValueFn<T> = Arc<dyn Fn(&T) -> Value + Send + Sync>;

/// Custom sort comparator over extracted cell values.
pub type CompareFn = Arc<dyn Fn(&Value, &Value) -> Ordering + Send + Sync>;

/// Column configuration.
///
/// Columns define the table structure: which field each column shows, its
/// header label, alignment, and whether clicking the header sorts by it.
/// Immutable once handed to the table for a render pass.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("id", "ID"),
///     Column::new("name", "Name").sortable(),
///     Column::new("age", "Age").align(Alignment::Right).sortable(),
/// ];
/// ```
pub struct Column<T: Record> {
    /// Unique column name, also the default field extracted from each row.
    pub name: String,
    /// Header label text.
    pub label: String,
    /// Horizontal alignment.
    pub align: Alignment,
    /// Whether this column is sortable.
    pub sortable: bool,
    field: Option<ValueFn<T>>,
    sort: Option<CompareFn>,
}

impl<T: Record> Column<T> {
    /// Create a new column.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            align: Alignment::Left,
            sortable: false,
            field: None,
            sort: None,
        }
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Make the column sortable.
    ///
    /// Sortable columns show sort indicators in the header and respond to
    /// header clicks by cycling the sort state.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Override how the cell value is extracted from a row.
    ///
    /// Without this, the value is `row.field(&self.name)`.
    pub fn with_field(mut self, f: impl Fn(&T) -> Value + Send + Sync + 'static) -> Self {
        self.field = Some(Arc::new(f));
        self
    }

    /// Override the sort comparator for this column.
    ///
    /// Without this, [`default_compare`] is used.
    pub fn with_sort(
        mut self,
        f: impl Fn(&Value, &Value) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        self.sort = Some(Arc::new(f));
        self
    }

    /// Extract this column's cell value from a row.
    pub fn value(&self, row: &T) -> Value {
        match &self.field {
            Some(f) => f(row),
            None => row.field(&self.name),
        }
    }

    /// Compare two cell values using this column's comparator.
    pub fn compare(&self, a: &Value, b: &Value) -> Ordering {
        match &self.sort {
            Some(f) => f(a, b),
            None => default_compare(a, b),
        }
    }
}

impl<T: Record> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            label: self.label.clone(),
            align: self.align,
            sortable: self.sortable,
            field: self.field.clone(),
            sort: self.sort.clone(),
        }
    }
}

impl<T: Record> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .field("custom_field", &self.field.is_some())
            .field("custom_sort", &self.sort.is_some())
            .finish()
    }
}

/// Row identity selector: a field name or a closure over the record.
///
/// Extracted keys must be unique within the currently visible row set; they
/// track selection and virtual-scroll item identity downstream. Uniqueness
/// is a precondition on the caller, not checked here.
pub enum RowKey<T: Record> {
    /// Extract the key from a named field.
    Field(String),
    /// Compute the key with a closure.
    With(Arc<dyn Fn(&T) -> String + Send + Sync>),
}

impl<T: Record> RowKey<T> {
    /// Extract the key for a row.
    pub fn key_of(&self, row: &T) -> String {
        match self {
            RowKey::Field(name) => match row.field(name) {
                Value::String(s) => s,
                v => value_text(&v),
            },
            RowKey::With(f) => f(row),
        }
    }
}

impl<T: Record> Default for RowKey<T> {
    fn default() -> Self {
        RowKey::Field("id".to_string())
    }
}

impl<T: Record> Clone for RowKey<T> {
    fn clone(&self) -> Self {
        match self {
            RowKey::Field(name) => RowKey::Field(name.clone()),
            RowKey::With(f) => RowKey::With(Arc::clone(f)),
        }
    }
}

impl<T: Record> fmt::Debug for RowKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Field(name) => f.debug_tuple("RowKey::Field").field(name).finish(),
            RowKey::With(_) => f.write_str("RowKey::With(..)"),
        }
    }
}

/// Render a cell value as display text.
///
/// Strings render bare (no quotes), null renders empty, everything else
/// uses its JSON serialization.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        v => v.to_string(),
    }
}

/// Default cell value comparator.
///
/// Values of different kinds order as null < bool < number < string <
/// everything else. Numbers compare as f64, strings case-insensitively.
/// Callers with mixed or exotic cell types should supply
/// [`Column::with_sort`] instead of relying on these coercions.
pub fn default_compare(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            _ => 4,
        }
    }

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        _ if rank(a) != rank(b) => rank(a).cmp(&rank(b)),
        _ => value_text(a).cmp(&value_text(b)),
    }
}
