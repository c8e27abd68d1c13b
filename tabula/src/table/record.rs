//! Row handles and field values.
//!
//! A [`Row`] is the identity the table tracks. Two rows are the same row only
//! when they point at the same allocation, so records with identical content
//! stay distinct for selection purposes.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// A single field value read from a record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Display string used when a column has no render transform.
    pub fn display(&self) -> String {
        match self {
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// Trait for data items that can be displayed as table rows.
///
/// The table never inspects a record except through this accessor.
///
/// # Example
///
/// ```
/// use tabula::table::{Record, Value};
///
/// struct User {
///     name: String,
///     age: Option<u32>,
/// }
///
/// impl Record for User {
///     fn field(&self, accessor: &str) -> Option<Value> {
///         match accessor {
///             "name" => Some(self.name.as_str().into()),
///             "age" => self.age.map(Value::from),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record: Send + Sync + 'static {
    /// Read the field named by `accessor`. `None` means the field is absent.
    fn field(&self, accessor: &str) -> Option<Value>;
}

/// Identity handle for a record.
///
/// Equality and hashing are by pointer, not by value.
pub struct Row<R>(Arc<R>);

impl<R> Row<R> {
    /// Wrap a record in a new handle with a fresh identity.
    pub fn new(record: R) -> Self {
        Self(Arc::new(record))
    }

    /// Build a batch of rows from plain records.
    pub fn from_records(records: impl IntoIterator<Item = R>) -> Vec<Self> {
        records.into_iter().map(Self::new).collect()
    }

    /// Whether two handles refer to the same record.
    pub fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }
}

impl<R> From<Arc<R>> for Row<R> {
    fn from(record: Arc<R>) -> Self {
        Self(record)
    }
}

impl<R> Clone for Row<R> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<R> Deref for Row<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.0
    }
}

impl<R> PartialEq for Row<R> {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl<R> Eq for Row<R> {}

impl<R> Hash for Row<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl<R: fmt::Debug> fmt::Debug for Row<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Row").field(&*self.0).finish()
    }
}
