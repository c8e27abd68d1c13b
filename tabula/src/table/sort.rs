//! Sort engine.
//!
//! Produces an ordered view of the rows for a [`SortDirective`] without
//! touching the caller's collection. Ordering is total over [`Value`]s and
//! stable for ties in both directions.

use std::cmp::Ordering;

use super::record::{Record, Row, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// The active sort field and direction.
///
/// `field == None` means natural input order, which is also the initial state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortDirective {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortDirective {
    /// Natural input order.
    pub fn none() -> Self {
        Self::default()
    }

    /// Sort by `field` ascending.
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            direction: SortDirection::Ascending,
        }
    }

    /// Sort by `field` descending.
    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            direction: SortDirection::Descending,
        }
    }

    /// Whether this directive sorts by `field`.
    pub fn targets(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }

    /// Apply a "sort by `field`" gesture.
    ///
    /// Same field flips the direction; a different field starts ascending.
    pub fn toggled(&self, field: &str) -> Self {
        if self.targets(field) {
            Self {
                field: self.field.clone(),
                direction: self.direction.flipped(),
            }
        } else {
            Self::ascending(field)
        }
    }
}

// Kind rank for mixed-type comparisons: Bool < number < Text.
fn rank(value: &Value) -> u8 {
    match value {
        Value::Bool(_) => 0,
        Value::Int(_) | Value::Float(_) => 1,
        Value::Text(_) => 2,
    }
}

/// Compare two field values. Absent sorts below every defined value.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let (a, b) = match (a, b) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Less,
        (Some(_), None) => return Ordering::Greater,
        (Some(a), Some(b)) => (a, b),
    };

    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => x.total_cmp(y),
        (Value::Int(x), Value::Float(y)) => (*x as f64).total_cmp(y),
        (Value::Float(x), Value::Int(y)) => x.total_cmp(&(*y as f64)),
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// Compute the display order of `data` under `directive`.
///
/// With no field the rows come back in input order. Otherwise the result is a
/// stable sort on the field value. `data` is never modified.
pub fn compute_order<R: Record>(data: &[Row<R>], directive: &SortDirective) -> Vec<Row<R>> {
    let Some(field) = directive.field.as_deref() else {
        return data.to_vec();
    };

    // Read each key once, then sort the (key, row) pairs.
    let mut keyed: Vec<(Option<Value>, &Row<R>)> =
        data.iter().map(|row| (row.field(field), row)).collect();

    let direction = directive.direction;
    keyed.sort_by(|(a, _), (b, _)| {
        let ord = compare_values(a.as_ref(), b.as_ref());
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    keyed.into_iter().map(|(_, row)| row.clone()).collect()
}
