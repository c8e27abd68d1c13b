//! Selection tracking for table rows.
//!
//! Selection is keyed by row identity, so reordering the rows never
//! invalidates it. Members keep the order in which they were selected.

use indexmap::IndexSet;

use super::record::Row;

/// Aggregate selection state driving a "select all" control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionAggregate {
    /// Every visible row is selected.
    AllSelected,
    /// At least one row is selected, but not all.
    SomeSelected,
    /// Nothing is selected, or there is nothing to select.
    #[default]
    NoneSelected,
}

impl SelectionAggregate {
    /// Derive the aggregate for `data` against `selection`.
    pub fn derive<R>(data: &[Row<R>], selection: &Selection<R>) -> Self {
        if data.is_empty() {
            return SelectionAggregate::NoneSelected;
        }
        let all =
            selection.len() == data.len() && data.iter().all(|row| selection.is_selected(row));
        if all {
            SelectionAggregate::AllSelected
        } else if !selection.is_empty() {
            SelectionAggregate::SomeSelected
        } else {
            SelectionAggregate::NoneSelected
        }
    }

    pub fn all_selected(self) -> bool {
        self == SelectionAggregate::AllSelected
    }

    pub fn some_selected(self) -> bool {
        self == SelectionAggregate::SomeSelected
    }
}

/// Set of selected rows.
#[derive(Debug)]
pub struct Selection<R> {
    selected: IndexSet<Row<R>>,
}

impl<R> Default for Selection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for Selection<R> {
    fn clone(&self) -> Self {
        Self {
            selected: self.selected.clone(),
        }
    }
}

impl<R> Selection<R> {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self {
            selected: IndexSet::new(),
        }
    }

    /// Add `row` when `checked`, remove it otherwise.
    /// Returns true if membership changed.
    pub fn toggle_row(&mut self, row: &Row<R>, checked: bool) -> bool {
        if checked {
            self.selected.insert(row.clone())
        } else {
            self.selected.shift_remove(row)
        }
    }

    /// Replace the selection with all of `data` when `checked`, or clear it.
    ///
    /// This overwrites rather than accumulates.
    pub fn toggle_all(&mut self, data: &[Row<R>], checked: bool) {
        self.selected.clear();
        if checked {
            self.selected.extend(data.iter().cloned());
        }
    }

    /// Check if a row is selected.
    pub fn is_selected(&self, row: &Row<R>) -> bool {
        self.selected.contains(row)
    }

    /// Drop selections for rows no longer in `data`.
    /// Returns the number of rows removed.
    pub fn retain_present(&mut self, data: &[Row<R>]) -> usize {
        let before = self.selected.len();
        let present: IndexSet<&Row<R>> = data.iter().collect();
        self.selected.retain(|row| present.contains(row));
        before - self.selected.len()
    }

    /// Clear all selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Get the number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected rows in selection order.
    pub fn rows(&self) -> Vec<Row<R>> {
        self.selected.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row<R>> {
        self.selected.iter()
    }
}
