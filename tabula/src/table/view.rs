//! Derived render model.
//!
//! A [`TableView`] is recomputed from the table state on every render pass.
//! It carries everything a renderer needs and nothing it has to work out.

use super::column::{Alignment, Column};
use super::options::{LOADING_MESSAGE, TableOptions};
use super::record::{Record, Row};
use super::selection::{Selection, SelectionAggregate};
use super::sort::{SortDirection, SortDirective, compute_order};

/// Tri-state checkbox state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    Checked,
    Indeterminate,
    #[default]
    Unchecked,
}

impl CheckState {
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

impl From<SelectionAggregate> for CheckState {
    fn from(aggregate: SelectionAggregate) -> Self {
        match aggregate {
            SelectionAggregate::AllSelected => CheckState::Checked,
            SelectionAggregate::SomeSelected => CheckState::Indeterminate,
            SelectionAggregate::NoneSelected => CheckState::Unchecked,
        }
    }
}

/// Sort indicator shown in a column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Column cannot be sorted.
    Unsortable,
    /// Column is sortable but not the active sort.
    Inactive,
    Ascending,
    Descending,
}

/// A header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    pub align: Alignment,
    pub indicator: SortIndicator,
}

/// A data row ready for display.
#[derive(Debug)]
pub struct RowView<R> {
    /// The record behind this row.
    pub row: Row<R>,
    /// 1-based position in display order.
    pub position: usize,
    /// Whether the row is highlighted as selected.
    pub selected: bool,
    /// Checkbox state, present only for selectable tables.
    pub checkbox: Option<CheckState>,
    /// Display text, one entry per column.
    pub cells: Vec<String>,
}

/// Body of a ready table.
#[derive(Debug)]
pub enum TableBody<R> {
    /// No rows to show.
    Empty { message: String },
    Rows(Vec<RowView<R>>),
}

/// The complete render model for one pass.
#[derive(Debug)]
pub enum TableView<R> {
    /// Only a loading indicator is shown.
    Loading { message: String },
    Ready {
        header: Vec<HeaderCell>,
        /// Select-all checkbox, present only for selectable tables.
        select_all: Option<CheckState>,
        body: TableBody<R>,
    },
}

impl<R: Record> TableView<R> {
    /// Build the view from table state.
    pub fn build(
        data: &[Row<R>],
        columns: &[Column<R>],
        options: &TableOptions,
        directive: &SortDirective,
        selection: &Selection<R>,
    ) -> Self {
        if options.loading {
            return TableView::Loading {
                message: LOADING_MESSAGE.to_string(),
            };
        }

        let effective = effective_directive(columns, directive);
        let header = columns
            .iter()
            .map(|col| HeaderCell {
                key: col.key.clone(),
                title: col.title.clone(),
                align: col.align,
                indicator: indicator_for(col, &effective),
            })
            .collect();

        let select_all = options
            .selectable
            .then(|| CheckState::from(SelectionAggregate::derive(data, selection)));

        let ordered = compute_order(data, &effective);
        let body = if ordered.is_empty() {
            TableBody::Empty {
                message: options.empty_message.clone(),
            }
        } else {
            let rows = ordered
                .into_iter()
                .enumerate()
                .map(|(index, row)| {
                    let selected = options.selectable && selection.is_selected(&row);
                    let cells = columns.iter().map(|col| col.cell_text(&row)).collect();
                    RowView {
                        position: index + 1,
                        selected,
                        checkbox: options.selectable.then(|| CheckState::from_checked(selected)),
                        cells,
                        row,
                    }
                })
                .collect();
            TableBody::Rows(rows)
        };

        TableView::Ready {
            header,
            select_all,
            body,
        }
    }
}

impl<R> TableView<R> {
    pub fn is_loading(&self) -> bool {
        matches!(self, TableView::Loading { .. })
    }

    /// Displayed rows, empty when loading or when the body is empty.
    pub fn rows(&self) -> &[RowView<R>] {
        match self {
            TableView::Ready {
                body: TableBody::Rows(rows),
                ..
            } => rows,
            _ => &[],
        }
    }

    /// Header cells, empty when loading.
    pub fn header(&self) -> &[HeaderCell] {
        match self {
            TableView::Ready { header, .. } => header,
            TableView::Loading { .. } => &[],
        }
    }

    /// Select-all checkbox state, if shown.
    pub fn select_all(&self) -> Option<CheckState> {
        match self {
            TableView::Ready { select_all, .. } => *select_all,
            TableView::Loading { .. } => None,
        }
    }

    /// Empty-state message, if the body is empty.
    pub fn empty_message(&self) -> Option<&str> {
        match self {
            TableView::Ready {
                body: TableBody::Empty { message },
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Number of rendered columns, counting the checkbox column.
    pub fn column_span(&self) -> usize {
        match self {
            TableView::Ready {
                header, select_all, ..
            } => header.len() + usize::from(select_all.is_some()),
            TableView::Loading { .. } => 1,
        }
    }
}

/// Drop a directive whose field no column reads.
pub fn effective_directive<R>(columns: &[Column<R>], directive: &SortDirective) -> SortDirective {
    match directive.field.as_deref() {
        Some(field) if columns.iter().any(|c| c.accessor == field) => directive.clone(),
        _ => SortDirective::none(),
    }
}

fn indicator_for<R>(column: &Column<R>, directive: &SortDirective) -> SortIndicator {
    if !column.sortable {
        return SortIndicator::Unsortable;
    }
    if !directive.targets(&column.accessor) {
        return SortIndicator::Inactive;
    }
    match directive.direction {
        SortDirection::Ascending => SortIndicator::Ascending,
        SortDirection::Descending => SortIndicator::Descending,
    }
}
