//! Table widget state.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use log::{debug, trace, warn};

use super::column::Column;
use super::options::TableOptions;
use super::render::render_lines;
use super::record::{Record, Row};
use super::selection::{Selection, SelectionAggregate};
use super::sort::{SortDirective, compute_order};
use super::view::{TableView, effective_directive};

/// Callback receiving the full selection after every selection change.
pub type SelectionObserver<R> = Arc<dyn Fn(&[Row<R>]) + Send + Sync>;

/// Unique identifier for a DataTable instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Internal state for the DataTable.
struct TableInner<R> {
    /// Caller-supplied rows, in input order.
    data: Vec<Row<R>>,
    /// Column definitions.
    columns: Vec<Column<R>>,
    options: TableOptions,
    /// Current sort directive.
    directive: SortDirective,
    /// Selection state (by row identity).
    selection: Selection<R>,
    on_row_select: Option<SelectionObserver<R>>,
}

impl<R: Record> TableInner<R> {
    fn new(columns: Vec<Column<R>>, data: Vec<Row<R>>) -> Self {
        warn_duplicate_keys(&columns);
        Self {
            data,
            columns,
            options: TableOptions::default(),
            directive: SortDirective::none(),
            selection: Selection::new(),
            on_row_select: None,
        }
    }

    /// Find a column by key. With duplicate keys the last one wins.
    fn column_by_key(&self, key: &str) -> Option<&Column<R>> {
        self.columns.iter().rev().find(|c| c.key == key)
    }

    fn contains(&self, row: &Row<R>) -> bool {
        self.data.iter().any(|r| r == row)
    }

    /// Log once when the directive names a field no column reads.
    fn check_directive(&self) {
        let unknown = self
            .directive
            .field
            .as_deref()
            .filter(|field| !self.columns.iter().any(|c| c.accessor == *field));
        if let Some(field) = unknown {
            debug!("sort field '{}' matches no column, using natural order", field);
        }
    }
}

fn warn_duplicate_keys<R>(columns: &[Column<R>]) {
    let mut seen = HashSet::new();
    for col in columns {
        if !seen.insert(col.key.as_str()) {
            warn!("duplicate column key '{}', last definition wins", col.key);
        }
    }
}

/// A data table with client-side sorting and multi-row selection.
///
/// `DataTable<R>` owns the sort directive and the selection for one table
/// instance and maps user gestures onto them:
/// - header clicks toggle sorting
/// - row checkboxes add and remove rows from the selection
/// - the header checkbox selects or clears everything
///
/// Every accepted selection gesture calls the `on_row_select` observer with
/// the full selection before returning. Cloning the handle shares state.
///
/// # Example
///
/// ```ignore
/// let table = DataTable::with_rows(columns, Row::from_records(users))
///     .with_options(TableOptions::new().selectable())
///     .on_row_select(|rows| log::info!("{} selected", rows.len()));
///
/// table.click_header("role");
/// let view = table.view();
/// ```
pub struct DataTable<R: Record> {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    inner: Arc<RwLock<TableInner<R>>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
    /// Held from a selection change until its observer returns.
    notify: Arc<Mutex<()>>,
}

impl<R: Record> DataTable<R> {
    /// Create an empty table with column definitions.
    pub fn new(columns: Vec<Column<R>>) -> Self {
        Self::with_rows(columns, Vec::new())
    }

    /// Create a table with initial rows.
    pub fn with_rows(columns: Vec<Column<R>>, rows: Vec<Row<R>>) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner::new(columns, rows))),
            dirty: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Mutex::new(())),
        }
    }

    /// Set the table options.
    pub fn with_options(self, options: TableOptions) -> Self {
        self.set_options(options);
        self.dirty.store(false, Ordering::SeqCst);
        self
    }

    /// Register the selection observer.
    ///
    /// The observer may read the table but must not toggle its selection.
    pub fn on_row_select<F>(self, f: F) -> Self
    where
        F: Fn(&[Row<R>]) + Send + Sync + 'static,
    {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_row_select = Some(Arc::new(f));
        }
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    // -------------------------------------------------------------------------
    // Columns and options
    // -------------------------------------------------------------------------

    /// Get the column definitions.
    pub fn columns(&self) -> Vec<Column<R>> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Set the column definitions.
    pub fn set_columns(&self, columns: Vec<Column<R>>) {
        if let Ok(mut guard) = self.inner.write() {
            warn_duplicate_keys(&columns);
            guard.columns = columns;
            guard.check_directive();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the table options.
    pub fn options(&self) -> TableOptions {
        self.inner
            .read()
            .map(|g| g.options.clone())
            .unwrap_or_default()
    }

    /// Replace the table options.
    pub fn set_options(&self, options: TableOptions) {
        if let Ok(mut guard) = self.inner.write() {
            guard.options = options;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle the loading indicator.
    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.options.loading = loading;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the table is loading.
    pub fn is_loading(&self) -> bool {
        self.inner.read().map(|g| g.options.loading).unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Get the rows in input order.
    pub fn data(&self) -> Vec<Row<R>> {
        self.inner
            .read()
            .map(|g| g.data.clone())
            .unwrap_or_default()
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.data.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the whole dataset.
    ///
    /// Selection is scoped to the dataset on display, so it is reset. The
    /// observer is told if anything was selected before the swap.
    pub fn set_data(&self, rows: Vec<Row<R>>) {
        self.commit_selection(|inner| {
            inner.data = rows;
            let had_selection = !inner.selection.is_empty();
            inner.selection.clear();
            debug!("dataset replaced ({} rows), selection reset", inner.data.len());
            had_selection
        });
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Update the dataset in place (rows added or removed).
    ///
    /// Selected rows that are no longer present are pruned, and the observer is
    /// told if anything was pruned.
    pub fn sync_data(&self, rows: Vec<Row<R>>) {
        self.commit_selection(|inner| {
            inner.data = rows;
            let pruned = inner.selection.retain_present(&inner.data);
            if pruned > 0 {
                debug!("pruned {} stale selections", pruned);
            }
            pruned > 0
        });
        self.dirty.store(true, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Get the current sort directive.
    pub fn sort(&self) -> SortDirective {
        self.inner
            .read()
            .map(|g| g.directive.clone())
            .unwrap_or_default()
    }

    /// Set the sort directive directly.
    pub fn set_sort(&self, directive: SortDirective) {
        if let Ok(mut guard) = self.inner.write() {
            guard.directive = directive;
            guard.check_directive();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Return to natural input order.
    pub fn clear_sort(&self) {
        self.set_sort(SortDirective::none());
    }

    /// Handle a click on the header of the column with `key`.
    ///
    /// Clicking the sorted column flips its direction; clicking another
    /// sortable column sorts it ascending. Clicks on unknown or non-sortable
    /// columns, or while loading, are ignored.
    /// Returns the new directive if it changed.
    pub fn click_header(&self, key: &str) -> Option<SortDirective> {
        let mut guard = self.inner.write().ok()?;
        if guard.options.loading {
            trace!("header click on '{}' ignored while loading", key);
            return None;
        }
        let Some(column) = guard.column_by_key(key) else {
            trace!("header click on unknown column '{}'", key);
            return None;
        };
        if !column.sortable {
            trace!("header click on non-sortable column '{}'", key);
            return None;
        }
        let next = guard.directive.toggled(&column.accessor);
        debug!("sort by '{:?}' {:?}", next.field, next.direction);
        guard.directive = next.clone();
        self.dirty.store(true, Ordering::SeqCst);
        Some(next)
    }

    /// Rows in display order under the current directive.
    pub fn ordered_rows(&self) -> Vec<Row<R>> {
        self.inner
            .read()
            .map(|g| {
                let directive = effective_directive(&g.columns, &g.directive);
                compute_order(&g.data, &directive)
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get all selected rows, in selection order.
    pub fn selected_rows(&self) -> Vec<Row<R>> {
        self.inner
            .read()
            .map(|g| g.selection.rows())
            .unwrap_or_default()
    }

    /// Check if a row is selected.
    pub fn is_selected(&self, row: &Row<R>) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(row))
            .unwrap_or(false)
    }

    /// Aggregate selection state for the select-all control.
    pub fn aggregate(&self) -> SelectionAggregate {
        self.inner
            .read()
            .map(|g| SelectionAggregate::derive(&g.data, &g.selection))
            .unwrap_or_default()
    }

    /// Handle a row checkbox change.
    ///
    /// Ignored when the table is not selectable, is loading, or does not
    /// contain `row`. Returns true if the gesture was accepted.
    pub fn toggle_row(&self, row: &Row<R>, checked: bool) -> bool {
        self.commit_selection(|inner| {
            if !accepts_selection(inner) {
                return false;
            }
            if !inner.contains(row) {
                debug!("toggle of a row not in the dataset ignored");
                return false;
            }
            inner.selection.toggle_row(row, checked);
            debug!(
                "row {}, {} selected",
                if checked { "checked" } else { "unchecked" },
                inner.selection.len()
            );
            true
        })
    }

    /// Handle a change of the select-all checkbox.
    ///
    /// Checked selects exactly the current rows; unchecked clears.
    /// Returns true if the gesture was accepted.
    pub fn toggle_all(&self, checked: bool) -> bool {
        self.commit_selection(|inner| {
            if !accepts_selection(inner) {
                return false;
            }
            let TableInner {
                data, selection, ..
            } = inner;
            selection.toggle_all(data, checked);
            debug!("select all {}, {} selected", checked, selection.len());
            true
        })
    }

    /// Apply a selection change under the lock, then notify the observer
    /// with the lock released.
    ///
    /// Changes from every handle of this table are serialized through the
    /// notify guard, so observers see them in commit order. An observer must
    /// not start another selection change on the same table.
    fn commit_selection<F>(&self, f: F) -> bool
    where
        F: FnOnce(&mut TableInner<R>) -> bool,
    {
        let _notify = self.notify.lock().unwrap_or_else(PoisonError::into_inner);
        let (rows, observer) = {
            let Ok(mut guard) = self.inner.write() else {
                return false;
            };
            if !f(&mut *guard) {
                return false;
            }
            (guard.selection.rows(), guard.on_row_select.clone())
        };
        self.dirty.store(true, Ordering::SeqCst);
        if let Some(observer) = observer {
            observer(&rows);
        }
        true
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Derive the render model for this pass.
    pub fn view(&self) -> TableView<R> {
        match self.inner.read() {
            Ok(g) => TableView::build(&g.data, &g.columns, &g.options, &g.directive, &g.selection),
            Err(_) => TableView::build(
                &[],
                &[],
                &TableOptions::default(),
                &SortDirective::none(),
                &Selection::new(),
            ),
        }
    }

    /// Render the current view as plain text lines.
    pub fn render_lines(&self) -> Vec<String> {
        let width = self
            .inner
            .read()
            .map(|g| g.options.max_column_width)
            .unwrap_or(None);
        render_lines(&self.view(), width)
    }

    /// Check if the table needs re-rendering.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

fn accepts_selection<R>(inner: &TableInner<R>) -> bool {
    if !inner.options.selectable {
        trace!("selection gesture ignored, table not selectable");
        return false;
    }
    if inner.options.loading {
        trace!("selection gesture ignored while loading");
        return false;
    }
    true
}

impl<R: Record> Clone for DataTable<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl<R: Record> std::fmt::Debug for DataTable<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("id", &self.id)
            .field("rows", &self.len())
            .field("sort", &self.sort())
            .finish()
    }
}
