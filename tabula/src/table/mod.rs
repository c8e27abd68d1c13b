//! Data table - client-side sorting and multi-row selection over caller rows.
//!
//! The table is split into two engines and an adapter:
//! - the sort engine orders rows for a [`SortDirective`] without touching the input
//! - the selection tracker tracks selected rows by identity and derives the
//!   select-all state
//! - [`DataTable`] owns both, maps gestures onto them and builds a
//!   [`TableView`] for rendering
//!
//! # Example
//!
//! ```
//! use tabula::table::{Column, DataTable, Record, Row, TableOptions, Value};
//!
//! struct User {
//!     name: &'static str,
//!     role: &'static str,
//! }
//!
//! impl Record for User {
//!     fn field(&self, accessor: &str) -> Option<Value> {
//!         match accessor {
//!             "name" => Some(self.name.into()),
//!             "role" => Some(self.role.into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let users = Row::from_records([
//!     User { name: "Ada", role: "User" },
//!     User { name: "Grace", role: "Admin" },
//! ]);
//! let columns = vec![
//!     Column::new("name", "Name", "name").sortable(),
//!     Column::new("role", "Role", "role").sortable(),
//! ];
//!
//! let table = DataTable::with_rows(columns, users)
//!     .with_options(TableOptions::new().selectable());
//!
//! table.click_header("role");
//! let order: Vec<_> = table.ordered_rows().iter().map(|r| r.name).collect();
//! assert_eq!(order, ["Grace", "Ada"]);
//! ```

mod column;
mod options;
mod record;
mod render;
mod selection;
mod sort;
mod state;
mod view;

pub use column::{Alignment, Column};
pub use options::{DEFAULT_EMPTY_MESSAGE, LOADING_MESSAGE, TableOptions};
pub use record::{Record, Row, Value};
pub use render::{CHECKED, INDETERMINATE, UNCHECKED, check_glyph, render_lines, sort_glyph};
pub use selection::{Selection, SelectionAggregate};
pub use sort::{SortDirection, SortDirective, compare_values, compute_order};
pub use state::{DataTable, SelectionObserver, TableId};
pub use view::{
    CheckState, HeaderCell, RowView, SortIndicator, TableBody, TableView, effective_directive,
};
