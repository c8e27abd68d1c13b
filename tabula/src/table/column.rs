//! Column definitions.

use std::fmt;
use std::sync::Arc;

use super::record::{Record, Value};

pub use crate::text::Alignment;

type RenderFn<R> = Arc<dyn Fn(Option<&Value>, &R) -> String + Send + Sync>;

/// Column configuration.
///
/// Columns define the structure of the table: a unique key, header title,
/// the record field the column reads, and whether the column is sortable.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("name", "Name", "name").sortable(),
///     Column::new("role", "Role", "role").sortable(),
///     Column::new("status", "Status", "active")
///         .align(Alignment::Center)
///         .render(|value, _user| match value {
///             Some(Value::Bool(true)) => "Active".into(),
///             _ => "Inactive".into(),
///         }),
/// ];
/// ```
pub struct Column<R> {
    /// Unique column key
    pub key: String,
    /// Header text
    pub title: String,
    /// Name of the record field this column reads
    pub accessor: String,
    /// Whether header clicks sort by this column
    pub sortable: bool,
    /// Horizontal alignment
    pub align: Alignment,
    render: Option<RenderFn<R>>,
}

impl<R: Record> Column<R> {
    /// Create a new, non-sortable column.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        accessor: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            accessor: accessor.into(),
            sortable: false,
            align: Alignment::Left,
            render: None,
        }
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set a custom render transform for cells in this column.
    ///
    /// The transform receives the field value (`None` when absent) and the
    /// whole record.
    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(Option<&Value>, &R) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(f));
        self
    }

    /// Whether a render transform is set.
    pub fn has_render(&self) -> bool {
        self.render.is_some()
    }

    /// Produce the display text for this column's cell in `record`.
    ///
    /// Without a render transform, absent values and empty text show `-`.
    pub fn cell_text(&self, record: &R) -> String {
        let value = record.field(&self.accessor);
        if let Some(render) = &self.render {
            return render(value.as_ref(), record);
        }
        match value {
            Some(v) => {
                let text = v.display();
                if text.is_empty() { "-".to_string() } else { text }
            }
            None => "-".to_string(),
        }
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            accessor: self.accessor.clone(),
            sortable: self.sortable,
            align: self.align,
            render: self.render.clone(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("accessor", &self.accessor)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("render", &self.render.is_some())
            .finish()
    }
}
