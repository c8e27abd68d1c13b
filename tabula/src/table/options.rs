//! Table configuration.

/// Message shown when there are no rows to display.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Message shown while the table is loading.
pub const LOADING_MESSAGE: &str = "Loading...";

/// Per-table configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Render selection checkboxes and accept selection gestures.
    pub selectable: bool,

    /// Show only a loading indicator. Sorting and selection are bypassed.
    pub loading: bool,

    /// Text shown when the computed order is empty.
    pub empty_message: String,

    /// Cap on column width for the text renderer (None = unlimited).
    pub max_column_width: Option<usize>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            selectable: false,
            loading: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            max_column_width: None,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable row selection.
    pub fn selectable(mut self) -> Self {
        self.selectable = true;
        self
    }

    /// Set the loading flag.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the empty-state message.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Cap rendered column width.
    pub fn max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = Some(width);
        self
    }
}
