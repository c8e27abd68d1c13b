pub mod input;
pub mod logging;
pub mod table;
pub mod text;

pub mod prelude {
    pub use crate::input::{InputField, InputKind, InputSize, InputVariant};
    pub use crate::logging::{LoggingError, init_file_logger};
    pub use crate::table::{
        Alignment, CheckState, Column, DataTable, Record, Row, SelectionAggregate, SortDirection,
        SortDirective, TableOptions, TableView, Value,
    };

    pub use simplelog::LevelFilter;
}
