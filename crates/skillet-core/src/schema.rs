mod column;
pub use column::{Column, ColumnDefault};

mod table;
pub use table::Table;
