pub mod schema;
pub use schema::{Column, ColumnDefault, Table};
