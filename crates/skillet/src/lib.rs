pub use skillet_core::schema;
pub use skillet_core::schema::{Column, ColumnDefault, Table};

pub use skillet_sql::serializer;
pub use skillet_sql::serializer::{escape_ident, escape_value, unescape_value, Serializer};

pub use anyhow::{Error, Result};
