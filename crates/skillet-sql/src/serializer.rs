#[macro_use]
mod fmt;
use fmt::ToSql;

mod ident;
use ident::Ident;
pub use ident::escape_ident;

mod value;
use value::Quoted;
pub use value::{escape_value, unescape_value};

// Fragment serializers
mod column_def;
mod default;

use column_def::ColumnDef;

use skillet_core::schema::{Column, ColumnDefault, Table};

/// Serialize schema values to DDL fragments, matching the display format of
/// `SHOW CREATE TABLE` byte for byte.
///
/// The serializer optionally holds the owning table; when present, clauses
/// that the server would treat as inherited from the table (currently the
/// column CHARACTER SET) are suppressed the same way the server's own
/// display logic suppresses them.
#[derive(Debug, Default)]
pub struct Serializer<'a> {
    /// Table against which column clauses are rendered, if any.
    table: Option<&'a Table>,
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl<'a> Serializer<'a> {
    /// A serializer with no table context. Clauses that a table context
    /// could suppress are rendered unconditionally.
    pub fn new() -> Serializer<'a> {
        Serializer { table: None }
    }

    /// A serializer rendering columns as they appear inside the given
    /// table's CREATE TABLE output.
    pub fn table(table: &'a Table) -> Serializer<'a> {
        Serializer { table: Some(table) }
    }

    /// Serialize a column's full definition clause, for use as part of a
    /// DDL statement.
    ///
    /// The result carries no leading or trailing whitespace; every optional
    /// sub-clause supplies its own leading space. Rendering is total: field
    /// combinations the server would reject degrade by suppression, never
    /// by error.
    pub fn column_definition(&self, column: &Column) -> String {
        self.serialize(ColumnDef {
            column,
            table: self.table,
        })
    }

    /// Serialize a DEFAULT clause on its own.
    pub fn default_clause(&self, default: &ColumnDefault) -> String {
        self.serialize(default)
    }

    fn serialize(&self, fragment: impl ToSql) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };
        fragment.to_sql(&mut fmt);

        ret
    }
}
