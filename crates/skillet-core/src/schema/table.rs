use super::Column;

/// A database table, to the extent the column renderer consults it.
///
/// The renderer reads only the table-level character set and collation, to
/// decide whether a column's CHARACTER SET clause would be redundant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// Name of the table, in unescaped form.
    pub name: String,

    /// The table's columns, in definition order.
    pub columns: Vec<Column>,

    /// The table's default character set.
    pub char_set: Option<String>,

    /// The table's default collation.
    pub collation: Option<String>,
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }
}
