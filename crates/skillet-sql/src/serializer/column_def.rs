use super::{Formatter, Ident, Quoted, ToSql};

use skillet_core::schema::{Column, ColumnDefault, Table};

/// A column definition clause, rendered relative to an optional owning
/// table.
pub(super) struct ColumnDef<'a> {
    pub(super) column: &'a Column,
    pub(super) table: Option<&'a Table>,
}

impl ToSql for ColumnDef<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = self.column;

        // Identifier and type, always present.
        fmt!(f, Ident(&column.name), " ", column.ty.as_str());

        // CHARACTER SET is omitted when the table context shows it would be
        // inherited anyway, mirroring SHOW CREATE TABLE's display logic.
        // Both collation AND charset are compared, since an absent column
        // collation means the default collation *for the character set*.
        if let Some(char_set) = &column.char_set {
            let inherited = self
                .table
                .is_some_and(|t| column.collation == t.collation && column.char_set == t.char_set);
            if !inherited {
                fmt!(f, " CHARACTER SET ", char_set.as_str());
            }
        }

        // COLLATE is never suppressed against the table.
        if let Some(collation) = &column.collation {
            fmt!(f, " COLLATE ", collation.as_str());
        }

        let mut emit_default = column.can_have_default();
        if !column.nullable {
            fmt!(f, " NOT NULL");
            // A NOT NULL column cannot carry a NULL default; render it as
            // having no default at all.
            if column.default == Some(ColumnDefault::Null) {
                emit_default = false;
            }
        } else if column.ty == "timestamp" {
            // Oddly the timestamp type always displays nullability.
            fmt!(f, " NULL");
        }

        if column.auto_increment {
            fmt!(f, " AUTO_INCREMENT");
        }

        if emit_default {
            if let Some(default) = &column.default {
                fmt!(f, " ", default);
            }
        }

        if let Some(on_update) = &column.on_update {
            fmt!(f, " ON UPDATE ", on_update.as_str());
        }

        if let Some(comment) = &column.comment {
            fmt!(f, " COMMENT ", Quoted(comment));
        }
    }
}
