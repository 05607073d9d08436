use super::{Formatter, Quoted, ToSql};

use skillet_core::schema::ColumnDefault;

impl ToSql for &ColumnDefault {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            ColumnDefault::Null => fmt!(f, "DEFAULT NULL"),
            ColumnDefault::Literal(value) => fmt!(f, "DEFAULT ", Quoted(value)),
            // Expression text is trusted raw SQL, rendered verbatim.
            ColumnDefault::Expression(expr) => fmt!(f, "DEFAULT ", expr.as_str()),
        }
    }
}
