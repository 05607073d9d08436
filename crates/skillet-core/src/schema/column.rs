/// A single column of a table.
///
/// Field values are stored exactly as the database reports them during
/// introspection; rendering and comparison treat a column as an immutable
/// snapshot. State that MySQL would refuse (say, a default on an
/// auto-increment column) is representable on purpose, since it occurs
/// transiently while diffing two schema snapshots; the renderer degrades
/// such state by suppression rather than erroring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    /// The name of the column, in unescaped form.
    pub name: String,

    /// The column type as the database reports it, lowercase,
    /// e.g. `int(11)`, `varchar(30)`, `timestamp`.
    pub ty: String,

    /// Whether the column permits NULL values.
    pub nullable: bool,

    /// True if the column auto-increments on insert.
    pub auto_increment: bool,

    /// The configured default value. `None` means no default at all, which
    /// is distinct from an explicit `DEFAULT NULL`.
    pub default: Option<ColumnDefault>,

    /// Raw expression for an `ON UPDATE` action, e.g. `CURRENT_TIMESTAMP`.
    pub on_update: Option<String>,

    /// Only populated for textual types.
    pub char_set: Option<String>,

    /// Only populated when it differs from the default collation of
    /// `char_set`.
    pub collation: Option<String>,

    pub comment: Option<String>,
}

/// The default value of a column.
///
/// "No default configured" is not a variant; columns model that as
/// `default: None`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColumnDefault {
    /// An explicit `DEFAULT NULL`.
    Null,

    /// A literal value, escaped and single-quoted when rendered.
    Literal(String),

    /// A raw SQL expression, rendered verbatim. Traditionally in MySQL this
    /// must be `CURRENT_TIMESTAMP` or, with fractional second precision,
    /// `CURRENT_TIMESTAMP(N)`.
    Expression(String),
}

impl Column {
    /// Returns true if the column is allowed to have a DEFAULT clause.
    ///
    /// This is a pure grammar predicate, independent of whether a default is
    /// currently configured. The renderer consults it before emitting a
    /// DEFAULT clause, and validation layers should consult it before
    /// accepting a configuration that sets one.
    pub fn can_have_default(&self) -> bool {
        if self.auto_increment {
            return false;
        }
        // MySQL does not permit defaults for blob or text types. The type is
        // matched as a string suffix since the server reports parametric
        // variants (tinytext, mediumblob, ...) as free-form strings.
        !(self.ty.ends_with("blob") || self.ty.ends_with("text"))
    }
}

impl ColumnDefault {
    /// A non-NULL, non-expression default value.
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// A default that is a SQL expression, which won't be wrapped in quotes.
    pub fn expression(expr: impl Into<String>) -> Self {
        Self::Expression(expr.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, ty: &str) -> Column {
        Column {
            name: name.to_string(),
            ty: ty.to_string(),
            nullable: true,
            auto_increment: false,
            default: None,
            on_update: None,
            char_set: None,
            collation: None,
            comment: None,
        }
    }

    #[test]
    fn test_can_have_default_auto_increment() {
        let mut c = column("id", "int(11)");
        assert!(c.can_have_default());

        c.auto_increment = true;
        assert!(!c.can_have_default());
    }

    #[test]
    fn test_can_have_default_blob_and_text() {
        for ty in ["blob", "tinyblob", "mediumblob", "longblob"] {
            assert!(!column("data", ty).can_have_default(), "ty={ty}");
        }
        for ty in ["text", "tinytext", "mediumtext", "longtext"] {
            assert!(!column("body", ty).can_have_default(), "ty={ty}");
        }
        for ty in ["varchar(30)", "int(11)", "timestamp", "enum('a','b')"] {
            assert!(column("ok", ty).can_have_default(), "ty={ty}");
        }
    }

    #[test]
    fn test_can_have_default_ignores_configured_default() {
        // The predicate only looks at the type and auto-increment flag.
        let mut c = column("bio", "text");
        c.default = Some(ColumnDefault::literal("hello"));
        assert!(!c.can_have_default());
    }

    #[test]
    fn test_equality_is_field_wise() {
        let a = column("name", "varchar(30)");
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(b, a);

        let mut c = a.clone();
        c.default = Some(ColumnDefault::Null);
        assert_ne!(a, c);

        let mut d = a.clone();
        d.comment = Some("updated".to_string());
        assert_ne!(a, d);
    }

    #[test]
    fn test_equality_with_absent_columns() {
        let a = column("name", "varchar(30)");

        let present = Some(a.clone());
        let absent: Option<Column> = None;

        assert_eq!(present, Some(a));
        assert_ne!(present, absent);
        assert_ne!(absent, present);
        assert_eq!(absent, None);
    }

    #[test]
    fn test_default_equality_includes_variant_and_value() {
        assert_eq!(ColumnDefault::Null, ColumnDefault::Null);
        assert_ne!(
            ColumnDefault::literal("CURRENT_TIMESTAMP"),
            ColumnDefault::expression("CURRENT_TIMESTAMP")
        );
        assert_ne!(ColumnDefault::literal("a"), ColumnDefault::literal("b"));
    }
}
