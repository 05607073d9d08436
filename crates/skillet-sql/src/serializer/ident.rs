use super::{Formatter, ToSql};

/// An identifier, quoted for direct inclusion in DDL.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = self.0.as_ref();

        f.dst.push('`');
        for c in name.chars() {
            // A backtick inside a backtick-quoted identifier is doubled, so
            // distinct names never collide after quoting.
            if c == '`' {
                f.dst.push_str("``");
            } else {
                f.dst.push(c);
            }
        }
        f.dst.push('`');
    }
}

/// Escapes and quotes a raw identifier name for direct inclusion in DDL.
pub fn escape_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}
