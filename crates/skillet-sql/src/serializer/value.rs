use super::{Formatter, ToSql};

use anyhow::{bail, Result};

/// A string value rendered as a single-quoted literal.
pub(super) struct Quoted<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Quoted<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('\'');
        f.dst.push_str(&escape_value(self.0.as_ref()));
        f.dst.push('\'');
    }
}

/// Escapes a raw string value for inclusion inside a single-quoted literal
/// in a CREATE TABLE statement, matching the server's own display escaping.
///
/// Round-trips through [`unescape_value`].
pub fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\0' => out.push_str("\\0"),
            '\'' => out.push_str("''"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

/// The inverse of [`escape_value`].
///
/// Errors on text that [`escape_value`] could not have produced: a trailing
/// lone backslash, an unrecognized escape sequence, or an undoubled single
/// quote.
pub fn unescape_value(value: &str) -> Result<String> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\\') => out.push('\\'),
                Some('0') => out.push('\0'),
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some(c) => bail!("unrecognized escape sequence `\\{c}`"),
                None => bail!("trailing backslash in quoted literal"),
            },
            '\'' => match chars.next() {
                Some('\'') => out.push('\''),
                _ => bail!("undoubled quote in quoted literal"),
            },
            c => out.push(c),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_value() {
        assert_eq!(escape_value("hello"), "hello");
        assert_eq!(escape_value("it's"), "it''s");
        assert_eq!(escape_value("a\\b"), "a\\\\b");
        assert_eq!(escape_value("line1\nline2\r"), "line1\\nline2\\r");
        assert_eq!(escape_value("nul\0byte"), "nul\\0byte");
    }

    #[test]
    fn test_unescape_value_round_trip() {
        let cases = [
            "",
            "hello",
            "it's a 'quote'",
            "back\\slash",
            "mixed '\\' \n\r\0 end",
            "''''",
        ];
        for case in cases {
            let escaped = escape_value(case);
            assert_eq!(unescape_value(&escaped).unwrap(), case, "case={case:?}");
        }
    }

    #[test]
    fn test_unescape_value_rejects_malformed_input() {
        assert!(unescape_value("trailing\\").is_err());
        assert!(unescape_value("bad\\qescape").is_err());
        assert!(unescape_value("lone'quote").is_err());
    }
}
