pub mod serializer;
pub use serializer::{escape_ident, escape_value, unescape_value, Serializer};
