mod field;
mod lexical;

pub use field::{FieldParser, RawItem};
pub use lexical::{LexicalParser, escape, unescape};
