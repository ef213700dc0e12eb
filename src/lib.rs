// Readers for plain-text linguistic corpora: whitespace-tokenized text,
// `token/tag` part-of-speech text, and tab-separated dependency parses.
// Each format pairs a record type with a lazy corpus iterator over a file.

pub mod conparsed_txt;
pub mod depparsed_txt;
pub mod error;
pub mod tagged_txt;
pub mod untagged_txt;

mod utility;
