use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::Result;
use crate::tagged_txt::parser::{parse_tagged_sentence, TaggedSentence};
use crate::utility::is_blank_line;

// Lazily yields one `TaggedSentence` per non-blank line, in file order.
// Lines are independent records: a malformed line surfaces as an `Err` item
// at that step without touching its neighbors. The file handle is released
// when the iterator is dropped.
pub struct TaggedTxtCorpus {
    lines: Lines<BufReader<File>>,
}

impl TaggedTxtCorpus {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;

        Ok(TaggedTxtCorpus {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for TaggedTxtCorpus {
    type Item = Result<TaggedSentence>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };

            if is_blank_line(&line) {
                continue;
            }

            return Some(parse_tagged_sentence(&line));
        }
    }
}
