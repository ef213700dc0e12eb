use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::Result;

// Whitespace-tokenized corpora: one sentence per physical line, tokens
// separated by runs of whitespace. There is no record type; the token list
// itself is the unit. Empty lines yield an empty list rather than being
// skipped, so line numbering survives iteration.
pub struct UntaggedTxtCorpus {
    lines: Lines<BufReader<File>>,
}

impl UntaggedTxtCorpus {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;

        Ok(UntaggedTxtCorpus {
            lines: BufReader::new(file).lines(),
        })
    }
}

impl Iterator for UntaggedTxtCorpus {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e.into())),
        };

        Some(Ok(line.split_whitespace().map(str::to_owned).collect()))
    }
}
