use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::depparsed_txt::parser::{parse_depparsed_sentence, DepParsedSentence};
use crate::error::Result;
use crate::utility::is_blank_line;

// Accumulates lines into blank-line-delimited blocks and yields one parsed
// sentence per block, in file order. A run of consecutive blank lines is a
// single boundary, and a trailing block with no blank line after it is
// still flushed at end of source; an all-blank or empty file yields
// nothing. Only the reader handle and the pending block are held between
// steps.
pub struct DepParsedTxtCorpus {
    lines: Lines<BufReader<File>>,
    block: Vec<String>,
}

impl DepParsedTxtCorpus {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;

        Ok(DepParsedTxtCorpus {
            lines: BufReader::new(file).lines(),
            block: Vec::new(),
        })
    }
}

impl Iterator for DepParsedTxtCorpus {
    type Item = Result<DepParsedSentence>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next() {
                Some(Ok(line)) => {
                    if !is_blank_line(&line) {
                        self.block.push(line);
                        continue;
                    }

                    if self.block.is_empty() {
                        continue;
                    }

                    let block = std::mem::take(&mut self.block);
                    return Some(parse_depparsed_sentence(&block.join("\n")));
                }
                Some(Err(e)) => return Some(Err(e.into())),
                None => {
                    if self.block.is_empty() {
                        return None;
                    }

                    let block = std::mem::take(&mut self.block);
                    return Some(parse_depparsed_sentence(&block.join("\n")));
                }
            }
        }
    }
}
