use std::path::Path;

use crate::error::{CorpusError, Result};

// Constituency-parsed corpora are a reserved format. The types keep the
// shape of the other corpus modules so a real parser can slot in later, but
// every entry point fails with `NotImplemented` rather than quietly
// producing empty data.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConParsedSentence;

impl ConParsedSentence {
    pub fn parse(_block: &str) -> Result<Self> {
        Err(CorpusError::NotImplemented)
    }
}

pub struct ConParsedTxtCorpus;

impl ConParsedTxtCorpus {
    pub fn open<P: AsRef<Path>>(_path: P) -> Result<Self> {
        Err(CorpusError::NotImplemented)
    }
}

impl Iterator for ConParsedTxtCorpus {
    type Item = Result<ConParsedSentence>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(Err(CorpusError::NotImplemented))
    }
}
