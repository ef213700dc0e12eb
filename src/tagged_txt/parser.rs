use std::fmt;

use serde::Serialize;

use crate::error::{CorpusError, Result};

// A part-of-speech tagged sentence: token and tag sequences sharing one
// index space. Attributes are kept as parallel vectors rather than a
// per-token struct; positions stay aligned and bulk construction from a
// line of text is a pair of pushes per unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedSentence {
    tokens: Vec<String>,
    tags: Vec<String>,
}

impl TaggedSentence {
    pub fn new(tokens: Vec<String>, tags: Vec<String>) -> Result<Self> {
        if tokens.len() != tags.len() {
            return Err(CorpusError::StructuralMismatch(format!(
                "{} tokens but {} tags",
                tokens.len(),
                tags.len()
            )));
        }

        Ok(TaggedSentence { tokens, tags })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    // Aligned (token, tag) pairs in sentence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.tokens
            .iter()
            .map(String::as_str)
            .zip(self.tags.iter().map(String::as_str))
    }
}

// Splits a line into `token/tag` units and each unit at its last `/`.
// Tokens may carry slashes themselves ("1/2/CD"), tags may not.
pub fn parse_tagged_sentence(line: &str) -> Result<TaggedSentence> {
    let mut tokens = Vec::new();
    let mut tags = Vec::new();

    for unit in line.split_whitespace() {
        let (token, tag) = unit
            .rsplit_once('/')
            .ok_or_else(|| CorpusError::Format(format!("no `/` separator in unit {:?}", unit)))?;

        tokens.push(token.to_owned());
        tags.push(tag.to_owned());
    }

    TaggedSentence::new(tokens, tags)
}

impl fmt::Display for TaggedSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (token, tag)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}/{}", token, tag)?;
        }

        Ok(())
    }
}
