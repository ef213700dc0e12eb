use std::fmt;

use serde::Serialize;

use crate::error::{CorpusError, Result};

// A dependency-parsed sentence: tokens, tags and governor indices as
// parallel vectors, labels as a fourth vector when the source carries them.
// `heads[i]` is the 1-based position of token i's governor; 0 is ROOT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepParsedSentence {
    tokens: Vec<String>,
    tags: Vec<String>,
    heads: Vec<usize>,
    labels: Option<Vec<String>>,
}

impl DepParsedSentence {
    pub fn new(
        tokens: Vec<String>,
        tags: Vec<String>,
        heads: Vec<usize>,
        labels: Option<Vec<String>>,
    ) -> Result<Self> {
        if tokens.len() != tags.len() || tokens.len() != heads.len() {
            return Err(CorpusError::StructuralMismatch(format!(
                "{} tokens, {} tags, {} heads",
                tokens.len(),
                tags.len(),
                heads.len()
            )));
        }

        if let Some(labels) = &labels {
            if labels.len() != tokens.len() {
                return Err(CorpusError::StructuralMismatch(format!(
                    "{} tokens but {} labels",
                    tokens.len(),
                    labels.len()
                )));
            }
        }

        Ok(DepParsedSentence {
            tokens,
            tags,
            heads,
            labels,
        })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn heads(&self) -> &[usize] {
        &self.heads
    }

    pub fn labels(&self) -> Option<&[String]> {
        self.labels.as_deref()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    // Aligned (token, tag, head, label) rows in sentence order; the label is
    // `None` on every row of heads-only data.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, usize, Option<&str>)> + '_ {
        (0..self.tokens.len()).map(move |i| {
            (
                self.tokens[i].as_str(),
                self.tags[i].as_str(),
                self.heads[i],
                self.labels.as_ref().map(|labels| labels[i].as_str()),
            )
        })
    }
}

// Transposes the per-line fields of one block into parallel sequences. The
// first line fixes the field count: four fields carry a label, three mean
// heads-only data; any other count, a ragged line, or a non-integer head is
// a format error.
pub fn parse_depparsed_sentence(block: &str) -> Result<DepParsedSentence> {
    let mut tokens = Vec::new();
    let mut tags = Vec::new();
    let mut heads = Vec::new();
    let mut labels = Vec::new();

    let mut field_count = None;

    for line in block.lines() {
        let fields: Vec<&str> = line.split_whitespace().collect();

        let count = *field_count.get_or_insert(fields.len());
        if fields.len() != count {
            return Err(CorpusError::Format(format!(
                "expected {} fields but found {} in line {:?}",
                count,
                fields.len(),
                line
            )));
        }
        if count != 3 && count != 4 {
            return Err(CorpusError::Format(format!(
                "expected 3 or 4 fields but found {} in line {:?}",
                count, line
            )));
        }

        let head = fields[2]
            .parse()
            .map_err(|_| CorpusError::Format(format!("invalid head index {:?}", fields[2])))?;

        tokens.push(fields[0].to_owned());
        tags.push(fields[1].to_owned());
        heads.push(head);
        if count == 4 {
            labels.push(fields[3].to_owned());
        }
    }

    let labels = match field_count {
        Some(4) => Some(labels),
        _ => None,
    };

    DepParsedSentence::new(tokens, tags, heads, labels)
}

impl fmt::Display for DepParsedSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (token, tag, head, label)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }

            write!(f, "{}\t{}\t{}", token, tag, head)?;
            if let Some(label) = label {
                write!(f, "\t{}", label)?;
            }
        }

        Ok(())
    }
}
