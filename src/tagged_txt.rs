// Part-of-speech tagged corpora in `token/tag` format: one sentence per
// line, units separated by spaces, token and tag split at the last `/` in
// the unit (tokens may themselves contain `/`, tags may not).

pub mod corpus;
pub mod parser;
