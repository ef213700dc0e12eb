// Dependency-parsed corpora in `token\ttag\thead\tlabel` format: one token
// per line, sentences separated by one or more blank lines. `head` is the
// 1-based position of the token's governor, with 0 standing for the
// artificial ROOT. Blocks whose lines carry only three fields are accepted
// as heads-only data (labels absent).

pub mod corpus;
pub mod parser;
pub mod renderer;
