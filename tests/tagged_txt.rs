use std::io::Write;

use anyhow::Result;
use tempfile::NamedTempFile;

use corpus_txt::error::CorpusError;
use corpus_txt::tagged_txt::corpus::TaggedTxtCorpus;
use corpus_txt::tagged_txt::parser::{parse_tagged_sentence, TaggedSentence};

#[test]
fn splits_units_at_the_last_slash() -> Result<()> {
    let sentence = parse_tagged_sentence("U.S./NNP 1/2/CD")?;

    assert_eq!(sentence.tokens(), ["U.S.", "1/2"]);
    assert_eq!(sentence.tags(), ["NNP", "CD"]);

    Ok(())
}

#[test]
fn round_trips_through_text() -> Result<()> {
    let line = "The/DT dog/NN barked/VBD ./.";

    let sentence = parse_tagged_sentence(line)?;
    assert_eq!(sentence.to_string(), line);
    assert_eq!(parse_tagged_sentence(&sentence.to_string())?, sentence);

    Ok(())
}

#[test]
fn normalizes_whitespace_runs_to_single_spaces() -> Result<()> {
    let sentence = parse_tagged_sentence(" The/DT \t dog/NN ")?;

    assert_eq!(sentence.len(), 2);
    assert_eq!(sentence.to_string(), "The/DT dog/NN");

    Ok(())
}

#[test]
fn rejects_a_unit_without_separator() {
    let result = parse_tagged_sentence("The/DT dog barked/VBD");

    assert!(matches!(result, Err(CorpusError::Format(_))));
}

#[test]
fn rejects_mismatched_sequence_lengths() {
    let result = TaggedSentence::new(
        vec!["The".to_owned(), "dog".to_owned()],
        vec!["DT".to_owned()],
    );

    assert!(matches!(result, Err(CorpusError::StructuralMismatch(_))));
}

#[test]
fn iterates_aligned_pairs() -> Result<()> {
    let sentence = parse_tagged_sentence("The/DT dog/NN")?;

    let pairs: Vec<_> = sentence.iter().collect();
    assert_eq!(pairs, [("The", "DT"), ("dog", "NN")]);

    Ok(())
}

#[test]
fn reads_corpus_in_order_skipping_blank_lines() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "The/DT dog/NN")?;
    writeln!(file)?;
    writeln!(file, "It/PRP ran/VBD")?;
    file.flush()?;

    let sentences = TaggedTxtCorpus::open(file.path())?
        .collect::<corpus_txt::error::Result<Vec<_>>>()?;

    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0].tokens(), ["The", "dog"]);
    assert_eq!(sentences[1].tags(), ["PRP", "VBD"]);

    Ok(())
}

#[test]
fn surfaces_a_malformed_line_without_corrupting_neighbors() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "The/DT dog/NN")?;
    writeln!(file, "broken")?;
    writeln!(file, "It/PRP ran/VBD")?;
    file.flush()?;

    let mut corpus = TaggedTxtCorpus::open(file.path())?;

    assert!(corpus.next().unwrap().is_ok());
    assert!(matches!(corpus.next(), Some(Err(CorpusError::Format(_)))));
    assert_eq!(corpus.next().unwrap()?.tokens(), ["It", "ran"]);
    assert!(corpus.next().is_none());

    Ok(())
}

#[test]
fn reads_the_committed_fixture() -> Result<()> {
    let sentences = TaggedTxtCorpus::open("./tests/sample.tagged.txt")?
        .collect::<corpus_txt::error::Result<Vec<_>>>()?;

    assert_eq!(sentences.len(), 3);
    assert_eq!(sentences[0].len(), 7);
    assert_eq!(sentences[2].tokens()[1], "1/2");
    assert_eq!(sentences[2].tags()[1], "CD");

    Ok(())
}

#[test]
fn serializes_to_json() -> Result<()> {
    let sentence = parse_tagged_sentence("The/DT dog/NN")?;

    let json = serde_json::to_value(&sentence)?;
    assert_eq!(json["tokens"], serde_json::json!(["The", "dog"]));
    assert_eq!(json["tags"], serde_json::json!(["DT", "NN"]));

    Ok(())
}
