use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("mismatched sequence lengths: {0}")]
    StructuralMismatch(String),

    #[error("malformed record: {0}")]
    Format(String),

    #[error("constituency-parsed corpora are not implemented")]
    NotImplemented,
}

pub type Result<T> = std::result::Result<T, CorpusError>;
