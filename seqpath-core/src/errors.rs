use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqPathError {
    #[error("Cannot create empty sequence interval: [{start}:{stop})")]
    EmptyInterval { start: i64, stop: i64 },

    #[error("Sequence mismatch: {0}")]
    SequenceMismatch(String),

    #[error("Intervals are not on the same sequence path and cannot be compared")]
    NotComparable,

    #[error("Protein sequence has no reverse orientation: {0}")]
    UnsupportedReversal(String),

    #[error("Neither the interval transform nor its annotation has the requested attribute")]
    MissingAnnotation,

    #[error("Slice step must be positive, got {0}")]
    InvalidStep(i64),

    #[error("Index {index} out of range for interval of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Cannot map through an interval with no strided positions: {0}")]
    ZeroLengthTransform(String),

    #[error("Sequence backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, SeqPathError>;
