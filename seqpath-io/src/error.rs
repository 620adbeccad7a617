use std::io;

use seqpath_core::SeqPathError;
use thiserror::Error;

/// Error type for seqpath-io operations.
#[derive(Error, Debug)]
pub enum FastaError {
    /// IO error occurred while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input held no record with any residues.
    #[error("no readable sequence in FASTA input")]
    NoRecords,

    /// A named record was requested but is not in the file.
    #[error("no record named '{0}' in FASTA file")]
    RecordNotFound(String),

    /// Residue lines must hold at least one character.
    #[error("FASTA line width must be at least 1")]
    InvalidWidth,

    /// Materializing a path for output failed.
    #[error(transparent)]
    SeqPath(#[from] SeqPathError),
}

/// Result type alias for seqpath-io operations.
pub type Result<T> = std::result::Result<T, FastaError>;
