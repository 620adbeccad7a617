//! # FASTA input/output for seqpath.
//!
//! Small readers and writers for FASTA text, plus two ways of turning a FASTA
//! file into [`Sequence`](seqpath_core::Sequence) values: [`load_fasta`] reads
//! every record into memory, [`open_fasta`] indexes the record names and
//! defers reading residues until a path over the sequence needs them.
//!
pub mod backend;
pub mod consts;
pub mod error;
pub mod fasta;
pub mod utils;

// re-expose core functions
pub use backend::*;
pub use consts::*;
pub use error::*;
pub use fasta::*;
pub use utils::*;
