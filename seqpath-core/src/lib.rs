//! Coordinate algebra for intervals over biological sequences.
//!
//! This crate models contiguous intervals ("paths") on DNA, RNA and protein
//! sequences. Every interval remembers the top-level sequence it came from
//! and is expressed in that sequence's coordinates, so slices of slices,
//! reverse-strand views and comparisons all work in one shared frame.
//!
//! ## Features
//!
//! - **Python-style slicing**: negative indexes, open ends, strides, and
//!   `x[5:2]` selecting the reverse strand
//! - **Reverse complements**: reverse intervals live in the negated frame
//!   `[-len, 0)` and materialize as the reverse complement
//! - **Lazy bounds**: intervals over sequences of unknown length defer bound
//!   checking until their coordinates are first read
//! - **Interval transforms**: linear maps between two aligned intervals
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use seqpath_core::{Orientation, Sequence};
//!
//! let chr1 = Arc::new(Sequence::from_residues("chr1", "AAGGTTCCAG"));
//!
//! let path = chr1.forward().range(2..5).unwrap();
//! assert_eq!(path.materialize().unwrap(), "GGT");
//!
//! // start past stop selects the opposite strand
//! let rev = chr1.forward().slice(Some(5), Some(2), None).unwrap();
//! assert_eq!(rev.orientation(), Orientation::Reverse);
//! assert_eq!(rev.bounds().unwrap(), (-5, -2));
//! assert_eq!(rev.materialize().unwrap(), "ACC");
//! ```
//!
//! ## Mapping between sequences
//!
//! ```rust
//! use std::sync::Arc;
//! use seqpath_core::{IntervalTransform, Sequence};
//!
//! let query = Arc::new(Sequence::from_residues("query", "ACGTACGTAC"));
//! let target = Arc::new(Sequence::from_residues("target", "TTACGTACGTACTT"));
//!
//! let xform = IntervalTransform::new(&query.forward(), &target.forward().range(2..12).unwrap()).unwrap();
//! assert_eq!(xform.identity_count().unwrap(), 10);
//!
//! let hit = xform.apply(&query.forward().range(4..8).unwrap()).unwrap();
//! assert_eq!(hit.bounds().unwrap(), (6, 10));
//! ```
pub mod alphabet;
pub mod errors;
pub mod models;
pub mod transform;
pub mod utils;

pub use self::alphabet::{SeqType, SeqTypeGuesser, guess_seq_type};
pub use self::errors::{Result, SeqPathError};
pub use self::models::{Bound, End, Orientation, PathRecord, SeqPath, Sequence, SequenceBackend};
pub use self::transform::{AnnotationRecord, IntervalTransform, TransformRecord};
