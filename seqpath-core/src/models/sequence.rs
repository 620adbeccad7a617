use std::fmt::{self, Debug};
use std::sync::{Arc, OnceLock};

use crate::alphabet::SeqType;
use crate::errors::{Result, SeqPathError};
use crate::models::bound::Bound;
use crate::models::orientation::Orientation;
use crate::models::seq_path::SeqPath;

///
/// Storage for the residues of a top-level sequence.
///
/// Implementors only need to report a length and hand out substrings of the
/// forward strand. A backend that cannot tell its length cheaply (a stream
/// still being read, a file not yet loaded) returns `None` from
/// `known_length`; intervals built over it keep their bounds deferred until
/// `length` is forced.
///
pub trait SequenceBackend: Send + Sync {
    /// Total number of residues. May be expensive.
    fn length(&self) -> Result<usize>;

    /// The length if it is already known without doing any work.
    fn known_length(&self) -> Option<usize> {
        None
    }

    /// Forward-strand residues in `[start, stop)`, `0 <= start <= stop <= length()`.
    fn substring(&self, start: usize, stop: usize) -> Result<String>;
}

impl SequenceBackend for String {
    fn length(&self) -> Result<usize> {
        Ok(self.len())
    }

    fn known_length(&self) -> Option<usize> {
        Some(self.len())
    }

    fn substring(&self, start: usize, stop: usize) -> Result<String> {
        self.get(start..stop).map(str::to_string).ok_or_else(|| {
            SeqPathError::Backend(format!(
                "substring [{}:{}) out of range for sequence of length {}",
                start,
                stop,
                self.len()
            ))
        })
    }
}

/// Bounds of the reverse-complement companion, recorded once the sequence is
/// known to have a reverse strand.
#[derive(Debug, Clone, Copy)]
struct ReverseView {
    start: Bound,
    stop: Bound,
}

///
/// A top-level sequence: the owner of residue data that every interval
/// ultimately refers to.
///
/// Sequences are shared behind an `Arc`; intervals compare their top-level
/// sequence by pointer identity, so two sequences with the same residues are
/// still different paths.
///
pub struct Sequence {
    id: String,
    backend: Box<dyn SequenceBackend>,
    length: OnceLock<usize>,
    seq_type: OnceLock<SeqType>,
    reverse_view: OnceLock<ReverseView>,
}

impl Sequence {
    pub fn new<B: SequenceBackend + 'static>(id: impl Into<String>, backend: B) -> Self {
        Sequence {
            id: id.into(),
            backend: Box::new(backend),
            length: OnceLock::new(),
            seq_type: OnceLock::new(),
            reverse_view: OnceLock::new(),
        }
    }

    /// In-memory sequence over `residues`.
    pub fn from_residues(id: impl Into<String>, residues: impl Into<String>) -> Self {
        Sequence::new(id, residues.into())
    }

    /// Store a known classification, skipping the guess on first use.
    pub fn with_seq_type(self, seq_type: SeqType) -> Self {
        let _ = self.seq_type.set(seq_type);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Length if it has been learned already, without touching the backend more than `known_length`.
    pub fn known_len(&self) -> Option<usize> {
        if let Some(len) = self.length.get() {
            return Some(*len);
        }
        let len = self.backend.known_length()?;
        Some(*self.length.get_or_init(|| len))
    }

    /// Length of the sequence, asking the backend for it if needed.
    pub fn len(&self) -> Result<usize> {
        if let Some(len) = self.known_len() {
            return Ok(len);
        }
        let len = self.backend.length()?;
        log::debug!("learned length of sequence {}: {}", self.id, len);
        Ok(*self.length.get_or_init(|| len))
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// The stored classification, if one was given or has been cached.
    pub fn seq_type(&self) -> Option<SeqType> {
        self.seq_type.get().copied()
    }

    pub(crate) fn cache_seq_type(&self, seq_type: SeqType) -> SeqType {
        *self.seq_type.get_or_init(|| seq_type)
    }

    /// Forward-strand residues in `[start, stop)`.
    pub fn substring(&self, start: usize, stop: usize) -> Result<String> {
        self.backend.substring(start, stop)
    }

    /// The whole sequence as a forward interval.
    pub fn forward(self: &Arc<Self>) -> SeqPath {
        SeqPath::top_level(Arc::clone(self), Orientation::Forward)
    }

    ///
    /// The reverse-complement companion of the whole sequence.
    ///
    /// The companion is built and checked for reversibility on the first
    /// call only; later calls reuse it. Every call yields the same path
    /// (same top-level identity, same bounds), and reversing it again yields
    /// the forward path.
    ///
    pub fn reverse(self: &Arc<Self>) -> Result<SeqPath> {
        let view = match self.reverse_view.get() {
            Some(view) => *view,
            None => {
                let companion = self.forward().reverse()?;
                *self.reverse_view.get_or_init(|| ReverseView {
                    start: companion.start_bound(),
                    stop: companion.stop_bound(),
                })
            }
        };
        Ok(SeqPath::from_parts(
            Arc::clone(self),
            Orientation::Reverse,
            view.start,
            view.stop,
        ))
    }

    pub(crate) fn has_reverse_view(&self) -> bool {
        self.reverse_view.get().is_some()
    }
}

impl Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("id", &self.id)
            .field("length", &self.length.get())
            .field("seq_type", &self.seq_type.get())
            .field("reverse_view", &self.reverse_view.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingBackend {
        residues: String,
        length_calls: Arc<AtomicUsize>,
    }

    impl SequenceBackend for CountingBackend {
        fn length(&self) -> Result<usize> {
            self.length_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.residues.len())
        }

        fn substring(&self, start: usize, stop: usize) -> Result<String> {
            self.residues.substring(start, stop)
        }
    }

    #[rstest]
    fn test_in_memory_sequence_knows_length() {
        let seq = Sequence::from_residues("chr1", "ACGTACGT");
        assert_eq!(seq.known_len(), Some(8));
        assert_eq!(seq.len().unwrap(), 8);
        assert_eq!(seq.substring(2, 5).unwrap(), "GTA");
        assert_eq!(seq.id(), "chr1");
    }

    #[rstest]
    fn test_length_is_learned_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seq = Sequence::new(
            "stream",
            CountingBackend {
                residues: "ACGTAC".to_string(),
                length_calls: Arc::clone(&calls),
            },
        );
        assert_eq!(seq.known_len(), None);
        assert_eq!(seq.len().unwrap(), 6);
        assert_eq!(seq.len().unwrap(), 6);
        assert_eq!(seq.known_len(), Some(6));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn test_substring_out_of_range() {
        let seq = Sequence::from_residues("chr1", "ACGT");
        assert!(matches!(seq.substring(2, 9), Err(SeqPathError::Backend(_))));
    }

    #[rstest]
    fn test_reverse_companion_is_built_once() {
        let seq = Arc::new(Sequence::from_residues("chr1", "AAGGTTCCAG"));
        assert!(!seq.has_reverse_view());

        let first = seq.reverse().unwrap();
        assert!(seq.has_reverse_view());
        let second = seq.reverse().unwrap();
        assert!(first == second);
        assert_eq!(second.bounds().unwrap(), (-10, 0));
    }

    #[rstest]
    fn test_protein_builds_no_reverse_companion() {
        let seq = Arc::new(Sequence::from_residues("p1", "MKVLAAGIVEQW"));
        assert!(matches!(seq.reverse(), Err(SeqPathError::UnsupportedReversal(_))));
        assert!(!seq.has_reverse_view());
    }

    #[rstest]
    fn test_reverse_companion_of_unknown_length_resolves_later() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seq = Arc::new(
            Sequence::new(
                "stream",
                CountingBackend {
                    residues: "ACGTAC".to_string(),
                    length_calls: Arc::clone(&calls),
                },
            )
            .with_seq_type(SeqType::Dna),
        );
        let rev = seq.reverse().unwrap();
        assert_eq!(rev.start_bound(), Bound::Deferred(None));
        assert_eq!(seq.reverse().unwrap().bounds().unwrap(), (-6, 0));
        assert_eq!(rev.bounds().unwrap(), (-6, 0));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn test_with_seq_type() {
        let seq = Sequence::from_residues("p1", "ACGT").with_seq_type(SeqType::Protein);
        assert_eq!(seq.seq_type(), Some(SeqType::Protein));
    }
}
