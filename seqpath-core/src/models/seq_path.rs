use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::ops::{Bound as RangeBound, RangeBounds};
use std::sync::{Arc, OnceLock};

use crate::alphabet::{SeqType, guess_seq_type};
use crate::errors::{Result, SeqPathError};
use crate::models::bound::{Bound, End};
use crate::models::orientation::Orientation;
use crate::models::sequence::Sequence;
use crate::transform::IntervalTransform;
use crate::utils::reverse_complement;

///
/// A contiguous interval `path[start:stop:step]` over a top-level sequence.
///
/// Coordinates always refer to the top-level sequence, never to the interval
/// a slice was taken from, so slices of slices stay flat. Reverse intervals
/// live in the negated frame `[-len, 0)`.
///
/// Bounds that cannot be checked when the interval is built (the sequence
/// does not know its length yet) are kept as [`Bound::Deferred`] and resolved
/// on first access; an interval that turns out empty at that point fails
/// with [`SeqPathError::EmptyInterval`] from the accessor.
///
#[derive(Debug, Clone)]
pub struct SeqPath {
    seq: Arc<Sequence>,
    orientation: Orientation,
    start: Bound,
    stop: Bound,
    step: i64,
    resolved: OnceLock<(i64, i64)>,
}

/// Compact, self-describing form of an interval.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathRecord {
    pub id: String,
    pub start: i64,
    pub end: i64,
    pub ori: i8,
}

/// Frame limit on `end`, if it can be known without asking the backend for work.
fn frame_limit(seq: &Sequence, orientation: Orientation, end: End) -> Option<i64> {
    match (orientation, end) {
        (Orientation::Forward, End::Start) | (Orientation::Reverse, End::Stop) => Some(0),
        (Orientation::Forward, End::Stop) => seq.known_len().map(|len| len as i64),
        (Orientation::Reverse, End::Start) => seq.known_len().map(|len| -(len as i64)),
    }
}

fn forced_frame_limit(seq: &Sequence, orientation: Orientation, end: End) -> Result<i64> {
    let (start, stop) = orientation.frame(seq.len()? as i64);
    Ok(match end {
        End::Start => start,
        End::Stop => stop,
    })
}

impl SeqPath {
    pub(crate) fn top_level(seq: Arc<Sequence>, orientation: Orientation) -> Self {
        let start = Bound::checked(None, frame_limit(&seq, orientation, End::Start), End::Start);
        let stop = Bound::checked(None, frame_limit(&seq, orientation, End::Stop), End::Stop);
        SeqPath {
            seq,
            orientation,
            start,
            stop,
            step: 1,
            resolved: OnceLock::new(),
        }
    }

    pub(crate) fn from_parts(seq: Arc<Sequence>, orientation: Orientation, start: Bound, stop: Bound) -> Self {
        SeqPath {
            seq,
            orientation,
            start,
            stop,
            step: 1,
            resolved: OnceLock::new(),
        }
    }

    ///
    /// Build an interval from absolute coordinates in the frame of `seq`.
    ///
    /// Bounds are clamped to the frame when its limits are known and
    /// deferred otherwise. `None` is an open end.
    ///
    pub fn with_bounds(
        seq: Arc<Sequence>,
        orientation: Orientation,
        start: Option<i64>,
        stop: Option<i64>,
        step: i64,
    ) -> Result<Self> {
        if step <= 0 {
            return Err(SeqPathError::InvalidStep(step));
        }
        let start = Bound::checked(start, frame_limit(&seq, orientation, End::Start), End::Start);
        let stop = Bound::checked(stop, frame_limit(&seq, orientation, End::Stop), End::Stop);
        if let (Bound::Resolved(start), Bound::Resolved(stop)) = (start, stop) {
            if start >= stop {
                return Err(SeqPathError::EmptyInterval { start, stop });
            }
        }
        Ok(SeqPath {
            seq,
            orientation,
            start,
            stop,
            step,
            resolved: OnceLock::new(),
        })
    }

    pub fn sequence(&self) -> &Arc<Sequence> {
        &self.seq
    }

    pub fn id(&self) -> &str {
        self.seq.id()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    /// The stored start bound, deferred or not.
    pub fn start_bound(&self) -> Bound {
        self.start
    }

    /// The stored stop bound, deferred or not.
    pub fn stop_bound(&self) -> Bound {
        self.stop
    }

    /// True when both bounds are known without further work.
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some() || !(self.start.is_deferred() || self.stop.is_deferred())
    }

    fn bound(&self, end: End) -> Bound {
        match end {
            End::Start => self.start,
            End::Stop => self.stop,
        }
    }

    fn resolve_end(&self, end: End) -> Result<i64> {
        match self.bound(end) {
            Bound::Resolved(value) => Ok(value),
            deferred => {
                let limit = forced_frame_limit(&self.seq, self.orientation, end)?;
                Ok(deferred.resolve(limit, end))
            }
        }
    }

    ///
    /// Resolved `(start, stop)` of this interval.
    ///
    /// Deferred bounds are resolved once, against the length of the
    /// top-level sequence, and the result is cached.
    ///
    pub fn bounds(&self) -> Result<(i64, i64)> {
        if let Some(bounds) = self.resolved.get() {
            return Ok(*bounds);
        }
        let start = self.resolve_end(End::Start)?;
        let stop = self.resolve_end(End::Stop)?;
        if start >= stop {
            return Err(SeqPathError::EmptyInterval { start, stop });
        }
        if !self.is_resolved() {
            log::debug!(
                "resolved deferred bounds on {} to [{}:{})",
                self.seq.id(),
                start,
                stop
            );
        }
        Ok(*self.resolved.get_or_init(|| (start, stop)))
    }

    pub fn start(&self) -> Result<i64> {
        Ok(self.bounds()?.0)
    }

    pub fn stop(&self) -> Result<i64> {
        Ok(self.bounds()?.1)
    }

    /// Number of strided positions, `(stop - start) / step`.
    pub fn len(&self) -> Result<usize> {
        let (start, stop) = self.bounds()?;
        Ok(((stop - start) / self.step) as usize)
    }

    /// The bound on `end` if it is available without forcing the sequence length.
    fn anchor(&self, end: End) -> Result<Option<i64>> {
        if let Some(&(start, stop)) = self.resolved.get() {
            return Ok(Some(match end {
                End::Start => start,
                End::Stop => stop,
            }));
        }
        match self.bound(end) {
            Bound::Resolved(value) => Ok(Some(value)),
            bound => match frame_limit(&self.seq, self.orientation, end) {
                Some(limit) => Ok(Some(bound.resolve(limit, end))),
                None if bound == Bound::Deferred(None) => Ok(None),
                // a raw, unclamped value cannot be offset from; force it
                None => self.resolve_end(end).map(Some),
            },
        }
    }

    fn offset_index(&self, index: Option<i64>, from: End) -> Result<Option<i64>> {
        let anchor = self.anchor(from)?;
        match (index, anchor) {
            (None, anchor) => Ok(anchor),
            (Some(index), Some(anchor)) => Ok(Some(index.saturating_mul(self.step).saturating_add(anchor))),
            (Some(index), None) => Ok(Some(
                index
                    .saturating_mul(self.step)
                    .saturating_add(self.resolve_end(from)?),
            )),
        }
    }

    ///
    /// Slice this interval like `self[start:stop:step]`.
    ///
    /// Non-negative indexes count from this interval's start, negative ones
    /// from its stop, and each index is scaled by this interval's stride.
    /// A start past the stop selects the opposite strand:
    /// `x[5:2]` is `(-x)[-5:-2]`. Out-of-range bounds are clamped to the
    /// top-level sequence; index arithmetic saturates rather than overflowing.
    ///
    /// # Arguments
    /// - start: first index, `None` for this interval's start
    /// - stop: end index (exclusive), `None` for this interval's stop
    /// - step: stride relative to this interval, `None` for 1
    ///
    pub fn slice(&self, start: Option<i64>, stop: Option<i64>, step: Option<i64>) -> Result<SeqPath> {
        let step = step.unwrap_or(1);
        if step <= 0 {
            return Err(SeqPathError::InvalidStep(step));
        }
        let start_from = if start.is_none_or(|i| i >= 0) {
            End::Start
        } else {
            End::Stop
        };
        let stop_from = if stop.is_some_and(|i| i >= 0) {
            End::Start
        } else {
            End::Stop
        };
        let mut start = self.offset_index(start, start_from)?;
        let mut stop = self.offset_index(stop, stop_from)?;

        let mut orientation = self.orientation;
        if let (Some(a), Some(b)) = (start, stop) {
            if a > b {
                orientation = orientation.flip();
                start = Some(a.saturating_neg());
                stop = Some(b.saturating_neg());
            }
        }
        SeqPath::with_bounds(
            Arc::clone(&self.seq),
            orientation,
            start,
            stop,
            step.saturating_mul(self.step),
        )
    }

    /// Slice with Rust range syntax, e.g. `path.range(2..5)` or `path.range(-3..)`.
    pub fn range<R: RangeBounds<i64>>(&self, range: R) -> Result<SeqPath> {
        let start = match range.start_bound() {
            RangeBound::Included(&i) => Some(i),
            RangeBound::Excluded(&i) => Some(i.saturating_add(1)),
            RangeBound::Unbounded => None,
        };
        let stop = match range.end_bound() {
            RangeBound::Included(&-1) | RangeBound::Unbounded => None,
            RangeBound::Included(&i) => Some(i.saturating_add(1)),
            RangeBound::Excluded(&i) => Some(i),
        };
        self.slice(start, stop, None)
    }

    /// The length-1 interval at `index`; negative indexes count from the end.
    pub fn get(&self, index: i64) -> Result<SeqPath> {
        let len = self.len()?;
        let k = if index < 0 { index + len as i64 } else { index };
        if k < 0 || k >= len as i64 {
            return Err(SeqPathError::IndexOutOfRange { index, len });
        }
        self.slice(Some(k), Some(k + 1), Some(1))
    }

    /// Every length-1 interval of this path, in order.
    pub fn units(&self) -> Result<Vec<SeqPath>> {
        (0..self.len()? as i64).map(|i| self.get(i)).collect()
    }

    /// Same top-level sequence (by identity) in the same orientation.
    pub fn same_path(&self, other: &SeqPath) -> bool {
        Arc::ptr_eq(&self.seq, &other.seq) && self.orientation == other.orientation
    }

    /// `start <= k < stop`
    pub fn contains_point(&self, k: i64) -> Result<bool> {
        let (start, stop) = self.bounds()?;
        Ok(start <= k && k < stop)
    }

    /// True if `other` lies on the same path and entirely within this interval.
    pub fn contains(&self, other: &SeqPath) -> Result<bool> {
        if !self.same_path(other) {
            return Ok(false);
        }
        let (start, stop) = self.bounds()?;
        let (other_start, other_stop) = other.bounds()?;
        Ok(start <= other_start && other_stop <= stop)
    }

    /// True if both intervals are on the same path and share at least one position.
    pub fn overlaps(&self, other: &SeqPath) -> Result<bool> {
        if !self.same_path(other) {
            return Ok(false);
        }
        let (start, stop) = self.bounds()?;
        let (other_start, other_stop) = other.bounds()?;
        Ok((start <= other_start && other_start < stop) || (other_start <= start && start < other_stop))
    }

    ///
    /// Intersection of two intervals.
    ///
    /// # Returns
    /// - `None` when the intervals are on different paths or do not overlap
    ///
    pub fn intersect(&self, other: &SeqPath) -> Result<Option<SeqPath>> {
        if !self.same_path(other) {
            return Ok(None);
        }
        let (start, stop) = self.bounds()?;
        let (other_start, other_stop) = other.bounds()?;
        let start = start.max(other_start);
        let stop = stop.min(other_stop);
        if start < stop {
            SeqPath::with_bounds(Arc::clone(&self.seq), self.orientation, Some(start), Some(stop), 1)
                .map(Some)
        } else {
            Ok(None)
        }
    }

    /// Smallest interval covering both `self` and `other`.
    pub fn merge(&self, other: &SeqPath) -> Result<SeqPath> {
        let (start, stop) = self.merged_bounds(other)?;
        SeqPath::with_bounds(
            Arc::clone(&self.seq),
            self.orientation,
            Some(start),
            Some(stop),
            self.step,
        )
    }

    /// Extend this interval to cover `other`, returning the receiver.
    pub fn merge_in_place(&mut self, other: &SeqPath) -> Result<&mut Self> {
        let (start, stop) = self.merged_bounds(other)?;
        self.start = Bound::Resolved(start);
        self.stop = Bound::Resolved(stop);
        self.resolved = OnceLock::from((start, stop));
        Ok(self)
    }

    fn merged_bounds(&self, other: &SeqPath) -> Result<(i64, i64)> {
        if !self.same_path(other) {
            return Err(SeqPathError::SequenceMismatch(format!(
                "cannot merge {} with {}",
                self, other
            )));
        }
        let (start, stop) = self.bounds()?;
        let (other_start, other_stop) = other.bounds()?;
        Ok((start.min(other_start), stop.max(other_stop)))
    }

    ///
    /// The same interval on the opposite strand.
    ///
    /// Reversing the whole sequence gives its reverse-complement companion,
    /// and reversing twice gives back an interval equal to the original.
    /// Deferred bounds stay deferred.
    ///
    pub fn reverse(&self) -> Result<SeqPath> {
        if !self.seq_type()?.has_reverse_strand() {
            return Err(SeqPathError::UnsupportedReversal(self.seq.id().to_string()));
        }
        let resolved = match self.resolved.get() {
            Some(&(start, stop)) => OnceLock::from((-stop, -start)),
            None => OnceLock::new(),
        };
        Ok(SeqPath {
            seq: Arc::clone(&self.seq),
            orientation: self.orientation.flip(),
            start: -self.stop,
            stop: -self.start,
            step: self.step,
            resolved,
        })
    }

    ///
    /// Residues of this interval.
    ///
    /// Reverse intervals read the forward strand at `[-stop, -start)` and
    /// return its reverse complement.
    ///
    pub fn materialize(&self) -> Result<String> {
        let forward = self.forward_residues()?;
        Ok(match self.orientation {
            Orientation::Forward => forward,
            Orientation::Reverse => reverse_complement(&forward),
        })
    }

    /// Forward-strand residues under this interval, whatever its orientation.
    fn forward_residues(&self) -> Result<String> {
        let (start, stop) = self.bounds()?;
        match self.orientation {
            Orientation::Forward => self.seq.substring(start as usize, stop as usize),
            Orientation::Reverse => self.seq.substring((-stop) as usize, (-start) as usize),
        }
    }

    ///
    /// Classification of the residues on this path.
    ///
    /// Uses the classification stored on the top-level sequence when there is
    /// one; otherwise guesses from the forward-strand residues, so both
    /// strands of an interval classify alike. A guess made on the whole
    /// sequence is stored for later calls.
    ///
    pub fn seq_type(&self) -> Result<SeqType> {
        if let Some(seq_type) = self.seq.seq_type() {
            return Ok(seq_type);
        }
        // complementing turns U into A, so the reverse strand of RNA reads as DNA
        let seq_type = guess_seq_type(self.forward_residues()?.as_bytes());
        if self.covers_sequence()? {
            return Ok(self.seq.cache_seq_type(seq_type));
        }
        Ok(seq_type)
    }

    fn covers_sequence(&self) -> Result<bool> {
        let frame = self.orientation.frame(self.seq.len()? as i64);
        Ok(self.bounds()? == frame)
    }

    ///
    /// Order two intervals on the same path by `(start, stop)`.
    ///
    /// # Returns
    /// - `Err(NotComparable)` when the intervals are on different paths
    ///
    pub fn compare(&self, other: &SeqPath) -> Result<Ordering> {
        if !self.same_path(other) {
            return Err(SeqPathError::NotComparable);
        }
        Ok(self.bounds()?.cmp(&other.bounds()?))
    }

    /// Transform mapping `other` onto this interval.
    pub fn transform_from(&self, other: &SeqPath) -> Result<IntervalTransform> {
        IntervalTransform::new(other, self)
    }

    pub fn to_record(&self) -> Result<PathRecord> {
        let (start, end) = self.bounds()?;
        Ok(PathRecord {
            id: self.seq.id().to_string(),
            start,
            end,
            ori: self.orientation.sign(),
        })
    }
}

impl From<Arc<Sequence>> for SeqPath {
    fn from(seq: Arc<Sequence>) -> Self {
        SeqPath::top_level(seq, Orientation::Forward)
    }
}

impl PartialEq for SeqPath {
    fn eq(&self, other: &Self) -> bool {
        matches!(self.compare(other), Ok(Ordering::Equal))
    }
}

impl PartialOrd for SeqPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Display for SeqPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ori = if self.orientation.is_forward() { "" } else { "-" };
        match self.bounds() {
            Ok((start, stop)) => write!(f, "{}{}[{}:{}]", ori, self.seq.id(), start, stop),
            Err(_) => write!(f, "{}{}[?:?]", ori, self.seq.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sequence::SequenceBackend;
    use pretty_assertions::assert_eq;
    use rstest::*;

    /// A backend that cannot report its length until asked to compute it.
    struct StreamBackend(String);

    impl SequenceBackend for StreamBackend {
        fn length(&self) -> Result<usize> {
            Ok(self.0.len())
        }

        fn substring(&self, start: usize, stop: usize) -> Result<String> {
            self.0.substring(start, stop)
        }
    }

    #[fixture]
    fn seq() -> Arc<Sequence> {
        //                                 0123456789
        Arc::new(Sequence::from_residues("chr1", "AAGGTTCCAG"))
    }

    #[fixture]
    fn stream() -> Arc<Sequence> {
        Arc::new(Sequence::new("stream", StreamBackend("AAGGTTCCAG".to_string())).with_seq_type(SeqType::Dna))
    }

    #[rstest]
    fn test_top_level_bounds(seq: Arc<Sequence>) {
        let path = seq.forward();
        assert_eq!(path.bounds().unwrap(), (0, 10));
        assert_eq!(path.len().unwrap(), 10);
        assert_eq!(path.materialize().unwrap(), "AAGGTTCCAG");
        assert_eq!(path.orientation(), Orientation::Forward);
    }

    #[rstest]
    #[case(Some(2), Some(5), (2, 5), "GGT")]
    #[case(Some(-3), None, (7, 10), "CAG")]
    #[case(None, Some(-8), (0, 2), "AA")]
    #[case(Some(-20), Some(50), (0, 10), "AAGGTTCCAG")]
    fn test_forward_slices(
        seq: Arc<Sequence>,
        #[case] start: Option<i64>,
        #[case] stop: Option<i64>,
        #[case] bounds: (i64, i64),
        #[case] residues: &str,
    ) {
        let path = seq.forward().slice(start, stop, None).unwrap();
        assert_eq!(path.bounds().unwrap(), bounds);
        assert_eq!(path.materialize().unwrap(), residues);
    }

    #[rstest]
    fn test_nested_slices_are_flat(seq: Arc<Sequence>) {
        let outer = seq.forward().range(2..8).unwrap();
        let inner = outer.range(1..3).unwrap();
        assert_eq!(inner.bounds().unwrap(), (3, 5));
        assert_eq!(inner.materialize().unwrap(), "GT");
        assert!(Arc::ptr_eq(inner.sequence(), &seq));

        let tail = outer.range(-2..).unwrap();
        assert_eq!(tail.bounds().unwrap(), (6, 8));
    }

    #[rstest]
    fn test_strides_compose(seq: Arc<Sequence>) {
        let every_other = seq.forward().slice(None, None, Some(2)).unwrap();
        assert_eq!(every_other.step(), 2);
        assert_eq!(every_other.len().unwrap(), 5);

        let nested = every_other.slice(Some(1), Some(3), Some(3)).unwrap();
        assert_eq!(nested.step(), 6);
        assert_eq!(nested.bounds().unwrap(), (2, 6));
    }

    #[rstest]
    #[case(Some(0))]
    #[case(Some(-2))]
    fn test_invalid_step(seq: Arc<Sequence>, #[case] step: Option<i64>) {
        let result = seq.forward().slice(Some(1), Some(4), step);
        assert!(matches!(result, Err(SeqPathError::InvalidStep(_))));
    }

    #[rstest]
    fn test_start_past_stop_selects_reverse_strand(seq: Arc<Sequence>) {
        let path = seq.forward().slice(Some(5), Some(2), None).unwrap();
        assert_eq!(path.orientation(), Orientation::Reverse);
        assert_eq!(path.bounds().unwrap(), (-5, -2));
        assert_eq!(path.materialize().unwrap(), "ACC");
    }

    #[rstest]
    #[case(Some(4), Some(4), 4, 4)]
    #[case(Some(12), Some(20), 12, 10)]
    fn test_empty_interval_fails(
        seq: Arc<Sequence>,
        #[case] start: Option<i64>,
        #[case] stop: Option<i64>,
        #[case] expected_start: i64,
        #[case] expected_stop: i64,
    ) {
        let result = seq.forward().slice(start, stop, None);
        assert_eq!(
            result.unwrap_err(),
            SeqPathError::EmptyInterval {
                start: expected_start,
                stop: expected_stop
            }
        );
    }

    #[rstest]
    fn test_reverse_companion(seq: Arc<Sequence>) {
        let rev = seq.reverse().unwrap();
        assert_eq!(rev.orientation(), Orientation::Reverse);
        assert_eq!(rev.bounds().unwrap(), (-10, 0));
        assert_eq!(rev.materialize().unwrap(), "CTGGAACCTT");

        assert!(rev == seq.reverse().unwrap());
        assert!(rev.reverse().unwrap() == seq.forward());
    }

    #[rstest]
    fn test_slice_of_reverse(seq: Arc<Sequence>) {
        let rev = seq.reverse().unwrap();
        let path = rev.range(2..5).unwrap();
        assert_eq!(path.bounds().unwrap(), (-8, -5));
        assert_eq!(path.materialize().unwrap(), "GGA");

        // start past stop on the reverse strand flips back to forward
        let back = rev.slice(Some(5), Some(2), None).unwrap();
        assert_eq!(back.orientation(), Orientation::Forward);
        assert_eq!(back.bounds().unwrap(), (5, 8));
    }

    #[rstest]
    fn test_reverse_twice_is_identity(seq: Arc<Sequence>) {
        let path = seq.forward().range(2..5).unwrap();
        let rev = path.reverse().unwrap();
        assert_eq!(rev.bounds().unwrap(), (-5, -2));
        assert_eq!(rev.reverse().unwrap().bounds().unwrap(), (2, 5));
        assert!(rev.reverse().unwrap() == path);
    }

    #[rstest]
    fn test_materialize_reverse_is_reverse_complement() {
        let seq = Arc::new(Sequence::from_residues("s", "AAGG"));
        assert_eq!(seq.reverse().unwrap().materialize().unwrap(), "CCTT");
    }

    #[rstest]
    fn test_protein_has_no_reverse() {
        let stored = Arc::new(Sequence::from_residues("p1", "ACGTACGT").with_seq_type(SeqType::Protein));
        assert!(matches!(
            stored.reverse(),
            Err(SeqPathError::UnsupportedReversal(_))
        ));

        let guessed = Arc::new(Sequence::from_residues("p2", "MKVLAAGIVEQW"));
        assert!(matches!(
            guessed.forward().range(1..6).unwrap().reverse(),
            Err(SeqPathError::UnsupportedReversal(_))
        ));
        assert_eq!(guessed.forward().seq_type().unwrap(), SeqType::Protein);
        assert_eq!(guessed.seq_type(), Some(SeqType::Protein));
    }

    #[rstest]
    fn test_deferred_bounds_resolve_on_access(stream: Arc<Sequence>) {
        let top = stream.forward();
        assert_eq!(top.stop_bound(), Bound::Deferred(None));

        let path = top.slice(Some(2), Some(50), None).unwrap();
        assert_eq!(path.start_bound(), Bound::Resolved(2));
        assert_eq!(path.stop_bound(), Bound::Deferred(Some(50)));
        assert!(!path.is_resolved());

        assert_eq!(path.bounds().unwrap(), (2, 10));
        assert!(path.is_resolved());
        assert_eq!(stream.known_len(), Some(10));
    }

    #[rstest]
    fn test_deferred_empty_interval_fails_on_access(stream: Arc<Sequence>) {
        let path = stream.forward().slice(Some(12), Some(20), None).unwrap();
        assert_eq!(
            path.bounds().unwrap_err(),
            SeqPathError::EmptyInterval { start: 12, stop: 10 }
        );
    }

    #[rstest]
    fn test_reverse_companion_of_unknown_length(stream: Arc<Sequence>) {
        let rev = stream.reverse().unwrap();
        assert_eq!(rev.start_bound(), Bound::Deferred(None));
        assert_eq!(rev.stop_bound(), Bound::Resolved(0));
        assert_eq!(rev.bounds().unwrap(), (-10, 0));
        assert!(rev.reverse().unwrap() == stream.forward());
    }

    #[rstest]
    fn test_intersect(seq: Arc<Sequence>) {
        let top = seq.forward();
        let a = top.range(0..6).unwrap();
        let b = top.range(4..10).unwrap();

        let ab = a.intersect(&b).unwrap().unwrap();
        let ba = b.intersect(&a).unwrap().unwrap();
        assert_eq!(ab.bounds().unwrap(), (4, 6));
        assert!(ab == ba);
        assert!(a.contains(&ab).unwrap() && b.contains(&ab).unwrap());
        assert!(a.intersect(&a).unwrap().unwrap() == a);

        let c = top.range(7..9).unwrap();
        assert!(a.intersect(&c).unwrap().is_none());

        let other = Arc::new(Sequence::from_residues("chr2", "AAGGTTCCAG"));
        assert!(a.intersect(&other.forward()).unwrap().is_none());
    }

    #[rstest]
    fn test_merge(seq: Arc<Sequence>) {
        let top = seq.forward();
        let a = top.range(1..3).unwrap();
        let b = top.range(6..8).unwrap();

        let ab = a.merge(&b).unwrap();
        assert_eq!(ab.bounds().unwrap(), (1, 8));
        assert!(ab == b.merge(&a).unwrap());
        assert!(ab.contains(&a).unwrap() && ab.contains(&b).unwrap());
        assert!(ab.intersect(&a).unwrap().unwrap() == a);

        let other = Arc::new(Sequence::from_residues("chr2", "AAGGTTCCAG"));
        assert!(matches!(
            a.merge(&other.forward()),
            Err(SeqPathError::SequenceMismatch(_))
        ));
    }

    #[rstest]
    fn test_merge_in_place_returns_receiver(seq: Arc<Sequence>) {
        let mut a = seq.forward().range(2..4).unwrap();
        let b = seq.forward().range(6..8).unwrap();
        let receiver: *const SeqPath = &a;
        let merged = a.merge_in_place(&b).unwrap();
        assert!(std::ptr::eq(merged, receiver));
        assert_eq!(a.bounds().unwrap(), (2, 8));
    }

    #[rstest]
    fn test_overlaps_excludes_touching_bounds() {
        let seq = Arc::new(Sequence::from_residues("chr1", "A".repeat(20)));
        let top = seq.forward();
        let a = top.range(0..10).unwrap();
        assert!(!a.overlaps(&top.range(10..20).unwrap()).unwrap());
        assert!(a.overlaps(&top.range(9..20).unwrap()).unwrap());
        assert!(top.range(9..20).unwrap().overlaps(&a).unwrap());
    }

    #[rstest]
    fn test_contains(seq: Arc<Sequence>) {
        let a = seq.forward().range(0..6).unwrap();
        assert!(a.contains_point(5).unwrap());
        assert!(!a.contains_point(6).unwrap());
        assert!(a.contains(&seq.forward().range(2..4).unwrap()).unwrap());
        assert!(!a.contains(&seq.forward().range(4..8).unwrap()).unwrap());
        assert!(!a.contains(&a.reverse().unwrap()).unwrap());
    }

    #[rstest]
    fn test_compare(seq: Arc<Sequence>) {
        let top = seq.forward();
        let a = top.range(2..5).unwrap();
        let b = top.range(3..4).unwrap();
        assert_eq!(a.compare(&b).unwrap(), Ordering::Less);
        assert!(a < b);

        let other = Arc::new(Sequence::from_residues("chr1", "AAGGTTCCAG"));
        let c = other.forward().range(2..5).unwrap();
        assert_eq!(a.compare(&c).unwrap_err(), SeqPathError::NotComparable);
        assert_eq!(a.partial_cmp(&c), None);
        assert!(a != c);
    }

    #[rstest]
    fn test_get_and_units(seq: Arc<Sequence>) {
        let top = seq.forward();
        let last = top.get(-1).unwrap();
        assert_eq!(last.bounds().unwrap(), (9, 10));
        assert_eq!(last.materialize().unwrap(), "G");
        assert_eq!(
            top.get(10).unwrap_err(),
            SeqPathError::IndexOutOfRange { index: 10, len: 10 }
        );

        let units: Vec<String> = top
            .range(2..5)
            .unwrap()
            .units()
            .unwrap()
            .iter()
            .map(|unit| unit.materialize().unwrap())
            .collect();
        assert_eq!(units, vec!["G", "G", "T"]);
    }

    #[rstest]
    fn test_reverse_strand_classifies_like_forward() {
        let rna = Arc::new(Sequence::from_residues("r", "AUGCAUGCAU"));
        let whole_reverse = rna.forward().slice(Some(10), Some(0), None).unwrap();
        assert_eq!(whole_reverse.orientation(), Orientation::Reverse);
        assert_eq!(whole_reverse.seq_type().unwrap(), SeqType::Rna);
        assert_eq!(rna.forward().seq_type().unwrap(), SeqType::Rna);
        assert_eq!(rna.seq_type(), Some(SeqType::Rna));

        let part = Arc::new(Sequence::from_residues("r2", "AUGCAUGCAU"));
        let rev = part.forward().slice(Some(8), Some(2), None).unwrap();
        assert_eq!(rev.seq_type().unwrap(), SeqType::Rna);
        assert_eq!(part.seq_type(), None);
    }

    #[rstest]
    fn test_huge_indexes_saturate_and_clamp(seq: Arc<Sequence>) {
        let inner = seq.forward().range(2..8).unwrap();

        // start past the parent's stop selects the reverse strand, clamped to the sequence
        let past_end = inner.slice(Some(i64::MAX), None, None).unwrap();
        assert_eq!(past_end.orientation(), Orientation::Reverse);
        assert_eq!(past_end.bounds().unwrap(), (-10, -8));
        assert_eq!(past_end.materialize().unwrap(), "CT");

        let from_far_left = inner.slice(Some(i64::MIN), Some(3), None).unwrap();
        assert_eq!(from_far_left.bounds().unwrap(), (0, 5));

        let everything = seq.forward().range(i64::MIN..=i64::MAX).unwrap();
        assert_eq!(everything.bounds().unwrap(), (0, 10));

        let strided = seq.forward().slice(None, None, Some(2)).unwrap();
        let huge_step = strided.slice(None, None, Some(i64::MAX)).unwrap();
        assert_eq!(huge_step.step(), i64::MAX);
        assert_eq!(huge_step.len().unwrap(), 0);
    }

    #[rstest]
    fn test_display_and_record(seq: Arc<Sequence>) {
        let path = seq.forward().range(2..5).unwrap();
        assert_eq!(path.to_string(), "chr1[2:5]");
        assert_eq!(path.reverse().unwrap().to_string(), "-chr1[-5:-2]");

        let record = path.reverse().unwrap().to_record().unwrap();
        assert_eq!(
            record,
            PathRecord {
                id: "chr1".to_string(),
                start: -5,
                end: -2,
                ori: -1
            }
        );
    }
}
