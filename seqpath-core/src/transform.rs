//! Linear coordinate transforms between two sequence intervals.
//!
//! An [`IntervalTransform`] relates a source interval to a destination
//! interval (typically the two sides of an aligned block) and projects
//! points and intervals from one coordinate frame into the other.
//!
//! ```
//! use std::sync::Arc;
//! use seqpath_core::{IntervalTransform, Sequence};
//!
//! let chr1 = Arc::new(Sequence::from_residues("chr1", "A".repeat(100)));
//! let chr2 = Arc::new(Sequence::from_residues("chr2", "A".repeat(50)));
//!
//! let xform = IntervalTransform::new(&chr1.forward(), &chr2.forward()).unwrap();
//! assert_eq!(xform.apply_point(50), 25);
//!
//! let mapped = xform.apply(&chr1.forward().range(10..20).unwrap()).unwrap();
//! assert_eq!(mapped.bounds().unwrap(), (5, 10));
//! ```
use std::sync::Arc;

use crate::errors::{Result, SeqPathError};
use crate::models::seq_path::{PathRecord, SeqPath};

/// Annotations that can describe themselves in a [`TransformRecord`].
pub trait AnnotationRecord {
    fn record(&self) -> Vec<(String, String)>;
}

impl AnnotationRecord for () {
    fn record(&self) -> Vec<(String, String)> {
        Vec::new()
    }
}

/// Compact description of a transform: both intervals and any annotation fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformRecord {
    pub src: PathRecord,
    pub dest: PathRecord,
    pub annotation: Vec<(String, String)>,
}

///
/// Maps coordinates from `src` to `dest`.
///
/// `scale = len(dest) / len(src)` and `offset = dest.start - scale * src.start`,
/// so that `dest.start = scale * src.start + offset`. The optional annotation
/// carries caller data about the mapping, e.g. alignment details.
///
#[derive(Debug, Clone)]
pub struct IntervalTransform<A = ()> {
    src: SeqPath,
    dest: SeqPath,
    scale: f64,
    offset: f64,
    annotation: Option<A>,
}

impl IntervalTransform {
    /// Transform mapping `src` onto `dest`, without annotation.
    pub fn new(src: &SeqPath, dest: &SeqPath) -> Result<Self> {
        Self::build(src, dest, None)
    }
}

impl<A> IntervalTransform<A> {
    fn build(src: &SeqPath, dest: &SeqPath, annotation: Option<A>) -> Result<Self> {
        let (src_len, dest_len) = (src.len()?, dest.len()?);
        // both lengths end up as divisors: scale in apply, 1/scale in apply_inverse
        if src_len == 0 || dest_len == 0 {
            let path = if src_len == 0 { src } else { dest };
            return Err(SeqPathError::ZeroLengthTransform(path.to_string()));
        }
        let scale = dest_len as f64 / src_len as f64;
        let offset = dest.start()? as f64 - scale * src.start()? as f64;
        Ok(IntervalTransform {
            src: src.clone(),
            dest: dest.clone(),
            scale,
            offset,
            annotation,
        })
    }

    pub fn with_annotation(src: &SeqPath, dest: &SeqPath, annotation: A) -> Result<Self> {
        Self::build(src, dest, Some(annotation))
    }

    ///
    /// Transform whose annotation is looked up from an auxiliary object.
    ///
    /// # Arguments
    /// - src: source interval
    /// - dest: destination interval
    /// - edge_info: object holding per-edge data
    /// - lookup: accessor returning the annotation, `None` if absent
    ///
    pub fn from_edge_info<E, F>(src: &SeqPath, dest: &SeqPath, edge_info: &E, lookup: F) -> Result<Self>
    where
        F: FnOnce(&E) -> Option<A>,
    {
        Self::build(src, dest, lookup(edge_info))
    }

    pub fn src(&self) -> &SeqPath {
        &self.src
    }

    pub fn dest(&self) -> &SeqPath {
        &self.dest
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The source interval, i.e. the domain of this transform.
    pub fn domain(&self) -> &SeqPath {
        &self.src
    }

    /// The `(src, dest)` pair.
    pub fn mapping(&self) -> (&SeqPath, &SeqPath) {
        (&self.src, &self.dest)
    }

    pub fn annotation(&self) -> Option<&A> {
        self.annotation.as_ref()
    }

    pub fn try_annotation(&self) -> Result<&A> {
        self.annotation.as_ref().ok_or(SeqPathError::MissingAnnotation)
    }

    /// Map a source coordinate into the destination frame, truncating.
    pub fn apply_point(&self, i: i64) -> i64 {
        (self.scale * i as f64 + self.offset) as i64
    }

    /// Map a destination coordinate back into the source frame, truncating.
    pub fn apply_inverse(&self, i: i64) -> i64 {
        (i as f64 / self.scale - self.offset / self.scale) as i64
    }

    ///
    /// Map an interval on the source sequence onto the destination sequence.
    ///
    /// The result is not restricted to the domain of this transform and may
    /// extend past either end of `dest`; use [`apply_clipped`] for that.
    ///
    /// [`apply_clipped`]: IntervalTransform::apply_clipped
    ///
    pub fn apply(&self, path: &SeqPath) -> Result<SeqPath> {
        if !path.same_path(&self.src) {
            return Err(SeqPathError::SequenceMismatch(format!(
                "{} is not on the source sequence {}",
                path, self.src
            )));
        }
        let (start, stop) = path.bounds()?;
        SeqPath::with_bounds(
            Arc::clone(self.dest.sequence()),
            self.dest.orientation(),
            Some(self.apply_point(start)),
            Some(self.apply_point(stop)),
            1,
        )
    }

    ///
    /// Intersect `path` with the domain, then map it.
    ///
    /// # Returns
    /// - `None` if `path` does not overlap the source interval
    /// - otherwise an interval within `dest`
    ///
    pub fn apply_clipped(&self, path: &SeqPath) -> Result<Option<SeqPath>> {
        if !path.same_path(&self.src) {
            return Err(SeqPathError::SequenceMismatch(format!(
                "{} is not on the source sequence {}",
                path, self.src
            )));
        }
        let Some(clipped) = path.intersect(&self.src)? else {
            return Ok(None);
        };
        let (start, stop) = clipped.bounds()?;
        let (dest_start, dest_stop) = self.dest.bounds()?;
        let start = self.apply_point(start).clamp(dest_start, dest_stop);
        let stop = self.apply_point(stop).clamp(dest_start, dest_stop);
        SeqPath::with_bounds(
            Arc::clone(self.dest.sequence()),
            self.dest.orientation(),
            Some(start),
            Some(stop),
            1,
        )
        .map(Some)
    }

    /// Map an interval on the destination sequence back onto the source sequence.
    pub fn reverse_map(&self, path: &SeqPath) -> Result<SeqPath> {
        if !path.same_path(&self.dest) {
            return Err(SeqPathError::SequenceMismatch(format!(
                "{} is not on the destination sequence {}",
                path, self.dest
            )));
        }
        let (start, stop) = path.bounds()?;
        SeqPath::with_bounds(
            Arc::clone(self.src.sequence()),
            self.src.orientation(),
            Some(self.apply_inverse(start)),
            Some(self.apply_inverse(stop)),
            1,
        )
    }

    ///
    /// Number of positions at which `src` and `dest` carry the same residue,
    /// ignoring case.
    ///
    /// Both intervals are expected to materialize to strings of equal length;
    /// if they do not, only the common prefix length is compared.
    ///
    pub fn identity_count(&self) -> Result<usize> {
        let src = self.src.materialize()?.to_ascii_uppercase();
        let dest = self.dest.materialize()?.to_ascii_uppercase();
        if src.len() != dest.len() {
            log::warn!(
                "identity count over intervals of different length: {} ({}) vs {} ({})",
                self.src,
                src.len(),
                self.dest,
                dest.len()
            );
        }
        Ok(src
            .bytes()
            .zip(dest.bytes())
            .filter(|(a, b)| a == b)
            .count())
    }
}

impl<A: AnnotationRecord> IntervalTransform<A> {
    pub fn to_record(&self) -> Result<TransformRecord> {
        Ok(TransformRecord {
            src: self.src.to_record()?,
            dest: self.dest.to_record()?,
            annotation: self
                .annotation
                .as_ref()
                .map(AnnotationRecord::record)
                .unwrap_or_default(),
        })
    }
}
