use std::ops::Neg;

/// Which end of an interval a bound belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    Start,
    Stop,
}

impl End {
    /// Clamp `value` so that it does not run past `limit` on this end of the frame.
    #[inline]
    pub fn clamp(&self, value: i64, limit: i64) -> i64 {
        match self {
            End::Start => value.max(limit),
            End::Stop => value.min(limit),
        }
    }
}

///
/// One end of a sequence interval.
///
/// A bound is `Resolved` once it has been checked against the limits of its
/// top-level sequence. When those limits are not yet known (the backend has
/// not reported a length) the raw coordinate is kept as `Deferred` and is
/// clamped on first access. `Deferred(None)` is an open end that takes the
/// top-level limit itself.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Resolved(i64),
    Deferred(Option<i64>),
}

impl Bound {
    ///
    /// Build a bound for `raw`, clamping against `limit` when the limit is known.
    ///
    /// # Arguments
    /// - raw: coordinate in the top-level frame, `None` for an open end
    /// - limit: the frame limit on this end, if known
    /// - end: which end of the interval this bound is
    ///
    pub fn checked(raw: Option<i64>, limit: Option<i64>, end: End) -> Bound {
        match (raw, limit) {
            (Some(value), Some(limit)) => Bound::Resolved(end.clamp(value, limit)),
            (None, Some(limit)) => Bound::Resolved(limit),
            (raw, None) => Bound::Deferred(raw),
        }
    }

    /// Resolve against a now-known frame `limit`.
    pub fn resolve(&self, limit: i64, end: End) -> i64 {
        match *self {
            Bound::Resolved(value) => value,
            Bound::Deferred(Some(raw)) => end.clamp(raw, limit),
            Bound::Deferred(None) => limit,
        }
    }

    pub fn resolved(&self) -> Option<i64> {
        match *self {
            Bound::Resolved(value) => Some(value),
            Bound::Deferred(_) => None,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Bound::Deferred(_))
    }
}

/// Negation maps a bound into the opposite orientation's frame.
impl Neg for Bound {
    type Output = Bound;

    fn neg(self) -> Self::Output {
        match self {
            Bound::Resolved(value) => Bound::Resolved(value.saturating_neg()),
            Bound::Deferred(raw) => Bound::Deferred(raw.map(i64::saturating_neg)),
        }
    }
}
