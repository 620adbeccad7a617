use std::fmt::{self, Display};
use std::ops::Neg;

/// Strand of an interval relative to its top-level sequence.
///
/// Forward intervals use coordinates in `[0, len)`; reverse intervals use
/// negated coordinates in `[-len, 0)`, so `(-x)[-stop:-start]` is the reverse
/// complement of `x[start:stop]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Forward,
    Reverse,
}

impl Orientation {
    pub fn flip(self) -> Self {
        match self {
            Orientation::Forward => Orientation::Reverse,
            Orientation::Reverse => Orientation::Forward,
        }
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Orientation::Forward)
    }

    /// `+1` for forward, `-1` for reverse.
    pub fn sign(&self) -> i8 {
        match self {
            Orientation::Forward => 1,
            Orientation::Reverse => -1,
        }
    }

    /// The `[start, stop)` limits of a top-level sequence of length `len` in this orientation.
    pub fn frame(&self, len: i64) -> (i64, i64) {
        match self {
            Orientation::Forward => (0, len),
            Orientation::Reverse => (-len, 0),
        }
    }
}

impl Neg for Orientation {
    type Output = Orientation;

    fn neg(self) -> Self::Output {
        self.flip()
    }
}

impl From<bool> for Orientation {
    fn from(forward: bool) -> Self {
        if forward {
            Orientation::Forward
        } else {
            Orientation::Reverse
        }
    }
}

impl From<char> for Orientation {
    fn from(c: char) -> Self {
        match c {
            '-' => Orientation::Reverse,
            _ => Orientation::Forward,
        }
    }
}

impl From<Orientation> for char {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Forward => '+',
            Orientation::Reverse => '-',
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}
