use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};

use seqpath_core::{Orientation, SeqPath, Sequence};

///
/// An interval named on the command line: `id:start-stop`, with an optional
/// `:-` suffix for the reverse strand (`chr1:10-20:-`). Coordinates are
/// always forward-strand, zero-based and half-open.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locus {
    pub id: String,
    pub start: i64,
    pub stop: i64,
    pub orientation: Orientation,
}

impl FromStr for Locus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (body, orientation) = match s.rsplit_once(':') {
            Some((body, "-")) => (body, Orientation::Reverse),
            Some((body, "+")) => (body, Orientation::Forward),
            _ => (s, Orientation::Forward),
        };
        let (id, range) = body
            .rsplit_once(':')
            .ok_or_else(|| anyhow!("expected id:start-stop, got '{}'", s))?;
        let (start, stop) = range
            .split_once('-')
            .ok_or_else(|| anyhow!("expected start-stop, got '{}'", range))?;
        if id.is_empty() {
            return Err(anyhow!("missing sequence id in '{}'", s));
        }

        Ok(Locus {
            id: id.to_string(),
            start: start
                .parse()
                .with_context(|| format!("invalid start in '{}'", s))?,
            stop: stop
                .parse()
                .with_context(|| format!("invalid stop in '{}'", s))?,
            orientation,
        })
    }
}

impl Locus {
    /// The interval this locus names on `seq`.
    pub fn to_path(&self, seq: &Arc<Sequence>) -> Result<SeqPath> {
        let path = seq
            .forward()
            .slice(Some(self.start), Some(self.stop), None)
            .with_context(|| format!("invalid interval {}:{}-{}", self.id, self.start, self.stop))?;
        Ok(match self.orientation {
            Orientation::Forward => path,
            Orientation::Reverse => path.reverse()?,
        })
    }
}

/// The sequence named `id`.
pub fn find_sequence<'a>(sequences: &'a [Arc<Sequence>], id: &str) -> Result<&'a Arc<Sequence>> {
    sequences
        .iter()
        .find(|seq| seq.id() == id)
        .ok_or_else(|| anyhow!("no sequence named '{}' in input", id))
}
