use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use seqpath_core::{SeqPathError, Sequence, SequenceBackend};

use crate::error::{FastaError, Result};
use crate::fasta::{read_fasta, read_fasta_lengths};
use crate::utils::get_dynamic_reader;

///
/// A sequence stored as one record of a FASTA file on disk.
///
/// Nothing is read until the length or residues are first asked for; the
/// record is then loaded once and kept in memory. Until that happens the
/// backend reports no known length, so paths over it keep deferred bounds.
///
#[derive(Debug)]
pub struct FastaFileBackend {
    path: PathBuf,
    id: String,
    residues: OnceLock<String>,
}

impl FastaFileBackend {
    pub fn new(path: impl AsRef<Path>, id: impl Into<String>) -> Self {
        FastaFileBackend {
            path: path.as_ref().to_path_buf(),
            id: id.into(),
            residues: OnceLock::new(),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.residues.get().is_some()
    }

    fn load(&self) -> Result<String> {
        log::debug!("loading record {} from {}", self.id, self.path.display());
        let reader = get_dynamic_reader(&self.path)?;
        for record in read_fasta(reader) {
            let record = record?;
            if record.id == self.id {
                return Ok(record.sequence);
            }
        }
        Err(FastaError::RecordNotFound(self.id.clone()))
    }

    fn residues(&self) -> seqpath_core::Result<&str> {
        if let Some(residues) = self.residues.get() {
            return Ok(residues.as_str());
        }
        let residues = self
            .load()
            .map_err(|e| SeqPathError::Backend(e.to_string()))?;
        Ok(self.residues.get_or_init(|| residues).as_str())
    }
}

impl SequenceBackend for FastaFileBackend {
    fn length(&self) -> seqpath_core::Result<usize> {
        Ok(self.residues()?.len())
    }

    fn known_length(&self) -> Option<usize> {
        self.residues.get().map(String::len)
    }

    fn substring(&self, start: usize, stop: usize) -> seqpath_core::Result<String> {
        let residues = self.residues()?;
        residues.get(start..stop).map(str::to_string).ok_or_else(|| {
            SeqPathError::Backend(format!(
                "substring [{}:{}) out of range for {} of length {}",
                start,
                stop,
                self.id,
                residues.len()
            ))
        })
    }
}

///
/// Read every record of a FASTA file into memory.
///
/// # Arguments
/// - path: path to a FASTA file, optionally gzip'd
///
pub fn load_fasta<T: AsRef<Path>>(path: T) -> Result<Vec<Arc<Sequence>>> {
    let reader = get_dynamic_reader(path.as_ref())?;
    read_fasta(reader)
        .map(|record| record.map(|r| Arc::new(Sequence::from_residues(r.id, r.sequence))))
        .collect()
}

///
/// Index the records of a FASTA file without loading their residues.
///
/// Each returned sequence is backed by a [`FastaFileBackend`] and reads its
/// record from disk on first use.
///
/// # Arguments
/// - path: path to a FASTA file, optionally gzip'd
///
pub fn open_fasta<T: AsRef<Path>>(path: T) -> Result<Vec<Arc<Sequence>>> {
    let path = path.as_ref();
    let reader = get_dynamic_reader(path)?;
    read_fasta_lengths(reader)
        .map(|entry| {
            entry.map(|(id, _)| Arc::new(Sequence::new(id.clone(), FastaFileBackend::new(path, id))))
        })
        .collect()
}
