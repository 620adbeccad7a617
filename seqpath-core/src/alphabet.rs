use std::fmt::{self, Display};
use std::str::FromStr;

/// Fraction of nucleotide letters above which a sequence is treated as a nucleic acid.
pub const NUCLEOTIDE_FRACTION: f64 = 0.85;

/// Broad classification of a residue string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeqType {
    Dna,
    Rna,
    Protein,
}

impl SeqType {
    /// Nucleic acids have a complementary strand, proteins do not.
    pub fn has_reverse_strand(&self) -> bool {
        !matches!(self, SeqType::Protein)
    }
}

impl Display for SeqType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeqType::Dna => "DNA",
            SeqType::Rna => "RNA",
            SeqType::Protein => "protein",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for SeqType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dna" => Ok(SeqType::Dna),
            "rna" => Ok(SeqType::Rna),
            "protein" => Ok(SeqType::Protein),
            _ => Err(format!("Invalid sequence type: {}", s)),
        }
    }
}

/// Guesses the sequence type of a residue stream.
///
/// Counts are accumulated chunk by chunk so that a long sequence can be
/// classified while it is being read, without holding it in memory.
#[derive(Debug, Default, Clone)]
pub struct SeqTypeGuesser {
    total: usize,
    nucleotides: usize,
    t_count: usize,
    u_count: usize,
}

impl SeqTypeGuesser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, residues: &[u8]) {
        for &byte in residues {
            let byte_upper = byte.to_ascii_uppercase();
            if matches!(byte_upper, b'A' | b'T' | b'U' | b'G' | b'C' | b'N') {
                self.nucleotides += 1;
            }
            match byte_upper {
                b'T' => self.t_count += 1,
                b'U' => self.u_count += 1,
                _ => {}
            }
        }
        self.total += residues.len();
    }

    pub fn guess(&self) -> SeqType {
        if self.total == 0 {
            return SeqType::Protein;
        }
        let ratio = self.nucleotides as f64 / self.total as f64;
        if ratio > NUCLEOTIDE_FRACTION {
            if self.t_count > self.u_count {
                SeqType::Dna
            } else {
                SeqType::Rna
            }
        } else {
            SeqType::Protein
        }
    }
}

/// Classifies `residues` as DNA, RNA or protein.
///
/// More than 85% of the letters must come from `ATUGCN` (case-insensitive)
/// for a nucleic acid; it is DNA when `T` outnumbers `U` and RNA otherwise.
pub fn guess_seq_type(residues: &[u8]) -> SeqType {
    let mut guesser = SeqTypeGuesser::new();
    guesser.update(residues);
    guesser.guess()
}
