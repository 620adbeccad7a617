use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::ArgMatches;

use seqpath_core::SeqPathError;
use seqpath_io::{DEFAULT_LINE_WIDTH, FastaWriter, load_fasta};

pub fn run_revcomp(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("A path to a FASTA file is required.")?;
    let width = matches
        .get_one::<usize>("width")
        .copied()
        .unwrap_or(DEFAULT_LINE_WIDTH);

    let sequences = load_fasta(input).with_context(|| format!("Failed to read {}", input))?;

    let stdout = io::stdout();
    let mut writer = FastaWriter::with_width(BufWriter::new(stdout.lock()), width)?;
    for seq in sequences.iter() {
        match seq.reverse() {
            Ok(rev) => {
                writer.write_record(Some(seq.id()), &rev.materialize()?)?;
            }
            Err(SeqPathError::UnsupportedReversal(id)) => {
                log::warn!("skipping {}: protein sequences have no reverse strand", id);
            }
            Err(e) => return Err(e.into()),
        }
    }
    writer.flush()?;

    Ok(())
}
