use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::ArgMatches;

use seqpath_io::{DEFAULT_LINE_WIDTH, FastaWriter, open_fasta};

use crate::locus::find_sequence;

pub fn run_slice(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("A path to a FASTA file is required.")?;
    let id = matches
        .get_one::<String>("id")
        .context("A sequence id is required.")?;
    let start = matches.get_one::<i64>("start").copied();
    let stop = matches.get_one::<i64>("stop").copied();
    let step = matches.get_one::<i64>("step").copied();
    let width = matches
        .get_one::<usize>("width")
        .copied()
        .unwrap_or(DEFAULT_LINE_WIDTH);

    // residues are only read from disk for the requested record
    let sequences = open_fasta(input).with_context(|| format!("Failed to index {}", input))?;
    let seq = find_sequence(&sequences, id)?;

    let mut top = seq.forward();
    if matches.get_flag("reverse") {
        top = top.reverse()?;
    }
    let path = top.slice(start, stop, step)?;
    log::info!("slicing {} from {}", path, input);

    let stdout = io::stdout();
    let mut writer = FastaWriter::with_width(BufWriter::new(stdout.lock()), width)?;
    writer.write_record(Some(&path.to_string()), &path.materialize()?)?;
    writer.flush()?;

    Ok(())
}
