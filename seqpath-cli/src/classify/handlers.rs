use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;

use seqpath_core::guess_seq_type;
use seqpath_io::{get_dynamic_reader_w_stdin, read_fasta};

pub fn run_classify(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("A path to a FASTA file is required.")?;

    let reader = get_dynamic_reader_w_stdin(input).with_context(|| format!("Failed to open {}", input))?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    for record in read_fasta(reader) {
        let record = record.with_context(|| format!("Failed to read {}", input))?;
        let seq_type = guess_seq_type(record.sequence.as_bytes());
        writeln!(writer, "{}\t{}\t{}", record.id, record.sequence.len(), seq_type)?;
    }
    writer.flush()?;

    Ok(())
}
