use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::ArgMatches;

use seqpath_core::IntervalTransform;
use seqpath_io::load_fasta;

use crate::locus::{Locus, find_sequence};

pub fn run_transform(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .context("A path to a FASTA file is required.")?;
    let src: Locus = matches
        .get_one::<String>("src")
        .context("A source interval is required.")?
        .parse()?;
    let dest: Locus = matches
        .get_one::<String>("dest")
        .context("A destination interval is required.")?
        .parse()?;
    let query = matches
        .get_one::<String>("query")
        .map(|q| q.parse::<Locus>())
        .transpose()?;
    let clip = matches.get_flag("clip");

    let sequences = load_fasta(input).with_context(|| format!("Failed to read {}", input))?;
    let src = src.to_path(find_sequence(&sequences, &src.id)?)?;
    let dest = dest.to_path(find_sequence(&sequences, &dest.id)?)?;
    let xform = IntervalTransform::new(&src, &dest)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    writeln!(writer, "src\t{}", src)?;
    writeln!(writer, "dest\t{}", dest)?;
    writeln!(writer, "scale\t{}", xform.scale())?;
    writeln!(writer, "offset\t{}", xform.offset())?;
    writeln!(writer, "identity\t{}", xform.identity_count()?)?;

    if let Some(query) = query {
        let query = query.to_path(find_sequence(&sequences, &query.id)?)?;
        let mapped = if clip {
            xform.apply_clipped(&query)?
        } else {
            Some(xform.apply(&query)?)
        };
        match mapped {
            Some(mapped) => writeln!(writer, "mapped\t{}\t{}", mapped, mapped.materialize()?)?,
            None => writeln!(writer, "mapped\tnone")?,
        }
    }
    writer.flush()?;

    Ok(())
}
