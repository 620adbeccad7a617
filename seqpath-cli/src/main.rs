mod classify;
mod locus;
mod revcomp;
mod slice;
mod transform;

use anyhow::Result;
use clap::{Command, arg};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "seqpath";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Slice, reverse-complement, classify and map intervals of DNA, RNA and protein sequences.")
        .subcommand_required(true)
        .arg(arg!(-v --verbose "Log debug output (overridden by RUST_LOG)").global(true))
        .subcommand(slice::cli::create_slice_cli())
        .subcommand(revcomp::cli::create_revcomp_cli())
        .subcommand(classify::cli::create_classify_cli())
        .subcommand(transform::cli::create_transform_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    let log_level = if matches.get_flag("verbose") { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match matches.subcommand() {
        //
        // SLICE
        //
        Some((slice::cli::SLICE_CMD, matches)) => {
            slice::handlers::run_slice(matches)?;
        }

        //
        // REVERSE COMPLEMENT
        //
        Some((revcomp::cli::REVCOMP_CMD, matches)) => {
            revcomp::handlers::run_revcomp(matches)?;
        }

        //
        // CLASSIFY
        //
        Some((classify::cli::CLASSIFY_CMD, matches)) => {
            classify::handlers::run_classify(matches)?;
        }

        //
        // TRANSFORM
        //
        Some((transform::cli::TRANSFORM_CMD, matches)) => {
            transform::handlers::run_transform(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }

    #[test]
    fn test_negative_slice_bounds_parse() {
        let matches = build_parser()
            .try_get_matches_from(["seqpath", "slice", "-i", "in.fa", "--id", "chr1", "--start", "-5"])
            .unwrap();
        let (_, matches) = matches.subcommand().unwrap();
        assert_eq!(matches.get_one::<i64>("start"), Some(&-5));
    }
}
