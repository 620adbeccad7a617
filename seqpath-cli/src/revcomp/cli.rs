use clap::{Command, arg, value_parser};

pub const REVCOMP_CMD: &str = "revcomp";

pub fn create_revcomp_cli() -> Command {
    Command::new(REVCOMP_CMD)
        .about("Reverse-complement every nucleotide record of a FASTA file.")
        .arg_required_else_help(true)
        .arg(arg!(-i --input <input> "FASTA file to read (optionally gzip'd)").required(true))
        .arg(arg!(-w --width <width> "Line width of the FASTA output").value_parser(value_parser!(usize)))
}
