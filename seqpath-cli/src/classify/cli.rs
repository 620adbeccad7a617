use clap::{Command, arg};

pub const CLASSIFY_CMD: &str = "classify";

pub fn create_classify_cli() -> Command {
    Command::new(CLASSIFY_CMD)
        .about("Report the length and guessed type (DNA, RNA or protein) of each record of a FASTA file.")
        .arg_required_else_help(true)
        .arg(arg!(-i --input <input> "FASTA file to read (optionally gzip'd), - for stdin").required(true))
}
