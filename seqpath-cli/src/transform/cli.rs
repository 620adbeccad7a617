use clap::{Command, arg};

pub const TRANSFORM_CMD: &str = "transform";

pub fn create_transform_cli() -> Command {
    Command::new(TRANSFORM_CMD)
        .about("Map an interval through the linear transform between two aligned intervals. Intervals are written id:start-stop, with a :- suffix for the reverse strand.")
        .arg_required_else_help(true)
        .arg(arg!(-i --input <input> "FASTA file holding the sequences (optionally gzip'd)").required(true))
        .arg(arg!(--src <src> "Source interval of the alignment").required(true))
        .arg(arg!(--dest <dest> "Destination interval of the alignment").required(true))
        .arg(arg!(-q --query <query> "Interval on the source sequence to map"))
        .arg(arg!(--clip "Clip the mapped interval to the destination interval"))
}
