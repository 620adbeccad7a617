use clap::{Command, arg, value_parser};

pub const SLICE_CMD: &str = "slice";

pub fn create_slice_cli() -> Command {
    Command::new(SLICE_CMD)
        .about("Extract an interval of one sequence from a FASTA file. Negative bounds count from the end, and a start past the stop selects the reverse strand.")
        .arg_required_else_help(true)
        .allow_negative_numbers(true)
        .arg(arg!(-i --input <input> "FASTA file to read (optionally gzip'd)").required(true))
        .arg(arg!(--id <id> "Id of the sequence to slice").required(true))
        .arg(arg!(--start <start> "First position (default: start of the sequence)").value_parser(value_parser!(i64)))
        .arg(arg!(--stop <stop> "End position, exclusive (default: end of the sequence)").value_parser(value_parser!(i64)))
        .arg(arg!(--step <step> "Stride between positions").value_parser(value_parser!(i64)))
        .arg(arg!(-r --reverse "Take the interval from the reverse strand"))
        .arg(arg!(-w --width <width> "Line width of the FASTA output").value_parser(value_parser!(usize)))
}
