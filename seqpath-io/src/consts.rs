pub const DEFAULT_LINE_WIDTH: usize = 60;
pub const FASTA_HEADER_PREFIX: char = '>';
pub const GZ_FILE_EXTENSION: &str = "gz";
