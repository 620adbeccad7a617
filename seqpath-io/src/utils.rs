use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::consts::GZ_FILE_EXTENSION;

///
/// Get a reader for either a gzip'd or plain file, decided by extension.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> io::Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new(GZ_FILE_EXTENSION));
    let file = File::open(path)?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    Ok(BufReader::new(file))
}

///
/// Like [`get_dynamic_reader`], but `-` reads from stdin.
///
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> io::Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(io::stdin()) as Box<dyn Read>))
    } else {
        get_dynamic_reader(Path::new(file_path_str))
    }
}
