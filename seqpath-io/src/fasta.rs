use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

use seqpath_core::SeqPath;

use crate::consts::{DEFAULT_LINE_WIDTH, FASTA_HEADER_PREFIX};
use crate::error::{FastaError, Result};

static SEQ_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A fresh id for a record written or read without one: "0", "1", ...
pub fn new_seq_id() -> String {
    SEQ_ID_COUNTER.fetch_add(1, Ordering::Relaxed).to_string()
}

/// One FASTA record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// First whitespace-delimited token of the header.
    pub id: String,
    /// Remainder of the header line after the id, line ending included.
    pub title: String,
    /// Residues with all whitespace removed.
    pub sequence: String,
}

///
/// Split a header line into `(id, title)`.
///
/// The title is everything after the id, minus the single separator
/// character; for `">seq1 desc\n"` that is `"desc\n"`, and for `">seq2\n"`
/// it is `"\n"`. Spaces or tabs between `>` and the id are skipped, so
/// `"> seq1 desc\n"` parses the same as `">seq1 desc\n"` rather than
/// leaving a leading space on the title.
///
fn parse_header(line: &str) -> (String, String) {
    let rest = line
        .strip_prefix(FASTA_HEADER_PREFIX)
        .unwrap_or(line)
        .trim_start_matches([' ', '\t']);
    let id_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let (id, remainder) = rest.split_at(id_len);
    let title = remainder.strip_prefix([' ', '\t']).unwrap_or(remainder);
    let id = if id.is_empty() {
        new_seq_id()
    } else {
        id.to_string()
    };
    (id, title.to_string())
}

///
/// Lazy reader over the records of a FASTA stream.
///
/// Records with no residues are skipped. If the stream ends without a
/// single readable record, the reader yields [`FastaError::NoRecords`] once.
///
pub struct FastaReader<R> {
    reader: R,
    line: String,
    header: Option<(String, String)>,
    sequence: String,
    length: usize,
    keep_residues: bool,
    yielded: bool,
    done: bool,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        FastaReader::with_residues(reader, true)
    }

    fn with_residues(reader: R, keep_residues: bool) -> Self {
        FastaReader {
            reader,
            line: String::new(),
            header: None,
            sequence: String::new(),
            length: 0,
            keep_residues,
            yielded: false,
            done: false,
        }
    }

    fn finish_record(&mut self) -> Option<(FastaRecord, usize)> {
        let sequence = std::mem::take(&mut self.sequence);
        let length = std::mem::take(&mut self.length);
        let (id, title) = self.header.take()?;
        if length == 0 {
            return None;
        }
        self.yielded = true;
        Some((
            FastaRecord {
                id,
                title,
                sequence,
            },
            length,
        ))
    }

    fn next_entry(&mut self) -> Option<Result<(FastaRecord, usize)>> {
        if self.done {
            return None;
        }
        loop {
            self.line.clear();
            let bytes_read = match self.reader.read_line(&mut self.line) {
                Ok(n) => n,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e.into()));
                }
            };

            if bytes_read == 0 {
                self.done = true;
                if let Some(entry) = self.finish_record() {
                    return Some(Ok(entry));
                }
                if !self.yielded {
                    return Some(Err(FastaError::NoRecords));
                }
                return None;
            }

            if self.line.starts_with(FASTA_HEADER_PREFIX) {
                let finished = self.finish_record();
                self.header = Some(parse_header(&self.line));
                if let Some(entry) = finished {
                    return Some(Ok(entry));
                }
            } else if self.header.is_some() {
                for word in self.line.split_whitespace() {
                    self.length += word.len();
                    if self.keep_residues {
                        self.sequence.push_str(word);
                    }
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<FastaRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().map(|entry| entry.map(|(record, _)| record))
    }
}

/// `(id, length)` of each record, without holding on to residues.
pub struct FastaLengths<R>(FastaReader<R>);

impl<R: BufRead> Iterator for FastaLengths<R> {
    type Item = Result<(String, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0
            .next_entry()
            .map(|entry| entry.map(|(record, length)| (record.id, length)))
    }
}

///
/// Iterate over the records of a FASTA stream.
///
/// # Arguments
/// - reader: buffered FASTA text
///
/// # Returns
/// - an iterator of records; the first item is [`FastaError::NoRecords`]
///   when the stream holds nothing readable
///
pub fn read_fasta<R: BufRead>(reader: R) -> FastaReader<R> {
    FastaReader::new(reader)
}

/// The first record of a FASTA stream that has residues.
pub fn read_fasta_one<R: BufRead>(reader: R) -> Result<FastaRecord> {
    read_fasta(reader).next().ok_or(FastaError::NoRecords)?
}

/// Iterate over `(id, length)` of each record.
pub fn read_fasta_lengths<R: BufRead>(reader: R) -> FastaLengths<R> {
    FastaLengths(FastaReader::with_residues(reader, false))
}

///
/// Write one record: a `>id` header, then the residues wrapped at `width`.
///
/// An empty residue string still writes one (empty) sequence line.
///
pub fn write_fasta<W: Write>(writer: &mut W, id: &str, residues: &str, width: usize) -> Result<()> {
    if width == 0 {
        return Err(FastaError::InvalidWidth);
    }
    writeln!(writer, "{}{}", FASTA_HEADER_PREFIX, id)?;
    if residues.is_empty() {
        writeln!(writer)?;
        return Ok(());
    }
    for chunk in residues.as_bytes().chunks(width) {
        writer.write_all(chunk)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes FASTA records at a fixed line width.
pub struct FastaWriter<W: Write> {
    writer: W,
    width: usize,
}

impl<W: Write> FastaWriter<W> {
    pub fn new(writer: W) -> Self {
        FastaWriter {
            writer,
            width: DEFAULT_LINE_WIDTH,
        }
    }

    pub fn with_width(writer: W, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(FastaError::InvalidWidth);
        }
        Ok(FastaWriter { writer, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    ///
    /// Write one record.
    ///
    /// # Arguments
    /// - id: record id, or `None` to assign one with [`new_seq_id`]
    /// - residues: the residues to write
    ///
    /// # Returns
    /// - the id that was written
    ///
    pub fn write_record(&mut self, id: Option<&str>, residues: &str) -> Result<String> {
        let id = id.map(str::to_string).unwrap_or_else(new_seq_id);
        write_fasta(&mut self.writer, &id, residues, self.width)?;
        Ok(id)
    }

    /// Write the residues of `path` under its sequence id.
    pub fn write_path(&mut self, path: &SeqPath) -> Result<String> {
        let residues = path.materialize()?;
        self.write_record(Some(path.id()), &residues)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
