use crate::ReadRecord;
use anyhow::Result;
use std::io::Write;

/// Writes FASTA records with unwrapped sequences.
///
/// Each record becomes two lines: `>` plus the identifier, then the entire
/// sequence regardless of how it was wrapped in the source file.
#[derive(Debug)]
pub struct FastaWriter<W: Write> {
    writer: W,
}
impl<W: Write> FastaWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_record(&mut self, record: &ReadRecord) -> Result<()> {
        writeln!(self.writer, ">{}", record.id())?;
        writeln!(self.writer, "{}", record.seq())?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
