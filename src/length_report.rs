use crate::FastaReads;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// One row of the length table.
#[derive(Serialize, Debug)]
struct LengthRow<'a> {
    id: &'a str,
    length: usize,
}

/// Write an `identifier;length` row for every record, in the order records
/// first appeared in the input. No header row.
pub fn write_length_table<W: Write>(writer: W, reads: &FastaReads) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(writer);
    for record in reads.iter() {
        csv_writer.serialize(LengthRow {
            id: record.id(),
            length: record.len(),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
