use crate::ReadRecord;
use anyhow::{bail, Context, Result};
use hashbrown::HashMap;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// An in-memory FASTA file.
///
/// This struct builds a map of FASTA record identifiers to their
/// corresponding `ReadRecord` structs, keeping records in order of first
/// appearance. Sequences wrapped over several lines are reassembled into a
/// single string.
///
/// A repeated header does not replace the earlier record; sequence lines
/// under it extend the record that already carries that identifier.
#[derive(Debug)]
pub struct FastaReads {
    records: Vec<ReadRecord>,
    by_id: HashMap<String, usize>,
}
impl FastaReads {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Parse FASTA text from any buffered reader.
    ///
    /// A line whose first non-space character is `>` starts a new record;
    /// the identifier is the rest of that line with surrounding whitespace
    /// trimmed. Every other non-blank line is sequence data for the current
    /// record. Residues are not validated.
    ///
    /// # Errors
    ///
    /// - Error if a sequence line appears before the first header.
    /// - Error if the underlying reader fails.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut reads = Self::new();
        let mut current: Option<usize> = None;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim_start();
            if let Some(header) = trimmed.strip_prefix('>') {
                current = Some(reads.open_record(header.trim()));
            } else if !trimmed.is_empty() {
                let slot = match current {
                    Some(slot) => slot,
                    None => bail!(
                        "line {}: sequence data before the first FASTA header",
                        index + 1
                    ),
                };
                reads.records[slot].append_residues(&line);
            }
        }
        Ok(reads)
    }

    pub fn from_filepath<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("could not open FASTA file {}", path.display()))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Return the slot for `id`, creating an empty record on first sight.
    fn open_record(&mut self, id: &str) -> usize {
        match self.by_id.get(id) {
            Some(&slot) => slot,
            None => {
                let slot = self.records.len();
                self.by_id.insert(id.to_string(), slot);
                self.records.push(ReadRecord::new(id));
                slot
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&ReadRecord> {
        self.by_id.get(id).map(|&slot| &self.records[slot])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = &ReadRecord> {
        self.records.iter()
    }

    /// Total number of residues across all records.
    pub fn total_length(&self) -> u64 {
        self.records.iter().map(|r| r.len() as u64).sum()
    }
}
