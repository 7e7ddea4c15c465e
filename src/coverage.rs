use crate::{FastaReads, ReadRecord};

/// A downsampling target.
///
/// The product of genome size and target coverage gives the minimum number
/// of residues the selected subset must reach.
#[derive(Debug, Clone, Copy)]
pub struct CoverageTarget {
    genome_size: u64,
    target_coverage: u64,
}
impl CoverageTarget {
    pub fn new(genome_size: u64, target_coverage: u64) -> Self {
        Self {
            genome_size,
            target_coverage,
        }
    }

    /// Minimum total length the selection must reach.
    pub fn threshold(&self) -> u64 {
        self.genome_size.saturating_mul(self.target_coverage)
    }

    /// Pick records longest-first until their cumulative length reaches the
    /// threshold.
    ///
    /// The record that crosses the threshold is included, so the selection
    /// reaches at least the target coverage. Ties in length keep the input
    /// order (the sort is stable). If the whole file is shorter than the
    /// threshold, every record is returned.
    pub fn select<'a>(&self, reads: &'a FastaReads) -> Vec<&'a ReadRecord> {
        let mut ranked: Vec<&ReadRecord> = reads.iter().collect();
        ranked.sort_by(|a, b| b.len().cmp(&a.len()));

        let threshold = self.threshold();
        let mut total: u64 = 0;
        let mut selected = Vec::new();
        for record in ranked {
            selected.push(record);
            total += record.len() as u64;
            if total >= threshold {
                break;
            }
        }
        selected
    }
}
