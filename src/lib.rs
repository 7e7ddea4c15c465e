//! # covsample
//!
//! `covsample` downsamples a long-read FASTA file to a target genome
//! coverage by greedily keeping the longest reads. A companion tool lists
//! every record identifier together with its sequence length.
//!
//! The whole input is loaded in one pass. Sequences wrapped over several
//! lines are reassembled into a single string, keyed by the header text
//! after `>`, in order of first appearance. Residues are taken verbatim;
//! there is no alphabet validation.
//!
//! ## Selection rule
//!
//! Reads are ranked by descending length and emitted until their cumulative
//! length reaches `genome_size * target_coverage`. The read that crosses the
//! threshold is still emitted, so the output provides at least the requested
//! coverage. An input with fewer total residues than the threshold is kept
//! in full.
//!
//! ## Example
//!
//! Here is an example fasta file:
//!
//! ### reads.fa
//!
//! ```text
//! >read1 sampled from chr1
//! ACCTACGATCGACTGATCGTAGCTAGCT
//! CATCGATCGTACGGACGATCGATCGGTT
//! >read2
//! TTTTGATCGATCGGCGGGCGCGCGCGGC
//! AAACCACA
//! >read3
//! CGACGGCGACTCGAGCTACACGTCGGGC
//! ```
//!
//! ### Downsampling
//!
//! `read1` holds 56 residues, `read2` 36 and `read3` 28. Asking for 2x
//! coverage of a 40 bp genome sets the threshold at 80 residues, which the
//! two longest reads satisfy:
//!
//! ```rust
//! use covsample::{CoverageTarget, FastaReads};
//!
//! let reads = FastaReads::from_filepath("example_data/reads.fa")
//!     .expect("could not read FASTA file");
//! assert_eq!(reads.len(), 3);
//!
//! let target = CoverageTarget::new(40, 2);
//! let selected = target.select(&reads);
//!
//! assert_eq!(selected.len(), 2);
//! assert_eq!(selected[0].id(), "read1 sampled from chr1");
//! assert_eq!(selected[1].id(), "read2");
//! ```
//!
//! ### Listing lengths
//!
//! The length table pairs every identifier with its residue count,
//! semicolon-delimited, in input order:
//!
//! ```rust
//! use covsample::{write_length_table, FastaReads};
//!
//! let fasta = b">contig_a\nACGTACGT\nACGT\n>contig_b\nGG\n";
//! let reads = FastaReads::from_reader(&fasta[..])
//!     .expect("could not parse FASTA text");
//!
//! let mut out = Vec::new();
//! write_length_table(&mut out, &reads).expect("could not write table");
//! assert_eq!(String::from_utf8(out).unwrap(), "contig_a;12\ncontig_b;2\n");
//! ```

mod coverage;
mod fasta_reads;
mod fasta_writer;
mod length_report;
mod read_record;

/// The `CoverageTarget` struct selects the longest reads up to a coverage
/// threshold.
pub use coverage::CoverageTarget;

/// The `FastaReads` struct holds a parsed FASTA file keyed by identifier.
pub use fasta_reads::FastaReads;

/// The `FastaWriter` struct writes records with unwrapped sequences.
pub use fasta_writer::FastaWriter;

/// Write an `identifier;length` table for every record.
pub use length_report::write_length_table;

/// The `ReadRecord` struct represents a single FASTA record.
pub use read_record::ReadRecord;
