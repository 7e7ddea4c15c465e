use anyhow::{Context, Result};
use clap::Parser;
use covsample::{CoverageTarget, FastaReads, FastaWriter};
use log::info;
use std::{fs::File, io::BufWriter, path::PathBuf};

#[derive(Parser)]
#[clap(author, version, about = "Downsample a long-read FASTA file to a target genome coverage, keeping the longest reads", long_about = None)]
struct Args {
    /// Input FASTA file with reads
    #[clap(value_name = "FASTA")]
    input: PathBuf,
    /// Genome size in bases
    #[clap(value_name = "GENOME_SIZE")]
    genome_size: u64,
    /// Target coverage of the downsampled set
    #[clap(value_name = "COVERAGE")]
    target_coverage: u64,
    /// Output FASTA file for the selected reads
    #[clap(value_name = "FASTA")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let reads = FastaReads::from_filepath(&args.input)?;
    info!(
        "loaded {} reads ({} bases) from {}",
        reads.len(),
        reads.total_length(),
        args.input.display()
    );

    let target = CoverageTarget::new(args.genome_size, args.target_coverage);
    let selected = target.select(&reads);
    let emitted: u64 = selected.iter().map(|r| r.len() as u64).sum();
    info!(
        "selected {} of {} reads, {} bases against a threshold of {}",
        selected.len(),
        reads.len(),
        emitted,
        target.threshold()
    );

    let file = File::create(&args.output)
        .with_context(|| format!("could not create output file {}", args.output.display()))?;
    let mut writer = FastaWriter::new(BufWriter::new(file));
    for record in &selected {
        writer.write_record(record)?;
    }
    writer.flush()
}
