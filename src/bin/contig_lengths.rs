use anyhow::{Context, Result};
use clap::Parser;
use covsample::{write_length_table, FastaReads};
use log::info;
use std::{fs::File, io::BufWriter, path::PathBuf};

#[derive(Parser)]
#[clap(author, version, about = "List every record of a FASTA file with the length of its sequence", long_about = None)]
struct Args {
    /// Input FASTA file
    #[clap(value_name = "FASTA")]
    input: PathBuf,
    /// Output file, one identifier;length line per record
    #[clap(value_name = "CSV")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let reads = FastaReads::from_filepath(&args.input)?;
    info!("loaded {} records from {}", reads.len(), args.input.display());

    let file = File::create(&args.output)
        .with_context(|| format!("could not create output file {}", args.output.display()))?;
    write_length_table(BufWriter::new(file), &reads)
}
