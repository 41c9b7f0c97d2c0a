//! # bubble-sweep
//!
//! Times `Sequence::bubble_sort` on sorted, mostly sorted and shuffled inputs
//! for every size from 1 to `--max-len`, writing one CSV row per size.
//!
//! Built with the `cli` feature:
//!
//! ```bash
//! cargo run --release --features cli --bin bubble-sweep -- --max-len 500
//! bubble-sweep --max-len 500 --output bubble_sort.csv --seed 42
//! RUST_LOG=chainseq=debug bubble-sweep --max-len 50
//! ```

use anyhow::{Context, Result};
use chainseq::sweep::{CsvTable, Sweep};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Time bubble sort over a linked-chain sequence across input sizes.
#[derive(Parser, Debug)]
#[command(name = "bubble-sweep")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Largest input size; every size from 1 up to this one is measured
    #[arg(long, env = "CHAINSEQ_MAX_LEN", default_value_t = 500)]
    max_len: usize,

    /// Destination of the CSV table
    #[arg(long, short, env = "CHAINSEQ_OUTPUT", default_value = "bubble_sort.csv")]
    output: PathBuf,

    /// Seed for input generation (random if omitted)
    #[arg(long, env = "CHAINSEQ_SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("chainseq=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let file = File::create(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    let mut table = CsvTable::new(BufWriter::new(file)).context("Failed to write CSV header")?;

    for row in Sweep::new(cli.max_len, rng) {
        table
            .write_row(&row)
            .with_context(|| format!("Failed to write row for length {}", row.len))?;
    }

    let rows = table.rows();
    table.finish().context("Failed to flush CSV output")?;
    tracing::info!(rows, output = %cli.output.display(), "wrote sweep table");
    Ok(())
}
