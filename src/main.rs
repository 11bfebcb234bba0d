use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use ch4_tiles::config::{Config, DEFAULT_VARIABLES};
use ch4_tiles::pipeline;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory of yearly NetCDF files
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output directory for GeoTIFF tiles and manifest.json
    #[arg(short, long, value_name = "DIR")]
    output: PathBuf,

    /// Variables to extract (default: the EmisCH4 categories)
    #[arg(short, long, value_delimiter = ',')]
    variables: Vec<String>,

    /// Keep negative values instead of clamping them to zero
    #[arg(long)]
    keep_negatives: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let start_time = std::time::Instant::now();

    let variables = if args.variables.is_empty() {
        DEFAULT_VARIABLES.iter().map(|v| v.to_string()).collect()
    } else {
        args.variables
    };

    let config = Config {
        input_dir: args.input,
        output_dir: args.output,
        variables,
        clamp_negative_to_zero: !args.keep_negatives,
    };

    let summary = pipeline::run(&config)?;

    info!(
        "Wrote {} tiles from {} files ({} variables skipped)",
        summary.tiles_written, summary.files, summary.skipped
    );
    info!("Total processing time: {:?}", start_time.elapsed());

    Ok(())
}
