use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;

use percolation::site_list::{parse_site, read_sites};
use percolation::Percolation;

/// Percolation - open sites on an N-by-N grid and report whether it percolates
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid size N
    #[clap(value_name = "N", allow_negative_numbers = true)]
    size: i64,

    /// Sites to open, as "row,col" (1-based, (1,1) is top-left)
    #[clap(value_name = "SITE", value_parser = parse_site)]
    sites: Vec<(i64, i64)>,

    /// File with sites to open, one "row,col" per line (opened after SITE arguments)
    #[clap(short = 'i', long = "input")]
    input: Option<String>,

    /// Quiet mode (warnings only on stderr)
    #[clap(long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut sites = args.sites;
    if let Some(ref path) = args.input {
        let file = File::open(path).with_context(|| format!("Failed to open {path}"))?;
        let from_file =
            read_sites(BufReader::new(file)).with_context(|| format!("Failed to read {path}"))?;
        sites.extend(from_file);
    }

    let mut grid = Percolation::new(args.size)?;
    info!("Opening {} sites on a {}x{} grid", sites.len(), grid.size(), grid.size());

    for (row, col) in sites {
        grid.open(row, col)?;
        debug!("Opened ({row}, {col}), full: {}", grid.is_full(row, col)?);
    }

    println!("percolates: {}", grid.percolates());
    println!("open sites: {}", grid.number_of_open_sites());
    println!("threshold: {:.6}", grid.threshold());

    Ok(())
}
