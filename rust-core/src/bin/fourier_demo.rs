//! Fourier Workbench demo driver.
//!
//! Prints the real parts of generated and transformed signals, one line per
//! signal, to stdout. Logs go to stderr.

use anyhow::Result;
use clap::Parser;
use fourier_workbench::demo::run_demo;
use fourier_workbench::output::write_real_parts;
use fourier_workbench::DemoConfig;
use std::io::{self, BufWriter, Write};

/// Direct DFT demonstration.
#[derive(Parser, Debug)]
#[command(name = "fourier-demo")]
#[command(about = "Transform synthetic signals with a direct DFT")]
#[command(version)]
struct Args {
    /// Samples per generated signal
    #[arg(long, default_value = "100")]
    samples: usize,

    /// Generator period in samples (default: half the sample count)
    #[arg(long)]
    period: Option<usize>,

    /// Spectrum bins kept at each end by the filter round-trip
    #[arg(long, default_value = "10")]
    kept_bins: usize,

    /// Also print the filtered square wave, its spectra and the raw square wave
    #[arg(long)]
    all: bool,
}

fn main() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = DemoConfig::for_sample_count(args.samples);
    if let Some(period) = args.period {
        config.period_length = period;
    }
    config.kept_bins = args.kept_bins;

    let report = run_demo(&config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    write_real_parts(&mut out, &report.cosine)?;
    write_real_parts(&mut out, &report.cosine_spectrum)?;

    if args.all {
        write_real_parts(&mut out, &report.square_filter.reconstructed)?;
        write_real_parts(&mut out, &report.square_filter.filtered_spectrum)?;
        write_real_parts(&mut out, &report.square_wave)?;
        write_real_parts(&mut out, &report.square_filter.spectrum)?;
    }

    out.flush()?;
    tracing::info!("done");

    Ok(())
}
