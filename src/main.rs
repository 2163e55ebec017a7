use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;

use gpumon::utils::format_usage;
use gpumon::{logging, GpuMonitor};

/// Print the first GPU's descriptor and utilization samples.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Milliseconds between samples
    #[arg(short, long, default_value_t = 1000)]
    interval: u64,

    /// Number of usage samples to take
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    samples: u32,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let mut monitor = GpuMonitor::new();
    let result = run(&monitor, &cli);
    monitor.cleanup();

    result
}

fn run(monitor: &GpuMonitor, cli: &Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let available = monitor.is_available();

    writeln!(stdout, "{}", monitor.gpu_info()).context("Failed to write to stdout")?;

    for i in 0..cli.samples {
        if i > 0 {
            thread::sleep(Duration::from_millis(cli.interval));
        }
        let usage = monitor.gpu_usage();
        writeln!(
            stdout,
            "{}  {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            format_usage(usage, available)
        )
        .context("Failed to write to stdout")?;
    }

    Ok(())
}
