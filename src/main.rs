use factor_scan::{LongestScan, PrimeBuffer, ScanConfig};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> io::Result<()> {
    // stdout carries the records only
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = ScanConfig::default();
    info!(upper_bound = config.upper_bound, "scanning");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut scan = LongestScan::new(config);
    for record in scan.by_ref() {
        writeln!(out, "{} = {}", record.description, record.value)?;
        out.flush()?;
    }

    info!(primes = scan.cache().len(), "scan finished");
    Ok(())
}
