mod args;
mod output;

use anyhow::{Context, Result};
use mailprobe_lib::verify_emails;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::io::{self, BufRead};

use crate::args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    output::check_format(&cli.format)?;
    let labels = cli.labels()?;

    let mut emails = cli.emails.clone();
    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let line = line.context("read stdin")?;
            if !line.trim().is_empty() {
                emails.push(line);
            }
        }
    }

    // seule erreur fatale: aucun résolveur DNS constructible
    let rows = verify_emails(&emails, &cli.verify_options()).context("DNS resolver unavailable")?;

    output::write_report(&rows, &labels, &cli)?;
    Ok(())
}
