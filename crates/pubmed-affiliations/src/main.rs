//! PubMed Affiliation Report - Entry Point

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pubmed_affiliations::{
    PubMedClient, build_report,
    config::Config,
    formatters::{self, OutputFormat},
};

#[derive(Parser, Debug)]
#[command(name = "pubmed-affiliations")]
#[command(about = "Find PubMed papers with authors from commercial organizations")]
#[command(version)]
struct Cli {
    /// PubMed search query
    query: String,

    /// Write the report as CSV to this path instead of printing it
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Accepted for compatibility; has no effect (use --log-level)
    #[arg(short, long)]
    #[allow(dead_code)]
    debug: bool,

    /// Console output format (ignored with --file)
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), query = %cli.query, "Starting search");

    let config = Config::from_env()?;
    let client = PubMedClient::new(config)?;

    let records = build_report(&client, &cli.query).await?;

    match &cli.file {
        Some(path) => formatters::write_csv(path, &records)?,
        None => {
            let stdout = std::io::stdout();
            formatters::print_records(&mut stdout.lock(), &records, cli.format)?;
        }
    }

    Ok(())
}
