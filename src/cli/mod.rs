use std::io;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "funcsampler",
    version,
    about = "Walk through function, closure and argument-passing demonstrations"
)]
struct Cli {
    /// File to print in the defer/cat section
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Log more detail to stderr (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let stdout = io::stdout();
    funcsampler::run(stdout.lock(), cli.file.as_deref())
}

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = match std::env::var_os(EnvFilter::DEFAULT_ENV) {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::try_new(format!("funcsampler={level}"))
            .map_err(|e| anyhow!("invalid log directive: {e}"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
