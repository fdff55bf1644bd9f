use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use prime_below::{log, report, Config, RunOptions};

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "List and count the primes below a number", long_about = None)]
struct Cli {
    /// Upper bound (exclusive); prompts on stdin when omitted
    bound: Option<usize>,

    /// Directory for PrimeNumberBelow<n>.txt (overrides config)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Skip writing the report file
    #[arg(long)]
    no_file: bool,

    /// Config file (default: ./prime-below.toml, then ~/.prime-below/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(short, long)]
    json: bool,

    /// Debug logging to stderr (same as PRIME_BELOW_LOG=1)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        log::enable();
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.output_dir {
        config.output.dir = dir;
    }
    if cli.no_file {
        config.output.write_file = false;
    }

    let options = RunOptions {
        bound: cli.bound,
        json: cli.json,
        config,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    report::run(&options, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
