//! CLI for the aerodist distance functions.

use clap::Parser;
use ftlog::LevelFilter;

use aerodist_shell::{configure_logger, Commands};

/// Edit distance and great-circle distance, directly or through SQLite.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Log at `debug` level instead of `info`.
    #[arg(short('v'), long)]
    verbose: bool,

    /// Write logs to `logs/<NAME>.log` instead of stderr.
    #[arg(short('l'), long)]
    log_file: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let (_guard, log_path) = configure_logger(args.log_file.as_deref(), level)?;
    if let Some(log_path) = log_path {
        ftlog::info!("Log file: {log_path:?}");
    }
    ftlog::debug!("Args: {args:?}");

    let output = args.command.run()?;
    println!("{output}");

    Ok(())
}
