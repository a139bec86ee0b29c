mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{Commands, Context};
use config::{NgnConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "ngn")]
#[command(version, about = "Semantic version resolution for NGN instances and plugins")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Path to ngn.toml (default: search upward from the current directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format (default: from ngn.toml, otherwise text)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    // RUST_LOG, when set, overrides the flag-derived level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Option<NgnConfig>> {
    match path {
        Some(path) => Ok(Some(NgnConfig::load_file(path)?)),
        None => {
            let found = NgnConfig::load_from_cwd()?;
            if let Some((path, _)) = &found {
                log::debug!("Using configuration {}", path.display());
            }
            Ok(found.map(|(_, config)| config))
        }
    }
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let config = load_config(args.config.as_ref())?;
    let format = args
        .format
        .or_else(|| config.as_ref().map(|c| c.output.format))
        .unwrap_or_default();

    commands::execute(args.command, Context { format, config })
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::from(2)
        }
    }
}
