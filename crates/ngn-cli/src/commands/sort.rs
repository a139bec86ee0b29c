//! Sort command - order versions by precedence.

use anyhow::Result;
use clap::Args;
use ngn_semver::Semver;

use super::Context;
use crate::config::OutputFormat;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Lowest precedence first
    #[arg(short, long)]
    pub ascending: bool,
}

pub fn execute(args: SortArgs, ctx: &Context) -> Result<i32> {
    let sorted = sort(&args)?;

    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&sorted)?),
        OutputFormat::Text => {
            for version in &sorted {
                println!("{}", version);
            }
        }
    }

    Ok(0)
}

fn sort(args: &SortArgs) -> Result<Vec<String>> {
    let sorted = if args.ascending {
        Semver::sort_ascending(&args.versions)?
    } else {
        Semver::sort(&args.versions)?
    };
    Ok(sorted)
}
