//! ngn subcommands.

mod check;
mod compare;
mod parse;
mod select;
mod sort;

use anyhow::Result;
use clap::Subcommand;

use crate::config::{NgnConfig, OutputFormat};

pub use check::CheckArgs;
pub use compare::{CompareArgs, SatisfiesArgs};
pub use parse::ParseArgs;
pub use select::SelectArgs;
pub use sort::SortArgs;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a version and show its components
    Parse(ParseArgs),

    /// Compare two versions (exit code 1 when the comparison is false)
    Compare(CompareArgs),

    /// Check whether a version falls inside a range expression
    Satisfies(SatisfiesArgs),

    /// Sort versions by precedence, dropping duplicates
    Sort(SortArgs),

    /// Select the best candidate for a range expression
    Select(SelectArgs),

    /// Resolve an instance from ngn.toml and verify plugin requirements
    Check(CheckArgs),
}

/// Settings shared by every command
#[derive(Debug)]
pub struct Context {
    pub format: OutputFormat,
    pub config: Option<NgnConfig>,
}

/// Execute a command
pub fn execute(command: Commands, ctx: Context) -> Result<i32> {
    match command {
        Commands::Parse(args) => parse::execute(args, &ctx),
        Commands::Compare(args) => compare::execute(args, &ctx),
        Commands::Satisfies(args) => compare::execute_satisfies(args, &ctx),
        Commands::Sort(args) => sort::execute(args, &ctx),
        Commands::Select(args) => select::execute(args, &ctx),
        Commands::Check(args) => check::execute(args, &ctx),
    }
}

/// Exit code for a boolean answer
fn exit_code(result: bool) -> i32 {
    if result {
        0
    } else {
        1
    }
}
