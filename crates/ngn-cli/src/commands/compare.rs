//! Compare and satisfies commands.

use anyhow::Result;
use clap::Args;
use ngn_semver::{Comparator, Semver};
use serde_json::json;

use super::{exit_code, Context};
use crate::config::OutputFormat;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    pub version1: String,

    /// One of ==, !=, <, <=, >, >=
    pub operator: String,

    /// Right-hand version
    pub version2: String,
}

#[derive(Args, Debug)]
pub struct SatisfiesArgs {
    /// Version to test
    pub version: String,

    /// Range expression, e.g. ^1.2.0 or ~1.2.0
    pub expression: String,
}

pub fn execute(args: CompareArgs, ctx: &Context) -> Result<i32> {
    let result = Comparator::compare(args.version1.as_str(), &args.operator, args.version2.as_str())?;
    log::debug!("{} {} {} => {}", args.version1, args.operator, args.version2, result);

    print_answer(ctx, result);
    Ok(exit_code(result))
}

pub fn execute_satisfies(args: SatisfiesArgs, ctx: &Context) -> Result<i32> {
    let result = Semver::satisfies(args.version.as_str(), &args.expression)?;
    log::debug!("{} satisfies {} => {}", args.version, args.expression, result);

    print_answer(ctx, result);
    Ok(exit_code(result))
}

fn print_answer(ctx: &Context, result: bool) {
    match ctx.format {
        OutputFormat::Json => println!("{}", json!({ "result": result })),
        OutputFormat::Text => println!("{}", result),
    }
}
