//! Select command - best candidate for a range expression.

use anyhow::Result;
use clap::Args;
use console::style;
use ngn_semver::Semver;
use serde_json::json;

use super::{exit_code, Context};
use crate::config::OutputFormat;

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Range expression: ^1.2.0, ~1.2.0, <, <=, >, >= or a bare version
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Candidate versions
    pub candidates: Vec<String>,
}

pub fn execute(args: SelectArgs, ctx: &Context) -> Result<i32> {
    let selected = Semver::select(&args.expression, &args.candidates)?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json!({ "selected": selected })),
        OutputFormat::Text => match &selected {
            Some(version) => println!("{}", version),
            None => eprintln!(
                "{} No candidate satisfies {}",
                style("warning:").yellow(),
                args.expression
            ),
        },
    }

    Ok(exit_code(selected.is_some()))
}
