//! Parse command - show the components of a version.

use anyhow::Result;
use clap::Args;
use console::style;
use ngn_semver::{ParsedVersion, VersionParser};
use serde_json::json;

use super::Context;
use crate::config::OutputFormat;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version to parse, e.g. 1.2.3-rc.1+build.5
    pub version: String,
}

pub fn execute(args: ParseArgs, ctx: &Context) -> Result<i32> {
    let version = VersionParser::new().parse(&args.version)?;

    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&to_json(&version))?),
        OutputFormat::Text => {
            println!("{} {}", style("version").green(), version);
            println!("{} {}", style("major").green(), version.major);
            println!("{} {}", style("minor").green(), version.minor);
            println!("{} {}", style("patch").green(), version.patch);
            if let Some(pre) = version.prerelease_str() {
                println!("{} {}", style("prerelease").green(), pre);
            }
            if let Some(build) = version.build_str() {
                println!("{} {}", style("build").green(), build);
            }
        }
    }

    Ok(0)
}

fn to_json(version: &ParsedVersion) -> serde_json::Value {
    json!({
        "version": version.to_string(),
        "major": version.major,
        "minor": version.minor,
        "patch": version.patch,
        "prerelease": version.prerelease.iter().map(|i| i.to_string()).collect::<Vec<_>>(),
        "build": version.build,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json() {
        let version = ParsedVersion::parse("1.2.3-rc.1+build.5").unwrap();
        assert_eq!(
            to_json(&version),
            json!({
                "version": "1.2.3-rc.1",
                "major": 1,
                "minor": 2,
                "patch": 3,
                "prerelease": ["rc", "1"],
                "build": ["build", "5"],
            })
        );
    }

    #[test]
    fn test_execute_rejects_invalid_version() {
        let ctx = Context {
            format: OutputFormat::Text,
            config: None,
        };
        let args = ParseArgs {
            version: "1.2".to_string(),
        };
        let err = execute(args, &ctx).unwrap_err();
        assert_eq!(err.to_string(), "Invalid semantic version \"1.2\"");
    }
}
