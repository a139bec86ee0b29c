//! Check command - resolve an instance and verify a plugin's requirements.

use anyhow::{bail, Context as _, Result};
use clap::Args;
use console::style;
use ngn_reference::{InstanceRegistry, Reference, ReferenceError};
use serde_json::json;

use super::{exit_code, Context};
use crate::config::OutputFormat;

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Range expression selecting the instance (default: highest registered)
    #[arg(long = "use", value_name = "EXPRESSION")]
    pub use_expression: Option<String>,

    /// Members that must exist, comma separated (e.g. EventEmitter,Middleware.Handler)
    #[arg(short, long, value_delimiter = ',')]
    pub requires: Vec<String>,

    /// Minimum instance version
    #[arg(long, value_name = "VERSION")]
    pub min: Option<String>,

    /// Plugin requirement as NAME@RANGE (can be used multiple times)
    #[arg(short, long = "plugin", value_name = "NAME@RANGE")]
    pub plugins: Vec<String>,
}

/// Outcome of all checks against one resolved instance
#[derive(Debug, Default, PartialEq)]
struct Report {
    instance: Option<String>,
    failures: Vec<String>,
}

pub fn execute(args: CheckArgs, ctx: &Context) -> Result<i32> {
    let config = ctx
        .config
        .as_ref()
        .context("No ngn.toml found; `check` needs configured instances")?;
    let registry = config.build_registry()?;
    log::debug!("Registry has {} instance(s)", registry.len());

    let report = run_checks(&args, &registry)?;

    match ctx.format {
        OutputFormat::Json => println!(
            "{}",
            json!({ "instance": report.instance, "failures": report.failures })
        ),
        OutputFormat::Text => {
            match &report.instance {
                Some(version) => println!("Using NGN {}", style(version).cyan()),
                None => println!("{}", style("No matching NGN instance").yellow()),
            }
            for failure in &report.failures {
                println!("{} {}", style("✗").red(), failure);
            }
            if report.failures.is_empty() {
                println!("{} All requirements satisfied", style("✓").green());
            }
        }
    }

    Ok(exit_code(report.failures.is_empty()))
}

fn run_checks(args: &CheckArgs, registry: &InstanceRegistry) -> Result<Report> {
    let reference = Reference::new(registry, args.use_expression.as_deref())?;

    let mut report = Report {
        instance: reference.version().map(|v| v.to_string()),
        failures: Vec::new(),
    };

    if !reference.is_available() {
        record(&mut report, Err(ReferenceError::InstanceNotFound))?;
    }

    let requires: Vec<&str> = args.requires.iter().map(String::as_str).collect();
    record(&mut report, reference.requires(&requires))?;

    if let Some(min) = &args.min {
        record(&mut report, reference.min(min))?;
    }

    for requirement in &args.plugins {
        let Some((name, range)) = requirement.split_once('@') else {
            bail!("Invalid plugin requirement \"{}\", expected NAME@RANGE", requirement);
        };
        record(&mut report, reference.require_plugin(name, range).map(|_| ()))?;
    }

    Ok(report)
}

/// Keep unmet requirements in the report; malformed versions abort the run
fn record(report: &mut Report, result: Result<(), ReferenceError>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(ReferenceError::Version(err)) => Err(err.into()),
        Err(err) => {
            let message = err.to_string();
            if !report.failures.contains(&message) {
                report.failures.push(message);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NgnConfig;

    fn registry() -> InstanceRegistry {
        let config: NgnConfig = toml::from_str(
            r#"
[[instances]]
version = "1.4.0"
members = ["EventEmitter"]

[[instances]]
version = "2.0.0"
members = ["EventEmitter", "Middleware.Handler"]

[[plugins]]
name = "queue"
version = "1.2.0"
"#,
        )
        .unwrap();
        config.build_registry().unwrap()
    }

    #[test]
    fn test_all_requirements_met() {
        let args = CheckArgs {
            requires: vec!["EventEmitter".to_string(), "Middleware.Handler".to_string()],
            min: Some("2.0.0".to_string()),
            plugins: vec!["queue@^1.0.0".to_string()],
            ..Default::default()
        };

        let report = run_checks(&args, &registry()).unwrap();
        assert_eq!(
            report,
            Report {
                instance: Some("2.0.0".to_string()),
                failures: vec![],
            }
        );
    }

    #[test]
    fn test_failures_are_collected() {
        let args = CheckArgs {
            use_expression: Some("~1.4.0".to_string()),
            requires: vec!["Middleware".to_string()],
            min: Some("1.5.0".to_string()),
            plugins: vec!["queue@^1.0.0".to_string()],
        };

        let report = run_checks(&args, &registry()).unwrap();
        assert_eq!(report.instance.as_deref(), Some("1.4.0"));
        assert_eq!(report.failures.len(), 3);
        assert!(report.failures[2].contains("queue"));
    }

    #[test]
    fn test_missing_instance_reported_once() {
        let args = CheckArgs {
            use_expression: Some("^3.0.0".to_string()),
            requires: vec!["EventEmitter".to_string()],
            min: Some("3.0.0".to_string()),
            ..Default::default()
        };

        let report = run_checks(&args, &registry()).unwrap();
        assert_eq!(report.instance, None);
        assert_eq!(report.failures, vec![ReferenceError::InstanceNotFound.to_string()]);
    }

    #[test]
    fn test_missing_instance_without_requirements_fails() {
        let args = CheckArgs {
            use_expression: Some("^3.0.0".to_string()),
            ..Default::default()
        };

        let report = run_checks(&args, &registry()).unwrap();
        assert_eq!(report.instance, None);
        assert_eq!(report.failures, vec![ReferenceError::InstanceNotFound.to_string()]);
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        let args = CheckArgs {
            min: Some("1.0".to_string()),
            ..Default::default()
        };
        assert!(run_checks(&args, &registry()).is_err());

        let args = CheckArgs {
            plugins: vec!["queue".to_string()],
            ..Default::default()
        };
        assert!(run_checks(&args, &registry()).is_err());
    }
}
